//! Execution request body.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /processes/{id}/execution`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ExecuteRequest {
    /// Input values keyed by input name.
    #[serde(default)]
    pub inputs: Map<String, Value>,

    /// Requested outputs, passed to the processor as a hint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outputs: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_minimal_body() {
        let req: ExecuteRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.inputs.is_empty());
        assert!(req.outputs.is_none());
    }

    #[test]
    fn test_parse_inputs() {
        let req: ExecuteRequest = serde_json::from_value(json!({
            "inputs": {"model": "GEWPS", "remove_duplicates": true},
            "outputs": {"get_spectra_geoparquet_response": {}}
        }))
        .unwrap();
        assert_eq!(req.inputs["model"], "GEWPS");
        assert_eq!(req.inputs["remove_duplicates"], true);
        assert!(req.outputs.is_some());
    }
}
