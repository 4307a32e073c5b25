//! Process description documents.
//!
//! A [`ProcessDescription`] is the metadata descriptor a processor is
//! registered under: identifier, title, inputs, outputs and an example
//! execution payload.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::Link;

/// Execution modes a process supports. Only synchronous execution is hosted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobControl {
    SyncExecute,
}

/// How outputs are returned. Results are always inlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    Value,
}

/// Description of one process input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InputDescription {
    pub title: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,

    /// JSON schema of the accepted value.
    #[serde(default)]
    pub schema: Value,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    pub min_occurs: u32,

    pub max_occurs: u32,
}

impl InputDescription {
    /// A mandatory single-valued input.
    pub fn required(title: impl Into<String>, schema: Value) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            schema,
            nullable: None,
            min_occurs: 1,
            max_occurs: 1,
        }
    }

    /// An optional, nullable single-valued input.
    pub fn optional(title: impl Into<String>, schema: Value) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            schema,
            nullable: Some(true),
            min_occurs: 0,
            max_occurs: 1,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_required(&self) -> bool {
        self.min_occurs > 0
    }
}

/// Description of one process output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputDescription {
    pub title: String,

    #[serde(default)]
    pub schema: Value,
}

/// Full metadata descriptor of a process.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDescription {
    pub id: String,
    pub version: String,
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub keywords: Vec<String>,

    #[serde(default)]
    pub links: Vec<Link>,

    pub inputs: IndexMap<String, InputDescription>,

    pub outputs: IndexMap<String, OutputDescription>,

    #[serde(default = "default_job_control")]
    pub job_control_options: Vec<JobControl>,

    #[serde(default = "default_transmission")]
    pub output_transmission: Vec<Transmission>,

    /// Example execution request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<Value>,
}

fn default_job_control() -> Vec<JobControl> {
    vec![JobControl::SyncExecute]
}

fn default_transmission() -> Vec<Transmission> {
    vec![Transmission::Value]
}

impl ProcessDescription {
    pub fn new(id: impl Into<String>, version: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            version: version.into(),
            title: title.into(),
            description: String::new(),
            keywords: Vec::new(),
            links: Vec::new(),
            inputs: IndexMap::new(),
            outputs: IndexMap::new(),
            job_control_options: default_job_control(),
            output_transmission: default_transmission(),
            example: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into());
        self
    }

    pub fn with_input(mut self, name: impl Into<String>, input: InputDescription) -> Self {
        self.inputs.insert(name.into(), input);
        self
    }

    pub fn with_output(mut self, name: impl Into<String>, output: OutputDescription) -> Self {
        self.outputs.insert(name.into(), output);
        self
    }

    pub fn with_example(mut self, example: Value) -> Self {
        self.example = Some(example);
        self
    }

    /// Names of inputs with `minOccurs > 0`.
    pub fn required_inputs(&self) -> Vec<&str> {
        self.inputs
            .iter()
            .filter(|(_, input)| input.is_required())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Summary for the process list, with links under `base_url`.
    pub fn summary(&self, base_url: &str) -> ProcessSummary {
        let href = format!("{}/processes/{}", base_url.trim_end_matches('/'), self.id);
        ProcessSummary {
            id: self.id.clone(),
            version: self.version.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            keywords: self.keywords.clone(),
            job_control_options: self.job_control_options.clone(),
            output_transmission: self.output_transmission.clone(),
            links: vec![Link::new(&href, "self")
                .with_type("application/json")
                .with_title("Process description")],
        }
    }
}

/// Entry of the process list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProcessSummary {
    pub id: String,
    pub version: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub job_control_options: Vec<JobControl>,
    pub output_transmission: Vec<Transmission>,
    pub links: Vec<Link>,
}

/// Response of `GET /processes`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProcessList {
    pub processes: Vec<ProcessSummary>,
    pub links: Vec<Link>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn description() -> ProcessDescription {
        ProcessDescription::new("echo", "0.1.0", "Echo")
            .with_description("Returns its input")
            .with_keyword("test")
            .with_input("message", InputDescription::required("message", json!({"type": "string"})))
            .with_input(
                "repeat",
                InputDescription::optional("repeat", json!({"type": "integer"})),
            )
            .with_output(
                "echo_response",
                OutputDescription {
                    title: "echo_response".to_string(),
                    schema: json!({"contentMediaType": "application/json"}),
                },
            )
    }

    #[test]
    fn test_required_inputs() {
        assert_eq!(description().required_inputs(), vec!["message"]);
    }

    #[test]
    fn test_serialization_uses_ogc_names() {
        let json = serde_json::to_value(description()).unwrap();
        assert_eq!(json["inputs"]["message"]["minOccurs"], 1);
        assert_eq!(json["inputs"]["repeat"]["nullable"], true);
        assert_eq!(json["jobControlOptions"], json!(["sync-execute"]));
        assert_eq!(json["outputTransmission"], json!(["value"]));
        assert!(json.get("example").is_none());

        let keys: Vec<&String> = json["inputs"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["message", "repeat"]);
    }

    #[test]
    fn test_summary_links() {
        let summary = description().summary("http://localhost:5000/");
        assert_eq!(summary.id, "echo");
        assert_eq!(summary.links[0].href, "http://localhost:5000/processes/echo");
    }
}
