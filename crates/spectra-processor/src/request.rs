//! Typed retrieval request and its validation from a loose payload.

use serde_json::{Map, Value};
use thiserror::Error;

use spectra_common::{FilterClause, Model, ModelFamily};

/// Separator of the `columns` parameter.
pub const COLUMN_DELIMITER: char = ';';

/// Parameters every model needs.
const BASE_REQUIRED: [&str; 3] = ["model", "variable", "date"];

/// Payload validation failures.
#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("Invalid model {0}")]
    InvalidModel(String),

    #[error("Missing required parameters.")]
    MissingParameters(Vec<String>),

    #[error("Invalid value for '{name}': {message}")]
    InvalidParameter { name: String, message: String },
}

/// Parameters of one spectra retrieval.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectraRequest {
    /// Model identifier as given by the caller.
    pub model: String,
    pub variable: String,
    /// Run date, `YYYYMMDDHH`.
    pub date: String,
    /// Region code, used by regional models only.
    pub region: Option<String>,
    /// `;`-separated column names.
    pub columns: Option<String>,
    pub filters: Option<Vec<FilterClause>>,
    pub remove_duplicates: bool,
}

impl SpectraRequest {
    pub fn new(
        model: impl Into<String>,
        variable: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            model: model.into(),
            variable: variable.into(),
            date: date.into(),
            region: None,
            columns: None,
            filters: None,
            remove_duplicates: false,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_columns(mut self, columns: impl Into<String>) -> Self {
        self.columns = Some(columns.into());
        self
    }

    pub fn with_filters(mut self, filters: Vec<FilterClause>) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_remove_duplicates(mut self, remove: bool) -> Self {
        self.remove_duplicates = remove;
        self
    }

    /// The `columns` parameter split into names, in order.
    pub fn column_list(&self) -> Option<Vec<String>> {
        self.columns
            .as_ref()
            .map(|c| c.split(COLUMN_DELIMITER).map(str::to_string).collect())
    }

    /// Validate a payload and build a request.
    ///
    /// The model is checked first, so an unknown model is reported even when
    /// other parameters are missing. The required set depends on the model
    /// family; a `null` value counts as absent.
    pub fn from_payload(data: &Map<String, Value>) -> Result<Self, RequestError> {
        let model = match present(data, "model") {
            None => {
                return Err(RequestError::MissingParameters(missing(
                    data,
                    &BASE_REQUIRED,
                )))
            }
            Some(Value::String(s)) => s.clone(),
            Some(other) => return Err(RequestError::InvalidModel(other.to_string())),
        };
        let parsed = Model::parse(&model).map_err(|_| RequestError::InvalidModel(model.clone()))?;

        let mut required = BASE_REQUIRED.to_vec();
        if parsed.family() == ModelFamily::Regional {
            required.push("region");
        }
        let absent = missing(data, &required);
        if !absent.is_empty() {
            return Err(RequestError::MissingParameters(absent));
        }

        let variable = string_param(data, "variable")?.unwrap_or_default();
        let date = date_param(data)?.unwrap_or_default();
        let region = string_param(data, "region")?;
        let columns = string_param(data, "columns")?;

        let filters = match present(data, "filters") {
            None => None,
            Some(value) => Some(
                serde_json::from_value::<Vec<FilterClause>>(value.clone()).map_err(|e| {
                    RequestError::InvalidParameter {
                        name: "filters".to_string(),
                        message: e.to_string(),
                    }
                })?,
            ),
        };

        let remove_duplicates = match present(data, "remove_duplicates") {
            None => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                return Err(RequestError::InvalidParameter {
                    name: "remove_duplicates".to_string(),
                    message: format!("expected a boolean, got {}", other),
                })
            }
        };

        Ok(Self {
            model,
            variable,
            date,
            region,
            columns,
            filters,
            remove_duplicates,
        })
    }
}

fn present<'a>(data: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    data.get(name).filter(|v| !v.is_null())
}

fn missing(data: &Map<String, Value>, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|name| present(data, name).is_none())
        .map(|name| name.to_string())
        .collect()
}

fn string_param(data: &Map<String, Value>, name: &str) -> Result<Option<String>, RequestError> {
    match present(data, name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(RequestError::InvalidParameter {
            name: name.to_string(),
            message: format!("expected a string, got {}", other),
        }),
    }
}

/// Dates are accepted as strings or as bare integers like `2025031500`.
fn date_param(data: &Map<String, Value>) -> Result<Option<String>, RequestError> {
    match present(data, "date") {
        Some(Value::Number(n)) if n.is_u64() => Ok(Some(n.to_string())),
        _ => string_param(data, "date"),
    }
}
