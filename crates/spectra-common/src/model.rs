//! Wave model identifiers and geoparquet path resolution.

use serde::{Deserialize, Serialize};

use crate::error::{SpectraError, SpectraResult};

/// Base location of the published spectra geoparquet files.
pub const DEFAULT_BASE_URL: &str = "https://goc-dx.science.gc.ca/~swav000/geoparquet";

/// Grouping of models by whether a region code is needed to locate their files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFamily {
    /// Global systems, one file per variable and run.
    Global,
    /// Regional systems, one file per region, variable and run.
    Regional,
}

/// Wave prediction systems publishing spectra as geoparquet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Model {
    /// Global Deterministic Wave Prediction System
    Gdwps,
    /// Global Ensemble Wave Prediction System
    Gewps,
    /// Regional Deterministic Wave Prediction System
    Rdwps,
    /// Regional Ensemble Wave Prediction System
    Rewps,
}

impl Model {
    pub const ALL: [Model; 4] = [Model::Gdwps, Model::Gewps, Model::Rdwps, Model::Rewps];

    /// Parse a model identifier, ignoring case.
    pub fn parse(s: &str) -> SpectraResult<Self> {
        match s.to_lowercase().as_str() {
            "gdwps" => Ok(Model::Gdwps),
            "gewps" => Ok(Model::Gewps),
            "rdwps" => Ok(Model::Rdwps),
            "rewps" => Ok(Model::Rewps),
            _ => Err(SpectraError::InvalidModel(s.to_string())),
        }
    }

    pub fn family(&self) -> ModelFamily {
        match self {
            Model::Gdwps | Model::Gewps => ModelFamily::Global,
            Model::Rdwps | Model::Rewps => ModelFamily::Regional,
        }
    }

    pub fn requires_region(&self) -> bool {
        self.family() == ModelFamily::Regional
    }

    /// Canonical upper-case code, e.g. "GEWPS".
    pub fn code(&self) -> &'static str {
        match self {
            Model::Gdwps => "GDWPS",
            Model::Gewps => "GEWPS",
            Model::Rdwps => "RDWPS",
            Model::Rewps => "REWPS",
        }
    }
}

impl std::str::FromStr for Model {
    type Err = SpectraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::parse(s)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Build the location of a spectra geoparquet file.
///
/// Global models:
/// `{base}/{model_lower}/{date}_MSC_{MODEL_UPPER}_{VARIABLE_UPPER}.geoparquet`
///
/// Regional models:
/// `{base}/{model_lower}/{date}_MSC_{MODEL_UPPER}-{REGION}_{VARIABLE_UPPER}.geoparquet`
///
/// The model is validated before anything is formatted. The model and
/// variable keep the caller's spelling apart from case; the date and
/// region are used verbatim.
pub fn resolve_path(
    base: &str,
    model: &str,
    variable: &str,
    date: &str,
    region: Option<&str>,
) -> SpectraResult<String> {
    let parsed = Model::parse(model)?;
    let base = base.trim_end_matches('/');
    let model_lower = model.to_lowercase();
    let model_upper = model.to_uppercase();
    let variable_upper = variable.to_uppercase();

    match parsed.family() {
        ModelFamily::Global => Ok(format!(
            "{base}/{model_lower}/{date}_MSC_{model_upper}_{variable_upper}.geoparquet"
        )),
        ModelFamily::Regional => {
            let region = region.ok_or_else(|| SpectraError::MissingRegion(model.to_string()))?;
            Ok(format!(
                "{base}/{model_lower}/{date}_MSC_{model_upper}-{region}_{variable_upper}.geoparquet"
            ))
        }
    }
}
