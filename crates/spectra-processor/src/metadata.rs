//! Process descriptor of the spectra retrieval.

use ogc_processes::{InputDescription, OutputDescription, ProcessDescription};
use serde_json::json;

/// Identifier the process is registered under.
pub const PROCESS_ID: &str = "get-spectra-geoparquet";

/// Name of the single output.
pub const OUTPUT_NAME: &str = "get_spectra_geoparquet_response";

pub fn process_description() -> ProcessDescription {
    ProcessDescription::new(
        PROCESS_ID,
        "0.1.0",
        "GeoMet-Weather get spectra geoparquet process",
    )
    .with_description("GeoMet-Weather get spectra geoparquet process")
    .with_keyword("spectra geoparquet")
    .with_input(
        "model",
        InputDescription::required("model name", json!({"type": "string"}))
            .with_description("GDWPS, GEWPS, RDWPS, REWPS"),
    )
    .with_input(
        "variable",
        InputDescription::required("variable", json!({"type": "string"}))
            .with_description("EFTH for 2d model, F, STH1M, TH1M for 1d model"),
    )
    .with_input(
        "date",
        InputDescription::required("date", json!({"type": "string"}))
            .with_description("Date in yearmonthdayhour format"),
    )
    .with_input(
        "region",
        InputDescription::optional("region", json!({"type": "string"}))
            .with_description("Region code, required for RDWPS and REWPS"),
    )
    .with_input(
        "columns",
        InputDescription::optional("columns", json!({"type": "string"})).with_description(
            "The names of the columns you want from the geoparquet, separated by ;",
        ),
    )
    .with_input(
        "filters",
        InputDescription::optional(
            "filters",
            json!({
                "type": "array",
                "items": {
                    "type": "array",
                    "minItems": 3,
                    "maxItems": 3,
                    "items": {"oneOf": [{"type": "string"}, {"type": "number"}, {"type": "boolean"}, {"type": "array"}]}
                }
            }),
        )
        .with_description(
            "Filters applied while reading the geoparquet, as [column, operator, value] \
             triples; operators are ==, !=, <, <=, >, >=, in and not in",
        ),
    )
    .with_input(
        "remove_duplicates",
        InputDescription::optional("remove duplicates", json!({"type": "boolean"}))
            .with_description("Set to true to remove duplicates from geoparquet"),
    )
    .with_output(
        OUTPUT_NAME,
        OutputDescription {
            title: OUTPUT_NAME.to_string(),
            schema: json!({"contentMediaType": "application/json"}),
        },
    )
    .with_example(json!({
        "inputs": {
            "model": "GEWPS",
            "variable": "EFTH",
            "date": "2025031500",
            "columns": "station_name;member",
            "filters": [["station_name", "==", "00N000E"], ["member", "==", 0]]
        }
    }))
}
