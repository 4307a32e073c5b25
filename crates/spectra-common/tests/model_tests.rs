//! Path resolution tests for every model family.

use spectra_common::model::{resolve_path, Model, ModelFamily, DEFAULT_BASE_URL};
use spectra_common::SpectraError;

// ============================================================================
// Global models
// ============================================================================

#[test]
fn test_gewps_efth_path() {
    let path = resolve_path(DEFAULT_BASE_URL, "GEWPS", "EFTH", "2025031500", None).unwrap();
    assert_eq!(
        path,
        format!("{}/gewps/2025031500_MSC_GEWPS_EFTH.geoparquet", DEFAULT_BASE_URL)
    );
}

#[test]
fn test_global_path_normalises_case() {
    let path = resolve_path(DEFAULT_BASE_URL, "gDwPs", "sth1m", "2025031512", None).unwrap();
    assert_eq!(
        path,
        format!("{}/gdwps/2025031512_MSC_GDWPS_STH1M.geoparquet", DEFAULT_BASE_URL)
    );
}

#[test]
fn test_global_path_ignores_region() {
    let with_region =
        resolve_path(DEFAULT_BASE_URL, "gewps", "efth", "2025031500", Some("GSL")).unwrap();
    let without = resolve_path(DEFAULT_BASE_URL, "gewps", "efth", "2025031500", None).unwrap();
    assert_eq!(with_region, without);
}

// ============================================================================
// Regional models
// ============================================================================

#[test]
fn test_rdwps_path_includes_region() {
    let path = resolve_path(DEFAULT_BASE_URL, "RDWPS", "F", "2025031500", Some("lake-erie")).unwrap();
    assert_eq!(
        path,
        format!("{}/rdwps/2025031500_MSC_RDWPS-lake-erie_F.geoparquet", DEFAULT_BASE_URL)
    );
}

#[test]
fn test_rewps_path_keeps_region_verbatim() {
    let path = resolve_path("http://mirror", "rewps", "th1m", "2025010100", Some("GSL")).unwrap();
    assert_eq!(path, "http://mirror/rewps/2025010100_MSC_REWPS-GSL_TH1M.geoparquet");
}

#[test]
fn test_regional_without_region_fails() {
    let err = resolve_path(DEFAULT_BASE_URL, "rewps", "f", "2025031500", None).unwrap_err();
    assert!(matches!(err, SpectraError::MissingRegion(_)));
}

// ============================================================================
// Invalid models
// ============================================================================

#[test]
fn test_unknown_models_rejected() {
    for model in ["", "gfs", "hrrr", "gewps2", "wps", "g ewps"] {
        let err = resolve_path(DEFAULT_BASE_URL, model, "EFTH", "2025031500", None).unwrap_err();
        assert!(
            matches!(err, SpectraError::InvalidModel(ref m) if m == model),
            "model {:?} should be rejected",
            model
        );
    }
}

#[test]
fn test_every_model_belongs_to_one_family() {
    for model in Model::ALL {
        let regional = model.family() == ModelFamily::Regional;
        assert_eq!(regional, model.requires_region());
        assert_eq!(Model::parse(&model.code().to_lowercase()).unwrap(), model);
    }
}
