use stab_core::errors::{ErrorInfo, StabError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("expected", 15)
        .with_context("given", 4)
}

#[test]
fn config_error_surface() {
    let err = StabError::Config(sample_info("noise-length-mismatch", "bad noise vector"));
    assert_eq!(err.code(), "noise-length-mismatch");
    assert_eq!(err.info().context["expected"], "15");
    let rendered = err.to_string();
    assert!(rendered.starts_with("configuration error:"));
    assert!(rendered.contains("expected=15"));
}

#[test]
fn invariant_error_surface() {
    let err = StabError::invariant("lookback-before-stream-start", "offset too far back");
    assert_eq!(err.code(), "lookback-before-stream-start");
    assert!(err.to_string().contains("internal invariant violated"));
}

#[test]
fn hint_is_rendered() {
    let err = StabError::Geometry(
        ErrorInfo::new("even-scale", "scale must be odd").with_hint("use 3x3, 5x5, ..."),
    );
    assert!(err.to_string().contains("hint: use 3x3"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = StabError::Matrix(sample_info("shape-mismatch", "rows differ"));
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["family"], "Matrix");
    assert_eq!(json["detail"]["code"], "shape-mismatch");
    let restored: StabError = serde_json::from_value(json).unwrap();
    assert_eq!(restored, err);
}
