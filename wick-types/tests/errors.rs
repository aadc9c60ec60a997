use wick_types::WickError;

#[test]
fn json_errors_convert_and_are_permanent() {
    let err: WickError = serde_json::from_str::<serde_json::Value>("{oops")
        .map_err(WickError::from)
        .unwrap_err();
    assert!(matches!(err, WickError::Json(_)));
    assert!(err.is_permanent());
}

#[test]
fn only_upstream_errors_are_transient() {
    assert!(!WickError::upstream("No data found").is_permanent());
    assert!(WickError::data("no result").is_permanent());
    assert!(WickError::invalid_arg("threshold").is_permanent());
}

#[test]
fn errors_survive_serde() {
    let err = WickError::data("no timestamps");
    let json = serde_json::to_string(&err).unwrap();
    let back: WickError = serde_json::from_str(&json).unwrap();
    assert_eq!(back, err);
    assert_eq!(err.to_string(), "data issue: no timestamps");
}
