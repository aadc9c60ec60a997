use wick_types::{
    Candle, CandleOrigin, Diagnostic, IssueKind, RawPoint, RawValue, SanitizationStats,
};

#[test]
fn raw_point_accepts_numbers_strings_and_nulls() {
    let p: RawPoint = serde_json::from_str(
        r#"{ "t": 1700000000, "o": "100.5", "h": null, "l": true, "c": 99 }"#,
    )
    .expect("deserialize raw point");

    assert_eq!(p.t_f64(), Some(1_700_000_000.0));
    assert_eq!(p.o, Some(RawValue::Text("100.5".into())));
    assert_eq!(p.o.as_ref().and_then(RawValue::as_f64), Some(100.5));
    assert_eq!(p.h, None);
    assert!(matches!(p.l, Some(RawValue::Other(_))));
    assert_eq!(p.l.as_ref().and_then(RawValue::as_f64), None);
    assert_eq!(p.v, None);
    assert_eq!(p.prices(), None);
}

#[test]
fn raw_point_accepts_long_field_names() {
    let p: RawPoint = serde_json::from_str(
        r#"{ "timestamp": 1, "open": 2, "high": 3, "low": 1, "close": 2, "volume": 10 }"#,
    )
    .expect("deserialize raw point");
    assert_eq!(p, RawPoint::new(1.0, 2.0, 3.0, 1.0, 2.0, 10.0));
}

#[test]
fn raw_value_coercion_rejects_non_finite_and_blank() {
    assert_eq!(RawValue::from(" 42 ").as_f64(), Some(42.0));
    assert_eq!(RawValue::from("").as_f64(), None);
    assert_eq!(RawValue::from("abc").as_f64(), None);
    assert_eq!(RawValue::from("NaN").as_f64(), None);
    assert_eq!(RawValue::from("inf").as_f64(), None);
    assert_eq!(RawValue::Number(f64::NAN).as_f64(), None);
}

#[test]
fn candle_origin_tag_only_serialized_when_synthetic() {
    let observed = Candle::new(1, 2.0, 3.0, 1.0, 2.0, 0.0);
    let json = serde_json::to_value(observed).unwrap();
    assert!(json.get("origin").is_none());

    let filled = observed.with_origin(CandleOrigin::Filled);
    let json = serde_json::to_value(filled).unwrap();
    assert_eq!(json["origin"], "filled");

    let back: Candle = serde_json::from_value(json).unwrap();
    assert_eq!(back, filled);
}

#[test]
fn stats_use_camel_case_wire_names() {
    let stats = SanitizationStats {
        fixed_ohlc: 2,
        neg_or_nan_vol_to_zero: 3,
        ms_converted: true,
        ..SanitizationStats::default()
    };
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["fixedOHLC"], 2);
    assert_eq!(json["negOrNaNVolToZero"], 3);
    assert_eq!(json["msConverted"], true);
    assert!(json.get("processingTimeMs").is_some());
    assert!(json.get("droppedInvalid").is_some());
}

#[test]
fn diagnostic_kind_is_serialized_as_type() {
    let d = Diagnostic::new(IssueKind::EmptyInput, "input array is empty");
    let json = serde_json::to_value(&d).unwrap();
    assert_eq!(json["type"], "empty_input");
    assert!(json.get("data").is_none());
}
