use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use wick::{
    EventLevel, IssueKind, SanitizeObserver, SanitizeOptions, Sanitizer, TimestampUnit, WickError,
};

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<(EventLevel, String)>>,
}

impl SanitizeObserver for Recorder {
    fn on_event(&self, level: EventLevel, message: &str, _payload: &Value) {
        self.events.lock().unwrap().push((level, message.to_string()));
    }
}

#[test]
fn build_rejects_bad_threshold_and_quantum() {
    let err = Sanitizer::builder().outlier_threshold(1.0).build().unwrap_err();
    assert!(matches!(err, WickError::InvalidArg(_)));

    let err = Sanitizer::builder()
        .outlier_threshold(f64::NAN)
        .build()
        .unwrap_err();
    assert!(matches!(err, WickError::InvalidArg(_)));

    let err = Sanitizer::builder()
        .price_quantum(Some(-0.5))
        .build()
        .unwrap_err();
    assert!(matches!(err, WickError::InvalidArg(_)));

    assert!(Sanitizer::builder().price_quantum(None).build().is_ok());
}

#[test]
fn builder_setters_mirror_options() {
    let s = Sanitizer::builder()
        .require_positive(false)
        .detect_outliers(false)
        .outlier_threshold(4.0)
        .fill_gaps(true)
        .validate_dates(false)
        .preserve_original(true)
        .timestamp_unit(TimestampUnit::Seconds)
        .price_quantum(Some(0.25))
        .build()
        .unwrap();
    let expected = SanitizeOptions {
        require_positive: false,
        detect_outliers: false,
        outlier_threshold: 4.0,
        fill_gaps: true,
        validate_dates: false,
        preserve_original: true,
        timestamp_unit: TimestampUnit::Seconds,
        price_quantum: Some(0.25),
    };
    assert_eq!(s.options(), &expected);
}

#[test]
fn options_from_partial_config() {
    let opts: SanitizeOptions =
        serde_json::from_value(json!({ "fill_gaps": true, "timestamp_unit": "milliseconds" }))
            .unwrap();
    let s = Sanitizer::builder().options(opts).build().unwrap();
    assert!(s.options().fill_gaps);
    assert_eq!(s.options().timestamp_unit, TimestampUnit::Milliseconds);
    assert!(s.options().detect_outliers);
}

#[test]
fn injected_observer_sees_every_run() {
    let recorder = Arc::new(Recorder::default());
    let s = Sanitizer::builder()
        .observer(recorder.clone())
        .build()
        .unwrap();

    let _ = s.sanitize(&wick_mock::series("clean").unwrap());
    let _ = s.sanitize(&[]);
    let _ = s.sanitize_value(&json!("nope"));

    let events = recorder.events.lock().unwrap();
    let levels: Vec<EventLevel> = events.iter().map(|e| e.0).collect();
    assert_eq!(levels, vec![EventLevel::Info, EventLevel::Warn, EventLevel::Error]);
    assert!(events[1].1.starts_with("sanitize complete: 0/0 points valid ("));
    assert!(events[1].1.ends_with("ms)"));
}

#[test]
fn json_text_is_parsed_then_sanitized() {
    let s = Sanitizer::default();
    let out = s
        .sanitize_json(r#"[{"time": 1700000000, "open": "10", "high": 12, "low": 9, "close": 11, "volume": null}]"#)
        .unwrap();
    assert_eq!(out.data.len(), 1);
    assert_eq!(out.data[0].t, 1_700_000_000_000);
    assert_eq!(out.stats.neg_or_nan_vol_to_zero, 1);

    let err = s.sanitize_json("[{").unwrap_err();
    assert!(matches!(err, WickError::Json(_)));

    let out = s.sanitize_json(r#"{"data": []}"#).unwrap();
    assert!(out.has_issue(IssueKind::MissingRequired));
}

#[test]
fn payload_meta_is_extended_not_replaced() {
    let s = Sanitizer::default();
    let env = wick_mock::envelope("inverted").unwrap();
    let out = s.sanitize_payload(&env);

    assert_eq!(out.meta["symbol"], "MOCK");
    assert_eq!(out.meta["sanitized"], true);
    assert_eq!(out.meta["sanitize_report"]["fixedOHLC"], 1);
    assert_eq!(out.meta["sanitize_report"]["input"], 2);
    assert_eq!(out.series.data.len(), 2);

    let rendered = out.to_value();
    assert_eq!(rendered["data"].as_array().map(Vec::len), Some(2));
    assert_eq!(rendered["data"][0]["l"], 90.0);
    // the caller's envelope is untouched
    assert!(env["meta"].get("sanitized").is_none());
}

#[test]
fn payload_without_data_reports_missing_required() {
    let s = Sanitizer::default();
    let out = s.sanitize_payload(&json!({ "meta": { "symbol": "X" } }));
    assert!(out.series.data.is_empty());
    assert!(out.series.has_issue(IssueKind::MissingRequired));
    assert_eq!(out.meta["sanitized"], true);

    let out = s.sanitize_payload(&json!({ "data": [] }));
    assert!(out.series.has_issue(IssueKind::EmptyInput));
    assert_eq!(out.meta.len(), 2);
}

#[test]
fn sanitizer_is_shareable_across_threads() {
    let s = Arc::new(Sanitizer::default());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let s = Arc::clone(&s);
            std::thread::spawn(move || s.sanitize(&wick_mock::dirty_run(50 + i)).data.len())
        })
        .collect();
    for h in handles {
        assert!(h.join().unwrap() > 0);
    }
}
