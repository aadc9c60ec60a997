use proptest::prelude::*;
use serde_json::{Value, json};
use wick::{IssueKind, Sanitizer, WickError, decode_chart};

#[test]
fn decodes_columns_into_millisecond_points() {
    let doc = wick_mock::chart("AAPL").unwrap();
    let chart = decode_chart(&doc).unwrap();

    assert_eq!(chart.points.len(), 5);
    assert_eq!(chart.points[0].t_f64(), Some(1_704_205_800_000.0));
    assert_eq!(chart.points[0].prices(), Some([187.15, 188.44, 183.89, 185.64]));
    // null open cell
    assert!(chart.points[3].o.is_none());
    assert_eq!(chart.granularity.as_deref(), Some("1d"));
    assert_eq!(chart.meta["symbol"], "AAPL");
}

#[test]
fn sanitizes_decoded_chart() {
    let s = Sanitizer::builder().price_quantum(Some(0.01)).build().unwrap();
    let out = s.sanitize_chart(&wick_mock::chart("AAPL").unwrap()).unwrap();

    assert_eq!(out.series.stats.input, 5);
    assert_eq!(out.series.data.len(), 4);
    assert!(!out.series.stats.ms_converted);
    assert_eq!(out.series.stats.fixed_ohlc, 1);
    assert!(out.series.has_issue(IssueKind::InvalidPrice));
    let swapped = out.series.data[2];
    assert_eq!((swapped.l, swapped.h), (180.88, 183.09));
}

#[test]
fn upstream_error_is_reported() {
    let err = decode_chart(&wick_mock::chart("FAIL").unwrap()).unwrap_err();
    assert_eq!(
        err,
        WickError::Upstream("No data found, symbol may be delisted".into())
    );
    assert!(!err.is_permanent());
}

#[test]
fn missing_result_and_timestamps_are_data_errors() {
    let err = decode_chart(&wick_mock::chart("EMPTY").unwrap()).unwrap_err();
    assert_eq!(err, WickError::Data("no result".into()));

    let err = decode_chart(&wick_mock::chart("NOTS").unwrap()).unwrap_err();
    assert_eq!(err, WickError::Data("no timestamps".into()));

    let err = decode_chart(&json!({ "not_a_chart": true })).unwrap_err();
    assert!(matches!(err, WickError::Data(_)));
}

#[test]
fn string_error_without_description_is_kept_verbatim() {
    let doc = json!({ "chart": { "result": null, "error": "rate limited" } });
    let err = decode_chart(&doc).unwrap_err();
    assert_eq!(err, WickError::Upstream("\"rate limited\"".into()));
}

fn cell() -> impl Strategy<Value = Value> {
    prop_oneof![
        4 => (1.0f64..500.0).prop_map(Value::from),
        1 => Just(Value::Null),
        1 => Just(Value::from("x")),
    ]
}

proptest! {
    #[test]
    fn one_point_per_timestamp(
        n in 1usize..40,
        cols in proptest::collection::vec(proptest::collection::vec(cell(), 0..40), 5),
    ) {
        let ts: Vec<i64> = (0..n as i64).map(|i| 1_704_205_800 + i * 86_400).collect();
        let doc = json!({
            "chart": {
                "result": [{
                    "meta": { "dataGranularity": "1w" },
                    "timestamp": ts,
                    "indicators": { "quote": [{
                        "open": cols[0], "high": cols[1], "low": cols[2], "close": cols[3], "volume": cols[4]
                    }] }
                }],
                "error": null
            }
        });
        let chart = decode_chart(&doc).unwrap();
        prop_assert_eq!(chart.points.len(), n);
        prop_assert_eq!(chart.granularity.as_deref(), Some("1wk"));
        for (i, p) in chart.points.iter().enumerate() {
            let expected = cols[3].get(i).and_then(Value::as_f64);
            prop_assert_eq!(p.c.as_ref().and_then(wick::RawValue::as_f64), expected);
        }
    }
}
