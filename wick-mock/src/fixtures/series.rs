use serde_json::{Value, json};
use wick_types::{RawPoint, RawValue};

/// 2023-11-14T22:13:20Z, the first bar of every fixture series.
pub const BASE_MS: i64 = 1_700_000_000_000;

/// One-minute sampling interval.
pub const STEP_MS: i64 = 60_000;

/// Names accepted by [`by_name`] and [`json_by_name`].
pub const NAMES: &[&str] = &[
    "clean",
    "seconds",
    "duplicates",
    "spike",
    "gaps",
    "inverted",
    "garbage",
];

/// Look up a named fixture series; `None` for unknown names.
pub fn by_name(name: &str) -> Option<Vec<RawPoint>> {
    match name {
        "clean" => Some(bars(&[
            (0, 100.0, 102.0, 99.0, 101.0, 1_000.0),
            (1, 101.0, 103.0, 100.0, 102.0, 1_100.0),
            (2, 102.0, 104.0, 101.0, 103.0, 900.0),
            (3, 103.0, 105.0, 102.0, 104.0, 1_200.0),
            (4, 104.0, 104.0, 100.0, 101.0, 1_500.0),
            (5, 101.0, 102.0, 98.0, 99.0, 800.0),
        ])),
        "seconds" => Some(
            bars(&[
                (0, 100.0, 102.0, 99.0, 101.0, 1_000.0),
                (1, 101.0, 103.0, 100.0, 102.0, 1_100.0),
                (2, 102.0, 104.0, 101.0, 103.0, 900.0),
            ])
            .into_iter()
            .map(|mut p| {
                p.t = p.t_f64().map(|t| RawValue::Number(t / 1000.0));
                p
            })
            .collect(),
        ),
        // Out of order with two repeated minutes; the later copy carries the
        // corrected close.
        "duplicates" => Some(bars(&[
            (2, 102.0, 104.0, 101.0, 103.0, 900.0),
            (0, 100.0, 102.0, 99.0, 101.0, 1_000.0),
            (1, 101.0, 103.0, 100.0, 102.0, 1_100.0),
            (2, 102.0, 104.0, 101.0, 104.0, 950.0),
            (0, 100.0, 102.0, 99.0, 100.0, 1_050.0),
        ])),
        "spike" => Some(bars(&[
            (0, 100.0, 100.0, 100.0, 100.0, 500.0),
            (1, 101.0, 101.0, 101.0, 101.0, 500.0),
            (2, 99.0, 99.0, 99.0, 99.0, 500.0),
            (3, 1000.0, 1000.0, 1000.0, 1000.0, 500.0),
            (4, 102.0, 102.0, 102.0, 102.0, 500.0),
            (5, 100.0, 100.0, 100.0, 100.0, 500.0),
        ])),
        // Minutes 3 and 4 are missing.
        "gaps" => Some(bars(&[
            (0, 100.0, 101.0, 99.0, 100.0, 1_000.0),
            (1, 100.0, 101.0, 99.0, 100.0, 1_000.0),
            (2, 100.0, 101.0, 99.0, 100.0, 1_000.0),
            (5, 130.0, 131.0, 129.0, 130.0, 1_600.0),
            (6, 130.0, 131.0, 129.0, 130.0, 1_600.0),
        ])),
        "inverted" => Some(bars(&[
            (0, 100.0, 90.0, 110.0, 95.0, -5.0),
            (1, 96.0, 97.0, 94.0, 95.0, 400.0),
        ])),
        "garbage" => Some(garbage()),
        _ => None,
    }
}

/// The same series as [`by_name`], rendered as a JSON array using the long
/// field names some upstreams emit.
pub fn json_by_name(name: &str) -> Option<Value> {
    let points = by_name(name)?;
    let rows = points
        .iter()
        .map(|p| {
            json!({
                "timestamp": p.t,
                "open": p.o,
                "high": p.h,
                "low": p.l,
                "close": p.c,
                "volume": p.v,
            })
        })
        .collect();
    Some(Value::Array(rows))
}

/// A longer one-minute series with defects placed at fixed positions.
///
/// Prices follow a bounded zig-zag around 100; every 17th bar repeats the
/// previous timestamp, every 23rd has its high and low swapped, every 31st
/// carries a negative volume, and bar 40 (when present) is a twentyfold spike.
#[allow(clippy::cast_precision_loss)]
pub fn dirty_run(len: usize) -> Vec<RawPoint> {
    let mut out = Vec::with_capacity(len);
    let mut minute = 0i64;
    for i in 0..len {
        let wiggle = ((i * 7) % 11) as f64 - 5.0;
        let close = 100.0 + wiggle;
        let (mut high, mut low) = (close + 2.0, close - 2.0);
        let mut volume = 1_000.0 + (i % 13) as f64 * 10.0;
        if i % 23 == 22 {
            std::mem::swap(&mut high, &mut low);
        }
        if i % 31 == 30 {
            volume = -volume;
        }
        let close = if i == 40 { close * 20.0 } else { close };
        let high = if i == 40 { close } else { high };
        if i % 17 != 16 {
            minute += 1;
        }
        out.push(RawPoint::new(
            (BASE_MS + minute * STEP_MS) as f64,
            close,
            high,
            low,
            close,
            volume,
        ));
    }
    out
}

#[allow(clippy::cast_precision_loss)]
fn bars(rows: &[(i64, f64, f64, f64, f64, f64)]) -> Vec<RawPoint> {
    rows.iter()
        .map(|&(minute, o, h, l, c, v)| {
            RawPoint::new((BASE_MS + minute * STEP_MS) as f64, o, h, l, c, v)
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn garbage() -> Vec<RawPoint> {
    let at = |minute: i64| RawValue::Number((BASE_MS + minute * STEP_MS) as f64);
    vec![
        // string-encoded but usable
        RawPoint {
            t: Some(at(0)),
            o: Some("100".into()),
            h: Some("101.4".into()),
            l: Some(" 99 ".into()),
            c: Some("100.6".into()),
            v: Some("1200".into()),
        },
        // unparseable close
        RawPoint {
            t: Some(at(1)),
            o: Some(100.0.into()),
            h: Some(101.0.into()),
            l: Some(99.0.into()),
            c: Some("n/a".into()),
            v: Some(10.0.into()),
        },
        // no timestamp at all
        RawPoint {
            t: None,
            ..RawPoint::new(0.0, 100.0, 101.0, 99.0, 100.0, 10.0)
        },
        // zero open
        RawPoint::new((BASE_MS + 3 * STEP_MS) as f64, 0.0, 10.0, 5.0, 8.0, 10.0),
        // 1990, outside the calendar window
        RawPoint::new(631_152_000_000.0, 100.0, 101.0, 99.0, 100.0, 10.0),
        // boolean volume
        RawPoint {
            v: Some(RawValue::Other(Value::Bool(true))),
            ..RawPoint::new((BASE_MS + 5 * STEP_MS) as f64, 100.0, 101.0, 99.0, 100.0, 0.0)
        },
        RawPoint::new((BASE_MS + 6 * STEP_MS) as f64, 100.0, 101.0, 99.0, 100.0, f64::NAN),
    ]
}
