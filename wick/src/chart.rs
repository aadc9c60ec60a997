//! Decoding of Yahoo-style columnar chart documents.

use serde::Deserialize;
use serde_json::Value;

use wick_core::{RawPoint, RawValue, WickError};

#[derive(Deserialize)]
struct Envelope {
    chart: Body,
}

#[derive(Deserialize)]
struct Body {
    #[serde(default)]
    result: Option<Vec<ChartResult>>,
    #[serde(default)]
    error: Option<Value>,
}

#[derive(Deserialize)]
struct ChartResult {
    #[serde(default)]
    meta: Value,
    #[serde(default)]
    timestamp: Option<Vec<Value>>,
    #[serde(default)]
    indicators: Option<Indicators>,
}

#[derive(Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Columns>,
}

#[derive(Default, Deserialize)]
struct Columns {
    #[serde(default)]
    open: Vec<Value>,
    #[serde(default)]
    high: Vec<Value>,
    #[serde(default)]
    low: Vec<Value>,
    #[serde(default)]
    close: Vec<Value>,
    #[serde(default)]
    volume: Vec<Value>,
}

/// Raw points decoded from a chart document, before sanitization.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    /// The document's `meta` object, untouched (`Null` if absent).
    pub meta: Value,
    /// Declared data granularity, canonicalized (`1d`, `1wk`, `5m`, ...).
    pub granularity: Option<String>,
    /// One point per timestamp, with millisecond timestamps.
    pub points: Vec<RawPoint>,
}

/// Decode a chart document into raw points.
///
/// Each timestamp (epoch seconds) becomes one point with `t` in milliseconds.
/// Cells that are missing, `null`, or not numbers become absent fields and are
/// left for the pipeline to judge.
///
/// # Errors
/// - `Upstream` if the document carries a non-null `chart.error`.
/// - `Data` if the document is not shaped like a chart, has no result, or has
///   no timestamps.
pub fn decode_chart(doc: &Value) -> Result<ChartSeries, WickError> {
    let envelope =
        Envelope::deserialize(doc).map_err(|e| WickError::data(format!("malformed chart: {e}")))?;
    let body = envelope.chart;

    if let Some(err) = body.error.filter(|e| !e.is_null()) {
        let msg = err
            .get("description")
            .and_then(Value::as_str)
            .map_or_else(|| err.to_string(), str::to_string);
        return Err(WickError::upstream(msg));
    }

    let result = body
        .result
        .and_then(|r| r.into_iter().next())
        .ok_or_else(|| WickError::data("no result"))?;
    let timestamps = result
        .timestamp
        .filter(|ts| !ts.is_empty())
        .ok_or_else(|| WickError::data("no timestamps"))?;
    let cols = result
        .indicators
        .and_then(|i| i.quote.into_iter().next())
        .unwrap_or_default();

    let cell = |col: &[Value], i: usize| col.get(i).and_then(Value::as_f64).map(RawValue::Number);
    let points = timestamps
        .iter()
        .enumerate()
        .map(|(i, ts)| RawPoint {
            t: ts.as_f64().map(|s| RawValue::Number(s * 1000.0)),
            o: cell(&cols.open, i),
            h: cell(&cols.high, i),
            l: cell(&cols.low, i),
            c: cell(&cols.close, i),
            v: cell(&cols.volume, i),
        })
        .collect();

    let granularity = result
        .meta
        .get("dataGranularity")
        .and_then(Value::as_str)
        .map(canonical_granularity);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        points = timestamps.len(),
        granularity = granularity.as_deref().unwrap_or("?"),
        "decoded chart"
    );

    Ok(ChartSeries {
        meta: result.meta,
        granularity,
        points,
    })
}

/// Lowercase a granularity label and spell weeks as `wk`.
///
/// ```
/// use wick::canonical_granularity;
///
/// assert_eq!(canonical_granularity("1D"), "1d");
/// assert_eq!(canonical_granularity("1w"), "1wk");
/// assert_eq!(canonical_granularity("1WK"), "1wk");
/// assert_eq!(canonical_granularity("1mo"), "1mo");
/// ```
#[must_use]
pub fn canonical_granularity(raw: &str) -> String {
    let lower = raw.trim().to_ascii_lowercase();
    match lower.strip_suffix('w') {
        Some(n) if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => format!("{n}wk"),
        _ => lower,
    }
}
