//! Raw upstream points and the cleaned candle type.

use serde::{Deserialize, Serialize};

/// A single untrusted field value as delivered by an upstream source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// A JSON number.
    Number(f64),
    /// A string, possibly holding a number (`"101.5"`).
    Text(String),
    /// Anything else (booleans, arrays, objects). Never numeric.
    Other(serde_json::Value),
}

impl RawValue {
    /// Coerce to a finite `f64`.
    ///
    /// Numbers pass through, strings are trimmed and parsed, everything else
    /// (including empty strings, `NaN` and infinities) yields `None`.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        let n = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            Self::Other(_) => return None,
        };
        n.is_finite().then_some(n)
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// An OHLCV point exactly as received; any field may be missing or garbage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    /// Timestamp, in epoch seconds or milliseconds.
    #[serde(default, alias = "time", alias = "timestamp", skip_serializing_if = "Option::is_none")]
    pub t: Option<RawValue>,
    /// Open price.
    #[serde(default, alias = "open", skip_serializing_if = "Option::is_none")]
    pub o: Option<RawValue>,
    /// High price.
    #[serde(default, alias = "high", skip_serializing_if = "Option::is_none")]
    pub h: Option<RawValue>,
    /// Low price.
    #[serde(default, alias = "low", skip_serializing_if = "Option::is_none")]
    pub l: Option<RawValue>,
    /// Close price.
    #[serde(default, alias = "close", skip_serializing_if = "Option::is_none")]
    pub c: Option<RawValue>,
    /// Traded volume.
    #[serde(default, alias = "volume", skip_serializing_if = "Option::is_none")]
    pub v: Option<RawValue>,
}

impl RawPoint {
    /// Build a fully numeric point.
    #[must_use]
    pub fn new(t: f64, o: f64, h: f64, l: f64, c: f64, v: f64) -> Self {
        Self {
            t: Some(t.into()),
            o: Some(o.into()),
            h: Some(h.into()),
            l: Some(l.into()),
            c: Some(c.into()),
            v: Some(v.into()),
        }
    }

    /// Numeric timestamp, if any.
    #[must_use]
    pub fn t_f64(&self) -> Option<f64> {
        self.t.as_ref().and_then(RawValue::as_f64)
    }

    /// Numeric open/high/low/close, or `None` if any of them is not numeric.
    #[must_use]
    pub fn prices(&self) -> Option<[f64; 4]> {
        let num = |v: &Option<RawValue>| v.as_ref().and_then(RawValue::as_f64);
        Some([num(&self.o)?, num(&self.h)?, num(&self.l)?, num(&self.c)?])
    }

    /// Numeric volume, if any.
    #[must_use]
    pub fn v_f64(&self) -> Option<f64> {
        self.v.as_ref().and_then(RawValue::as_f64)
    }
}

impl From<&Candle> for RawPoint {
    // i64 -> f64 is exact for every millisecond timestamp in the calendar window
    #[allow(clippy::cast_precision_loss)]
    fn from(c: &Candle) -> Self {
        Self::new(c.t as f64, c.o, c.h, c.l, c.c, c.v)
    }
}

/// Where a cleaned candle came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandleOrigin {
    /// Taken from the upstream series (possibly repaired).
    #[default]
    Observed,
    /// Replaced an isolated spike; built from its neighbours.
    Interpolated,
    /// Synthesized to fill a missing sampling interval.
    Filled,
}

impl CandleOrigin {
    /// True for candles taken from the upstream series.
    #[must_use]
    pub const fn is_observed(&self) -> bool {
        matches!(self, Self::Observed)
    }
}

/// A validated OHLCV bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Epoch milliseconds (UTC).
    pub t: i64,
    /// Open price.
    pub o: f64,
    /// High price; always the maximum of the four prices.
    pub h: f64,
    /// Low price; always the minimum of the four prices.
    pub l: f64,
    /// Close price.
    pub c: f64,
    /// Volume; finite and non-negative.
    pub v: f64,
    /// Provenance tag.
    #[serde(default, skip_serializing_if = "CandleOrigin::is_observed")]
    pub origin: CandleOrigin,
}

impl Candle {
    /// Build an observed candle.
    #[must_use]
    pub const fn new(t: i64, o: f64, h: f64, l: f64, c: f64, v: f64) -> Self {
        Self {
            t,
            o,
            h,
            l,
            c,
            v,
            origin: CandleOrigin::Observed,
        }
    }

    /// Return the same candle with a different provenance tag.
    #[must_use]
    pub const fn with_origin(mut self, origin: CandleOrigin) -> Self {
        self.origin = origin;
        self
    }
}
