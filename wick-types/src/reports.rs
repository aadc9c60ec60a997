//! Report envelopes produced by the sanitization pipeline.

use serde::{Deserialize, Serialize};

use crate::candle::{Candle, RawPoint};

/// Machine-readable classification of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum IssueKind {
    /// Timestamp is not numeric, or falls outside the calendar window.
    InvalidTimestamp,
    /// One of open/high/low/close is missing or not numeric.
    InvalidPrice,
    /// A price is zero or negative while positivity is required.
    NegativePrice,
    /// Low/high did not bound the other prices and were repaired.
    OhlcInconsistency,
    /// Several points shared a timestamp; only the last was kept.
    DuplicateTimestamp,
    /// Top-level input, or one of its elements, had the wrong shape.
    MissingRequired,
    /// An isolated spike was replaced or removed.
    OutlierDetected,
    /// The input array was empty.
    EmptyInput,
    /// Timestamps were rescaled from seconds to milliseconds.
    TimestampConverted,
    /// Synthetic bars were inserted into temporal gaps.
    GapsFilled,
    /// A gap spanned more intervals than the filler inserts and was left open.
    GapTooLarge,
}

/// A structured error or warning record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Classification used for filtering.
    #[serde(rename = "type")]
    pub kind: IssueKind,
    /// Human-readable description.
    pub message: String,
    /// The offending point or extra context, when there is one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Diagnostic {
    /// A diagnostic without attached data.
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            data: None,
        }
    }

    /// Attach a payload.
    #[must_use]
    pub fn with_data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// Counters collected while sanitizing one series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizationStats {
    /// Number of raw points received.
    pub input: usize,
    /// Number of candles returned.
    pub output: usize,
    /// Whether timestamps were rescaled from seconds.
    pub ms_converted: bool,
    /// Points removed because a later point shared their timestamp.
    pub deduped: usize,
    /// Points dropped as unusable.
    pub dropped_invalid: usize,
    /// Points whose low/high were repaired.
    #[serde(rename = "fixedOHLC")]
    pub fixed_ohlc: usize,
    /// Points whose volume was replaced with zero.
    #[serde(rename = "negOrNaNVolToZero")]
    pub neg_or_nan_vol_to_zero: usize,
    /// Isolated spikes interpolated or removed.
    pub outliers_detected: usize,
    /// Synthetic bars inserted.
    pub gaps_filled: usize,
    /// Wall time spent in the pipeline.
    pub processing_time_ms: f64,
}

/// Result of one pipeline run: the cleaned series plus everything observed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SanitizedSeries {
    /// Strictly increasing, unique-timestamp candles.
    pub data: Vec<Candle>,
    /// Counters and timing.
    pub stats: SanitizationStats,
    /// Records for points that were dropped or input that was rejected.
    pub errors: Vec<Diagnostic>,
    /// Records for corrections and non-fatal observations.
    pub warnings: Vec<Diagnostic>,
    /// Copy of the raw input, when requested.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<Vec<RawPoint>>,
}

impl SanitizedSeries {
    /// True if any diagnostic of the given kind was recorded.
    #[must_use]
    pub fn has_issue(&self, kind: IssueKind) -> bool {
        self.errors
            .iter()
            .chain(self.warnings.iter())
            .any(|d| d.kind == kind)
    }

    /// Split into the cleaned candles and the counters.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Candle>, SanitizationStats) {
        (self.data, self.stats)
    }
}

/// Severity of an event delivered to an observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventLevel {
    /// Routine completion.
    Info,
    /// Completed with corrections.
    Warn,
    /// Completed, but points were rejected.
    Error,
}
