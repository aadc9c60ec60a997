//! `{ "meta": {...}, "data": [...] }` payload envelopes.

use serde_json::{Map, Value, json};

use wick_core::SanitizedSeries;

/// A sanitized payload envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedPayload {
    /// Copy of the input `meta` with `sanitized: true` and `sanitize_report` added.
    pub meta: Map<String, Value>,
    /// The pipeline result for the envelope's `data`.
    pub series: SanitizedSeries,
}

impl SanitizedPayload {
    pub(crate) fn new(input_meta: Option<&Value>, series: SanitizedSeries) -> Self {
        let mut meta = input_meta
            .and_then(Value::as_object)
            .cloned()
            .unwrap_or_default();
        meta.insert("sanitized".to_string(), Value::Bool(true));
        meta.insert(
            "sanitize_report".to_string(),
            serde_json::to_value(&series.stats).unwrap_or(Value::Null),
        );
        Self { meta, series }
    }

    /// Render back into an envelope with the cleaned candles as `data`.
    #[must_use]
    pub fn to_value(&self) -> Value {
        json!({
            "meta": self.meta,
            "data": self.series.data,
        })
    }
}
