//! Observer trait receiving diagnostic events from the pipeline.

use serde_json::Value;

use crate::types::EventLevel;

/// Trait implemented by sinks for pipeline events.
///
/// The pipeline emits one summary event per run. Implementations must be
/// cheap and must not panic; they are invoked synchronously on the caller's
/// thread.
pub trait SanitizeObserver: Send + Sync {
    /// Receive an event with its severity, a human-readable message, and a JSON payload.
    fn on_event(&self, level: EventLevel, message: &str, payload: &Value);
}

impl<F> SanitizeObserver for F
where
    F: Fn(EventLevel, &str, &Value) + Send + Sync,
{
    fn on_event(&self, level: EventLevel, message: &str, payload: &Value) {
        self(level, message, payload);
    }
}

/// Observer that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SanitizeObserver for NoopObserver {
    fn on_event(&self, _level: EventLevel, _message: &str, _payload: &Value) {}
}

/// Observer that forwards events to `tracing` under the `wick` target.
#[cfg(feature = "tracing")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl SanitizeObserver for TracingObserver {
    fn on_event(&self, level: EventLevel, message: &str, payload: &Value) {
        match level {
            EventLevel::Info => tracing::info!(target: "wick", payload = %payload, "{message}"),
            EventLevel::Warn => tracing::warn!(target: "wick", payload = %payload, "{message}"),
            EventLevel::Error => tracing::error!(target: "wick", payload = %payload, "{message}"),
        }
    }
}
