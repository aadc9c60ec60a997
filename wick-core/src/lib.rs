//! wick-core
//!
//! The OHLCV sanitization pipeline and the time-series helpers it is built on.
//!
//! - `types`: raw points, cleaned candles, options and reports (from `wick-types`).
//! - `sanitize`: the staged pipeline turning untrusted points into a clean series.
//! - `observer`: the `SanitizeObserver` sink for run summaries.
//! - `timeseries`: ordering, deduplication, unit inference, quantization and
//!   summary helpers, usable on their own.
//!
//! Everything here is synchronous and free of I/O. The pipeline borrows its
//! input and never fails: problems with individual points are reported as
//! diagnostics on the returned `SanitizedSeries`.
//!
//! Tracing
//! -------
//! With the `tracing` feature the pipeline entry points open a span and each
//! stage emits `debug` records; `observer::TracingObserver` becomes available
//! to forward run summaries to the subscriber.
#![warn(missing_docs)]

/// Sinks for pipeline run summaries.
pub mod observer;
pub mod sanitize;
/// Time-series utilities for ordering, inference and summaries.
pub mod timeseries;
pub mod types;

#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
pub use observer::{NoopObserver, SanitizeObserver};
pub use sanitize::{
    MAX_FILL_PER_GAP, MAX_VALID_MS, MIN_VALID_MS, sanitize, sanitize_series, sanitize_value,
    sanitize_value_with_observer, sanitize_with_observer,
};
pub use timeseries::infer::{estimate_step_millis, looks_like_seconds};
pub use timeseries::merge::{dedup_last_wins, sort_by_timestamp};
pub use timeseries::summary::{
    DateRange, PriceStats, SeriesStats, VolumeStats, is_valid_point, series_stats,
};
pub use timeseries::util::quantize;
pub use timeseries::window::{OffsetWindow, slice_by_offsets};
pub use types::*;
