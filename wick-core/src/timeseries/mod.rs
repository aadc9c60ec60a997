//! Time-series utilities shared by the pipeline and its callers.
//!
//! Modules include:
//! - `infer`: timestamp unit inference and sampling-interval estimation
//! - `merge`: chronological ordering and last-wins deduplication
//! - `summary`: point validity and series statistics
//! - `util`: OHLC repair, price quantization, interpolation
//! - `window`: offset-based windows over a cleaned series
/// Unit inference and interval estimation helpers.
pub mod infer;
/// Ordering and deduplication by timestamp.
pub mod merge;
/// Point validity predicate and series summary statistics.
pub mod summary;
/// Shared numeric helpers for candle repair and synthesis.
pub mod util;
/// Offset windows over a cleaned series.
pub mod window;
