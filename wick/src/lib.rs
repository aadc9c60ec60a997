//! Wick turns untrusted OHLCV market data into clean, ordered candle series.
//!
//! Overview
//! - Accepts typed points, untyped JSON arrays, `{ meta, data }` envelopes,
//!   and Yahoo-style columnar chart documents.
//! - Normalizes timestamps to epoch milliseconds, sorts, and collapses
//!   duplicate timestamps (last one wins).
//! - Coerces and validates prices, repairs low/high bounds, zeroes bad
//!   volumes, and rounds prices to a configurable quantum.
//! - Optionally interpolates isolated spikes and fills missing intervals.
//! - Never fails on bad points: every drop or repair is counted in
//!   `SanitizationStats` and described by a `Diagnostic`.
//!
//! Key behaviors and trade-offs
//! - Unit inference: timestamps whose leading mean is below 1e12 are read as
//!   seconds. Short or odd inputs can fool this; set `TimestampUnit` when the
//!   unit is known.
//! - Outlier interpolation replaces a spike with the average of its
//!   neighbours. A second pass over already-interpolated data may interpolate
//!   again; ordering, deduplication and repair are stable across passes.
//! - Price rounding defaults to whole units to match integer-priced feeds.
//!   Use `price_quantum(Some(0.01))` for cents or `None` to keep raw prices.
//!
//! Examples
//! ```
//! use wick::{RawPoint, Sanitizer};
//!
//! let sanitizer = Sanitizer::builder().build()?;
//! let out = sanitizer.sanitize(&[
//!     RawPoint::new(1_700_000_060.0, 101.0, 103.0, 100.0, 102.0, 10.0),
//!     RawPoint::new(1_700_000_000.0, 100.0, 90.0, 110.0, 95.0, -5.0),
//! ]);
//! assert_eq!(out.data.len(), 2);
//! assert_eq!(out.data[0].t, 1_700_000_000_000);
//! assert_eq!((out.data[0].l, out.data[0].h), (90.0, 110.0));
//! assert_eq!(out.stats.fixed_ohlc, 1);
//! # Ok::<(), wick::WickError>(())
//! ```
//!
//! See the `demos` crate for runnable end-to-end demonstrations.
#![warn(missing_docs)]

mod chart;
pub(crate) mod core;
#[cfg(feature = "dataframe")]
mod dataframe;
mod payload;

pub use chart::{ChartSeries, canonical_granularity, decode_chart};
pub use core::{SanitizedChart, Sanitizer, SanitizerBuilder};
#[cfg(feature = "dataframe")]
pub use dataframe::ToDataFrame;
pub use payload::SanitizedPayload;

#[cfg(feature = "tracing")]
pub use wick_core::TracingObserver;
pub use wick_core::{
    Candle, CandleOrigin, Diagnostic, EventLevel, IssueKind, NoopObserver, RawPoint, RawValue,
    SanitizationStats, SanitizeObserver, SanitizeOptions, SanitizedSeries, SeriesStats,
    TimestampUnit, WickError, is_valid_point, sanitize_series, series_stats, slice_by_offsets,
};
