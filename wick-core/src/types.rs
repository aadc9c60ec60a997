//! Re-export of foundational types from `wick-types`.
// Consolidated re-exports so downstream crates can depend on `wick-core` only

pub use wick_types::{Candle, CandleOrigin, RawPoint, RawValue};
pub use wick_types::{Diagnostic, EventLevel, IssueKind, SanitizationStats, SanitizedSeries};
pub use wick_types::{SanitizeOptions, TimestampUnit, WickError};
