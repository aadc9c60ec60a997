//! Data transfer objects and configuration primitives shared across the wick workspace.
#![warn(missing_docs)]

mod candle;
mod config;
mod error;
mod reports;

pub use candle::{Candle, CandleOrigin, RawPoint, RawValue};
pub use config::{SanitizeOptions, TimestampUnit};
pub use error::WickError;
pub use reports::{Diagnostic, EventLevel, IssueKind, SanitizationStats, SanitizedSeries};
