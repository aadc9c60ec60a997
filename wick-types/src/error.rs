use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the wick workspace.
///
/// Per-point data problems never surface here; the pipeline reports those as
/// diagnostics on the sanitized series. This type covers the fallible edges:
/// option validation, JSON text parsing, and upstream payload decoding.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WickError {
    /// Invalid input argument (for example an out-of-range option).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the shape of an upstream payload (missing sections, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// The upstream payload itself reported an error.
    #[error("upstream error: {0}")]
    Upstream(String),

    /// Input text could not be parsed as JSON.
    #[error("malformed json: {0}")]
    Json(String),
}

impl WickError {
    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Data` error.
    pub fn data(msg: impl Into<String>) -> Self {
        Self::Data(msg.into())
    }

    /// Helper: build an `Upstream` error.
    pub fn upstream(msg: impl Into<String>) -> Self {
        Self::Upstream(msg.into())
    }

    /// Returns true if retrying the same input cannot succeed.
    ///
    /// Upstream-reported errors are the only ones tied to a particular fetch;
    /// everything else is a property of the input or configuration.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        !matches!(self, Self::Upstream(_))
    }
}

impl From<serde_json::Error> for WickError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}
