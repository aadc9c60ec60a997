//! Configuration types for the sanitization pipeline.

use serde::{Deserialize, Serialize};

use crate::error::WickError;

/// Unit of the raw timestamps handed to the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampUnit {
    /// Infer seconds vs milliseconds from the mean of the first few timestamps.
    #[default]
    Auto,
    /// Timestamps are epoch seconds; always rescale to milliseconds.
    Seconds,
    /// Timestamps are already epoch milliseconds; never rescale.
    Milliseconds,
}

/// Options controlling which sanitization stages run and how strict they are.
///
/// Every field has a default, so partial configuration documents deserialize:
///
/// ```
/// use wick_types::SanitizeOptions;
///
/// let opts: SanitizeOptions = serde_json::from_str(r#"{ "fill_gaps": true }"#).unwrap();
/// assert!(opts.fill_gaps);
/// assert!(opts.require_positive);
/// assert_eq!(opts.outlier_threshold, 10.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SanitizeOptions {
    /// Drop points whose open/high/low/close is zero or negative.
    pub require_positive: bool,
    /// Run the isolated-spike detector.
    pub detect_outliers: bool,
    /// Close-to-close ratio (and its inverse) beyond which a bar is a spike candidate.
    pub outlier_threshold: f64,
    /// Insert interpolated bars where the series skips whole sampling intervals.
    pub fill_gaps: bool,
    /// Drop points outside the supported calendar window.
    pub validate_dates: bool,
    /// Attach a copy of the raw input to the result.
    pub preserve_original: bool,
    /// Unit hint for raw timestamps.
    pub timestamp_unit: TimestampUnit,
    /// Prices are rounded to the nearest multiple of this quantum; `None` keeps them as-is.
    pub price_quantum: Option<f64>,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        Self {
            require_positive: true,
            detect_outliers: true,
            outlier_threshold: 10.0,
            fill_gaps: false,
            validate_dates: true,
            preserve_original: false,
            timestamp_unit: TimestampUnit::Auto,
            price_quantum: Some(1.0),
        }
    }
}

impl SanitizeOptions {
    /// Options that keep every point with a finite timestamp and numeric prices.
    ///
    /// Disables positivity, outlier detection, gap filling, and the calendar
    /// window. Quantization is left at its default.
    #[must_use]
    pub fn permissive() -> Self {
        Self {
            require_positive: false,
            detect_outliers: false,
            fill_gaps: false,
            validate_dates: false,
            ..Self::default()
        }
    }

    /// Check the numeric options.
    ///
    /// # Errors
    /// Returns `WickError::InvalidArg` if `outlier_threshold` is not a finite
    /// number greater than 1, or if `price_quantum` is set to a non-finite or
    /// non-positive value.
    pub fn validate(&self) -> Result<(), WickError> {
        if !self.outlier_threshold.is_finite() || self.outlier_threshold <= 1.0 {
            return Err(WickError::invalid_arg(format!(
                "outlier_threshold must be a finite number > 1, got {}",
                self.outlier_threshold
            )));
        }
        if let Some(q) = self.price_quantum {
            if !q.is_finite() || q <= 0.0 {
                return Err(WickError::invalid_arg(format!(
                    "price_quantum must be a finite number > 0, got {q}"
                )));
            }
        }
        Ok(())
    }
}
