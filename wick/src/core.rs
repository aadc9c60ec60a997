use std::sync::Arc;

use serde_json::Value;
use wick_core::{
    RawPoint, SanitizeObserver, SanitizeOptions, SanitizedSeries, TimestampUnit, WickError,
};

use crate::chart::{ChartSeries, decode_chart};
use crate::payload::SanitizedPayload;

/// A configured sanitization pipeline.
///
/// Cheap to clone and safe to share across threads; every call borrows its
/// input and returns an owned result.
#[derive(Clone)]
pub struct Sanitizer {
    pub(crate) opts: SanitizeOptions,
    pub(crate) observer: Arc<dyn SanitizeObserver>,
}

/// Builder for constructing a [`Sanitizer`] with custom options.
pub struct SanitizerBuilder {
    opts: SanitizeOptions,
    observer: Option<Arc<dyn SanitizeObserver>>,
}

/// A sanitized chart document.
#[derive(Debug, Clone, PartialEq)]
pub struct SanitizedChart {
    /// The chart's `meta` object, untouched.
    pub meta: Value,
    /// Declared data granularity, canonicalized.
    pub granularity: Option<String>,
    /// Pipeline result for the decoded points.
    pub series: SanitizedSeries,
}

impl Default for SanitizerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SanitizerBuilder {
    /// Create a builder with the default options and the default observer.
    ///
    /// Defaults keep positivity checks, outlier interpolation, the calendar
    /// window and unit-grid price rounding on, and gap filling off.
    #[must_use]
    pub fn new() -> Self {
        Self {
            opts: SanitizeOptions::default(),
            observer: None,
        }
    }

    /// Replace all options at once, for example with a deserialized config.
    #[must_use]
    pub const fn options(mut self, opts: SanitizeOptions) -> Self {
        self.opts = opts;
        self
    }

    /// Drop points with a zero or negative price.
    #[must_use]
    pub const fn require_positive(mut self, yes: bool) -> Self {
        self.opts.require_positive = yes;
        self
    }

    /// Interpolate isolated close-price spikes.
    #[must_use]
    pub const fn detect_outliers(mut self, yes: bool) -> Self {
        self.opts.detect_outliers = yes;
        self
    }

    /// Ratio beyond which a close-to-close move is a spike candidate. Must be > 1.
    #[must_use]
    pub const fn outlier_threshold(mut self, ratio: f64) -> Self {
        self.opts.outlier_threshold = ratio;
        self
    }

    /// Insert interpolated bars into missing sampling intervals.
    #[must_use]
    pub const fn fill_gaps(mut self, yes: bool) -> Self {
        self.opts.fill_gaps = yes;
        self
    }

    /// Drop points outside 2009-01-01 ..= 2100-12-31.
    #[must_use]
    pub const fn validate_dates(mut self, yes: bool) -> Self {
        self.opts.validate_dates = yes;
        self
    }

    /// Attach a copy of the raw input to every result.
    #[must_use]
    pub const fn preserve_original(mut self, yes: bool) -> Self {
        self.opts.preserve_original = yes;
        self
    }

    /// Declare the unit of raw timestamps instead of inferring it.
    #[must_use]
    pub const fn timestamp_unit(mut self, unit: TimestampUnit) -> Self {
        self.opts.timestamp_unit = unit;
        self
    }

    /// Round prices to multiples of `quantum`; `None` keeps them unrounded.
    #[must_use]
    pub const fn price_quantum(mut self, quantum: Option<f64>) -> Self {
        self.opts.price_quantum = quantum;
        self
    }

    /// Route run summaries to a custom observer.
    ///
    /// Without one, summaries go to `tracing` when the `tracing` feature is
    /// enabled and are discarded otherwise.
    #[must_use]
    pub fn observer(mut self, observer: Arc<dyn SanitizeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Build the `Sanitizer`.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `outlier_threshold` is not a finite number
    /// greater than 1 or `price_quantum` is not a finite positive number.
    pub fn build(self) -> Result<Sanitizer, WickError> {
        self.opts.validate()?;
        Ok(Sanitizer {
            opts: self.opts,
            observer: self.observer.unwrap_or_else(default_observer),
        })
    }
}

fn default_observer() -> Arc<dyn SanitizeObserver> {
    #[cfg(feature = "tracing")]
    {
        Arc::new(wick_core::TracingObserver)
    }
    #[cfg(not(feature = "tracing"))]
    {
        Arc::new(wick_core::NoopObserver)
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            opts: SanitizeOptions::default(),
            observer: default_observer(),
        }
    }
}

impl std::fmt::Debug for Sanitizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sanitizer")
            .field("opts", &self.opts)
            .finish_non_exhaustive()
    }
}

impl Sanitizer {
    /// Start building a new `Sanitizer`.
    ///
    /// ```
    /// use wick::Sanitizer;
    ///
    /// let sanitizer = Sanitizer::builder()
    ///     .fill_gaps(true)
    ///     .price_quantum(Some(0.01))
    ///     .build()?;
    /// assert!(sanitizer.options().fill_gaps);
    /// # Ok::<(), wick::WickError>(())
    /// ```
    #[must_use]
    pub fn builder() -> SanitizerBuilder {
        SanitizerBuilder::new()
    }

    /// Options this sanitizer runs with.
    #[must_use]
    pub const fn options(&self) -> &SanitizeOptions {
        &self.opts
    }

    /// Sanitize typed raw points.
    #[must_use]
    pub fn sanitize(&self, raw: &[RawPoint]) -> SanitizedSeries {
        wick_core::sanitize_with_observer(raw, &self.opts, &*self.observer)
    }

    /// Sanitize an untyped JSON value; anything but an array of objects is
    /// reported through `missing_required` diagnostics.
    #[must_use]
    pub fn sanitize_value(&self, value: &Value) -> SanitizedSeries {
        wick_core::sanitize_value_with_observer(value, &self.opts, &*self.observer)
    }

    /// Parse JSON text and sanitize it.
    ///
    /// # Errors
    /// Returns `Json` if the text is not valid JSON. Well-formed JSON of the
    /// wrong shape is not an error; see [`Sanitizer::sanitize_value`].
    pub fn sanitize_json(&self, text: &str) -> Result<SanitizedSeries, WickError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(self.sanitize_value(&value))
    }

    /// Sanitize the `data` array of a `{ meta, data }` envelope.
    ///
    /// The returned meta is a copy of the input's with `sanitized: true` and a
    /// `sanitize_report` holding the run's counters.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "wick::sanitize_payload", skip_all)
    )]
    #[must_use]
    pub fn sanitize_payload(&self, payload: &Value) -> SanitizedPayload {
        let data = payload.get("data").unwrap_or(&Value::Null);
        let series = self.sanitize_value(data);
        SanitizedPayload::new(payload.get("meta"), series)
    }

    /// Decode a Yahoo-style chart document and sanitize its points.
    ///
    /// # Errors
    /// Propagates the decoding errors of [`decode_chart`].
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "wick::sanitize_chart", skip_all, err)
    )]
    pub fn sanitize_chart(&self, doc: &Value) -> Result<SanitizedChart, WickError> {
        let ChartSeries {
            meta,
            granularity,
            points,
        } = decode_chart(doc)?;
        let series = self.sanitize(&points);
        Ok(SanitizedChart {
            meta,
            granularity,
            series,
        })
    }
}
