//! The OHLCV sanitization pipeline.
//!
//! Stages run strictly in order, each consuming the previous stage's output:
//!
//! 1. `input`: shape checks on the top-level value
//! 2. `timestamps`: unit inference, rescaling, calendar window
//! 3. ordering and last-wins deduplication (see `timeseries::merge`)
//! 4. `clean`: coercion, positivity, OHLC repair, volume, quantization
//! 5. `outliers`: isolated spike interpolation (optional)
//! 6. `gaps`: linear gap filling (optional)
//!
//! The caller's input is only ever borrowed. Per-point problems become
//! diagnostics on the returned [`SanitizedSeries`]; nothing here returns an
//! error or panics on untrusted data.

mod clean;
mod gaps;
mod input;
mod outliers;
mod timestamps;

use std::time::Instant;

use serde_json::{Value, json};

use crate::observer::{NoopObserver, SanitizeObserver};
use crate::timeseries::merge::{dedup_last_wins, sort_by_timestamp};
use crate::types::{
    Candle, Diagnostic, EventLevel, IssueKind, RawPoint, SanitizationStats, SanitizeOptions,
    SanitizedSeries,
};

pub use gaps::MAX_FILL_PER_GAP;
pub use timestamps::{MAX_VALID_MS, MIN_VALID_MS};

/// Number of diagnostics attached to the summary event payload.
const SUMMARY_SAMPLE: usize = 5;

/// Counters and diagnostics accumulated across stages of one run.
#[derive(Debug, Default)]
pub(crate) struct Ledger {
    pub(crate) stats: SanitizationStats,
    pub(crate) errors: Vec<Diagnostic>,
    pub(crate) warnings: Vec<Diagnostic>,
}

impl Ledger {
    pub(crate) fn error(&mut self, d: Diagnostic) {
        self.errors.push(d);
    }

    pub(crate) fn warn(&mut self, d: Diagnostic) {
        self.warnings.push(d);
    }
}

/// A raw point paired with its normalized millisecond timestamp.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Stamped<'a> {
    pub(crate) t: Option<i64>,
    pub(crate) raw: &'a RawPoint,
}

/// Sanitize a slice of raw points with the given options.
///
/// Equivalent to [`sanitize_with_observer`] with a [`NoopObserver`].
///
/// ```
/// use wick_core::{RawPoint, SanitizeOptions, sanitize};
///
/// let raw = vec![RawPoint::new(1_700_000_000.0, 100.0, 90.0, 110.0, 95.0, -5.0)];
/// let out = sanitize(&raw, &SanitizeOptions::default());
///
/// assert_eq!(out.data.len(), 1);
/// assert_eq!(out.data[0].t, 1_700_000_000_000);
/// assert_eq!((out.data[0].l, out.data[0].h, out.data[0].v), (90.0, 110.0, 0.0));
/// assert!(out.stats.ms_converted);
/// assert_eq!(out.stats.fixed_ohlc, 1);
/// assert_eq!(out.stats.neg_or_nan_vol_to_zero, 1);
/// ```
#[must_use]
pub fn sanitize(raw: &[RawPoint], opts: &SanitizeOptions) -> SanitizedSeries {
    sanitize_with_observer(raw, opts, &NoopObserver)
}

/// Sanitize a slice of raw points, reporting the run summary to `observer`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "wick::sanitize",
        skip_all,
        fields(points = raw.len(), fill_gaps = opts.fill_gaps, detect_outliers = opts.detect_outliers),
    )
)]
#[must_use]
pub fn sanitize_with_observer(
    raw: &[RawPoint],
    opts: &SanitizeOptions,
    observer: &dyn SanitizeObserver,
) -> SanitizedSeries {
    let started = Instant::now();
    run(raw, raw.len(), Ledger::default(), opts, observer, started)
}

/// Sanitize an untyped JSON value, which must be an array of point objects.
///
/// A non-array value yields an empty series with a `missing_required` error.
/// Array elements that are not objects are dropped the same way.
///
/// ```
/// use serde_json::json;
/// use wick_core::{IssueKind, SanitizeOptions, sanitize_value};
///
/// let out = sanitize_value(&json!({ "not": "an array" }), &SanitizeOptions::default());
/// assert!(out.data.is_empty());
/// assert_eq!(out.errors[0].kind, IssueKind::MissingRequired);
/// ```
#[must_use]
pub fn sanitize_value(value: &Value, opts: &SanitizeOptions) -> SanitizedSeries {
    sanitize_value_with_observer(value, opts, &NoopObserver)
}

/// Sanitize an untyped JSON value, reporting the run summary to `observer`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "wick::sanitize_value", skip_all)
)]
#[must_use]
pub fn sanitize_value_with_observer(
    value: &Value,
    opts: &SanitizeOptions,
    observer: &dyn SanitizeObserver,
) -> SanitizedSeries {
    let started = Instant::now();
    let mut ledger = Ledger::default();
    match input::points_from_value(value, &mut ledger) {
        Some((points, input_len)) => run(&points, input_len, ledger, opts, observer, started),
        None => finish(ledger, Vec::new(), None, observer, started),
    }
}

/// Compatibility wrapper returning only the cleaned candles and the counters.
#[must_use]
pub fn sanitize_series(raw: &[RawPoint], opts: &SanitizeOptions) -> (Vec<Candle>, SanitizationStats) {
    sanitize(raw, opts).into_parts()
}

fn run(
    points: &[RawPoint],
    input_len: usize,
    mut ledger: Ledger,
    opts: &SanitizeOptions,
    observer: &dyn SanitizeObserver,
    started: Instant,
) -> SanitizedSeries {
    ledger.stats.input = input_len;
    if input::is_empty(input_len, &mut ledger) {
        return finish(ledger, Vec::new(), None, observer, started);
    }
    let original = opts.preserve_original.then(|| points.to_vec());

    let mut stamped = timestamps::normalize(points, opts, &mut ledger);
    sort_by_timestamp(&mut stamped, |p| p.t);
    let (stamped, removed) = dedup_last_wins(stamped, |p| p.t);
    if removed > 0 {
        ledger.stats.deduped = removed;
        ledger.warn(Diagnostic::new(
            IssueKind::DuplicateTimestamp,
            format!("{removed} duplicate timestamps removed"),
        ));
        #[cfg(feature = "tracing")]
        tracing::debug!(removed, "collapsed duplicate timestamps");
    }

    let mut data = clean::clean_points(&stamped, opts, &mut ledger);
    if opts.detect_outliers {
        data = outliers::interpolate_spikes(data, opts, &mut ledger);
    }
    if opts.fill_gaps {
        data = gaps::fill_gaps(data, &mut ledger);
    }

    finish(ledger, data, original, observer, started)
}

fn finish(
    mut ledger: Ledger,
    data: Vec<Candle>,
    original: Option<Vec<RawPoint>>,
    observer: &dyn SanitizeObserver,
    started: Instant,
) -> SanitizedSeries {
    ledger.stats.output = data.len();
    ledger.stats.processing_time_ms = started.elapsed().as_secs_f64() * 1000.0;
    report(&ledger, observer);

    SanitizedSeries {
        data,
        stats: ledger.stats,
        errors: ledger.errors,
        warnings: ledger.warnings,
        original,
    }
}

fn report(ledger: &Ledger, observer: &dyn SanitizeObserver) {
    let stats = &ledger.stats;
    let message = format!(
        "sanitize complete: {}/{} points valid ({:.1}ms)",
        stats.output, stats.input, stats.processing_time_ms
    );
    let sample = |list: &[Diagnostic]| -> Value {
        serde_json::to_value(&list[..list.len().min(SUMMARY_SAMPLE)]).unwrap_or(Value::Null)
    };
    let stats_json = serde_json::to_value(stats).unwrap_or(Value::Null);

    let (level, payload) = if !ledger.errors.is_empty() {
        (
            EventLevel::Error,
            json!({ "stats": stats_json, "errors": sample(&ledger.errors) }),
        )
    } else if !ledger.warnings.is_empty() {
        (
            EventLevel::Warn,
            json!({ "stats": stats_json, "warnings": sample(&ledger.warnings) }),
        )
    } else {
        (EventLevel::Info, json!({ "stats": stats_json }))
    };
    observer.on_event(level, &message, &payload);
}

/// Serialize a point for a diagnostic payload.
pub(crate) fn to_payload<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

/// Render epoch milliseconds as RFC 3339, or the raw number when out of range.
pub(crate) fn iso_millis(t: i64) -> String {
    chrono::DateTime::from_timestamp_millis(t).map_or_else(
        || t.to_string(),
        |d| d.to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
    )
}
