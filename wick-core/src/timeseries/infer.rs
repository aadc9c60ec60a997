use crate::types::{Candle, RawPoint};

/// Mean timestamps below this are taken to be epoch seconds.
pub const MS_THRESHOLD: f64 = 1e12;

/// Number of leading points sampled for unit inference.
pub const UNIT_SAMPLE_SIZE: usize = 10;

/// Number of leading adjacent pairs sampled for interval estimation.
pub const INTERVAL_SAMPLE_PAIRS: usize = 100;

/// Heuristic: do the raw timestamps look like epoch seconds?
///
/// Averages the first [`UNIT_SAMPLE_SIZE`] timestamps, counting non-numeric
/// ones as zero, and returns `true` when the mean is positive and below
/// [`MS_THRESHOLD`]. Short or pre-filtered inputs can fool this; callers that
/// know their unit should say so through `TimestampUnit`.
///
/// ```
/// use wick_core::{RawPoint, looks_like_seconds};
///
/// let secs = vec![RawPoint::new(1_700_000_000.0, 1.0, 1.0, 1.0, 1.0, 0.0)];
/// let millis = vec![RawPoint::new(1_700_000_000_000.0, 1.0, 1.0, 1.0, 1.0, 0.0)];
/// assert!(looks_like_seconds(&secs));
/// assert!(!looks_like_seconds(&millis));
/// assert!(!looks_like_seconds(&[]));
/// ```
#[must_use]
pub fn looks_like_seconds(points: &[RawPoint]) -> bool {
    let sample = &points[..points.len().min(UNIT_SAMPLE_SIZE)];
    if sample.is_empty() {
        return false;
    }
    let sum: f64 = sample.iter().map(|p| p.t_f64().unwrap_or(0.0)).sum();
    #[allow(clippy::cast_precision_loss)]
    let mean = sum / sample.len() as f64;
    mean > 0.0 && mean < MS_THRESHOLD
}

/// Estimate the nominal sampling interval (milliseconds) of a sorted series.
///
/// Takes the positive deltas of the first [`INTERVAL_SAMPLE_PAIRS`] adjacent
/// pairs, sorts them, and returns the upper median. Pairs whose delta does not
/// fit an `i64` are skipped. Returns `None` when there is no positive delta to
/// look at.
///
/// ```
/// use wick_core::{Candle, estimate_step_millis};
///
/// let mk = |t: i64| Candle::new(t, 1.0, 1.0, 1.0, 1.0, 0.0);
/// // deltas: 60, 60, 180, 60  => sorted 60,60,60,180 => upper median 60
/// let candles = vec![mk(0), mk(60), mk(120), mk(300), mk(360)];
/// assert_eq!(estimate_step_millis(&candles), Some(60));
/// assert_eq!(estimate_step_millis(&candles[..1]), None);
/// ```
#[must_use]
pub fn estimate_step_millis(candles: &[Candle]) -> Option<i64> {
    let mut deltas: Vec<i64> = candles
        .windows(2)
        .take(INTERVAL_SAMPLE_PAIRS)
        .filter_map(|w| w[1].t.checked_sub(w[0].t))
        .filter(|d| *d > 0)
        .collect();
    if deltas.is_empty() {
        return None;
    }
    deltas.sort_unstable();
    Some(deltas[deltas.len() / 2])
}
