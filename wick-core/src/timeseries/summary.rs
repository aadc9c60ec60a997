use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timeseries::util::ohlc_bounds;
use crate::types::{Candle, RawPoint};

/// Quick validity check for a single raw point.
///
/// True iff the timestamp and all four prices are finite numbers and the
/// point's low and high already equal the min and max of the four prices.
/// Volume is not inspected.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn is_valid_point(point: &RawPoint) -> bool {
    if point.t_f64().is_none() {
        return false;
    }
    let Some([o, h, l, c]) = point.prices() else {
        return false;
    };
    let (low, high) = ohlc_bounds(o, h, l, c);
    l == low && h == high
}

/// First and last timestamps of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Timestamp of the first candle.
    pub start: DateTime<Utc>,
    /// Timestamp of the last candle.
    pub end: DateTime<Utc>,
}

/// Close-price statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceStats {
    /// Lowest close.
    pub min: f64,
    /// Highest close.
    pub max: f64,
    /// Mean close.
    pub avg: f64,
    /// Close of the last candle.
    pub last: f64,
}

/// Volume statistics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VolumeStats {
    /// Smallest volume.
    pub min: f64,
    /// Largest volume.
    pub max: f64,
    /// Mean volume.
    pub avg: f64,
    /// Sum of volumes.
    pub total: f64,
}

/// Summary of an already-sanitized series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStats {
    /// Number of candles.
    pub count: usize,
    /// Time span covered, first to last candle.
    pub date_range: DateRange,
    /// Close-price statistics.
    pub price: PriceStats,
    /// Volume statistics.
    pub volume: VolumeStats,
}

struct Acc {
    min: f64,
    max: f64,
    sum: f64,
    n: usize,
    last: f64,
}

impl Acc {
    const fn new() -> Self {
        Self {
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
            n: 0,
            last: f64::NAN,
        }
    }

    fn push(&mut self, x: f64) {
        if !x.is_finite() {
            return;
        }
        self.min = self.min.min(x);
        self.max = self.max.max(x);
        self.sum += x;
        self.n += 1;
        self.last = x;
    }

    #[allow(clippy::cast_precision_loss)]
    fn avg(&self) -> f64 {
        if self.n == 0 {
            f64::NAN
        } else {
            self.sum / self.n as f64
        }
    }
}

/// Summarize a sanitized series.
///
/// Returns `None` when the slice is empty (the "no data" value) or when its
/// first or last timestamp cannot be represented as a UTC date. The series is
/// expected to be in chronological order; the date range is taken from the
/// first and last elements as given. Non-finite closes or volumes are skipped.
///
/// ```
/// use wick_core::{Candle, series_stats};
///
/// let s = series_stats(&[
///     Candle::new(1_700_000_000_000, 10.0, 12.0, 9.0, 11.0, 100.0),
///     Candle::new(1_700_000_060_000, 11.0, 14.0, 11.0, 13.0, 300.0),
/// ])
/// .unwrap();
/// assert_eq!(s.count, 2);
/// assert_eq!(s.price.min, 11.0);
/// assert_eq!(s.price.last, 13.0);
/// assert_eq!(s.volume.total, 400.0);
/// assert!(series_stats(&[]).is_none());
/// ```
#[must_use]
pub fn series_stats(data: &[Candle]) -> Option<SeriesStats> {
    let first = data.first()?;
    let last = data.last()?;
    let date_range = DateRange {
        start: DateTime::from_timestamp_millis(first.t)?,
        end: DateTime::from_timestamp_millis(last.t)?,
    };

    let mut closes = Acc::new();
    let mut volumes = Acc::new();
    for c in data {
        closes.push(c.c);
        volumes.push(c.v);
    }

    Some(SeriesStats {
        count: data.len(),
        date_range,
        price: PriceStats {
            min: closes.min,
            max: closes.max,
            avg: closes.avg(),
            last: closes.last,
        },
        volume: VolumeStats {
            min: volumes.min,
            max: volumes.max,
            avg: volumes.avg(),
            total: volumes.sum,
        },
    })
}
