use super::{Ledger, iso_millis, to_payload};
use crate::timeseries::util::avg;
use crate::types::{Candle, CandleOrigin, Diagnostic, IssueKind, SanitizeOptions};

/// Maximum deviation of the return move from the inverse spike ratio for a
/// spike to count as isolated.
const SNAP_BACK_TOLERANCE: f64 = 0.1;

/// Multiplier on the threshold for a trailing spike with no successor.
const TRAILING_FACTOR: f64 = 2.0;

enum Verdict {
    Keep,
    Interpolate,
    Drop,
}

/// Replace isolated close-price spikes by the average of their neighbours.
///
/// Neighbours are always taken from `data` as it was passed in, so a point
/// next to an interpolated spike is judged against the original value.
pub(super) fn interpolate_spikes(
    data: Vec<Candle>,
    opts: &SanitizeOptions,
    ledger: &mut Ledger,
) -> Vec<Candle> {
    if data.len() < 3 {
        return data;
    }
    let threshold = opts.outlier_threshold;

    let mut out = Vec::with_capacity(data.len());
    for (i, cur) in data.iter().enumerate() {
        let prev = i.checked_sub(1).map(|j| &data[j]);
        let next = data.get(i + 1);
        let verdict = prev.map_or(Verdict::Keep, |prev| judge(prev, cur, next, threshold));
        if matches!(verdict, Verdict::Keep) {
            out.push(*cur);
            continue;
        }

        ledger.stats.outliers_detected += 1;
        ledger.warn(
            Diagnostic::new(
                IssueKind::OutlierDetected,
                format!("outlier detected: close {} at {}", cur.c, iso_millis(cur.t)),
            )
            .with_data(to_payload(cur)),
        );
        if let (Verdict::Interpolate, Some(prev), Some(next)) = (verdict, prev, next) {
            out.push(bridge(prev, cur.t, next));
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        detected = ledger.stats.outliers_detected,
        kept = out.len(),
        "outlier pass"
    );
    out
}

fn judge(prev: &Candle, cur: &Candle, next: Option<&Candle>, threshold: f64) -> Verdict {
    if prev.c <= 0.0 || cur.c <= 0.0 {
        return Verdict::Keep;
    }
    let ratio = cur.c / prev.c;
    if !beyond(ratio, threshold) {
        return Verdict::Keep;
    }
    match next {
        Some(next) => {
            let snap_back = next.c / cur.c;
            if (snap_back - 1.0 / ratio).abs() < SNAP_BACK_TOLERANCE {
                Verdict::Interpolate
            } else {
                Verdict::Keep
            }
        }
        None if beyond(ratio, threshold * TRAILING_FACTOR) => Verdict::Drop,
        None => Verdict::Keep,
    }
}

fn beyond(ratio: f64, threshold: f64) -> bool {
    ratio > threshold || ratio < 1.0 / threshold
}

fn bridge(prev: &Candle, t: i64, next: &Candle) -> Candle {
    let o = avg(prev.c, next.o);
    Candle::new(
        t,
        o,
        avg(prev.h, next.h).max(o),
        avg(prev.l, next.l).min(o),
        avg(prev.c, next.c),
        avg(prev.v, next.v),
    )
    .with_origin(CandleOrigin::Interpolated)
}
