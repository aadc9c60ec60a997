use super::{Ledger, iso_millis};
use crate::timeseries::infer::estimate_step_millis;
use crate::timeseries::util::{lerp, ohlc_bounds};
use crate::types::{Candle, CandleOrigin, Diagnostic, IssueKind};

/// Largest number of bars inserted into a single gap. Wider gaps are left open.
pub const MAX_FILL_PER_GAP: i64 = 10_000;

/// Insert linearly interpolated candles where the spacing between two
/// neighbours spans more than one nominal interval.
pub(super) fn fill_gaps(data: Vec<Candle>, ledger: &mut Ledger) -> Vec<Candle> {
    if data.len() < 2 {
        return data;
    }
    let Some(step) = estimate_step_millis(&data) else {
        return data;
    };

    let mut out = Vec::with_capacity(data.len());
    let mut filled = 0usize;
    for pair in data.windows(2) {
        let (left, right) = (&pair[0], &pair[1]);
        out.push(*left);
        let Some(k) = intervals_between(left, right, step) else {
            continue;
        };
        if k - 1 > MAX_FILL_PER_GAP {
            ledger.warn(Diagnostic::new(
                IssueKind::GapTooLarge,
                format!(
                    "gap of {} intervals after {} left unfilled",
                    k - 1,
                    iso_millis(left.t)
                ),
            ));
            continue;
        }
        for j in 1..k {
            out.push(synthesize(left, right, j, k));
            filled += 1;
        }
    }
    if let Some(last) = data.last() {
        out.push(*last);
    }

    if filled > 0 {
        ledger.stats.gaps_filled += filled;
        ledger.warn(Diagnostic::new(
            IssueKind::GapsFilled,
            format!("{filled} temporal gaps filled"),
        ));
    }
    #[cfg(feature = "tracing")]
    tracing::debug!(step, filled, "gap fill");
    out
}

/// `round(Δt / step)`, or `None` when the arithmetic leaves `i64`.
fn intervals_between(left: &Candle, right: &Candle, step: i64) -> Option<i64> {
    let span = right.t.checked_sub(left.t)?;
    Some(span.checked_add(step / 2)? / step)
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn synthesize(left: &Candle, right: &Candle, j: i64, k: i64) -> Candle {
    let span = right.t - left.t;
    let ratio = j as f64 / k as f64;
    let o = lerp(left.c, right.o, ratio);
    let c = lerp(left.c, right.c, ratio);
    // Lerps of bounded endpoints stay bounded up to rounding; clamp the last ulp.
    let (l, h) = ohlc_bounds(o, lerp(left.h, right.h, ratio), lerp(left.l, right.l, ratio), c);
    Candle::new(
        left.t + (span as f64 * ratio).round() as i64,
        o,
        h,
        l,
        c,
        lerp(left.v, right.v, ratio),
    )
    .with_origin(CandleOrigin::Filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bar(t: i64, c: f64) -> Candle {
        Candle::new(t, c, c, c, c, 100.0)
    }

    #[test]
    fn fills_a_missing_run_on_the_nominal_grid() {
        let data = vec![bar(0, 100.0), bar(60, 100.0), bar(120, 100.0), bar(360, 140.0), bar(420, 140.0)];
        let mut ledger = Ledger::default();
        let out = fill_gaps(data, &mut ledger);

        let ts: Vec<i64> = out.iter().map(|c| c.t).collect();
        assert_eq!(ts, vec![0, 60, 120, 180, 240, 300, 360, 420]);
        assert_eq!(out[4].c, 120.0);
        assert!(out[3..6].iter().all(|c| c.origin == CandleOrigin::Filled));
        assert_eq!(ledger.stats.gaps_filled, 3);
        assert_eq!(ledger.warnings.len(), 1);
    }

    #[test]
    fn spacing_below_one_and_a_half_steps_is_left_alone() {
        let data = vec![bar(0, 1.0), bar(60, 1.0), bar(120, 1.0), bar(209, 1.0)];
        let mut ledger = Ledger::default();
        let out = fill_gaps(data.clone(), &mut ledger);
        assert_eq!(out, data);
        assert!(ledger.warnings.is_empty());
    }

    #[test]
    fn filled_open_runs_from_left_close_to_right_open() {
        let left = Candle::new(0, 10.0, 12.0, 9.0, 11.0, 0.0);
        let right = Candle::new(100, 21.0, 24.0, 18.0, 20.0, 50.0);
        let mid = synthesize(&left, &right, 1, 2);
        assert_eq!((mid.t, mid.o, mid.h, mid.l, mid.c, mid.v), (50, 16.0, 18.0, 13.5, 15.5, 25.0));
    }

    #[test]
    fn filled_prices_keep_their_fraction() {
        let data = vec![bar(0, 100.0), bar(60, 100.0), bar(120, 100.0), bar(300, 101.0)];
        let mut ledger = Ledger::default();
        let out = fill_gaps(data, &mut ledger);

        let closes: Vec<f64> = out.iter().map(|c| c.c).collect();
        assert_eq!(closes.len(), 6);
        assert!((closes[3] - 100.0 - 1.0 / 3.0).abs() < 1e-9, "{closes:?}");
        assert!((closes[4] - 100.0 - 2.0 / 3.0).abs() < 1e-9, "{closes:?}");
        assert_eq!(closes[5], 101.0);
    }

    #[test]
    fn overflowing_spans_are_skipped() {
        let data = vec![
            bar(-9_000_000_000_000_000_000, 1.0),
            bar(9_000_000_000_000_000_000, 1.0),
            bar(9_100_000_000_000_000_000, 1.0),
        ];
        let mut ledger = Ledger::default();
        let out = fill_gaps(data.clone(), &mut ledger);
        assert_eq!(out, data);
        assert_eq!(ledger.stats.gaps_filled, 0);
    }

    #[test]
    fn gaps_beyond_the_fill_limit_are_left_open() {
        let far = 3 + (MAX_FILL_PER_GAP + 1);
        let data = vec![
            bar(0, 1.0),
            bar(1, 1.0),
            bar(2, 1.0),
            bar(far, 2.0),
            bar(far + 1, 2.0),
            bar(far + 3, 2.0),
        ];
        let mut ledger = Ledger::default();
        let out = fill_gaps(data, &mut ledger);

        assert_eq!(out.len(), 7);
        assert_eq!(out[5].t, far + 2);
        assert_eq!(ledger.stats.gaps_filled, 1);
        let kinds: Vec<IssueKind> = ledger.warnings.iter().map(|d| d.kind).collect();
        assert_eq!(kinds, vec![IssueKind::GapTooLarge, IssueKind::GapsFilled]);
    }
}
