use serde_json::json;

use super::{Ledger, Stamped, iso_millis, to_payload};
use crate::timeseries::util::{ohlc_bounds, quantize_candle};
use crate::types::{Candle, Diagnostic, IssueKind, SanitizeOptions};

/// Coerce, validate and repair each point, keeping the input order.
pub(super) fn clean_points(
    points: &[Stamped<'_>],
    opts: &SanitizeOptions,
    ledger: &mut Ledger,
) -> Vec<Candle> {
    let mut out = Vec::with_capacity(points.len());
    for p in points {
        match clean_one(p, opts) {
            Ok(cleaned) => {
                if let Some((low, high)) = cleaned.repaired_from {
                    ledger.stats.fixed_ohlc += 1;
                    ledger.warn(
                        Diagnostic::new(
                            IssueKind::OhlcInconsistency,
                            format!(
                                "OHLC repaired: low {low}→{}, high {high}→{}",
                                cleaned.candle.l, cleaned.candle.h
                            ),
                        )
                        .with_data(json!({
                            "timestamp": iso_millis(cleaned.candle.t),
                            "original": to_payload(p.raw),
                        })),
                    );
                }
                if cleaned.volume_zeroed {
                    ledger.stats.neg_or_nan_vol_to_zero += 1;
                }
                out.push(cleaned.candle);
            }
            Err(diag) => {
                ledger.stats.dropped_invalid += 1;
                ledger.error(diag.with_data(to_payload(p.raw)));
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        kept = out.len(),
        dropped = points.len() - out.len(),
        "cleaned points"
    );
    out
}

struct Cleaned {
    candle: Candle,
    /// Original `(low, high)` when the bounds had to be repaired.
    repaired_from: Option<(f64, f64)>,
    volume_zeroed: bool,
}

fn clean_one(p: &Stamped<'_>, opts: &SanitizeOptions) -> Result<Cleaned, Diagnostic> {
    let Some(t) = p.t else {
        return Err(Diagnostic::new(
            IssueKind::InvalidTimestamp,
            "timestamp is missing or not numeric",
        ));
    };
    let Some([o, h, l, c]) = p.raw.prices() else {
        return Err(Diagnostic::new(
            IssueKind::InvalidPrice,
            format!("non-numeric price at {}", iso_millis(t)),
        ));
    };
    if opts.require_positive && [o, h, l, c].iter().any(|&x| x <= 0.0) {
        return Err(Diagnostic::new(
            IssueKind::NegativePrice,
            format!("non-positive price at {}", iso_millis(t)),
        ));
    }

    let (low, high) = ohlc_bounds(o, h, l, c);
    let repaired_from = (low != l || high != h).then_some((l, h));

    let (v, volume_zeroed) = match p.raw.v_f64() {
        Some(v) if v >= 0.0 => (v, false),
        _ => (0.0, true),
    };

    let candle = quantize_candle(Candle::new(t, o, high, low, c, v), opts.price_quantum);
    if opts.require_positive && candle.l <= 0.0 {
        return Err(Diagnostic::new(
            IssueKind::NegativePrice,
            format!("price rounds to zero at {}", iso_millis(t)),
        ));
    }

    Ok(Cleaned {
        candle,
        repaired_from,
        volume_zeroed,
    })
}
