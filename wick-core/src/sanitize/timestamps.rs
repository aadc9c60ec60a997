use super::{Ledger, Stamped, iso_millis, to_payload};
use crate::timeseries::infer::looks_like_seconds;
use crate::types::{Diagnostic, IssueKind, RawPoint, SanitizeOptions, TimestampUnit};

/// 2009-01-01T00:00:00Z in epoch milliseconds.
pub const MIN_VALID_MS: i64 = 1_230_768_000_000;

/// 2100-12-31T00:00:00Z in epoch milliseconds.
pub const MAX_VALID_MS: i64 = 4_133_894_400_000;

const SECONDS_TO_MS: f64 = 1000.0;

/// Resolve the timestamp unit, rescale to whole milliseconds, and apply the
/// calendar window.
///
/// Points without a numeric timestamp are kept with `t = None`; the cleaner
/// rejects them later.
pub(super) fn normalize<'a>(
    points: &'a [RawPoint],
    opts: &SanitizeOptions,
    ledger: &mut Ledger,
) -> Vec<Stamped<'a>> {
    let in_seconds = match opts.timestamp_unit {
        TimestampUnit::Seconds => true,
        TimestampUnit::Milliseconds => false,
        TimestampUnit::Auto => looks_like_seconds(points),
    };
    let scale = if in_seconds {
        ledger.stats.ms_converted = true;
        ledger.warn(Diagnostic::new(
            IssueKind::TimestampConverted,
            "timestamps converted from seconds to milliseconds",
        ));
        SECONDS_TO_MS
    } else {
        1.0
    };

    let mut out = Vec::with_capacity(points.len());
    for raw in points {
        let t = raw.t_f64().and_then(|t| to_millis(t, scale));
        if opts.validate_dates {
            if let Some(ms) = t {
                if !(MIN_VALID_MS..=MAX_VALID_MS).contains(&ms) {
                    ledger.stats.dropped_invalid += 1;
                    ledger.warn(
                        Diagnostic::new(
                            IssueKind::InvalidTimestamp,
                            format!("timestamp outside valid range: {}", iso_millis(ms)),
                        )
                        .with_data(to_payload(raw)),
                    );
                    continue;
                }
            }
        }
        out.push(Stamped { t, raw });
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(in_seconds, kept = out.len(), "normalized timestamps");
    out
}

#[allow(clippy::cast_possible_truncation)]
fn to_millis(t: f64, scale: f64) -> Option<i64> {
    let ms = (t * scale).round();
    // `as` saturates; reject anything it would clamp.
    (ms.is_finite() && ms >= i64::MIN as f64 && ms < i64::MAX as f64).then(|| ms as i64)
}
