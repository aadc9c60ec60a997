use serde_json::Value;

use super::Ledger;
use crate::types::{Diagnostic, IssueKind, RawPoint};

/// Extract points from an untyped value.
///
/// Returns `None` (after recording a `missing_required` error) when the value
/// is not an array; otherwise the decoded points and the array length.
/// Elements that are not objects are dropped and counted as invalid.
pub(super) fn points_from_value(value: &Value, ledger: &mut Ledger) -> Option<(Vec<RawPoint>, usize)> {
    let Some(items) = value.as_array() else {
        ledger.error(Diagnostic::new(
            IssueKind::MissingRequired,
            "input must be an array of points",
        ));
        return None;
    };

    let mut points = Vec::with_capacity(items.len());
    for item in items {
        let decoded = item
            .is_object()
            .then(|| serde_json::from_value::<RawPoint>(item.clone()).ok())
            .flatten();
        match decoded {
            Some(p) => points.push(p),
            None => {
                ledger.stats.dropped_invalid += 1;
                ledger.error(
                    Diagnostic::new(IssueKind::MissingRequired, "point is not a decodable object")
                        .with_data(item.clone()),
                );
            }
        }
    }
    Some((points, items.len()))
}

/// Record the empty-input warning; true if the pipeline should stop here.
pub(super) fn is_empty(input_len: usize, ledger: &mut Ledger) -> bool {
    if input_len > 0 {
        return false;
    }
    ledger.warn(Diagnostic::new(IssueKind::EmptyInput, "input array is empty"));
    true
}
