use std::collections::BTreeMap;

/// Stable ascending sort by timestamp.
///
/// Items without a timestamp sort after every timestamped item and keep their
/// relative order.
pub fn sort_by_timestamp<T, K>(items: &mut [T], key: K)
where
    K: Fn(&T) -> Option<i64>,
{
    items.sort_by_key(|item| match key(item) {
        Some(t) => (false, t),
        None => (true, 0),
    });
}

/// Collapse items sharing a timestamp, keeping the last one seen.
///
/// - Output is ascending by timestamp regardless of input order.
/// - For duplicates, the item appearing later in the input wins.
/// - Items without a timestamp are never collapsed; they follow the
///   timestamped items in input order.
///
/// Returns the surviving items and the number of items removed.
///
/// ```
/// use wick_core::dedup_last_wins;
///
/// let rows = vec![(Some(2), 'a'), (Some(1), 'b'), (Some(2), 'c'), (None, 'd')];
/// let (out, removed) = dedup_last_wins(rows, |r| r.0);
/// assert_eq!(out, vec![(Some(1), 'b'), (Some(2), 'c'), (None, 'd')]);
/// assert_eq!(removed, 1);
/// ```
#[must_use]
pub fn dedup_last_wins<T, K>(items: Vec<T>, key: K) -> (Vec<T>, usize)
where
    K: Fn(&T) -> Option<i64>,
{
    let mut by_ts: BTreeMap<i64, T> = BTreeMap::new();
    let mut untimed: Vec<T> = Vec::new();
    let mut removed = 0usize;

    for item in items {
        match key(&item) {
            Some(t) => {
                if by_ts.insert(t, item).is_some() {
                    removed += 1;
                }
            }
            None => untimed.push(item),
        }
    }

    let mut out: Vec<T> = by_ts.into_values().collect();
    out.extend(untimed);
    (out, removed)
}
