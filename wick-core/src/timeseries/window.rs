use std::ops::RangeInclusive;

/// A contiguous window of a series selected by offsets from its newest element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OffsetWindow<'a, T> {
    /// The selected elements, oldest first.
    pub data: &'a [T],
    /// Index of the first selected element in the full series.
    pub start_index: usize,
    /// Index of the last selected element in the full series (inclusive).
    pub end_index: usize,
}

impl<T> OffsetWindow<'_, T> {
    /// Inclusive index range of the window within the full series.
    ///
    /// Meaningless for an empty window.
    #[must_use]
    pub const fn indices(&self) -> RangeInclusive<usize> {
        self.start_index..=self.end_index
    }
}

/// Select the window between two offsets counted back from the newest element.
///
/// Offset `0` is the newest element, `len - 1` the oldest. Both offsets are
/// clamped into range and may be given in either order; the window always
/// includes both endpoints.
///
/// ```
/// use wick_core::slice_by_offsets;
///
/// let rows = [10, 11, 12, 13, 14];
/// let w = slice_by_offsets(&rows, 3, 1);
/// assert_eq!(w.data, &[11, 12, 13]);
/// assert_eq!((w.start_index, w.end_index), (1, 3));
///
/// // Order-independent and clamped.
/// assert_eq!(slice_by_offsets(&rows, 1, 3).data, w.data);
/// assert_eq!(slice_by_offsets(&rows, 99, 0).data, &rows);
/// ```
#[must_use]
pub fn slice_by_offsets<T>(rows: &[T], finish: usize, start: usize) -> OffsetWindow<'_, T> {
    let Some(max) = rows.len().checked_sub(1) else {
        return OffsetWindow {
            data: rows,
            start_index: 0,
            end_index: 0,
        };
    };
    let f = finish.min(max);
    let s = start.min(max);
    let oldest = max - f.max(s);
    let newest = max - f.min(s);
    OffsetWindow {
        data: &rows[oldest..=newest],
        start_index: oldest,
        end_index: newest,
    }
}
