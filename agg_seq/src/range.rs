use std::ops::{Bound, Range, RangeBounds};

pub(crate) fn resolve_range(range: impl RangeBounds<usize>, len: usize) -> Range<usize> {
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.checked_add(1).expect("start point of range too large"),
    };
    let end = match range.end_bound() {
        Bound::Unbounded => len,
        Bound::Included(&n) => n.checked_add(1).expect("end point of range too large"),
        Bound::Excluded(&n) => n,
    };
    assert!(
        start <= end,
        "start point {start} of range is larger than end point {end}"
    );
    assert!(end <= len, "end point {end} of range is > length {len}");
    start..end
}
