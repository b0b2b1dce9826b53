//! Zero-copy sub-range views over aggregable sequences.
use std::fmt;
use std::ops::{Range, RangeBounds};

use crate::aggregable::{Aggregable, AggregableMut};
use crate::range::resolve_range;

/// A read-only window over a sub-range of an aggregable sequence.
///
/// The view stores only an offset and a length; every operation translates indices and
/// delegates to the underlying sequence, so no data is copied. Since `AggSlice`
/// implements [`Aggregable`] itself, a view can be taken over another view and the
/// offsets compose.
///
/// ## Example
/// ```
/// use agg_seq::{AggSeq, Aggregable};
///
/// let seq = AggSeq::with_values(6, |a: &i64, b: &i64| a + b, 0, [1, 2, 3, 4, 5, 6]);
/// let mid = seq.slice(1..5);
/// assert_eq!(mid.aggregate(..), 14);
/// assert_eq!(mid.aggregate(1..3), seq.aggregate(2..4));
///
/// let inner = mid.slice(1..3);
/// assert_eq!(inner.aggregate(..), 7);
/// ```
pub struct AggSlice<'a, A: ?Sized> {
    source: &'a A,
    start: usize,
    len: usize,
}

impl<'a, A: Aggregable> AggSlice<'a, A> {
    /// Returns a view of `range` within `source`.
    ///
    /// # Panics
    ///
    /// Panics if the resolved range does not fit within `0..source.len()`.
    pub fn new(source: &'a A, range: impl RangeBounds<usize>) -> Self {
        let range = resolve_range(range, source.len());
        AggSlice {
            source,
            start: range.start,
            len: range.len(),
        }
    }

    /// Returns the number of elements the view covers.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the view covers no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at `index` within the view, or `None` if
    /// `index` is out of bounds.
    pub fn get(&self, index: usize) -> Option<&'a A::Item> {
        if index < self.len {
            self.source.get(self.start + index)
        } else {
            None
        }
    }

    /// Aggregates all elements of `range`, interpreted relative to the view.
    ///
    /// # Panics
    ///
    /// Panics if the resolved range does not fit within `0..self.len()`.
    pub fn aggregate(&self, range: impl RangeBounds<usize>) -> A::Item {
        let range = resolve_range(range, self.len);
        self.source
            .aggregate_range(self.start + range.start..self.start + range.end)
    }
}

impl<'a, A> Clone for AggSlice<'a, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, A> Copy for AggSlice<'a, A> {}

impl<'a, A: Aggregable> Aggregable for AggSlice<'a, A> {
    type Item = A::Item;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Option<&A::Item> {
        AggSlice::get(self, index)
    }

    fn aggregate_range(&self, range: Range<usize>) -> A::Item {
        AggSlice::aggregate(self, range)
    }
}

impl<'a, A: Aggregable> fmt::Debug for AggSlice<'a, A>
where
    A::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A writable window over a sub-range of an aggregable sequence.
///
/// Like [`AggSlice`], but holding the underlying sequence exclusively so elements can be
/// replaced through the view. Writes go straight to the owner and are visible through it,
/// and through any view constructed afterwards, once this view is dropped.
pub struct AggSliceMut<'a, A: ?Sized> {
    source: &'a mut A,
    start: usize,
    len: usize,
}

impl<'a, A: AggregableMut> AggSliceMut<'a, A> {
    /// Returns a writable view of `range` within `source`.
    ///
    /// # Panics
    ///
    /// Panics if the resolved range does not fit within `0..source.len()`.
    pub fn new(source: &'a mut A, range: impl RangeBounds<usize>) -> Self {
        let range = resolve_range(range, source.len());
        AggSliceMut {
            source,
            start: range.start,
            len: range.len(),
        }
    }

    /// Returns the number of elements the view covers.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the view covers no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at `index` within the view, or `None` if
    /// `index` is out of bounds.
    pub fn get(&self, index: usize) -> Option<&A::Item> {
        if index < self.len {
            self.source.get(self.start + index)
        } else {
            None
        }
    }

    /// Replaces the element at `index` within the view with `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`, before any element is written.
    pub fn set(&mut self, index: usize, value: A::Item) {
        assert!(
            index < self.len,
            "index {index} out of bounds for view of length {}",
            self.len
        );
        self.source.set(self.start + index, value);
    }

    /// Aggregates all elements of `range`, interpreted relative to the view.
    ///
    /// # Panics
    ///
    /// Panics if the resolved range does not fit within `0..self.len()`.
    pub fn aggregate(&self, range: impl RangeBounds<usize>) -> A::Item {
        let range = resolve_range(range, self.len);
        self.source
            .aggregate_range(self.start + range.start..self.start + range.end)
    }
}

impl<'a, A: AggregableMut> Aggregable for AggSliceMut<'a, A> {
    type Item = A::Item;

    fn len(&self) -> usize {
        self.len
    }

    fn get(&self, index: usize) -> Option<&A::Item> {
        AggSliceMut::get(self, index)
    }

    fn aggregate_range(&self, range: Range<usize>) -> A::Item {
        AggSliceMut::aggregate(self, range)
    }
}

impl<'a, A: AggregableMut> AggregableMut for AggSliceMut<'a, A> {
    fn set(&mut self, index: usize, value: A::Item) {
        AggSliceMut::set(self, index, value)
    }
}

impl<'a, A: AggregableMut> fmt::Debug for AggSliceMut<'a, A>
where
    A::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
