//! In-memory data structure toolkit.
//!
//! Re-exports the two data-structure families of this workspace:
//!
//! - [`AggSeq`], a fixed-size sequence with **O**(log n) point updates and **O**(log n)
//!   aggregation over arbitrary contiguous ranges, with the zero-copy views
//!   [`AggSlice`]/[`AggSliceMut`] and the [`Aggregable`]/[`AggregableMut`] contract;
//! - [`HashUnionFind`] and [`DenseUnionFind`], union-find structures over hashable and
//!   dense integer key domains, queried through the shared [`DisjointSets`] trait and
//!   its live [`SetHandle`] tokens.
//!
//! ## Example
//! ```
//! use dstk::{AggSeq, DenseUnionFind, DisjointSets};
//!
//! let mut seq = AggSeq::with_values(5, |a: &i64, b: &i64| a + b, 0, [1, 2, 3, 4, 5]);
//! assert_eq!(seq.aggregate(1..4), 9);
//! seq.set(2, 10);
//! assert_eq!(seq.aggregate(..), 22);
//!
//! let mut components = DenseUnionFind::new(5);
//! components.unite(0, 1);
//! components.unite(2, 3);
//! let groups = components.group(0..5);
//! assert_eq!(groups[&components.set_of(1)], vec![0, 1]);
//! assert_eq!(groups[&components.set_of(4)], vec![4]);
//! ```

#[doc(inline)]
pub use agg_seq::{AggSeq, AggSlice, AggSliceMut, Aggregable, AggregableMut};
#[doc(inline)]
pub use dsu::{DenseUnionFind, DisjointSets, FromEnd, GroupMap, HashUnionFind, SetHandle};
