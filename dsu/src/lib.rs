//! Disjoint-set-union structures tracking a dynamic partition of elements into sets.
//!
//! This crate defines two union-find implementations sharing one query surface:
//! [`HashUnionFind`] partitions an arbitrary hashable key domain, while
//! [`DenseUnionFind`] partitions the dense integer domain `[0, n)` using a plain array
//! instead of a hash table. Both implement the read-only [`DisjointSets`] trait, which
//! provides the live [`SetHandle`] identity tokens and the [`group`](DisjointSets::group)
//! helper.

#[doc(inline)]
pub use dense_union_find::{DenseUnionFind, FromEnd, SetIndex};
#[doc(inline)]
pub use hash_union_find::HashUnionFind;
#[doc(inline)]
pub use sets::{DisjointSets, GroupMap, SetHandle};

pub mod dense_union_find;
pub mod hash_union_find;
pub mod sets;
