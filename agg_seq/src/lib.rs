//! Fixed-size sequences with fast range aggregation.
//!
//! This crate defines [`AggSeq`], a fixed-size sequence that supports point reads in
//! **O**(1), point updates in **O**(log n) and aggregation over any contiguous range in
//! **O**(log n), together with the zero-copy sub-range views [`AggSlice`] and
//! [`AggSliceMut`] and the [`Aggregable`]/[`AggregableMut`] trait contract that connects
//! them.

#[doc(inline)]
pub use agg_seq::AggSeq;
#[doc(inline)]
pub use aggregable::{Aggregable, AggregableMut, Iter};
#[doc(inline)]
pub use slice::{AggSlice, AggSliceMut};

pub mod agg_seq;
pub mod aggregable;
pub mod slice;

mod range;
