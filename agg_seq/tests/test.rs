#![allow(missing_docs)] // test only
use agg_seq::{AggSeq, AggSlice, Aggregable, AggregableMut};
use rand::prelude::*;

fn add(a: &i64, b: &i64) -> i64 {
    a + b
}

type SumSeq = AggSeq<i64, fn(&i64, &i64) -> i64>;

fn sum_seq(values: &[i64]) -> SumSeq {
    AggSeq::with_values(values.len(), add, 0, values.iter().copied())
}

#[test]
fn point_updates_and_range_sums() {
    let mut seq = sum_seq(&[1, 2, 3, 4, 5]);
    assert_eq!(seq.aggregate(1..4), 9);
    seq.set(2, 10);
    assert_eq!(seq.aggregate(..), 22);
}

#[test]
fn bulk_fill_then_aggregate() {
    let mut seq: SumSeq = AggSeq::new(10, add, 0);
    seq.modify(0..4, |leaves| leaves.fill(7));
    assert_eq!(seq.aggregate(..), 28);
    assert_eq!(seq.aggregate(0..4), 28);
    assert_eq!(seq.aggregate(4..10), 0);
}

#[test]
fn slice_delegates_to_owner() {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(21);
    let values: Vec<i64> = (0..48).map(|_| rng.gen_range(-500..500)).collect();
    let seq = sum_seq(&values);
    for _ in 0..200 {
        let start = rng.gen_range(0..=seq.len());
        let end = rng.gen_range(start..=seq.len());
        let view = seq.slice(start..end);
        assert_eq!(view.len(), end - start);
        assert_eq!(view.aggregate(..), seq.aggregate(start..end));
        if end > start {
            let inner_start = rng.gen_range(0..=view.len());
            let inner_end = rng.gen_range(inner_start..=view.len());
            assert_eq!(
                view.aggregate(inner_start..inner_end),
                seq.aggregate(start + inner_start..start + inner_end)
            );
        }
    }
}

#[test]
fn slice_of_slice_composes_offsets() {
    let seq = sum_seq(&[1, 2, 3, 4, 5, 6, 7, 8]);
    let outer = seq.slice(2..8);
    let inner = outer.slice(1..4);
    assert_eq!(inner.len(), 3);
    assert_eq!(inner.get(0), Some(&4));
    assert_eq!(inner.aggregate(..), 4 + 5 + 6);
    assert_eq!(inner.aggregate(1..2), 5);
}

#[test]
fn slice_mut_writes_are_visible_through_the_owner() {
    let mut seq = sum_seq(&[1, 2, 3, 4, 5, 6]);
    {
        let mut view = seq.slice_mut(2..5);
        view.set(0, 30);
        view.set(2, 50);
        assert_eq!(view.aggregate(..), 30 + 4 + 50);
    }
    assert_eq!(seq.values(), &[1, 2, 30, 4, 50, 6]);
    assert_eq!(seq.aggregate(..), 93);
    assert_eq!(seq.slice(2..5).aggregate(..), 84);
}

#[test]
fn slice_mut_of_slice_mut() {
    let mut seq = sum_seq(&[0; 8]);
    let mut outer = seq.slice_mut(2..8);
    let mut inner = outer.slice_mut(1..4);
    inner.set(0, 9);
    inner.set(2, 9);
    drop(inner);
    assert_eq!(outer.aggregate(..), 18);
    drop(outer);
    assert_eq!(seq.values(), &[0, 0, 0, 9, 0, 9, 0, 0]);
}

#[test]
fn overlapping_read_views() {
    let seq = sum_seq(&[1, 2, 3, 4, 5]);
    let a = seq.slice(0..4);
    let b = seq.slice(2..5);
    assert_eq!(a.aggregate(2..4), b.aggregate(0..2));
}

#[test]
fn trait_iteration_matches_values() {
    let seq = sum_seq(&[3, 1, 4, 1, 5]);
    let view: AggSlice<'_, _> = seq.slice(1..4);
    let collected: Vec<i64> = view.iter().copied().collect();
    assert_eq!(collected, vec![1, 4, 1]);
    assert_eq!(view.iter().len(), 3);

    let all: Vec<i64> = seq.iter().copied().collect();
    assert_eq!(all, seq.values());
}

#[test]
fn trait_position_on_views() {
    let seq = sum_seq(&[4, 8, 4, 2, 8, 4]);
    let view = seq.slice(1..6);
    assert_eq!(view.position(&8), Some(0));
    assert_eq!(view.position_from(1, &8), Some(3));
    assert!(view.contains(&2));
    assert!(!view.contains(&9));
}

#[test]
fn debug_renders_logical_elements() {
    let seq = sum_seq(&[1, 2, 3]);
    assert_eq!(format!("{seq:?}"), "[1, 2, 3]");
    assert_eq!(format!("{:?}", seq.slice(1..3)), "[2, 3]");
}

#[test]
fn clone_is_independent() {
    let mut seq = sum_seq(&[1, 2, 3, 4]);
    let snapshot = seq.clone();
    seq.set(0, 100);
    assert_eq!(snapshot.aggregate(..), 10);
    assert_eq!(seq.aggregate(..), 109);
}

#[test]
#[should_panic(expected = "end point")]
fn slice_past_the_end() {
    let seq = sum_seq(&[1, 2, 3]);
    let _ = seq.slice(1..4);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn slice_mut_set_out_of_bounds() {
    let mut seq = sum_seq(&[1, 2, 3, 4]);
    let mut view = seq.slice_mut(1..3);
    view.set(2, 0);
}
