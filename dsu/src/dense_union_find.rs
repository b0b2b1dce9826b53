//! Union-find over a dense integer domain.
use atomic::Atomic;
use std::hash::BuildHasherDefault;
use std::sync::atomic::Ordering;

use hashbrown::HashMap;
use zwohash::ZwoHasher;

use crate::sets::DisjointSets;

#[cfg(test)]
#[path = "tests/test_dense_union_find.rs"]
mod test_dense_union_find;

/// Union-find over the fixed integer domain `[0, n)`.
///
/// Every element starts out as the leader of its own singleton set. [`unite`] merges the
/// sets containing two elements and [`find`] returns the current leader of an element's
/// set; elements are in the same set iff they have the same leader.
///
/// The parent array is addressed directly by element, so queries have no hashing
/// overhead; for non-integer or sparse key domains use
/// [`HashUnionFind`](crate::HashUnionFind), which produces identical partitions for the
/// same sequence of operations.
///
/// Merging deliberately performs no balancing by rank or size: the leader of the first
/// argument to [`unite`] always becomes the leader of the merged set. Path compression
/// alone keeps amortised query cost logarithmic.
///
/// [`unite`]: DenseUnionFind::unite
/// [`find`]: DenseUnionFind::find
///
/// ## Example
/// ```
/// use dsu::DenseUnionFind;
///
/// let mut u = DenseUnionFind::new(5);
/// assert!(u.unite(0, 1));
/// assert!(u.unite(2, 3));
/// assert!(u.in_same_set(0, 1));
/// assert!(!u.in_same_set(1, 2));
///
/// assert!(u.unite(1, 2));
/// assert!(u.in_same_set(0, 3));
/// assert_eq!(u.find(3), 0);
/// ```
pub struct DenseUnionFind {
    parent: Vec<Atomic<usize>>,
}

impl DenseUnionFind {
    /// Returns a union-find over the domain `[0, len)` with every element in its own
    /// set.
    pub fn new(len: usize) -> Self {
        DenseUnionFind {
            parent: (0..len).map(Atomic::new).collect(),
        }
    }

    /// Returns the size of the element domain.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the element domain is empty.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Dissolves all sets back into singletons, keeping the domain and its allocation.
    pub fn clear(&mut self) {
        for (element, cell) in self.parent.iter().enumerate() {
            cell.store(element, Ordering::Relaxed);
        }
    }

    fn read_parent(&self, element: usize) -> usize {
        self.parent[element].load(Ordering::Relaxed)
    }

    // Important: Only semantically trivial changes are allowed using this method!!
    // Specifically, update_parent(element, parent) should only be called if `parent` is
    // already an ancestor of `element`, so a concurrent `read_parent` can only ever skip
    // ahead along the chain it was walking.
    fn update_parent(&self, element: usize, parent: usize) {
        self.parent[element].store(parent, Ordering::Relaxed);
    }

    // Unlike `update_parent`, this is safe for arbitrary updates, since it requires
    // `&mut self`.
    fn write_parent(&mut self, element: usize, parent: usize) {
        self.parent[element].store(parent, Ordering::Relaxed);
    }

    fn find_root(&self, mut element: usize) -> usize {
        loop {
            let parent = self.read_parent(element);
            if parent == element {
                return element;
            }
            element = parent;
        }
    }

    // Worst-case `find` performance is linear. To keep amortised time complexity
    // logarithmic, we memoise the result of `find_root` by calling `update_parent` on
    // every element we traversed.
    fn update_root(&self, mut element: usize, root: usize) {
        // Loop invariant: `root` is the leader of `element`.
        loop {
            let parent = self.read_parent(element);
            if parent == root {
                break;
            }
            self.update_parent(element, root);
            element = parent;
        }
    }

    /// Returns the leader of the set containing `element`. Elements are in the same set
    /// iff they have the same leader.
    ///
    /// The amortised time complexity of this operation is **O**(log n).
    ///
    /// # Panics
    ///
    /// Panics if `element` resolves outside the domain.
    pub fn find(&self, element: impl SetIndex) -> usize {
        let element = element.resolve(self.len());
        let root = self.find_root(element);
        self.update_root(element, root);
        root
    }

    /// Merges the sets containing `a` and `b`. The new leader of both is the leader of
    /// `a`.
    ///
    /// Returns `false` without changing the partition if the elements already share a
    /// set, and `true` if two sets were merged by this call.
    ///
    /// The amortised time complexity of this operation is **O**(log n).
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` resolves outside the domain.
    pub fn unite(&mut self, a: impl SetIndex, b: impl SetIndex) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.write_parent(root_b, root_a);
        true
    }

    /// Returns `true` if `a` and `b` are currently in the same set.
    ///
    /// # Panics
    ///
    /// Panics if `a` or `b` resolves outside the domain.
    pub fn in_same_set(&self, a: impl SetIndex, b: impl SetIndex) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns an iterator that yields every element of the domain together with its
    /// current leader.
    pub fn iter(&self) -> impl '_ + Iterator<Item = (usize, usize)> {
        (0..self.len()).map(|element| (element, self.find(element)))
    }
}

impl Clone for DenseUnionFind {
    fn clone(&self) -> Self {
        let parent = self
            .parent
            .iter()
            .map(|cell| Atomic::new(cell.load(Ordering::Relaxed)))
            .collect();
        DenseUnionFind { parent }
    }
}

impl DisjointSets for DenseUnionFind {
    type Item = usize;
    type Leader = usize;

    fn leader(&self, element: &usize) -> usize {
        self.find(*element)
    }
}

impl std::fmt::Debug for DenseUnionFind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // prints non-trivial sets of equivalent elements, always printing the leader
        // first
        let mut sets: HashMap<usize, Vec<usize>, BuildHasherDefault<ZwoHasher>> =
            HashMap::default();
        for (element, leader) in self.iter() {
            if element != leader {
                sets.entry(leader).or_insert_with(|| vec![leader]).push(element);
            }
        }
        f.debug_set().entries(sets.values()).finish()
    }
}

/// Argument position of a [`DenseUnionFind`] element, absolute or counted from the end
/// of the domain.
///
/// Implemented for `usize` (the element itself) and for [`FromEnd`].
pub trait SetIndex {
    /// Resolves to an absolute element of a domain of size `len`.
    ///
    /// # Panics
    ///
    /// Panics if the resolved element falls outside `[0, len)`.
    fn resolve(self, len: usize) -> usize;
}

impl SetIndex for usize {
    fn resolve(self, len: usize) -> usize {
        assert!(self < len, "element {self} out of bounds for domain of size {len}");
        self
    }
}

/// Element position counted from the end of the domain; `FromEnd(1)` is the last
/// element.
///
/// ```
/// use dsu::{DenseUnionFind, FromEnd};
///
/// let mut u = DenseUnionFind::new(5);
/// u.unite(0, FromEnd(1));
/// assert!(u.in_same_set(0, 4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FromEnd(pub usize);

impl SetIndex for FromEnd {
    fn resolve(self, len: usize) -> usize {
        assert!(
            self.0 >= 1 && self.0 <= len,
            "position {} from the end out of bounds for domain of size {len}",
            self.0
        );
        len - self.0
    }
}
