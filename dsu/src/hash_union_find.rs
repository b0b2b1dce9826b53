//! Union-find over an arbitrary hashable key domain.
use std::fmt;
use std::hash::{BuildHasher, BuildHasherDefault, Hash};

use hashbrown::HashMap;
use zwohash::ZwoHasher;

use crate::sets::DisjointSets;

#[cfg(test)]
#[path = "tests/test_hash_union_find.rs"]
mod test_hash_union_find;

/// Union-find over an arbitrary key domain.
///
/// In `HashUnionFind<T, S>`, `T: Hash + Eq + Clone` is the element type and
/// `S: BuildHasher` is used for hashing elements (`S` should usually be omitted, it then
/// defaults to the workspace default hasher).
///
/// Unlike [`DenseUnionFind`](crate::DenseUnionFind) there is no fixed domain: any value
/// of `T` is a valid element, and every element not referenced by an earlier
/// [`unite`](HashUnionFind::unite) is implicitly the leader of its own singleton set.
/// Only non-leader elements occupy memory, as entries of a parent map; an element absent
/// from the map is its own leader.
///
/// Merging deliberately performs no balancing by rank or size: the leader of the first
/// argument to `unite` always becomes the leader of the merged set. Mutating operations
/// apply path compression; the read-only queries ([`leader_of`](HashUnionFind::leader_of)
/// and the [`DisjointSets`] methods) walk parent chains without shortening them, and
/// benefit from the compression performed by earlier mutating calls.
///
/// ## Example
/// ```
/// use dsu::HashUnionFind;
///
/// let mut u: HashUnionFind<&str> = HashUnionFind::new();
/// assert!(u.unite("red", "rot"));
/// assert!(u.unite("red", "rouge"));
/// assert!(!u.unite("rot", "rouge"));
///
/// assert!(u.in_same_set(&"rot", &"rouge"));
/// assert!(!u.in_same_set(&"rot", &"blau"));
/// assert_eq!(u.find(&"rouge"), "red");
/// ```
pub struct HashUnionFind<T, S = BuildHasherDefault<ZwoHasher>> {
    parent: HashMap<T, T, S>,
}

impl<T, S: Default> Default for HashUnionFind<T, S> {
    fn default() -> Self {
        HashUnionFind {
            parent: HashMap::default(),
        }
    }
}

impl<T, S: Default> HashUnionFind<T, S> {
    /// Returns a union-find in which every element is in its own set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an empty union-find with room to track `capacity` non-leader elements.
    pub fn with_capacity(capacity: usize) -> Self {
        HashUnionFind {
            parent: HashMap::with_capacity_and_hasher(capacity, S::default()),
        }
    }
}

impl<T, S> HashUnionFind<T, S> {
    /// Returns a union-find with the provided `BuildHasher`.
    pub fn with_hasher(build_hasher: S) -> Self {
        HashUnionFind {
            parent: HashMap::with_hasher(build_hasher),
        }
    }

    /// Returns a union-find with the specified capacity and provided `BuildHasher`.
    pub fn with_capacity_and_hasher(capacity: usize, build_hasher: S) -> Self {
        HashUnionFind {
            parent: HashMap::with_capacity_and_hasher(capacity, build_hasher),
        }
    }

    /// Dissolves all sets back into singletons, but retains any allocated memory.
    pub fn clear(&mut self) {
        self.parent.clear();
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher> HashUnionFind<T, S> {
    /// Returns the current leader of the set containing `item`, without mutating the
    /// structure.
    ///
    /// An element that was never an argument of [`unite`](HashUnionFind::unite) is its
    /// own leader.
    pub fn leader_of(&self, item: &T) -> T {
        let mut current = item;
        loop {
            match self.parent.get(current) {
                None => return current.clone(),
                Some(parent) if parent == current => return parent.clone(),
                Some(parent) => current = parent,
            }
        }
    }

    /// Returns the leader of the set containing `item`, re-pointing every element
    /// traversed on the way directly at the leader.
    ///
    /// The amortised time complexity of this operation is **O**(log n).
    pub fn find(&mut self, item: &T) -> T {
        let root = self.leader_of(item);
        // Loop invariant: `root` is the leader of `current`.
        let mut current = item.clone();
        loop {
            match self.parent.get(&current) {
                None => break,
                Some(parent) if *parent == root => break,
                Some(parent) => {
                    let next = parent.clone();
                    self.parent.insert(current, root.clone());
                    current = next;
                }
            }
        }
        root
    }

    /// Merges the sets containing `a` and `b`. The new leader of both is the leader of
    /// `a`.
    ///
    /// Returns `false` without changing the partition if the elements already share a
    /// set, and `true` if two sets were merged by this call.
    ///
    /// The amortised time complexity of this operation is **O**(log n).
    pub fn unite(&mut self, a: T, b: T) -> bool {
        let root_a = self.find(&a);
        let root_b = self.find(&b);
        if root_a == root_b {
            return false;
        }
        self.parent.insert(root_b, root_a);
        true
    }

    /// Returns `true` if `a` and `b` are currently in the same set.
    pub fn in_same_set(&self, a: &T, b: &T) -> bool {
        self.leader_of(a) == self.leader_of(b)
    }
}

impl<T: Hash + Eq + Clone, S: BuildHasher> DisjointSets for HashUnionFind<T, S> {
    type Item = T;
    type Leader = T;

    fn leader(&self, item: &T) -> T {
        self.leader_of(item)
    }
}

impl<T: Clone, S: Clone> Clone for HashUnionFind<T, S> {
    fn clone(&self) -> Self {
        HashUnionFind {
            parent: self.parent.clone(),
        }
    }
}

impl<T: Hash + Eq + Clone + fmt::Debug, S: BuildHasher> fmt::Debug for HashUnionFind<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // prints non-trivial sets of equivalent elements, always printing the leader
        // first
        let mut sets: HashMap<T, Vec<T>, BuildHasherDefault<ZwoHasher>> = HashMap::default();
        for element in self.parent.keys() {
            let leader = self.leader_of(element);
            sets.entry(leader.clone())
                .or_insert_with(|| vec![leader])
                .push(element.clone());
        }
        f.debug_set().entries(sets.values()).finish()
    }
}
