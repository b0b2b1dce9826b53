//! Shared read-only query surface of the union-find structures.
use std::fmt;
use std::hash::{BuildHasherDefault, Hash, Hasher};
use std::ptr;

use hashbrown::HashMap;
use zwohash::ZwoHasher;

/// Mapping from set handle to the elements of that set, as returned by
/// [`DisjointSets::group`].
///
/// Keys are live [`SetHandle`]s, so lookups resolve against the owning union-find's
/// current partition. The handles borrow the union-find, which keeps the partition
/// stable, and therefore the map coherent, for the whole lifetime of the map.
pub type GroupMap<'a, D> =
    HashMap<SetHandle<'a, D>, Vec<<D as DisjointSets>::Item>, BuildHasherDefault<ZwoHasher>>;

/// Read-only queries over a partition of elements into disjoint sets.
///
/// Implementors provide [`leader`](DisjointSets::leader); set membership tests, the
/// [`SetHandle`] identity tokens and grouping are derived from it. Both
/// [`HashUnionFind`](crate::HashUnionFind) and [`DenseUnionFind`](crate::DenseUnionFind)
/// implement this trait, which lets code take either structure generically when it only
/// inspects the partition.
pub trait DisjointSets {
    /// The element type of the partition.
    type Item: Clone;
    /// The type identifying a set's leader.
    type Leader: Eq + Hash;

    /// Returns the current leader of the set containing `item`.
    fn leader(&self, item: &Self::Item) -> Self::Leader;

    /// Returns `true` if `a` and `b` are currently in the same set.
    fn in_same_set(&self, a: &Self::Item, b: &Self::Item) -> bool {
        self.leader(a) == self.leader(b)
    }

    /// Returns a handle for the set currently containing `item`.
    ///
    /// Handle equality is live, see [`SetHandle`].
    fn set_of(&self, item: Self::Item) -> SetHandle<'_, Self>
    where
        Self: Sized,
    {
        SetHandle { owner: self, item }
    }

    /// Distributes `elements` over their sets.
    ///
    /// A single pass over the input: each element is appended to the list of the set it
    /// currently belongs to, so every list preserves the input order of its elements.
    fn group<I>(&self, elements: I) -> GroupMap<'_, Self>
    where
        Self: Sized,
        I: IntoIterator<Item = Self::Item>,
    {
        let mut groups = GroupMap::default();
        for item in elements {
            groups
                .entry(self.set_of(item.clone()))
                .or_insert_with(Vec::new)
                .push(item);
        }
        groups
    }
}

/// A handle for "the set currently containing an element" of a union-find structure.
///
/// A handle stores which union-find it came from and the element it was created for,
/// never the leader itself. Two handles are compared by resolving both elements' leaders
/// through the owner *at comparison time*: handles of the same owner are equal iff their
/// elements are in the same set right now. Two handles that compared unequal therefore
/// become equal once a later `unite` call merges their sets.
///
/// ```
/// use dsu::{DenseUnionFind, DisjointSets};
///
/// let mut u = DenseUnionFind::new(4);
/// let (a, b) = (u.set_of(0), u.set_of(1));
/// assert!(a != b);
///
/// u.unite(0, 1);
/// assert!(u.set_of(0) == u.set_of(1));
/// ```
pub struct SetHandle<'a, D: DisjointSets> {
    owner: &'a D,
    item: D::Item,
}

impl<'a, D: DisjointSets> SetHandle<'a, D> {
    /// Returns the element this handle was created for.
    pub fn item(&self) -> &D::Item {
        &self.item
    }

    /// Resolves the current leader of the handle's set.
    pub fn leader(&self) -> D::Leader {
        self.owner.leader(&self.item)
    }
}

impl<'a, D: DisjointSets> Clone for SetHandle<'a, D> {
    fn clone(&self) -> Self {
        SetHandle {
            owner: self.owner,
            item: self.item.clone(),
        }
    }
}

impl<'a, D: DisjointSets> PartialEq for SetHandle<'a, D> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.owner, other.owner) && self.leader() == other.leader()
    }
}

impl<'a, D: DisjointSets> Eq for SetHandle<'a, D> {}

impl<'a, D: DisjointSets> Hash for SetHandle<'a, D> {
    // Hashes only the current leader; handles of different owners may collide but never
    // compare equal.
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.leader().hash(state);
    }
}

impl<'a, D: DisjointSets> fmt::Debug for SetHandle<'a, D>
where
    D::Leader: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SetHandle").field(&self.leader()).finish()
    }
}
