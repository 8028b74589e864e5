//! Disjoint set forest with path compression.

use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Partition of elements into disjoint sets.
///
/// Every element points to a parent; an element that is its own parent is the
/// representative (root) of its set. Lookups compress the traversed chain so
/// that all of its elements point directly to the root.
///
/// There is no union by rank or size. [`union`](UnionFind::union) always
/// attaches the root of the first argument under the root of the second, so
/// the shape of the forest is fully determined by the sequence of calls.
#[derive(Debug, Clone)]
pub struct UnionFind<T> {
    parent: FxHashMap<T, T>,
}

impl<T> Default for UnionFind<T> {
    fn default() -> Self {
        Self {
            parent: FxHashMap::default(),
        }
    }
}

impl<T> UnionFind<T>
where
    T: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the element as a singleton set.
    ///
    /// Calling this on an element that was already merged into a larger set
    /// detaches it and makes it a root again. Elements that pointed to it keep
    /// doing so, which splits the original set. Check
    /// [`contains`](UnionFind::contains) first if that is not intended.
    pub fn make_set(&mut self, x: T) {
        self.parent.insert(x.clone(), x);
    }

    pub fn contains(&self, x: &T) -> bool {
        self.parent.contains_key(x)
    }

    /// Number of registered elements.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn set_count(&self) -> usize {
        self.parent.iter().filter(|(x, p)| x == p).count()
    }

    /// Returns the representative of the set containing the element, or
    /// `None` if the element was never registered.
    pub fn try_find(&mut self, x: &T) -> Option<T> {
        let mut root = x.clone();
        loop {
            let parent = self.parent.get(&root)?;
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        let mut curr = x.clone();
        while curr != root {
            curr = self.parent.insert(curr, root.clone())?;
        }

        Some(root)
    }

    /// Returns the representative of the set containing the element.
    ///
    /// # Panics
    ///
    /// Panics if the element was never registered with
    /// [`make_set`](UnionFind::make_set).
    pub fn find(&mut self, x: &T) -> T {
        match self.try_find(x) {
            Some(root) => root,
            None => panic!("element is not registered in the union-find"),
        }
    }

    /// Merges the sets containing the two elements.
    ///
    /// Returns `false` if they were already in the same set.
    ///
    /// # Panics
    ///
    /// Panics if any of the elements was never registered.
    pub fn union(&mut self, a: &T, b: &T) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        self.parent.insert(root_a, root_b);
        true
    }

    /// Returns `true` if both elements are in the same set.
    ///
    /// # Panics
    ///
    /// Panics if any of the elements was never registered.
    pub fn same_set(&mut self, a: &T, b: &T) -> bool {
        self.find(a) == self.find(b)
    }
}
