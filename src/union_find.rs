//! Disjoint-set forest keyed by element identity.

use std::{collections::HashMap, hash::Hash};

/// Parent map of a disjoint-set forest.
///
/// Every element starts as its own root. Elements that were never registered are treated as
/// singleton groups.
#[derive(Debug, Clone)]
pub struct UnionFind<K> {
    /// Parent of each registered element; roots point at themselves.
    parents: HashMap<K, K>,
}

impl<K> Default for UnionFind<K>
where
    K: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> UnionFind<K>
where
    K: Copy + Eq + Hash,
{
    /// Creates an empty forest.
    pub fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Creates a forest in which each of `elements` is its own group.
    pub fn with_elements<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = K>,
    {
        Self {
            parents: elements.into_iter().map(|element| (element, element)).collect(),
        }
    }

    /// Representative of the group containing `element`.
    ///
    /// Follows parent links until reaching an element that is its own parent, pointing every
    /// visited element at its grandparent on the way (path halving), so repeated lookups along a
    /// long chain stay cheap.
    pub fn find(&mut self, element: K) -> K {
        let mut node = element;
        loop {
            let Some(&parent) = self.parents.get(&node) else {
                return node;
            };
            if parent == node {
                return node;
            }
            let grandparent = self.parents.get(&parent).copied().unwrap_or(parent);
            if grandparent != parent {
                let _ = self.parents.insert(node, grandparent);
            }
            node = grandparent;
        }
    }

    /// Merges the groups of `first` and `second` by pointing the root of `first` at the root of
    /// `second`.
    ///
    /// Returns `false` if both were already in the same group.
    pub fn union(&mut self, first: K, second: K) -> bool {
        let first_root = self.find(first);
        let second_root = self.find(second);
        if first_root == second_root {
            return false;
        }

        let _ = self.parents.insert(first_root, second_root);
        let _ = self.parents.entry(second_root).or_insert(second_root);
        true
    }

    /// Whether `first` and `second` belong to the same group.
    pub fn connected(&mut self, first: K, second: K) -> bool {
        self.find(first) == self.find(second)
    }
}
