//! Union-find (disjoint set union) over vertex indices.
//!
//! Used by Kruskal's MST construction to reject cycle-forming edges and by
//! component discovery to group the vertices left connected once a tree edge
//! is removed. Path compression and union by rank keep both operations
//! amortised near-constant.

use crate::error::{MstError, Result};

/// Disjoint sets over `0..len`, with path compression and union by rank.
///
/// # Examples
/// ```
/// use mst_repair_core::DisjointSet;
///
/// let mut sets = DisjointSet::new(4);
/// assert!(sets.union(0, 1)?);
/// assert!(!sets.union(1, 0)?);
/// assert_eq!(sets.find(1)?, sets.find(0)?);
/// assert_eq!(sets.component_count(), 3);
/// # Ok::<(), mst_repair_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
    components: usize,
}

impl DisjointSet {
    /// Creates `len` singleton sets.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
            components: len,
        }
    }

    /// Returns the number of elements tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure tracks no elements.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets currently tracked.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.components }

    /// Returns the representative of `node`'s set.
    ///
    /// Every node visited on the way to the root is re-pointed directly at
    /// the root.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] when `node >= len`.
    pub fn find(&mut self, node: usize) -> Result<usize> {
        let mut root = self.parent_of(node)?;
        let mut current = node;
        while root != current {
            current = root;
            root = self.parent_of(current)?;
        }

        let mut current = node;
        while current != root {
            let next = self.parent_of(current)?;
            self.set_parent(current, root);
            current = next;
        }

        Ok(root)
    }

    /// Merges the sets containing `left` and `right`.
    ///
    /// The lower-rank root is attached beneath the higher-rank root. On a
    /// rank tie `right`'s root goes beneath `left`'s root, whose rank then
    /// grows by one. Returns `false` when both already share a set.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] when either index is out of
    /// range.
    pub fn union(&mut self, left: usize, right: usize) -> Result<bool> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank_of(left_root);
        let right_rank = self.rank_of(right_root);
        let (parent, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };

        self.set_parent(child, parent);
        if left_rank == right_rank {
            if let Some(rank) = self.rank.get_mut(parent) {
                *rank = rank.saturating_add(1);
            }
        }
        self.components = self.components.saturating_sub(1);
        Ok(true)
    }

    /// Returns `true` when `left` and `right` share a set.
    ///
    /// # Errors
    /// Returns [`MstError::VertexOutOfRange`] when either index is out of
    /// range.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn parent_of(&self, node: usize) -> Result<usize> {
        self.parent
            .get(node)
            .copied()
            .ok_or(MstError::VertexOutOfRange {
                vertex: node,
                vertex_count: self.parent.len(),
            })
    }

    fn set_parent(&mut self, node: usize, parent: usize) {
        if let Some(slot) = self.parent.get_mut(node) {
            *slot = parent;
        }
    }

    fn rank_of(&self, node: usize) -> u32 {
        self.rank.get(node).copied().unwrap_or_default()
    }
}
