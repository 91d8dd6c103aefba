//! Disjoint-set (union-find) structure backing the Kruskal driver.
//!
//! Tracks set membership over vertex ids `0..len`. `find` compresses every
//! path it walks and `union` links by rank. Neither changes which edges the
//! driver accepts; they only keep parent chains short.
//!
//! `union` operates on representatives, not raw vertices: callers resolve
//! both endpoints with `find` first. Passing anything else is rejected rather
//! than silently relinking an interior node.

use std::cmp::Ordering;

use crate::error::{ForestError, Result};

/// Array-backed disjoint-set forest over `0..len`.
///
/// # Examples
/// ```
/// use ipmst_core::DisjointSetForest;
///
/// let mut sets = DisjointSetForest::new(4);
/// let left = sets.find(0)?;
/// let right = sets.find(1)?;
/// sets.union(left, right)?;
/// assert!(sets.connected(0, 1)?);
/// assert_eq!(sets.component_count(), 3);
/// # Ok::<(), ipmst_core::ForestError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSetForest {
    parent: Vec<usize>,
    rank: Vec<u8>,
    components: usize,
}

impl DisjointSetForest {
    /// Creates `vertex_count` singleton sets, each vertex its own
    /// representative.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).collect(),
            rank: vec![0; vertex_count],
            components: vertex_count,
        }
    }

    /// Returns the number of vertices tracked.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.parent.len() }

    /// Returns `true` when the structure tracks no vertices.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.parent.is_empty() }

    /// Returns the number of disjoint sets currently present.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.components }

    /// Returns the representative of the set containing `vertex`.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRangeVertex`] when `vertex >= len()`.
    pub fn find(&mut self, vertex: usize) -> Result<usize> {
        self.check_bounds(vertex)?;

        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = vertex;
        while self.parent[node] != node {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        Ok(root)
    }

    /// Merges the sets represented by `left` and `right`, returning the
    /// representative of the merged set.
    ///
    /// The lower-ranked root is attached beneath the higher-ranked one. On
    /// equal rank `left` is attached beneath `right`.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRangeVertex`] for ids outside the
    /// structure, [`ForestError::NotRepresentative`] when either id is not
    /// currently a representative, and [`ForestError::AlreadyMerged`] when
    /// both ids name the same set. No state changes on error.
    pub fn union(&mut self, left: usize, right: usize) -> Result<usize> {
        self.check_representative(left)?;
        self.check_representative(right)?;
        if left == right {
            return Err(ForestError::AlreadyMerged { vertex: left });
        }

        let left_rank = self.rank[left];
        let right_rank = self.rank[right];
        let (root, child) = match left_rank.cmp(&right_rank) {
            Ordering::Greater => (left, right),
            Ordering::Less | Ordering::Equal => (right, left),
        };

        self.parent[child] = root;
        if left_rank == right_rank {
            self.rank[root] = self.rank[root].saturating_add(1);
        }
        self.components = self.components.saturating_sub(1);
        Ok(root)
    }

    /// Returns `true` when `left` and `right` belong to the same set.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRangeVertex`] when either id is out of range.
    pub fn connected(&mut self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }

    fn check_bounds(&self, vertex: usize) -> Result<()> {
        if vertex < self.parent.len() {
            Ok(())
        } else {
            Err(ForestError::OutOfRangeVertex {
                vertex,
                vertex_count: self.parent.len(),
            })
        }
    }

    fn check_representative(&self, vertex: usize) -> Result<()> {
        self.check_bounds(vertex)?;
        if self.parent[vertex] == vertex {
            Ok(())
        } else {
            Err(ForestError::NotRepresentative { vertex })
        }
    }
}
