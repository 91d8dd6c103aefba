//! Minimum spanning forest construction.
//!
//! Kruskal's algorithm over [`WeightedEdge`]s between dense vertex ids. Every
//! edge is validated before any union-find work, the edge list is sorted (in
//! parallel via Rayon when the `parallel` feature is enabled), and a single
//! sequential scan accepts each edge whose endpoints still belong to
//! different sets of a [`DisjointSetForest`].

mod disjoint_set;

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::{ForestError, Result};

pub use self::disjoint_set::DisjointSetForest;

/// An undirected edge `(weight, source, target)` between two vertex ids.
///
/// Endpoints are stored as given. Edges order by weight, then `source`, then
/// `target`, which is the tie-break [`TieBreak::Endpoints`] applies.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct WeightedEdge {
    weight: i64,
    source: usize,
    target: usize,
}

impl WeightedEdge {
    /// Creates an edge of `weight` joining `source` and `target`.
    #[must_use]
    pub const fn new(weight: i64, source: usize, target: usize) -> Self {
        Self {
            weight,
            source,
            target,
        }
    }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> i64 { self.weight }

    /// Returns the first endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }
}

impl From<(i64, usize, usize)> for WeightedEdge {
    fn from((weight, source, target): (i64, usize, usize)) -> Self {
        Self::new(weight, source, target)
    }
}

impl Ord for WeightedEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then_with(|| self.source.cmp(&other.source))
            .then_with(|| self.target.cmp(&other.target))
    }
}

impl PartialOrd for WeightedEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Ordering applied to edges of equal weight before the Kruskal scan.
///
/// Both policies produce a minimum spanning forest with the same total
/// weight; they differ only in which of several equal-weight edges is
/// accepted.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum TieBreak {
    /// Order equal weights by `source`, then `target`.
    #[default]
    Endpoints,
    /// Keep equal weights in the order they were supplied.
    InputOrder,
}

/// A minimum spanning forest: one minimum spanning tree per connected
/// component of the input graph.
///
/// Edges are held in acceptance order, which is non-decreasing in weight.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    edges: Vec<WeightedEdge>,
    total_weight: i64,
    vertex_count: usize,
    component_count: usize,
}

impl SpanningForest {
    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge] { &self.edges }

    /// Returns the sum of the accepted edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> i64 { self.total_weight }

    /// Returns the number of vertices the forest spans.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of trees, counting isolated vertices as singleton
    /// trees.
    #[must_use]
    #[rustfmt::skip]
    pub const fn component_count(&self) -> usize { self.component_count }

    /// Returns the number of accepted edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.edges.len() }

    /// Returns `true` when no edge was accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.edges.is_empty() }

    /// Returns `true` when the forest is a single spanning tree.
    #[must_use]
    pub const fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Consumes the forest and returns its edges.
    #[must_use]
    pub fn into_edges(self) -> Vec<WeightedEdge> {
        self.edges
    }
}

/// Collects weighted edges and computes their minimum spanning forest.
///
/// # Examples
/// ```
/// use ipmst_core::{SpanningForestBuilder, TieBreak, WeightedEdge};
///
/// let mut builder = SpanningForestBuilder::new(3).with_tie_break(TieBreak::InputOrder);
/// builder.add_edge(5, 0, 1).add_edge(5, 1, 2).add_edge(5, 0, 2);
/// let forest = builder.build()?;
/// assert_eq!(
///     forest.edges(),
///     &[WeightedEdge::new(5, 0, 1), WeightedEdge::new(5, 1, 2)],
/// );
/// assert_eq!(forest.total_weight(), 10);
/// # Ok::<(), ipmst_core::ForestError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct SpanningForestBuilder {
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
    tie_break: TieBreak,
}

impl SpanningForestBuilder {
    /// Creates a builder for a graph over `0..vertex_count`.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            vertex_count,
            ..Self::default()
        }
    }

    /// Appends `edge`.
    #[must_use]
    pub fn with_edge(mut self, edge: WeightedEdge) -> Self {
        self.edges.push(edge);
        self
    }

    /// Appends every edge yielded by `edges`, preserving their order.
    #[must_use]
    pub fn with_edges(mut self, edges: impl IntoIterator<Item = WeightedEdge>) -> Self {
        self.edges.extend(edges);
        self
    }

    /// Appends an edge of `weight` joining `source` and `target`.
    pub fn add_edge(&mut self, weight: i64, source: usize, target: usize) -> &mut Self {
        self.edges.push(WeightedEdge::new(weight, source, target));
        self
    }

    /// Selects how equal-weight edges are ordered.
    #[must_use]
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Returns the configured tie-break policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn tie_break(&self) -> TieBreak { self.tie_break }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges collected so far, in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[WeightedEdge] { &self.edges }

    /// Runs Kruskal's algorithm over the collected edges.
    ///
    /// An empty edge list yields an empty forest with total weight zero for
    /// any vertex count, including zero.
    ///
    /// # Errors
    /// Returns [`ForestError::OutOfRangeVertex`] when an edge references a
    /// vertex `>= vertex_count`, [`ForestError::SelfLoop`] when an edge joins
    /// a vertex to itself, and [`ForestError::WeightOverflow`] when the sum of
    /// the accepted weights does not fit in `i64`. Validation completes before any edge is
    /// accepted.
    pub fn build(self) -> Result<SpanningForest> {
        let Self {
            vertex_count,
            mut edges,
            tie_break,
        } = self;

        for edge in &edges {
            validate_edge(edge, vertex_count)?;
        }
        sort_edges(&mut edges, tie_break);

        let mut sets = DisjointSetForest::new(vertex_count);
        let tree_size = vertex_count.saturating_sub(1);
        let mut accepted = Vec::with_capacity(tree_size.min(edges.len()));
        // Accepted weights arrive in ascending order, so a partial sum may
        // leave the `i64` range even when the final total does not.
        let mut total: i128 = 0;

        for edge in edges {
            if accepted.len() == tree_size {
                break;
            }

            let source_root = sets.find(edge.source)?;
            let target_root = sets.find(edge.target)?;
            if source_root == target_root {
                continue;
            }

            total += i128::from(edge.weight);
            sets.union(source_root, target_root)?;
            accepted.push(edge);
        }

        let total_weight =
            i64::try_from(total).map_err(|_| ForestError::WeightOverflow { total })?;

        Ok(SpanningForest {
            edges: accepted,
            total_weight,
            vertex_count,
            component_count: sets.component_count(),
        })
    }
}

/// Computes the minimum spanning forest of `edges` over `0..vertex_count`
/// using the default [`TieBreak::Endpoints`] ordering.
///
/// # Errors
/// See [`SpanningForestBuilder::build`].
pub fn kruskal(vertex_count: usize, edges: &[WeightedEdge]) -> Result<SpanningForest> {
    SpanningForestBuilder::new(vertex_count)
        .with_edges(edges.iter().copied())
        .build()
}

fn validate_edge(edge: &WeightedEdge, vertex_count: usize) -> Result<()> {
    for vertex in [edge.source, edge.target] {
        if vertex >= vertex_count {
            return Err(ForestError::OutOfRangeVertex {
                vertex,
                vertex_count,
            });
        }
    }
    if edge.source == edge.target {
        return Err(ForestError::SelfLoop {
            vertex: edge.source,
        });
    }
    Ok(())
}

// Equal tuples are indistinguishable, so an unstable sort over the full
// ordering is as deterministic as a stable one.
#[cfg(feature = "parallel")]
fn sort_edges(edges: &mut [WeightedEdge], tie_break: TieBreak) {
    match tie_break {
        TieBreak::Endpoints => edges.par_sort_unstable(),
        TieBreak::InputOrder => edges.par_sort_by_key(WeightedEdge::weight),
    }
}

#[cfg(not(feature = "parallel"))]
fn sort_edges(edges: &mut [WeightedEdge], tie_break: TieBreak) {
    match tie_break {
        TieBreak::Endpoints => edges.sort_unstable(),
        TieBreak::InputOrder => edges.sort_by_key(WeightedEdge::weight),
    }
}

// ============================================================================
// Kani Formal Verification
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    //! Kani proof harnesses for spanning forest structure.
    //!
    //! Bounded model checking over every subset of the complete graph on four
    //! vertices with arbitrary small weights.

    use super::{SpanningForestBuilder, TieBreak, WeightedEdge};

    fn kani_find_root(parent: &[usize], vertex: usize) -> usize {
        let mut current = vertex;
        while parent[current] != current {
            current = parent[current];
        }
        current
    }

    /// Returns `true` when `edges` is acyclic over `0..vertex_count`.
    fn is_acyclic(vertex_count: usize, edges: &[WeightedEdge]) -> bool {
        let mut parent: Vec<usize> = (0..vertex_count).collect();
        for edge in edges {
            let left = kani_find_root(&parent, edge.source());
            let right = kani_find_root(&parent, edge.target());
            if left == right {
                return false;
            }
            parent[left] = right;
        }
        true
    }

    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_forest_structure_4_vertices() {
        let vertex_count = 4usize;
        let pairs = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

        let mut builder = SpanningForestBuilder::new(vertex_count);
        if kani::any::<bool>() {
            builder = builder.with_tie_break(TieBreak::InputOrder);
        }
        for &(source, target) in &pairs {
            if kani::any::<bool>() {
                let weight: i8 = kani::any();
                builder.add_edge(i64::from(weight), source, target);
            }
        }

        let forest = builder
            .build()
            .expect("in-range, loop-free edges must build");

        kani::assert(
            is_acyclic(vertex_count, forest.edges()),
            "forest must be acyclic",
        );
        kani::assert(
            forest.len() == vertex_count - forest.component_count(),
            "forest must hold V - C edges",
        );
        kani::assert(
            forest
                .edges()
                .windows(2)
                .all(|pair| pair[0].weight() <= pair[1].weight()),
            "edges must be accepted in non-decreasing weight",
        );
    }
}


#[cfg(test)]
mod property;
