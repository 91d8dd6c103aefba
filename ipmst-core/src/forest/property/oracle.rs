//! Independent oracles for spanning forest property verification.
//!
//! `prim_forest` runs Prim's algorithm from every unvisited vertex over a
//! dense adjacency matrix, sharing no code with the Kruskal driver.
//! `exhaustive_minimum` enumerates every edge subset of a small graph and
//! is the ground truth the Prim oracle itself is checked against.

use crate::WeightedEdge;

use super::helpers::{count_components, find_root};

/// Largest edge count `exhaustive_minimum` accepts.
pub(super) const EXHAUSTIVE_EDGE_LIMIT: usize = 12;

/// Summary of an oracle's minimum spanning forest.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    /// Total weight of the forest.
    pub total_weight: i64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of trees in the forest, isolated vertices included.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with Prim's algorithm.
///
/// Parallel edges collapse to their cheapest weight in the adjacency matrix.
pub(super) fn prim_forest(vertex_count: usize, edges: &[WeightedEdge]) -> OracleForest {
    let adjacency = adjacency_matrix(vertex_count, edges);
    let mut visited = vec![false; vertex_count];
    let mut total_weight = 0_i64;
    let mut edge_count = 0_usize;
    let mut component_count = 0_usize;

    for start in 0..vertex_count {
        if visited[start] {
            continue;
        }
        component_count += 1;

        let mut best: Vec<Option<i64>> = vec![None; vertex_count];
        best[start] = Some(0);
        loop {
            let next = (0..vertex_count)
                .filter(|&vertex| !visited[vertex])
                .filter_map(|vertex| best[vertex].map(|weight| (weight, vertex)))
                .min();
            let Some((weight, vertex)) = next else {
                break;
            };

            visited[vertex] = true;
            if vertex != start {
                total_weight += weight;
                edge_count += 1;
            }
            for neighbour in 0..vertex_count {
                if visited[neighbour] {
                    continue;
                }
                if let Some(candidate) = adjacency[vertex][neighbour] {
                    if best[neighbour].is_none_or(|current| candidate < current) {
                        best[neighbour] = Some(candidate);
                    }
                }
            }
        }
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count,
    }
}

/// Finds the minimum-weight spanning forest by enumerating every subset of
/// `edges` with exactly `V - C` members that is acyclic.
///
/// Only meaningful for graphs with at most [`EXHAUSTIVE_EDGE_LIMIT`] edges.
pub(super) fn exhaustive_minimum(vertex_count: usize, edges: &[WeightedEdge]) -> OracleForest {
    assert!(
        edges.len() <= EXHAUSTIVE_EDGE_LIMIT,
        "exhaustive oracle is limited to {EXHAUSTIVE_EDGE_LIMIT} edges"
    );
    let component_count = count_components(vertex_count, edges);
    let edge_count = vertex_count - component_count;

    let mut best: Option<i64> = None;
    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != edge_count {
            continue;
        }
        let subset: Vec<WeightedEdge> = edges
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, edge)| *edge)
            .collect();
        if !is_acyclic(vertex_count, &subset) {
            continue;
        }
        let weight: i64 = subset.iter().map(WeightedEdge::weight).sum();
        if best.is_none_or(|current| weight < current) {
            best = Some(weight);
        }
    }

    OracleForest {
        total_weight: best.unwrap_or(0),
        edge_count,
        component_count,
    }
}

fn adjacency_matrix(vertex_count: usize, edges: &[WeightedEdge]) -> Vec<Vec<Option<i64>>> {
    let mut adjacency = vec![vec![None; vertex_count]; vertex_count];
    for edge in edges {
        let (source, target) = (edge.source(), edge.target());
        for (row, column) in [(source, target), (target, source)] {
            let cell: &mut Option<i64> = &mut adjacency[row][column];
            if cell.is_none_or(|current| edge.weight() < current) {
                *cell = Some(edge.weight());
            }
        }
    }
    adjacency
}

fn is_acyclic(vertex_count: usize, edges: &[WeightedEdge]) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for edge in edges {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return false;
        }
        parent[right] = left;
    }
    true
}
