//! Seeded synthetic graphs for benchmarking.
//!
//! [`SyntheticGraph`] is a random spanning path over every vertex plus
//! uniformly drawn extra edges, so each generated graph is connected and the
//! forest is a single tree. Weights come from a small range to produce many
//! ties.

use std::net::Ipv4Addr;

use ipmst_core::WeightedEdge;
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Largest weight drawn for a synthetic edge.
const MAX_WEIGHT: i64 = 64;

/// Errors that may occur during synthetic graph generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticGraphError {
    /// Fewer than two vertices were requested.
    #[error("a synthetic graph needs at least two vertices, got {0}")]
    TooFewVertices(usize),
    /// The requested average degree was zero.
    #[error("average degree must be greater than zero")]
    ZeroDegree,
    /// The vertex count exceeds the IPv4 address space.
    #[error("{0} vertices cannot be mapped onto distinct IPv4 addresses")]
    AddressSpaceExhausted(usize),
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Average edges per vertex; the path contributes roughly one.
    pub average_degree: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A connected weighted graph over `0..vertex_count`.
///
/// # Examples
///
/// ```
/// use ipmst_benches::graph::{SyntheticGraph, SyntheticGraphConfig};
///
/// let config = SyntheticGraphConfig { vertex_count: 10, average_degree: 3, seed: 7 };
/// let graph = SyntheticGraph::generate(&config).expect("valid config");
/// assert!(graph.edges().len() >= 9);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<WeightedEdge>,
}

impl SyntheticGraph {
    /// Generates a graph eagerly from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticGraphError`] when fewer than two vertices or a zero
    /// degree are requested, or when the vertices cannot all receive distinct
    /// addresses.
    pub fn generate(config: &SyntheticGraphConfig) -> Result<Self, SyntheticGraphError> {
        let vertex_count = config.vertex_count;
        if vertex_count < 2 {
            return Err(SyntheticGraphError::TooFewVertices(vertex_count));
        }
        if config.average_degree == 0 {
            return Err(SyntheticGraphError::ZeroDegree);
        }
        if u32::try_from(vertex_count).is_err() {
            return Err(SyntheticGraphError::AddressSpaceExhausted(vertex_count));
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let extra = vertex_count.saturating_mul(config.average_degree.saturating_sub(1));
        let mut edges = Vec::with_capacity(vertex_count.saturating_add(extra));

        let mut order: Vec<usize> = (0..vertex_count).collect();
        for i in (1..order.len()).rev() {
            order.swap(i, rng.gen_range(0..=i));
        }
        for pair in order.windows(2) {
            if let [source, target] = *pair {
                edges.push(WeightedEdge::new(rng.gen_range(1..=MAX_WEIGHT), source, target));
            }
        }

        while edges.len() < vertex_count.saturating_sub(1).saturating_add(extra) {
            let source = rng.gen_range(0..vertex_count);
            let target = rng.gen_range(0..vertex_count);
            if source != target {
                edges.push(WeightedEdge::new(rng.gen_range(1..=MAX_WEIGHT), source, target));
            }
        }

        Ok(Self {
            vertex_count,
            edges,
        })
    }

    /// Number of vertices.
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Generated edges, path edges first.
    #[must_use]
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Renders the graph as `source;target;weight` lines with a header,
    /// mapping vertex `i` to the address `10.0.0.0 + i`.
    #[must_use]
    pub fn to_delimited(&self) -> String {
        let mut out = String::from("source;target;weight\n");
        for edge in &self.edges {
            out.push_str(&format!(
                "{};{};{}\n",
                vertex_address(edge.source()),
                vertex_address(edge.target()),
                edge.weight()
            ));
        }
        out
    }
}

fn vertex_address(vertex: usize) -> Ipv4Addr {
    let offset = u32::try_from(vertex).unwrap_or(u32::MAX);
    Ipv4Addr::from(u32::from(Ipv4Addr::new(10, 0, 0, 0)).wrapping_add(offset))
}
