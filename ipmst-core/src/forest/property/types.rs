//! Type definitions for spanning forest property tests.
//!
//! Provides the fixture, configuration, and weight distribution types used
//! by the graph generation strategies and property functions.

use ipmst_test_support::ci::property_test_profile::positive_count;

use crate::{TieBreak, WeightedEdge};

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge has a distinct weight, so the minimum forest is unique.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Sparse graph built from a random spanning tree plus a few extra
    /// edges, with weights spanning negative and positive values.
    Sparse,
    /// Dense graph approaching a complete graph, with parallel edges.
    Dense,
    /// Multiple disconnected components plus isolated vertices.
    Disconnected,
}

/// Fixture for spanning forest property tests.
///
/// Captures the vertex count, the generated edges in input order, and the
/// weight distribution used during generation for failure diagnosis.
#[derive(Clone, Debug)]
pub(super) struct ForestFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Generated edges in input order.
    pub edges: Vec<WeightedEdge>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
    /// Tie-break policy the property should build with.
    pub tie_break: TieBreak,
}

impl ForestFixture {
    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, tie_break={:?}, vertices={}, edges={}",
            self.distribution,
            self.tie_break,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

/// Configuration for the determinism property.
///
/// Controls how many times the driver is re-executed on the same input.
pub(super) struct DeterminismConfig {
    /// Number of times to repeat the build per input.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Loads the repetition count from `IPMST_MST_PBT_REPEATS` (default: 5).
    pub(super) fn load() -> Self {
        Self {
            repetitions: positive_count("IPMST_MST_PBT_REPEATS", 5),
        }
    }
}
