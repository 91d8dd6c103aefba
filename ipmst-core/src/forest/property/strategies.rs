//! Strategy builders for spanning forest property tests.
//!
//! Provides graph generators that produce varied weight distributions and
//! topologies. Every generator is driven by a seeded [`SmallRng`] so a
//! failing proptest case can be replayed from its seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::{TieBreak, WeightedEdge};

use super::types::{ForestFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;
/// Symmetric bound for signed weights.
const WEIGHT_BOUND: i64 = 1_000;

/// Generates fixtures covering every weight distribution and both
/// tie-break policies.
pub(super) fn forest_fixture_strategy() -> impl Strategy<Value = ForestFixture> {
    (
        any::<WeightDistribution>(),
        any::<bool>(),
        any::<u64>(),
    )
        .prop_map(|(distribution, input_order, seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let tie_break = if input_order {
                TieBreak::InputOrder
            } else {
                TieBreak::Endpoints
            };
            generate_fixture(distribution, tie_break, &mut rng)
        })
}

/// Generates small graphs (at most `max_edges` edges over at most six
/// vertices) suitable for the exhaustive oracle.
pub(super) fn small_graph_strategy(max_edges: usize) -> impl Strategy<Value = (usize, Vec<WeightedEdge>)> {
    (2_usize..=6).prop_flat_map(move |vertex_count| {
        let edge = (0..vertex_count, 0..vertex_count, -20_i64..=20).prop_filter_map(
            "self-loops are rejected by the builder",
            |(source, target, weight)| {
                (source != target).then(|| WeightedEdge::new(weight, source, target))
            },
        );
        (
            Just(vertex_count),
            proptest::collection::vec(edge, 0..=max_edges),
        )
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    tie_break: TieBreak,
    rng: &mut SmallRng,
) -> ForestFixture {
    let (vertex_count, edges) = match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    };
    ForestFixture {
        vertex_count,
        edges,
        distribution,
        tie_break,
    }
}

// ── Unique weights ──────────────────────────────────────────────────────

/// Each edge draws a distinct weight from a shuffled range.
fn generate_unique_weights(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pairs = sample_pairs(vertex_count, rng.gen_range(0.2..=0.6), rng);
    let mut weights: Vec<i64> = (0..).take(pairs.len()).collect();
    shuffle(&mut weights, rng);
    let edges = pairs
        .into_iter()
        .zip(weights)
        .map(|((source, target), weight)| WeightedEdge::new(weight - WEIGHT_BOUND, source, target))
        .collect();
    (vertex_count, edges)
}

// ── Many identical weights ──────────────────────────────────────────────

/// Large groups of edges share one of at most three weights.
fn generate_identical_weights(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let pairs = sample_pairs(vertex_count, rng.gen_range(0.3..=0.7), rng);
    let edges = pairs
        .into_iter()
        .map(|(source, target)| {
            let weight = pool[rng.gen_range(0..pool.len())];
            oriented(weight, source, target, rng)
        })
        .collect();
    (vertex_count, edges)
}

// ── Sparse ──────────────────────────────────────────────────────────────

/// A random spanning tree plus roughly `n / 2` to `n` extra edges.
fn generate_sparse(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();

    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);
    for window in order.windows(2) {
        let weight = rng.gen_range(-WEIGHT_BOUND..=WEIGHT_BOUND);
        edges.push(oriented(weight, window[0], window[1], rng));
    }

    let extra = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        if source != target {
            let weight = rng.gen_range(-WEIGHT_BOUND..=WEIGHT_BOUND);
            edges.push(WeightedEdge::new(weight, source, target));
        }
    }

    shuffle(&mut edges, rng);
    (vertex_count, edges)
}

// ── Dense ───────────────────────────────────────────────────────────────

/// Near-complete graph where some pairs carry a second, parallel edge.
fn generate_dense(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge>) {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let pairs = sample_pairs(vertex_count, rng.gen_range(0.7..=0.95), rng);
    let mut edges = Vec::with_capacity(pairs.len());
    for (source, target) in pairs {
        let weight = rng.gen_range(0..=WEIGHT_BOUND);
        edges.push(oriented(weight, source, target, rng));
        if rng.gen_bool(0.1) {
            let parallel = rng.gen_range(0..=WEIGHT_BOUND);
            edges.push(oriented(parallel, source, target, rng));
        }
    }
    (vertex_count, edges)
}

// ── Disconnected ────────────────────────────────────────────────────────

/// Two to five components with no cross edges, followed by zero to three
/// isolated vertices.
fn generate_disconnected(rng: &mut SmallRng) -> (usize, Vec<WeightedEdge>) {
    let component_count = rng.gen_range(2..=5);
    let mut edges = Vec::new();
    let mut offset = 0;

    for _ in 0..component_count {
        let size = rng.gen_range(2..=10);
        let probability = rng.gen_range(0.3..=0.8);
        let start_len = edges.len();
        for (source, target) in sample_pairs(size, probability, rng) {
            let weight = rng.gen_range(-WEIGHT_BOUND..=WEIGHT_BOUND);
            edges.push(oriented(weight, offset + source, offset + target, rng));
        }
        if edges.len() == start_len {
            edges.push(WeightedEdge::new(1, offset, offset + 1));
        }
        offset += size;
    }

    let isolated = rng.gen_range(0..=3);
    (offset + isolated, edges)
}

// ── Helpers ─────────────────────────────────────────────────────────────

/// Returns each unordered pair `i < j < vertex_count` with probability
/// `probability`.
fn sample_pairs(vertex_count: usize, probability: f64, rng: &mut SmallRng) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(probability) {
                pairs.push((i, j));
            }
        }
    }
    pairs
}

/// Builds an edge with its endpoints in a random orientation.
fn oriented(weight: i64, source: usize, target: usize, rng: &mut SmallRng) -> WeightedEdge {
    if rng.gen_bool(0.5) {
        WeightedEdge::new(weight, source, target)
    } else {
        WeightedEdge::new(weight, target, source)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
pub(super) fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

// Biased towards ManyIdentical, the main tie-breaking stress case.
impl proptest::arbitrary::Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = proptest::strategy::TupleUnion<(
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
        proptest::strategy::WA<proptest::strategy::Just<Self>>,
    )>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
    }
}
