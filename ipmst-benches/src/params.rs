//! Benchmark parameter labels.

use std::fmt;

use ipmst_core::TieBreak;

/// Parameters for a Kruskal benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ForestBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Average number of edges per vertex.
    pub average_degree: usize,
    /// Tie-break applied to equal weights.
    pub tie_break: TieBreak,
}

impl fmt::Display for ForestBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},d={},{:?}",
            self.vertex_count, self.average_degree, self.tie_break
        )
    }
}

/// Parameters for an edge reader benchmark run.
#[derive(Clone, Copy, Debug)]
pub struct ReaderBenchParams {
    /// Number of records in the generated input.
    pub record_count: usize,
}

impl fmt::Display for ReaderBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "records={}", self.record_count)
    }
}
