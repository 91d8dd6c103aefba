//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of panicking
//! inside Criterion closures.

use crate::graph::SyntheticGraphError;
use ipmst_core::ForestError;
use ipmst_providers_csv::CsvProviderError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticGraphError),
    /// Spanning forest construction failed.
    #[error("spanning forest construction failed: {0}")]
    Forest(#[from] ForestError),
    /// Reading generated edge text failed.
    #[error("edge reader failed: {0}")]
    Reader(#[from] CsvProviderError),
}
