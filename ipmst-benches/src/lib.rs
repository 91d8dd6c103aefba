//! Benchmark support crate for ipmst.
//!
//! Provides seeded synthetic graphs and parameter labels for the Criterion
//! benchmarks of the Kruskal driver and the delimited edge reader.

pub mod error;
pub mod graph;
pub mod params;
