//! Property-based tests for the Kruskal spanning forest driver.
//!
//! Verifies the driver against an independent Prim oracle and, on small
//! graphs, against exhaustive enumeration. Also checks structural invariants
//! (acyclicity, edge count, component count, acceptance order) and
//! determinism across repeated builds and shuffled inputs.

mod oracle;
mod strategies;
mod types;
