//! Support library for the `ipmst` binary.
//!
//! Exposes the command pipeline, report rendering and logging set-up so
//! doctests and integration tests can drive them without spawning a process.

pub mod cli;
pub mod logging;
pub mod report;
