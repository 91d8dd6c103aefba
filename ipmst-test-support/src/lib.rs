//! Shared test utilities used across ipmst crates.
//!
//! - [`tracing`] captures spans and events so instrumentation can be
//!   asserted without parsing formatted log output.
//! - [`ci`] interprets the environment overrides that tune property suites.

pub mod ci;
pub mod tracing;
