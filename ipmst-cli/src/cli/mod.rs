//! Command-line interface orchestration for `ipmst`.
//!
//! The `run` command reads an `ip;ip;weight` edge file, computes its minimum
//! spanning forest and renders the result as a table or JSON.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, HeaderArg, OutputFormat, RunCommand, TieBreakArg,
    render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
