//! Command implementations and argument parsing for the `ipmst` CLI.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use ipmst_core::{ForestError, SpanningForest, SpanningForestBuilder, TieBreak};
use ipmst_providers_csv::{
    CsvEdgeReader, CsvProviderError, EdgeList, HeaderMode, ReaderOptions, RecordPolicy,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::report::{ForestReport, ReportError, render_json, render_table};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "ipmst",
    about = "Compute the minimum spanning forest of a weighted IPv4 address graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Output format requested by the command.
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        match &self.command {
            Command::Run(run) => run.format,
        }
    }
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning forest of an edge file.
    Run(RunCommand),
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Path to a file of `source;target;weight` records.
    pub path: PathBuf,

    /// Field separator.
    #[arg(long, default_value_t = ';')]
    pub delimiter: char,

    /// Whether the first line is a header.
    #[arg(long, value_enum, default_value_t = HeaderArg::Auto)]
    pub header: HeaderArg,

    /// Fail on the first malformed record instead of skipping it.
    #[arg(long)]
    pub strict: bool,

    /// Ordering applied to edges of equal weight.
    #[arg(long = "tie-break", value_enum, default_value_t = TieBreakArg::Endpoints)]
    pub tie_break: TieBreakArg,

    /// Report layout written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,

    /// Override name for the data source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Header handling selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeaderArg {
    /// Skip the first line when it is not a valid record.
    Auto,
    /// Always skip the first line.
    Present,
    /// Treat the first line as data.
    Absent,
}

impl From<HeaderArg> for HeaderMode {
    fn from(value: HeaderArg) -> Self {
        match value {
            HeaderArg::Auto => Self::Auto,
            HeaderArg::Present => Self::Present,
            HeaderArg::Absent => Self::Absent,
        }
    }
}

/// Tie-break policies selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TieBreakArg {
    /// Order equal weights by endpoint ids.
    Endpoints,
    /// Keep equal weights in file order.
    InputOrder,
}

impl From<TieBreakArg> for TieBreak {
    fn from(value: TieBreakArg) -> Self {
        match value {
            TieBreakArg::Endpoints => Self::Endpoints,
            TieBreakArg::InputOrder => Self::InputOrder,
        }
    }
}

/// Report layouts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width table.
    #[default]
    Human,
    /// Single JSON object.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CliError {
    /// Opening, reading or validating the edge file failed.
    #[error(transparent)]
    Provider(#[from] CsvProviderError),
    /// Building the spanning forest failed.
    #[error(transparent)]
    Forest(#[from] ForestError),
    /// Resolving the forest to addresses failed.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl CliError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Provider(err) => err.code().as_str(),
            Self::Forest(err) => err.code().as_str(),
            Self::Report(err) => err.code(),
        }
    }
}

/// Outcome of the `run` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Label for the input, from `--name` or the file stem.
    pub data_source: String,
    /// Records dropped as malformed.
    pub skipped_records: usize,
    /// Address-level view of the computed forest.
    pub report: ForestReport,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading the input, building the forest or
/// resolving it to addresses fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use ipmst_cli::cli::{Cli, Command, HeaderArg, OutputFormat, RunCommand, TieBreakArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "10.0.0.1;10.0.0.2;3\n10.0.0.2;10.0.0.3;4\n")?;
/// let cli = Cli {
///     command: Command::Run(RunCommand {
///         path: file.path().to_path_buf(),
///         delimiter: ';',
///         header: HeaderArg::Auto,
///         strict: false,
///         tie_break: TieBreakArg::Endpoints,
///         format: OutputFormat::Human,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.total_weight(), 7);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Run(run) => {
            Span::current().record("command", field::display("run"));
            run_command(run)
        }
    }
}

#[instrument(
    name = "cli.execute",
    err,
    skip(command),
    fields(
        path = field::Empty,
        tie_break = field::Empty,
        strict = field::Empty,
        override_name = field::Empty,
    ),
)]
pub(super) fn run_command(command: RunCommand) -> Result<ExecutionSummary, CliError> {
    let RunCommand {
        path,
        delimiter,
        header,
        strict,
        tie_break,
        name,
        ..
    } = command;

    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("tie_break", field::debug(tie_break));
    span.record("strict", strict);
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let options = ReaderOptions {
        delimiter,
        header: header.into(),
        policy: if strict {
            RecordPolicy::Strict
        } else {
            RecordPolicy::Skip
        },
    };
    let edges = read_edges(&path, options)?;
    let forest = build_forest(&edges, tie_break.into())?;
    let report = ForestReport::new(&forest, edges.registry())?;

    let summary = ExecutionSummary {
        data_source: derive_data_source_name(&path, name.as_deref()),
        skipped_records: edges.skipped_records(),
        report,
    };
    info!(
        data_source = summary.data_source.as_str(),
        vertices = summary.report.vertices(),
        components = summary.report.components(),
        total_weight = summary.report.total_weight(),
        skipped_records = summary.skipped_records,
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.build_forest",
    err,
    skip(edges),
    fields(vertices = edges.vertex_count(), input_edges = edges.edges().len()),
)]
pub(super) fn build_forest(
    edges: &EdgeList,
    tie_break: TieBreak,
) -> Result<SpanningForest, CliError> {
    let forest = SpanningForestBuilder::new(edges.vertex_count())
        .with_edges(edges.edges().iter().copied())
        .with_tie_break(tie_break)
        .build()?;
    Ok(forest)
}

#[instrument(
    name = "cli.read_edges",
    err,
    skip(options),
    fields(path = field::Empty, policy = ?options.policy, skipped_records = field::Empty),
)]
pub(super) fn read_edges(path: &Path, options: ReaderOptions) -> Result<EdgeList, CliError> {
    let span = Span::current();
    span.record("path", field::display(path.display()));
    let edges = CsvEdgeReader::new(options).read_path(path)?;
    span.record("skipped_records", edges.skipped_records());
    Ok(edges)
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "data_source".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` in the requested `format`.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_summary(
    summary: &ExecutionSummary,
    format: OutputFormat,
    writer: impl Write,
) -> io::Result<()> {
    match format {
        OutputFormat::Human => render_table(&summary.report, writer),
        OutputFormat::Json => render_json(&summary.report, &summary.data_source, writer),
    }
}
