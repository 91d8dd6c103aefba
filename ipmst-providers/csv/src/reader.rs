//! Streaming reader that turns delimited lines into an [`EdgeList`].

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use ipmst_core::WeightedEdge;
use tracing::{debug, warn};

use crate::errors::{CsvProviderError, RecordError};
use crate::record::{Record, is_header_like, parse_record};
use crate::registry::VertexRegistry;

/// How the first non-blank line is treated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum HeaderMode {
    /// Skip the first line only when it does not parse as a record and none
    /// of its fields is an address or an integer.
    #[default]
    Auto,
    /// Always skip the first line.
    Present,
    /// Never skip the first line.
    Absent,
}

/// What happens when a record fails validation.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RecordPolicy {
    /// Drop the record, log it at `warn` and count it.
    #[default]
    Skip,
    /// Fail the whole read with [`CsvProviderError::MalformedRecord`].
    Strict,
}

/// Options accepted by [`CsvEdgeReader`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ReaderOptions {
    /// Field separator.
    pub delimiter: char,
    /// Header handling.
    pub header: HeaderMode,
    /// Malformed record handling.
    pub policy: RecordPolicy,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: ';',
            header: HeaderMode::Auto,
            policy: RecordPolicy::Skip,
        }
    }
}

/// Accepted edges together with the registry that names their endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EdgeList {
    registry: VertexRegistry,
    edges: Vec<WeightedEdge>,
    skipped_records: usize,
}

impl EdgeList {
    /// Registry mapping vertex ids to addresses.
    #[must_use]
    pub fn registry(&self) -> &VertexRegistry {
        &self.registry
    }

    /// Accepted edges in input order.
    #[must_use]
    pub fn edges(&self) -> &[WeightedEdge] {
        &self.edges
    }

    /// Number of malformed records dropped under [`RecordPolicy::Skip`].
    #[must_use]
    pub fn skipped_records(&self) -> usize {
        self.skipped_records
    }

    /// Number of distinct addresses among accepted records.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.registry.len()
    }

    /// Splits the list into its registry and edges.
    #[must_use]
    pub fn into_parts(self) -> (VertexRegistry, Vec<WeightedEdge>) {
        (self.registry, self.edges)
    }

    fn push(&mut self, record: Record) {
        let source = self.registry.intern(record.source);
        let target = self.registry.intern(record.target);
        self.edges
            .push(WeightedEdge::new(record.weight, source, target));
    }
}

/// Reads `source;target;weight` records.
///
/// # Examples
/// ```
/// use std::io::Cursor;
/// use ipmst_providers_csv::{CsvEdgeReader, HeaderMode, ReaderOptions, RecordPolicy};
///
/// let reader = CsvEdgeReader::new(ReaderOptions {
///     delimiter: ',',
///     header: HeaderMode::Absent,
///     policy: RecordPolicy::Skip,
/// });
/// let list = reader
///     .read(Cursor::new("1.1.1.1,2.2.2.2,5\nnot,a,record\n"))
///     .expect("skip policy tolerates bad rows");
/// assert_eq!(list.edges().len(), 1);
/// assert_eq!(list.skipped_records(), 1);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct CsvEdgeReader {
    options: ReaderOptions,
}

impl CsvEdgeReader {
    /// Creates a reader with `options`.
    #[must_use]
    pub const fn new(options: ReaderOptions) -> Self {
        Self { options }
    }

    /// Returns the configured options.
    #[must_use]
    pub const fn options(&self) -> ReaderOptions {
        self.options
    }

    /// Opens `path` and reads it with [`Self::read`].
    ///
    /// # Errors
    /// Returns [`CsvProviderError::Io`] when the file cannot be opened, and
    /// any error [`Self::read`] reports.
    pub fn read_path(&self, path: impl AsRef<Path>) -> Result<EdgeList, CsvProviderError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CsvProviderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.read(BufReader::new(file))
    }

    /// Reads every line of `reader`.
    ///
    /// Blank lines are ignored and line numbers in errors and log events are
    /// one-based physical lines.
    ///
    /// # Errors
    /// Returns [`CsvProviderError::Read`] when a line cannot be read, and
    /// [`CsvProviderError::MalformedRecord`] for the first rejected record
    /// under [`RecordPolicy::Strict`].
    pub fn read(&self, reader: impl BufRead) -> Result<EdgeList, CsvProviderError> {
        let mut list = EdgeList::default();
        let mut seen_first = false;

        for (index, line) in reader.lines().enumerate() {
            let line_number = index + 1;
            let line = line.map_err(|source| CsvProviderError::Read {
                line: line_number,
                source,
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let parsed = parse_record(&line, self.options.delimiter);
            let is_first = !seen_first;
            seen_first = true;
            if is_first && self.is_header(&line, &parsed) {
                debug!(line = line_number, "skipping header line");
                continue;
            }

            match parsed {
                Ok(record) => list.push(record),
                Err(reason) => self.reject(&mut list, line_number, reason)?,
            }
        }

        Ok(list)
    }

    fn is_header(&self, line: &str, parsed: &Result<Record, RecordError>) -> bool {
        match self.options.header {
            HeaderMode::Present => true,
            HeaderMode::Absent => false,
            HeaderMode::Auto => {
                parsed.is_err() && is_header_like(line, self.options.delimiter)
            }
        }
    }

    fn reject(
        &self,
        list: &mut EdgeList,
        line: usize,
        reason: RecordError,
    ) -> Result<(), CsvProviderError> {
        match self.options.policy {
            RecordPolicy::Strict => Err(CsvProviderError::MalformedRecord { line, reason }),
            RecordPolicy::Skip => {
                warn!(line, reason = %reason, "skipping malformed record");
                list.skipped_records += 1;
                Ok(())
            }
        }
    }
}
