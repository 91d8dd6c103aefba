//! Error types for delimited edge input.

use std::fmt;
use std::io;
use std::net::Ipv4Addr;
use std::path::PathBuf;

use thiserror::Error;

/// Reasons a single record was rejected.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum RecordError {
    /// The record did not split into exactly three fields.
    #[error("expected 3 fields, found {found}")]
    FieldCount {
        /// Number of fields the line split into.
        found: usize,
    },
    /// A field was not a dotted-quad IPv4 address.
    #[error("invalid IPv4 address `{field}`")]
    InvalidAddress {
        /// The trimmed field text.
        field: String,
    },
    /// The weight field was not a signed 64-bit integer.
    #[error("invalid weight `{field}`")]
    InvalidWeight {
        /// The trimmed field text.
        field: String,
    },
    /// Both endpoints named the same address.
    #[error("self-loop on {address}")]
    SelfLoop {
        /// The repeated address.
        address: Ipv4Addr,
    },
}

/// Errors raised while reading delimited edge input.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CsvProviderError {
    /// The input file could not be opened.
    #[error("failed to open `{}`: {source}", path.display())]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading a line failed, including lines that are not valid UTF-8.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// One-based line number.
        line: usize,
        /// Underlying read error.
        #[source]
        source: io::Error,
    },
    /// A record was rejected under [`crate::RecordPolicy::Strict`].
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord {
        /// One-based line number.
        line: usize,
        /// Why the record was rejected.
        reason: RecordError,
    },
}

/// Stable codes describing [`CsvProviderError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum CsvProviderErrorCode {
    /// The input file could not be opened.
    Io,
    /// A line could not be read.
    Read,
    /// A record was rejected in strict mode.
    MalformedRecord,
}

impl CsvProviderErrorCode {
    /// Return the stable machine-readable representation of this error code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "CSV_IO",
            Self::Read => "CSV_READ",
            Self::MalformedRecord => "CSV_MALFORMED_RECORD",
        }
    }
}

impl fmt::Display for CsvProviderErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl CsvProviderError {
    /// Retrieve the stable [`CsvProviderErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> CsvProviderErrorCode {
        match self {
            Self::Io { .. } => CsvProviderErrorCode::Io,
            Self::Read { .. } => CsvProviderErrorCode::Read,
            Self::MalformedRecord { .. } => CsvProviderErrorCode::MalformedRecord,
        }
    }
}
