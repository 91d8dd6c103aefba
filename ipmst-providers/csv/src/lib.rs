//! Delimited-text provider turning `ip;ip;weight` rows into spanning forest
//! input.
//!
//! [`CsvEdgeReader`] validates each record, interns endpoint addresses into a
//! [`VertexRegistry`] and returns an [`EdgeList`] ready for
//! [`ipmst_core::SpanningForestBuilder`].
//!
//! ```
//! use std::io::Cursor;
//! use ipmst_providers_csv::{CsvEdgeReader, ReaderOptions};
//!
//! let input = "source;target;weight\n10.0.0.1;10.0.0.2;4\n10.0.0.2;10.0.0.3;1\n";
//! let edges = CsvEdgeReader::new(ReaderOptions::default())
//!     .read(Cursor::new(input))
//!     .expect("input is well formed");
//! assert_eq!(edges.vertex_count(), 3);
//! assert_eq!(edges.edges().len(), 2);
//! ```

mod errors;
mod reader;
mod record;
mod registry;

pub use errors::{CsvProviderError, CsvProviderErrorCode, RecordError};
pub use reader::{CsvEdgeReader, EdgeList, HeaderMode, ReaderOptions, RecordPolicy};
pub use registry::VertexRegistry;
