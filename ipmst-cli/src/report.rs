//! Resolution of a spanning forest back to addresses, and its rendering.
//!
//! [`ForestReport`] pairs each accepted edge with the IPv4 addresses its ids
//! were interned from. It renders either as the fixed-width table operators
//! read on a terminal or as a single JSON object for scripts.

use std::io::{self, Write};
use std::net::Ipv4Addr;

use ipmst_core::SpanningForest;
use ipmst_providers_csv::VertexRegistry;
use serde::Serialize;
use thiserror::Error;

const COLUMN_WIDTH: usize = 30;
const RULE_WIDTH: usize = 80;

/// Errors raised while resolving a forest against a registry.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum ReportError {
    /// A forest edge named an id the registry never assigned.
    #[error("vertex {vertex} has no registered address")]
    UnknownVertex {
        /// The unresolved vertex id.
        vertex: usize,
    },
}

impl ReportError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::UnknownVertex { .. } => "REPORT_UNKNOWN_VERTEX",
        }
    }
}

/// An accepted edge with its endpoints resolved to addresses.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct ReportedEdge {
    /// First endpoint as given in the input.
    pub source: Ipv4Addr,
    /// Second endpoint as given in the input.
    pub target: Ipv4Addr,
    /// Edge weight.
    pub weight: i64,
}

/// Address-level view of a [`SpanningForest`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ForestReport {
    vertices: usize,
    components: usize,
    total_weight: i64,
    edges: Vec<ReportedEdge>,
}

impl ForestReport {
    /// Resolves every edge of `forest` through `registry`.
    ///
    /// # Errors
    /// Returns [`ReportError::UnknownVertex`] when an edge endpoint has no
    /// address in `registry`.
    ///
    /// # Examples
    /// ```
    /// use std::net::Ipv4Addr;
    /// use ipmst_cli::report::ForestReport;
    /// use ipmst_core::{SpanningForestBuilder, WeightedEdge};
    /// use ipmst_providers_csv::VertexRegistry;
    ///
    /// let mut registry = VertexRegistry::new();
    /// let a = registry.intern(Ipv4Addr::new(10, 0, 0, 1));
    /// let b = registry.intern(Ipv4Addr::new(10, 0, 0, 2));
    /// let forest = SpanningForestBuilder::new(registry.len())
    ///     .with_edge(WeightedEdge::new(3, a, b))
    ///     .build()
    ///     .expect("edges are valid");
    /// let report = ForestReport::new(&forest, &registry).expect("ids are registered");
    /// assert_eq!(report.edges()[0].target, Ipv4Addr::new(10, 0, 0, 2));
    /// ```
    pub fn new(forest: &SpanningForest, registry: &VertexRegistry) -> Result<Self, ReportError> {
        let resolve = |vertex: usize| {
            registry
                .address_of(vertex)
                .ok_or(ReportError::UnknownVertex { vertex })
        };
        let edges = forest
            .edges()
            .iter()
            .map(|edge| {
                Ok(ReportedEdge {
                    source: resolve(edge.source())?,
                    target: resolve(edge.target())?,
                    weight: edge.weight(),
                })
            })
            .collect::<Result<Vec<_>, ReportError>>()?;

        Ok(Self {
            vertices: forest.vertex_count(),
            components: forest.component_count(),
            total_weight: forest.total_weight(),
            edges,
        })
    }

    /// Number of vertices in the forest.
    #[must_use]
    pub const fn vertices(&self) -> usize {
        self.vertices
    }

    /// Number of trees, isolated vertices included.
    #[must_use]
    pub const fn components(&self) -> usize {
        self.components
    }

    /// Sum of the accepted edge weights.
    #[must_use]
    pub const fn total_weight(&self) -> i64 {
        self.total_weight
    }

    /// Accepted edges in acceptance order.
    #[must_use]
    pub fn edges(&self) -> &[ReportedEdge] {
        &self.edges
    }
}

/// Writes `report` as a fixed-width table.
///
/// # Errors
/// Returns any error raised by `writer`.
pub fn render_table(report: &ForestReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "{:COLUMN_WIDTH$}Edge{:COLUMN_WIDTH$} :   Weight",
        "", ""
    )?;
    writeln!(writer, "{}", "-".repeat(RULE_WIDTH))?;
    for edge in &report.edges {
        writeln!(
            writer,
            "{:<COLUMN_WIDTH$} -  {:<COLUMN_WIDTH$}  :  {}",
            edge.source, edge.target, edge.weight
        )?;
    }
    writeln!(writer, "The sum of the weights : {}", report.total_weight)?;
    writeln!(writer, "Components : {}", report.components)
}

#[derive(Serialize)]
struct NamedReport<'a> {
    source: &'a str,
    #[serde(flatten)]
    report: &'a ForestReport,
}

/// Writes `report` as one JSON object labelled with `data_source`,
/// followed by a newline.
///
/// # Errors
/// Returns any error raised by `writer` or by serialisation.
pub fn render_json(report: &ForestReport, data_source: &str, mut writer: impl Write) -> io::Result<()> {
    let named = NamedReport {
        source: data_source,
        report,
    };
    serde_json::to_writer(&mut writer, &named)?;
    writeln!(writer)
}
