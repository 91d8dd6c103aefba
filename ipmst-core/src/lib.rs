//! ipmst core library.
//!
//! Computes minimum spanning forests over graphs whose vertices are dense ids
//! `0..vertex_count` and whose edges carry signed integer weights. Parsing,
//! vertex interning and reporting live in the provider and CLI crates; this
//! crate only sees ids and weights, and never logs.
//!
//! # Examples
//! ```
//! use ipmst_core::{SpanningForestBuilder, WeightedEdge};
//!
//! let forest = SpanningForestBuilder::new(3)
//!     .with_edges([
//!         WeightedEdge::new(4, 0, 1),
//!         WeightedEdge::new(1, 1, 2),
//!         WeightedEdge::new(7, 0, 2),
//!     ])
//!     .build()?;
//! assert_eq!(forest.total_weight(), 5);
//! assert!(forest.is_tree());
//! # Ok::<(), ipmst_core::ForestError>(())
//! ```

mod error;
mod forest;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    error::{ForestError, ForestErrorCode, Result},
    forest::{
        DisjointSetForest, SpanningForest, SpanningForestBuilder, TieBreak, WeightedEdge, kruskal,
    },
};
