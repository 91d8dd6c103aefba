//! Error types for the ipmst core library.
//!
//! Defines the forest construction error, its stable codes and a result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised while building a spanning forest or operating on its
/// disjoint-set structure.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ForestError {
    /// A vertex id fell outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for vertex_count {vertex_count}")]
    OutOfRangeVertex {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices the structure was sized for.
        vertex_count: usize,
    },
    /// An edge joined a vertex to itself.
    #[error("edge ({vertex}, {vertex}) is a self-loop")]
    SelfLoop {
        /// The vertex on both ends of the edge.
        vertex: usize,
    },
    /// `union` received a vertex that is not the representative of its set.
    #[error("vertex {vertex} is not the representative of its set")]
    NotRepresentative {
        /// The non-representative vertex.
        vertex: usize,
    },
    /// `union` received the same representative twice.
    #[error("set represented by {vertex} cannot be merged with itself")]
    AlreadyMerged {
        /// The representative passed on both sides.
        vertex: usize,
    },
    /// The sum of accepted weights does not fit in `i64`.
    #[error("total weight {total} does not fit in a signed 64-bit integer")]
    WeightOverflow {
        /// Exact sum of the accepted weights.
        total: i128,
    },
}

define_error_codes! {
    /// Stable codes describing [`ForestError`] variants.
    enum ForestErrorCode for ForestError {
        /// A vertex id fell outside `0..vertex_count`.
        OutOfRangeVertex => OutOfRangeVertex { .. } => "FOREST_OUT_OF_RANGE_VERTEX",
        /// An edge joined a vertex to itself.
        SelfLoop => SelfLoop { .. } => "FOREST_SELF_LOOP",
        /// `union` received a non-representative vertex.
        NotRepresentative => NotRepresentative { .. } => "FOREST_NOT_REPRESENTATIVE",
        /// `union` received the same representative twice.
        AlreadyMerged => AlreadyMerged { .. } => "FOREST_ALREADY_MERGED",
        /// The total weight overflowed.
        WeightOverflow => WeightOverflow { .. } => "FOREST_WEIGHT_OVERFLOW",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ForestError>;
