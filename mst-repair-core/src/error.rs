//! Error types for the MST repair core library.
//!
//! Defines the error enum exposed by the public API, its stable
//! machine-readable codes, and a convenient result alias.

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

/// Errors returned while building or repairing a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// A vertex index fell outside `[0, vertex_count)`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph or disjoint set.
        vertex_count: usize,
    },
    /// An MST edge position fell outside the current tree.
    #[error("edge index {index} is out of range for an MST with {len} edges")]
    EdgeIndexOutOfRange {
        /// The requested position.
        index: usize,
        /// Number of edges currently held by the MST.
        len: usize,
    },
    /// The replacement search was handed a partition it cannot reconnect.
    #[error("replacement search expects at most two components, got {components}")]
    UnsupportedPartition {
        /// Number of components in the supplied partition.
        components: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// A vertex index fell outside `[0, vertex_count)`.
        VertexOutOfRange => VertexOutOfRange { .. } => "VERTEX_OUT_OF_RANGE",
        /// An MST edge position fell outside the current tree.
        EdgeIndexOutOfRange => EdgeIndexOutOfRange { .. } => "EDGE_INDEX_OUT_OF_RANGE",
        /// The replacement search was handed a partition it cannot reconnect.
        UnsupportedPartition => UnsupportedPartition { .. } => "UNSUPPORTED_PARTITION",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, MstError>;
