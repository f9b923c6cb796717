//! Error types for the primpath core library.
//!
//! Defines error enums exposed by the public API and a convenient result alias.

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
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while tokenising the textual problem description.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InputError {
    /// The input ended before a required value was read.
    #[error("input ended while reading {expected}")]
    UnexpectedEnd {
        /// Description of the value the parser was waiting for.
        expected: &'static str,
    },
    /// A token could not be parsed as a signed integer.
    #[error("token `{token}` at position {position} is not an integer")]
    InvalidInteger {
        /// The offending token.
        token: String,
        /// Zero-based token position within the input.
        position: usize,
    },
    /// The declared number of edges was negative.
    #[error("edge count must be non-negative (got {got})")]
    NegativeEdgeCount {
        /// The declared edge count.
        got: i64,
    },
}

define_error_codes! {
    /// Stable codes describing [`InputError`] variants.
    enum InputErrorCode for InputError {
        /// The input ended before a required value was read.
        UnexpectedEnd => UnexpectedEnd { .. } => "INPUT_UNEXPECTED_END",
        /// A token could not be parsed as a signed integer.
        InvalidInteger => InvalidInteger { .. } => "INPUT_INVALID_INTEGER",
        /// The declared number of edges was negative.
        NegativeEdgeCount => NegativeEdgeCount { .. } => "INPUT_NEGATIVE_EDGE_COUNT",
    }
}

/// Reason an edge triple was rejected before insertion.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeViolation {
    /// An endpoint lies outside `[0, vertex_count)`.
    EndpointOutOfRange,
    /// Both endpoints name the same vertex.
    SelfLoop,
    /// The cost is negative.
    NegativeCost,
}

impl EdgeViolation {
    /// Returns a short human-readable description.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EndpointOutOfRange => "endpoint out of range",
            Self::SelfLoop => "self-loop",
            Self::NegativeCost => "negative cost",
        }
    }
}

impl fmt::Display for EdgeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type produced by the graph, spanning tree, and path stages.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PrimPathError {
    /// The vertex count was negative.
    #[error("vertex count must be non-negative (got {got})")]
    InvalidVertexCount {
        /// The declared vertex count.
        got: i64,
    },
    /// An edge triple violated the endpoint, self-loop, or cost rules.
    #[error("edge #{index} ({left}, {right}, cost {cost}) rejected: {violation}")]
    InvalidEdgeSpec {
        /// Zero-based position of the edge in the input.
        index: usize,
        /// First endpoint as supplied.
        left: i64,
        /// Second endpoint as supplied.
        right: i64,
        /// Cost as supplied.
        cost: i64,
        /// The rule that was broken.
        violation: EdgeViolation,
    },
    /// A second edge was supplied for an already connected pair.
    #[error("edge #{index} duplicates the existing edge between {left} and {right}")]
    DuplicateEdge {
        /// Zero-based position of the duplicate in the input.
        index: usize,
        /// First endpoint.
        left: usize,
        /// Second endpoint.
        right: usize,
    },
    /// Prim's algorithm selected a vertex that cannot be reached from the root.
    #[error("graph is disconnected: vertex {vertex} of {vertex_count} is unreachable from the root")]
    DisconnectedGraph {
        /// The first unreachable vertex selected.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// A path query endpoint was outside `[0, vertex_count)`.
    #[error("query ({first}, {last}) is out of bounds for {vertex_count} vertices")]
    InvalidQueryBounds {
        /// Requested start vertex as supplied.
        first: i64,
        /// Requested end vertex as supplied.
        last: i64,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// The depth-first search exhausted the tree without reaching the target.
    #[error("no path from {first} to {last}")]
    NoPathFound {
        /// Start vertex.
        first: usize,
        /// Unreached target vertex.
        last: usize,
    },
    /// Storage for a structure could not be reserved.
    #[error("failed to allocate {resource} for {requested} entries")]
    AllocationFailure {
        /// Name of the structure being allocated.
        resource: &'static str,
        /// Number of entries requested.
        requested: usize,
    },
    /// The configured Prim root does not name a vertex.
    #[error("root {root} is out of bounds for {vertex_count} vertices")]
    InvalidRoot {
        /// Configured root vertex.
        root: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// The textual problem description was malformed.
    #[error("malformed input: {0}")]
    Input(#[from] InputError),
}

define_error_codes! {
    /// Stable codes describing [`PrimPathError`] variants.
    enum PrimPathErrorCode for PrimPathError {
        /// The vertex count was negative.
        InvalidVertexCount => InvalidVertexCount { .. } => "PRIMPATH_INVALID_VERTEX_COUNT",
        /// An edge triple violated the endpoint, self-loop, or cost rules.
        InvalidEdgeSpec => InvalidEdgeSpec { .. } => "PRIMPATH_INVALID_EDGE_SPEC",
        /// A second edge was supplied for an already connected pair.
        DuplicateEdge => DuplicateEdge { .. } => "PRIMPATH_DUPLICATE_EDGE",
        /// Prim's algorithm could not reach every vertex.
        DisconnectedGraph => DisconnectedGraph { .. } => "PRIMPATH_DISCONNECTED_GRAPH",
        /// A path query endpoint was out of range.
        InvalidQueryBounds => InvalidQueryBounds { .. } => "PRIMPATH_INVALID_QUERY_BOUNDS",
        /// The search exhausted the tree without reaching the target.
        NoPathFound => NoPathFound { .. } => "PRIMPATH_NO_PATH_FOUND",
        /// Storage for a structure could not be reserved.
        AllocationFailure => AllocationFailure { .. } => "PRIMPATH_ALLOCATION_FAILURE",
        /// The configured Prim root does not name a vertex.
        InvalidRoot => InvalidRoot { .. } => "PRIMPATH_INVALID_ROOT",
        /// The textual problem description was malformed.
        MalformedInput => Input { .. } => "PRIMPATH_MALFORMED_INPUT",
    }
}

impl PrimPathError {
    /// Retrieve the inner [`InputErrorCode`] when the error originated in the input parser.
    pub const fn input_code(&self) -> Option<InputErrorCode> {
        match self {
            Self::Input(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, PrimPathError>;
