//! Error types for the cbt-tess crate.

use thiserror::Error;

/// Main error type for cage and tessellation construction.
#[derive(Debug, Error)]
pub enum Error {
    /// The cage has no faces.
    #[error("cage has no faces")]
    EmptyCage,

    /// The cage exceeds the addressable half-edge range.
    #[error("cage with {halfedges} half-edges exceeds the addressable range")]
    CageTooLarge { halfedges: usize },

    /// A vertex index in the triangle buffer is out of range.
    #[error("vertex index {index} in face {face} is out of range")]
    VertexIndexOutOfRange { face: usize, index: u32 },

    /// Two faces share a directed edge; the surface is not orientable or not
    /// manifold along that edge.
    #[error("non-manifold directed edge ({0}, {1})")]
    NonManifoldEdge(u32, u32),

    /// A face is degenerate (repeated vertex).
    #[error("face {0} repeats a vertex")]
    DegenerateFace(usize),

    /// The configured maximum subdivision depth is zero.
    #[error("maximum subdivision depth must be at least 1")]
    InvalidMaxDepth,

    /// Error from the underlying tree storage.
    #[error(transparent)]
    Tree(#[from] cbt::Error),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
