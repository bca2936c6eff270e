//! Error types for the cbt crate.

use thiserror::Error;

/// Main error type for tree construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Requested maximum depth is outside the supported range.
    #[error("tree depth {depth} is out of range (supported: 1..={limit})")]
    DepthOutOfRange { depth: u32, limit: u32 },

    /// Requested initial leaf depth exceeds the maximum depth.
    #[error("initial depth {initial} exceeds maximum depth {maximum}")]
    InitialDepthTooDeep { initial: u32, maximum: u32 },
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
