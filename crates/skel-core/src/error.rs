//! Error types shared across the skeletonization pipeline.
//!
//! Each pipeline stage (distance/spoke construction, AOF, thinning, the
//! auxiliary filters) returns `Result<T, Error>` using the variants below.
//! No stage in this crate family logs, prints, or performs I/O; failures are
//! always surfaced to the caller rather than recovered internally.

use thiserror::Error;

/// Unified error type for the skeletonization pipeline.
#[derive(Error, Debug)]
pub enum Error {
    /// A required image or field was not supplied.
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// Two images that are expected to share geometry do not.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A parameter value is out of its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A computed value was non-finite (NaN or infinite) where a finite
    /// value was required.
    #[error("numeric error: {0}")]
    Numeric(String),

    /// The operation was cancelled cooperatively before completion.
    #[error("cancelled")]
    Cancelled,
}

/// Result type alias used throughout the skeletonization crates.
pub type Result<T> = std::result::Result<T, Error>;
