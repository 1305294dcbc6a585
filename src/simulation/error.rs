//! Error types for configuration and persistence.
//!
//! The simulation itself cannot fail; only loading parameters and genomes can.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the configuration and I/O edges.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameters violate an invariant the simulation relies on.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A genome has inconsistent weight matrix shapes.
    #[error("invalid genome: {0}")]
    InvalidGenome(String),

    /// Reading or writing a file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
