//! Error types for quad-tree construction and configuration.
//!
//! Index operations themselves never fail with an error: `add` and `remove`
//! report out-of-bounds and not-found outcomes as `false`. Errors are
//! reserved for building an index from invalid settings.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuadexError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Invalid bounds [{min_x}, {min_y}, {max_x}, {max_y}]: coordinates must be finite")]
    InvalidBounds {
        min_x: f64,
        min_y: f64,
        max_x: f64,
        max_y: f64,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, QuadexError>;
