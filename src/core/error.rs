//! Error types for grid construction, input parsing, and persistence.
//!
//! Engine operations are infallible: a `Grid` can only be built through a
//! validating constructor, so every error here is raised at the boundary.

use thiserror::Error;

/// Errors raised when building a grid or parsing a direction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("cell ({row}, {col}) holds {value}, which is not a valid tile")]
    InvalidTile { row: usize, col: usize, value: u32 },

    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),
}

/// Errors surfaced by best-score stores and session snapshots.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
