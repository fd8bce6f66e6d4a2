//! Core types: grid, directions, RNG, configuration, errors.
//!
//! Everything the engine and the session share lives here. None of these
//! types know about sessions or scoring.

pub mod grid;
pub mod direction;
pub mod rng;
pub mod config;
pub mod error;

pub use grid::{is_valid_tile, Cell, Grid, Line, Rows, GRID_SIZE, MAX_TILE};
pub use direction::Direction;
pub use rng::{GameRng, GameRngState};
pub use config::SessionConfig;
pub use error::{GridError, StoreError};
