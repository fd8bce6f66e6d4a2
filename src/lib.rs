//! # rust-2048
//!
//! The classic 4×4 sliding-tile merging puzzle as a library.
//!
//! ## Design Principles
//!
//! 1. **Pure Engine**: Moves, spawns and terminal checks are functions over
//!    a `Grid` value. They hold no state and never fail.
//!
//! 2. **One Primitive**: All four directions run `compact_and_merge_line`
//!    through an orientation step instead of four hand-written loops.
//!
//! 3. **Injected Randomness**: Spawns take an `Rng`; sessions own a seeded
//!    `GameRng`, so every game replays exactly from its seed.
//!
//! ## Modules
//!
//! - `core`: Grid, directions, RNG, configuration, errors
//! - `engine`: Line merge, moves, spawns, terminal detection
//! - `session`: Session controller, snapshots, best-score stores
//!
//! ```
//! use rust_2048::{Direction, Session};
//!
//! let mut session = Session::with_seed(42);
//! let mut turn = 0;
//! while !session.is_over() && turn < 50 {
//!     session.play(Direction::ALL[turn % 4]);
//!     turn += 1;
//! }
//! assert!(session.score() % 4 == 0);
//! ```

pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameRng, GameRngState, Grid, GridError, Line, SessionConfig, StoreError, GRID_SIZE,
};

pub use crate::engine::{
    apply_move, compact_and_merge_line, insert_random_tile, is_terminal, spawn_tile, MoveOutcome,
    Spawn,
};

pub use crate::session::{
    BestScoreStore, FileBestScore, MemoryBestScore, MoveRecord, Session, SessionPhase,
    SessionSnapshot, TurnOutcome,
};
