//! Session configuration.
//!
//! The rules themselves are fixed (4×4 grid, 2/4 spawns, pairwise merges);
//! only how a session is driven is configurable.

use serde::{Deserialize, Serialize};

/// Session configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Seed for the spawn RNG.
    /// Same seed and same moves produce the same game.
    pub seed: u64,

    /// Keep a per-move record (direction, gain, spawn) in the session.
    pub record_history: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            record_history: true,
        }
    }
}

impl SessionConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Disable the move history.
    #[must_use]
    pub fn without_history(mut self) -> Self {
        self.record_history = false;
        self
    }
}
