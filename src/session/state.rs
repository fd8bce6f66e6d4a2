//! The session controller.
//!
//! A `Session` owns one grid/score pair together with its RNG and drives the
//! engine turn by turn:
//!
//! 1. slide the grid (`apply_move`)
//! 2. if anything changed, add the gain and spawn one tile
//! 3. re-check `is_terminal`; Active becomes Over when it holds
//!
//! Moves on a finished session are rejected until `reset`.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::best::BestScoreStore;
use crate::core::error::Result;
use crate::core::{Direction, GameRng, Grid, SessionConfig};
use crate::engine::{apply_move, is_terminal, spawn_tile, Spawn};

/// Tiles placed on a fresh grid.
pub const STARTING_TILES: usize = 2;

/// Whether a session still accepts moves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    #[default]
    Active,
    Over,
}

/// One applied move, kept in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// 1-based index of the move within the session.
    pub turn: u32,
    pub direction: Direction,
    pub score_delta: u64,
    pub spawn: Option<Spawn>,
}

/// What `Session::play` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The session is over; nothing happened.
    Rejected,
    /// The move would not change the grid; nothing happened.
    Unchanged,
    /// The grid moved, a tile was spawned, and the score grew by `score_delta`.
    Moved {
        score_delta: u64,
        spawn: Option<Spawn>,
        game_over: bool,
    },
}

impl TurnOutcome {
    /// True if the grid changed.
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, TurnOutcome::Moved { .. })
    }
}

/// A single game: grid, score, phase, RNG and history.
#[derive(Clone, Debug)]
pub struct Session {
    pub(super) config: SessionConfig,
    pub(super) grid: Grid,
    pub(super) score: u64,
    pub(super) phase: SessionPhase,
    pub(super) moves: u32,
    pub(super) rng: GameRng,
    pub(super) history: Vector<MoveRecord>,
}

impl Session {
    /// Start a session: empty grid, score 0, then two spawns.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let rng = GameRng::new(config.seed);
        let mut session = Self {
            config,
            grid: Grid::empty(),
            score: 0,
            phase: SessionPhase::Active,
            moves: 0,
            rng,
            history: Vector::new(),
        };
        session.start();
        debug!(seed = session.config.seed, "session started");
        session
    }

    /// Start a session with default config and the given seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(SessionConfig::default().with_seed(seed))
    }

    /// Discard the current game and start a fresh one.
    ///
    /// The RNG is not re-seeded, so consecutive games differ.
    pub fn reset(&mut self) {
        self.start();
        debug!(seed = self.config.seed, "session reset");
    }

    fn start(&mut self) {
        self.grid = Grid::empty();
        self.score = 0;
        self.phase = SessionPhase::Active;
        self.moves = 0;
        self.history = Vector::new();

        for _ in 0..STARTING_TILES {
            spawn_tile(&mut self.grid, &mut self.rng);
        }
    }

    /// Play one move.
    pub fn play(&mut self, direction: Direction) -> TurnOutcome {
        if self.phase == SessionPhase::Over {
            debug!(%direction, "move rejected: session is over");
            return TurnOutcome::Rejected;
        }

        let outcome = apply_move(&self.grid, direction);
        if !outcome.changed {
            return TurnOutcome::Unchanged;
        }

        self.grid = outcome.grid;
        self.score += outcome.score_delta;
        self.moves += 1;

        let spawn = spawn_tile(&mut self.grid, &mut self.rng);
        let game_over = is_terminal(&self.grid);

        if self.config.record_history {
            self.history.push_back(MoveRecord {
                turn: self.moves,
                direction,
                score_delta: outcome.score_delta,
                spawn,
            });
        }

        debug!(
            %direction,
            score_delta = outcome.score_delta,
            score = self.score,
            "move applied"
        );

        if game_over {
            self.phase = SessionPhase::Over;
            info!(
                score = self.score,
                moves = self.moves,
                max_tile = self.grid.max_tile(),
                "game over"
            );
        }

        TurnOutcome::Moved {
            score_delta: outcome.score_delta,
            spawn,
            game_over,
        }
    }

    /// Hand the final score to a best-score store.
    ///
    /// Returns `Ok(true)` if it became the new best. An active session
    /// submits nothing and returns `Ok(false)`.
    pub fn submit_best<S: BestScoreStore + ?Sized>(&self, store: &mut S) -> Result<bool> {
        if self.phase != SessionPhase::Over {
            return Ok(false);
        }
        let improved = store.submit(self.score)?;
        if improved {
            info!(score = self.score, "new best score");
        }
        Ok(improved)
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[must_use]
    pub fn score(&self) -> u64 {
        self.score
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::Over
    }

    /// Moves that changed the grid since the last start/reset.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.moves
    }

    /// Applied moves, oldest first. Empty when history is disabled.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }
}
