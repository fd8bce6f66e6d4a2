//! Session snapshots for save/resume.
//!
//! A snapshot carries the RNG position, so a restored session spawns
//! exactly the tiles the original would have.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::state::{MoveRecord, Session, SessionPhase};
use crate::core::error::Result;
use crate::core::{GameRng, GameRngState, Grid, SessionConfig};

/// Everything needed to resume a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub grid: Grid,
    pub score: u64,
    pub phase: SessionPhase,
    pub moves: u32,
    pub rng: GameRngState,
    pub history: Vector<MoveRecord>,
}

impl SessionSnapshot {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode bytes produced by [`to_bytes`](Self::to_bytes).
    ///
    /// The grid is re-validated on the way in.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}

impl Session {
    /// Capture the current state.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            grid: self.grid,
            score: self.score,
            phase: self.phase,
            moves: self.moves,
            rng: self.rng.state(),
            history: self.history.clone(),
        }
    }

    /// Resume from a snapshot. The config's seed is kept for reference only;
    /// the RNG continues from the snapshot's position.
    #[must_use]
    pub fn restore(config: SessionConfig, snapshot: SessionSnapshot) -> Self {
        let history = if config.record_history {
            snapshot.history
        } else {
            Vector::new()
        };
        Self {
            config,
            grid: snapshot.grid,
            score: snapshot.score,
            phase: snapshot.phase,
            moves: snapshot.moves,
            rng: GameRng::from_state(&snapshot.rng),
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Direction, StoreError};

    fn advanced(seed: u64, turns: usize) -> Session {
        let mut session = Session::with_seed(seed);
        for i in 0..turns {
            session.play(Direction::ALL[i % 4]);
        }
        session
    }

    #[test]
    fn test_restore_continues_identically() {
        let mut original = advanced(42, 20);
        let mut restored = Session::restore(original.config().clone(), original.snapshot());

        assert_eq!(restored.grid(), original.grid());
        assert_eq!(restored.score(), original.score());
        assert_eq!(restored.move_count(), original.move_count());

        for i in 0..40 {
            let dir = Direction::ALL[(i * 3) % 4];
            assert_eq!(original.play(dir), restored.play(dir));
        }
        assert_eq!(restored.grid(), original.grid());
        assert_eq!(restored.history(), original.history());
    }

    #[test]
    fn test_bytes_round_trip() {
        let session = advanced(7, 15);
        let snapshot = session.snapshot();

        let bytes = snapshot.to_bytes().unwrap();
        let decoded = SessionSnapshot::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, snapshot);
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let result = SessionSnapshot::from_bytes(&[0xFF; 3]);
        assert!(matches!(result, Err(StoreError::Encoding(_))));
    }

    #[test]
    fn test_restore_without_history() {
        let session = advanced(3, 10);
        let restored = Session::restore(SessionConfig::default().without_history(), session.snapshot());
        assert!(restored.history().is_empty());
        assert_eq!(restored.score(), session.score());
    }
}
