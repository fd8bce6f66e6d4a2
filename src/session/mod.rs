//! Session controller: one game's grid, score and phase around the engine.
//!
//! - `state`: `Session`, `TurnOutcome`, `MoveRecord`, `SessionPhase`
//! - `snapshot`: save/resume with the RNG position
//! - `best`: `BestScoreStore` and its memory/file implementations

mod state;
mod snapshot;
mod best;

pub use state::{MoveRecord, Session, SessionPhase, TurnOutcome, STARTING_TILES};
pub use snapshot::SessionSnapshot;
pub use best::{BestScoreStore, FileBestScore, MemoryBestScore};
