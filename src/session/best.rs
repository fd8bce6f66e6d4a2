//! Best-score persistence.
//!
//! Stores implement `load`/`save`; the provided `submit` keeps the maximum.
//! A session only submits once it is over.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::error::Result;

/// Somewhere to keep the best final score across sessions.
pub trait BestScoreStore {
    /// Current best score (0 if nothing was stored yet).
    fn load(&self) -> Result<u64>;

    /// Overwrite the stored best score.
    fn save(&mut self, best: u64) -> Result<()>;

    /// Record a final score. Saves and returns `true` only if it beats the
    /// stored best.
    fn submit(&mut self, score: u64) -> Result<bool> {
        if score > self.load()? {
            self.save(score)?;
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

/// In-process store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryBestScore {
    best: u64,
}

impl MemoryBestScore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl BestScoreStore for MemoryBestScore {
    fn load(&self) -> Result<u64> {
        Ok(self.best)
    }

    fn save(&mut self, best: u64) -> Result<()> {
        self.best = best;
        Ok(())
    }
}

/// Single bincode-encoded `u64` in a file. A missing file reads as 0.
#[derive(Clone, Debug)]
pub struct FileBestScore {
    path: PathBuf,
}

impl FileBestScore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileBestScore {
    fn load(&self) -> Result<u64> {
        match fs::read(&self.path) {
            Ok(bytes) => {
                let best = bincode::deserialize(&bytes)?;
                debug!(path = %self.path.display(), best, "loaded best score");
                Ok(best)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, best: u64) -> Result<()> {
        let bytes = bincode::serialize(&best)?;
        fs::write(&self.path, bytes)?;
        debug!(path = %self.path.display(), best, "saved best score");
        Ok(())
    }
}
