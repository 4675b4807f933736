//! High-score persistence: one decimal integer in a text file.

use std::path::{Path, PathBuf};

use crate::error::GameError;

pub trait HighScoreStore {
    /// Stored high score, or 0 when there is none or it cannot be parsed.
    fn read(&self) -> u32;

    fn write(&mut self, score: u32) -> Result<(), GameError>;
}

#[derive(Debug, Clone)]
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileHighScoreStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn read(&self) -> u32 {
        let Ok(contents) = std::fs::read_to_string(&self.path) else {
            return 0;
        };
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            return 0;
        }
        match trimmed.parse() {
            Ok(score) => score,
            Err(_) => {
                log::warn!("Malformed high score in {}", self.path.display());
                0
            }
        }
    }

    fn write(&mut self, score: u32) -> Result<(), GameError> {
        std::fs::write(&self.path, score.to_string())?;
        log::info!("High score {} saved to {}", score, self.path.display());
        Ok(())
    }
}
