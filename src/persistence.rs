//! High-score persistence.
//!
//! The record is a single decimal number in a flat file under the platform
//! data directory. Failures never interrupt gameplay; callers log and move
//! on with an in-memory score.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;

use crate::constants::HIGH_SCORE_KEY;
use crate::error::PersistenceError;

#[derive(Debug, Clone)]
pub struct HighScoreStore {
    dir: Option<PathBuf>,
}

impl Default for HighScoreStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HighScoreStore {
    /// A store rooted at the platform data directory. The directory may not
    /// exist yet; it is created on first save.
    pub fn new() -> Self {
        Self {
            dir: ProjectDirs::from("dev", "kickflip", "kickflip").map(|dirs| dirs.data_dir().to_path_buf()),
        }
    }

    /// A store rooted at an explicit directory.
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir: Some(dir) }
    }

    fn path(&self) -> Result<PathBuf, PersistenceError> {
        let dir = self.dir.as_ref().ok_or(PersistenceError::NoDataDir)?;
        Ok(dir.join(format!("{HIGH_SCORE_KEY}.txt")))
    }

    /// Reads the stored record. `Ok(None)` when nothing was saved yet.
    pub fn load_high_score(&self) -> Result<Option<u32>, PersistenceError> {
        let path = self.path()?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let trimmed = contents.trim();
        trimmed
            .parse::<u32>()
            .map(Some)
            .map_err(|_| PersistenceError::Corrupt(trimmed.to_owned()))
    }

    pub fn save_high_score(&self, score: u32) -> Result<(), PersistenceError> {
        let path = self.path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, format!("{score}\n"))?;
        tracing::debug!(score, path = %path.display(), "High score saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::with_dir(dir.path().to_path_buf());

        assert!(store.load_high_score().unwrap().is_none());
        store.save_high_score(420).unwrap();
        assert_eq!(store.load_high_score().unwrap(), Some(420));

        // Saves overwrite, not append.
        store.save_high_score(9999).unwrap();
        assert_eq!(store.load_high_score().unwrap(), Some(9999));
    }

    #[test]
    fn test_corrupt_record_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::with_dir(dir.path().to_path_buf());

        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(dir.path().join(format!("{HIGH_SCORE_KEY}.txt")), "not a number").unwrap();

        assert!(matches!(store.load_high_score(), Err(PersistenceError::Corrupt(_))));
    }

    #[test]
    fn test_no_data_dir() {
        let store = HighScoreStore { dir: None };
        assert!(matches!(store.load_high_score(), Err(PersistenceError::NoDataDir)));
        assert!(matches!(store.save_high_score(1), Err(PersistenceError::NoDataDir)));
    }
}
