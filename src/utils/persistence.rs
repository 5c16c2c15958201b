//! Best-score files under ~/.bird-games/best_scores/.
//!
//! Each game keeps one plain-text file holding a single decimal integer.

use crate::constants::{DATA_DIR_NAME, SCORES_DIR_NAME};
use crate::games::GameKind;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("could not access score file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("score file {} does not hold a score: {contents:?}", .path.display())]
    Corrupt { path: PathBuf, contents: String },
}

/// Get the ~/.bird-games/ directory path (not created).
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

/// Default location of the best-score files.
pub fn default_scores_dir() -> io::Result<PathBuf> {
    Ok(data_dir()?.join(SCORES_DIR_NAME))
}

/// Parse score file contents: the first line, surrounding whitespace ignored.
pub fn parse_score(contents: &str) -> Option<u32> {
    contents.lines().next()?.trim().parse().ok()
}

/// Reads and writes the per-game score files in one directory.
#[derive(Debug, Clone)]
pub struct ScoreStore {
    dir: PathBuf,
}

impl ScoreStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, kind: GameKind) -> PathBuf {
        self.dir.join(kind.score_file())
    }

    /// Load the stored best. A missing file means no best yet (0).
    pub fn load_best(&self, kind: GameKind) -> Result<u32, ScoreError> {
        let path = self.path_for(kind);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(source) => return Err(ScoreError::Io { path, source }),
        };
        parse_score(&contents).ok_or(ScoreError::Corrupt { path, contents })
    }

    /// Overwrite the stored best, creating the directory if needed.
    pub fn save_best(&self, kind: GameKind, score: u32) -> Result<(), ScoreError> {
        let path = self.path_for(kind);
        fs::create_dir_all(&self.dir).map_err(|source| ScoreError::Io {
            path: self.dir.clone(),
            source,
        })?;
        fs::write(&path, score.to_string()).map_err(|source| ScoreError::Io { path, source })
    }
}
