//! In-memory best scores backed by the score files.

use crate::games::GameKind;
use crate::utils::persistence::{ScoreError, ScoreStore};
use tracing::{info, warn};

/// How a finished round compares to the stored best.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOutcome {
    /// Below the best; nothing written.
    Below,
    /// Equal to the best; file rewritten with the same value.
    Tied,
    /// Strictly above the previous best.
    NewBest,
}

impl ScoreOutcome {
    pub fn is_new_best(self) -> bool {
        self == ScoreOutcome::NewBest
    }
}

/// Cached best score per game.
#[derive(Debug, Clone)]
pub struct ScoreBook {
    store: ScoreStore,
    best: [u32; 3],
}

impl ScoreBook {
    /// Load all bests. Unreadable or corrupt files are logged and count as 0,
    /// and get overwritten by the next recorded round.
    pub fn load(store: ScoreStore) -> Self {
        let mut best = [0; 3];
        for kind in GameKind::ALL {
            best[kind.index()] = match store.load_best(kind) {
                Ok(score) => score,
                Err(e) => {
                    warn!(game = kind.name(), error = %e, "ignoring unreadable best score");
                    0
                }
            };
        }
        Self { store, best }
    }

    pub fn store(&self) -> &ScoreStore {
        &self.store
    }

    pub fn best(&self, kind: GameKind) -> u32 {
        self.best[kind.index()]
    }

    /// Record a finished round. The file is written whenever
    /// `score >= best`, including ties.
    ///
    /// On a write failure the in-memory best is still updated, so the menu
    /// shows it for the rest of the session.
    pub fn record(&mut self, kind: GameKind, score: u32) -> Result<ScoreOutcome, ScoreError> {
        let previous = self.best(kind);
        if score < previous {
            return Ok(ScoreOutcome::Below);
        }

        self.best[kind.index()] = score;
        let outcome = if score > previous {
            info!(game = kind.name(), score, previous, "new best score");
            ScoreOutcome::NewBest
        } else {
            ScoreOutcome::Tied
        };
        self.store.save_best(kind, score)?;
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn book_in(dir: &std::path::Path) -> ScoreBook {
        ScoreBook::load(ScoreStore::new(dir))
    }

    #[test]
    fn test_load_reads_existing_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("flappy.txt"), "12").unwrap();
        fs::write(dir.path().join("spikes.txt"), "garbage").unwrap();
        let book = book_in(dir.path());
        assert_eq!(book.best(GameKind::Flappy), 12);
        assert_eq!(book.best(GameKind::SkyBird), 0);
        assert_eq!(book.best(GameKind::Spikes), 0);
    }

    #[test]
    fn test_record_new_best_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut book = book_in(dir.path());
        assert_eq!(book.record(GameKind::Spikes, 4).unwrap(), ScoreOutcome::NewBest);
        assert_eq!(book.best(GameKind::Spikes), 4);
        let raw = fs::read_to_string(dir.path().join("spikes.txt")).unwrap();
        assert_eq!(raw, "4");
    }

    #[test]
    fn test_record_below_best_leaves_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("skybird.txt"), "30").unwrap();
        let mut book = book_in(dir.path());
        assert_eq!(book.record(GameKind::SkyBird, 29).unwrap(), ScoreOutcome::Below);
        assert_eq!(book.best(GameKind::SkyBird), 30);
        let raw = fs::read_to_string(dir.path().join("skybird.txt")).unwrap();
        assert_eq!(raw, "30");
    }

    #[test]
    fn test_tie_rewrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut book = book_in(dir.path());
        // Zero ties the default best, so the file gets created.
        assert_eq!(book.record(GameKind::Flappy, 0).unwrap(), ScoreOutcome::Tied);
        assert!(dir.path().join("flappy.txt").exists());
        assert!(!ScoreOutcome::Tied.is_new_best());
    }

    #[test]
    fn test_write_failure_still_updates_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A file where the scores directory should be makes create_dir_all fail.
        let blocked = dir.path().join("not-a-dir");
        fs::write(&blocked, "").unwrap();
        let mut book = book_in(&blocked);
        assert!(book.record(GameKind::Flappy, 3).is_err());
        assert_eq!(book.best(GameKind::Flappy), 3);
    }
}
