//! Integration test: best-score files across sessions
//!
//! Each game keeps its best in `<scores dir>/<game>.txt` as bare decimal text.
//! These tests cover what survives between runs and how bad files are handled.

use bird_games::config::{command_from, Command};
use bird_games::games::GameKind;
use bird_games::scores::{ScoreBook, ScoreOutcome};
use bird_games::utils::persistence::{ScoreError, ScoreStore};
use std::fs;
use std::path::PathBuf;

#[test]
fn test_bests_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let scores_dir = dir.path().join("best_scores");

    let mut first = ScoreBook::load(ScoreStore::new(&scores_dir));
    assert_eq!(first.record(GameKind::Flappy, 7).unwrap(), ScoreOutcome::NewBest);
    assert_eq!(first.record(GameKind::Spikes, 2).unwrap(), ScoreOutcome::NewBest);
    assert_eq!(first.record(GameKind::Flappy, 3).unwrap(), ScoreOutcome::Below);

    let second = ScoreBook::load(ScoreStore::new(&scores_dir));
    assert_eq!(second.best(GameKind::Flappy), 7);
    assert_eq!(second.best(GameKind::SkyBird), 0);
    assert_eq!(second.best(GameKind::Spikes), 2);

    // Exactly one file per game that has been played.
    let mut names: Vec<String> = fs::read_dir(&scores_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["flappy.txt", "spikes.txt"]);
}

#[test]
fn test_file_format_is_bare_integer() {
    let dir = tempfile::tempdir().unwrap();
    let store = ScoreStore::new(dir.path());
    store.save_best(GameKind::SkyBird, 123).unwrap();
    let raw = fs::read(dir.path().join("skybird.txt")).unwrap();
    assert_eq!(raw, b"123");
}

#[test]
fn test_hand_edited_file_with_newline_is_read() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("spikes.txt"), "42\n").unwrap();
    let book = ScoreBook::load(ScoreStore::new(dir.path()));
    assert_eq!(book.best(GameKind::Spikes), 42);
}

#[test]
fn test_corrupt_file_is_replaced_by_next_round() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flappy.txt");
    fs::write(&path, "not a number").unwrap();

    let store = ScoreStore::new(dir.path());
    assert!(matches!(
        store.load_best(GameKind::Flappy),
        Err(ScoreError::Corrupt { .. })
    ));

    let mut book = ScoreBook::load(store);
    assert_eq!(book.best(GameKind::Flappy), 0);
    assert_eq!(book.record(GameKind::Flappy, 0).unwrap(), ScoreOutcome::Tied);
    assert_eq!(fs::read_to_string(&path).unwrap(), "0");
}

#[test]
fn test_scores_dir_from_environment() {
    let args = vec!["--log-file".to_string(), "/tmp/bird-games.log".to_string()];
    let cmd = command_from(args, Some("/srv/bird-scores".to_string())).unwrap();
    match cmd {
        Command::Run(config) => {
            assert_eq!(config.scores_dir, PathBuf::from("/srv/bird-scores"));
            let store = ScoreStore::new(&config.scores_dir);
            assert_eq!(
                store.path_for(GameKind::Spikes),
                PathBuf::from("/srv/bird-scores/spikes.txt")
            );
        }
        other => panic!("expected run command, got {:?}", other),
    }
}
