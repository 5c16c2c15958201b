//! Integration test: full sessions through the app state machine
//!
//! Drives `App` the way the terminal loop does (key events plus wall-clock
//! deltas) and checks the screens it moves through and the score files it
//! leaves behind.

use bird_games::app::{App, Screen};
use bird_games::games::{ActiveGame, GameKind};
use bird_games::scores::{ScoreBook, ScoreOutcome};
use bird_games::utils::persistence::ScoreStore;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::path::Path;

fn new_app(dir: &Path, release_events: bool) -> App<ChaCha8Rng> {
    let scores = ScoreBook::load(ScoreStore::new(dir));
    App::with_rng(scores, release_events, ChaCha8Rng::seed_from_u64(2024))
}

fn press(app: &mut App<ChaCha8Rng>, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn release(app: &mut App<ChaCha8Rng>, code: KeyCode) {
    app.handle_key(KeyEvent::new_with_kind(
        code,
        KeyModifiers::NONE,
        KeyEventKind::Release,
    ));
}

/// Advance in 100ms frames until the menu is back, failing after `limit_ms`.
fn wait_for_menu(app: &mut App<ChaCha8Rng>, limit_ms: u64) {
    let mut waited = 0;
    while !matches!(app.screen(), Screen::Menu) {
        assert!(waited < limit_ms, "still not on the menu after {}ms", waited);
        app.advance(100);
        waited += 100;
    }
}

#[test]
fn test_flappy_crash_keeps_higher_stored_best() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("flappy.txt"), "5").unwrap();
    let mut app = new_app(dir.path(), false);
    assert_eq!(app.scores().best(GameKind::Flappy), 5);

    // Select with the keyboard and confirm.
    press(&mut app, KeyCode::Right);
    press(&mut app, KeyCode::Enter);
    assert!(matches!(
        app.screen(),
        Screen::Playing {
            game: ActiveGame::Flappy(_),
            ..
        }
    ));

    // Without flapping the bird drops to the floor in well under a second.
    for _ in 0..10 {
        app.advance(100);
    }
    match app.screen() {
        Screen::GameOver { game, outcome, .. } => {
            assert_eq!(game.score(), 0);
            assert_eq!(*outcome, ScoreOutcome::Below);
        }
        other => panic!("expected game over, got {:?}", other),
    }

    wait_for_menu(&mut app, 2_000);
    assert_eq!(fs::read_to_string(dir.path().join("flappy.txt")).unwrap(), "5");
    assert_eq!(app.scores().best(GameKind::Flappy), 5);
}

#[test]
fn test_skybird_climb_records_new_best() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = new_app(dir.path(), true);
    press(&mut app, KeyCode::Char('2'));

    // Steer toward the next platform up until the bird has landed on it.
    let mut held: Option<KeyCode> = None;
    let mut frames = 0;
    loop {
        let game = match app.screen() {
            Screen::Playing {
                game: ActiveGame::SkyBird(game),
                ..
            } => game,
            other => panic!("round ended early: {:?}", other),
        };
        if game.score >= 1 {
            break;
        }
        assert!(frames < 3_000, "never reached the first platform");

        let want = game
            .platforms
            .iter()
            .find(|p| p.number == game.score + 1)
            .map(|p| p.rect.center_x())
            .unwrap_or(game.bird.center_x());
        let desired_vx = ((want - game.bird.center_x()) / 15.0).clamp(-6.0, 6.0);
        let key = if game.velocity_x < desired_vx - 0.15 {
            Some(KeyCode::Char('d'))
        } else if game.velocity_x > desired_vx + 0.15 {
            Some(KeyCode::Char('a'))
        } else {
            None
        };
        if key != held {
            if let Some(old) = held {
                release(&mut app, old);
            }
            if let Some(new) = key {
                press(&mut app, new);
            }
            held = key;
        }

        app.advance(10);
        frames += 1;
    }

    // Leave the round: Esc asks, Esc confirms.
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Esc);
    let score = match app.screen() {
        Screen::GameOver {
            game,
            outcome,
            forfeited,
            ..
        } => {
            assert!(*forfeited);
            assert_eq!(*outcome, ScoreOutcome::NewBest);
            game.score()
        }
        other => panic!("expected game over, got {:?}", other),
    };
    assert!(score >= 1);

    wait_for_menu(&mut app, 2_000);
    let raw = fs::read_to_string(dir.path().join("skybird.txt")).unwrap();
    assert_eq!(raw, score.to_string());
    assert_eq!(app.scores().best(GameKind::SkyBird), score);

    // A fresh session sees the saved best.
    let reloaded = new_app(dir.path(), false);
    assert_eq!(reloaded.scores().best(GameKind::SkyBird), score);
}

#[test]
fn test_keys_during_game_over_pause_are_ignored() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = new_app(dir.path(), false);
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Esc);
    assert!(matches!(app.screen(), Screen::GameOver { .. }));

    press(&mut app, KeyCode::Char('1'));
    press(&mut app, KeyCode::Char('q'));
    assert!(matches!(app.screen(), Screen::GameOver { .. }));
    assert!(!app.should_quit());

    // The pause runs out after two seconds of frames.
    app.advance(100);
    wait_for_menu(&mut app, 1_900);
    assert_eq!(fs::read_to_string(dir.path().join("spikes.txt")).unwrap(), "0");

    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
