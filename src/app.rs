//! Top-level app state: which screen is up, the fixed-step clock and input.
//!
//! The frame loop in `main` feeds terminal events into `handle_key` and
//! `handle_mouse`, then calls `advance` with the wall-clock time since the
//! previous frame. `advance` turns that into whole 120 Hz physics steps.

use crate::constants::{GAME_OVER_DELAY_MS, MAX_FRAME_DT_MS, TICK_INTERVAL_US};
use crate::games::menu::{process_input, MenuAction};
use crate::games::{ActiveGame, GameKind, MenuState};
use crate::input::{game_key, is_interrupt, menu_input, HeldKeys};
use crate::scores::{ScoreBook, ScoreOutcome};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, error, info};

/// The screen currently shown.
#[derive(Debug, Clone)]
pub enum Screen {
    Menu,
    Playing {
        game: ActiveGame,
        /// Esc was pressed once; a second Esc ends the round.
        forfeit_pending: bool,
    },
    GameOver {
        game: ActiveGame,
        remaining_ms: u64,
        outcome: ScoreOutcome,
        forfeited: bool,
    },
}

pub struct App<R: Rng = StdRng> {
    screen: Screen,
    menu: MenuState,
    scores: ScoreBook,
    keys: HeldKeys,
    rng: R,
    clock_ms: u64,
    accumulator_us: u64,
    quit: bool,
}

impl App<StdRng> {
    pub fn new(scores: ScoreBook, release_events: bool) -> Self {
        Self::with_rng(scores, release_events, StdRng::from_entropy())
    }
}

impl<R: Rng> App<R> {
    pub fn with_rng(scores: ScoreBook, release_events: bool, rng: R) -> Self {
        Self {
            screen: Screen::Menu,
            menu: MenuState::new(),
            scores,
            keys: HeldKeys::new(release_events),
            rng,
            clock_ms: 0,
            accumulator_us: 0,
            quit: false,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn menu(&self) -> &MenuState {
        &self.menu
    }

    pub fn scores(&self) -> &ScoreBook {
        &self.scores
    }

    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance by `dt_ms` of wall-clock time.
    pub fn advance(&mut self, dt_ms: u64) {
        let dt_ms = dt_ms.min(MAX_FRAME_DT_MS);
        self.clock_ms += dt_ms;

        if let Screen::GameOver { remaining_ms, .. } = &mut self.screen {
            *remaining_ms = remaining_ms.saturating_sub(dt_ms);
            if *remaining_ms == 0 {
                debug!("game over pause finished");
                self.screen = Screen::Menu;
                self.accumulator_us = 0;
            }
            return;
        }

        if matches!(
            self.screen,
            Screen::Playing {
                forfeit_pending: true,
                ..
            }
        ) {
            return;
        }

        self.accumulator_us += dt_ms * 1000;
        while self.accumulator_us >= TICK_INTERVAL_US {
            self.accumulator_us -= TICK_INTERVAL_US;
            self.step();
            if matches!(self.screen, Screen::GameOver { .. }) {
                self.accumulator_us = 0;
                break;
            }
        }
    }

    /// One fixed physics step of whatever is on screen.
    fn step(&mut self) {
        match &mut self.screen {
            Screen::Menu => self.menu.tick(),
            Screen::Playing { game, .. } => {
                let controls = self.keys.controls(self.clock_ms);
                game.tick(controls, &mut self.rng);
                if game.is_over() {
                    self.finish_round(false);
                }
            }
            Screen::GameOver { .. } => {}
        }
    }

    pub fn start_game(&mut self, kind: GameKind) {
        info!(game = kind.name(), "starting game");
        self.screen = Screen::Playing {
            game: ActiveGame::start(kind, &mut self.rng),
            forfeit_pending: false,
        };
        self.keys.clear();
        self.accumulator_us = 0;
    }

    /// Move the current round to the game-over screen and record its score.
    fn finish_round(&mut self, forfeited: bool) {
        let mut game = match std::mem::replace(&mut self.screen, Screen::Menu) {
            Screen::Playing { game, .. } => game,
            other => {
                self.screen = other;
                return;
            }
        };
        game.end();

        let kind = game.kind();
        let score = game.score();
        let previous = self.scores.best(kind);
        info!(game = kind.name(), score, forfeited, "game over");

        let outcome = match self.scores.record(kind, score) {
            Ok(outcome) => outcome,
            Err(e) => {
                error!(game = kind.name(), error = %e, "failed to save best score");
                if score > previous {
                    ScoreOutcome::NewBest
                } else if score == previous {
                    ScoreOutcome::Tied
                } else {
                    ScoreOutcome::Below
                }
            }
        };

        self.keys.clear();
        self.screen = Screen::GameOver {
            game,
            remaining_ms: GAME_OVER_DELAY_MS,
            outcome,
            forfeited,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            if let Some(game_key) = game_key(key.code) {
                self.keys.release(game_key);
            }
            return;
        }

        if is_interrupt(&key) {
            info!("interrupted");
            self.quit = true;
            return;
        }

        match &mut self.screen {
            Screen::Menu => match process_input(&mut self.menu, menu_input(key.code)) {
                MenuAction::Start(kind) => self.start_game(kind),
                MenuAction::Quit => self.quit = true,
                MenuAction::None => {}
            },
            Screen::Playing {
                forfeit_pending, ..
            } => {
                if key.code == KeyCode::Esc {
                    // A held Esc must not confirm its own prompt.
                    if key.kind == KeyEventKind::Repeat {
                        return;
                    }
                    if *forfeit_pending {
                        self.finish_round(true);
                    } else {
                        *forfeit_pending = true;
                        self.keys.clear();
                    }
                } else if *forfeit_pending {
                    *forfeit_pending = false;
                } else if let Some(game_key) = game_key(key.code) {
                    self.keys.press(game_key, self.clock_ms);
                }
            }
            Screen::GameOver { .. } => {}
        }
    }

    /// Mouse input, already mapped to world coordinates. Only the menu uses it.
    pub fn handle_mouse(&mut self, kind: MouseEventKind, x: f64, y: f64) {
        if !matches!(self.screen, Screen::Menu) {
            return;
        }
        match kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.menu.hover_at(x, y),
            MouseEventKind::Down(MouseButton::Left) => {
                if let MenuAction::Start(kind) = self.menu.click_at(x, y) {
                    self.start_game(kind);
                }
            }
            _ => {}
        }
    }
}
