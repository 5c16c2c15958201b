//! Terminal rendering. Each screen draws from `App` state only.

pub mod flappy_scene;
pub mod game_common;
pub mod game_over_scene;
pub mod menu_scene;
pub mod playfield;
pub mod skybird_scene;
pub mod spikes_scene;

use crate::app::{App, Screen};
use crate::games::ActiveGame;
use game_common::game_layout;
use playfield::Viewport;
use rand::Rng;
use ratatui::{layout::Rect, Frame};

/// Main UI drawing function.
pub fn draw<R: Rng>(frame: &mut Frame, app: &App<R>) {
    let area = frame.size();

    match app.screen() {
        Screen::Menu => menu_scene::render_menu(frame, area, app.menu(), app.scores()),
        Screen::Playing {
            game,
            forfeit_pending,
        } => {
            let best = app.scores().best(game.kind());
            match game {
                ActiveGame::Flappy(g) => {
                    flappy_scene::render_flappy(frame, area, g, best, *forfeit_pending)
                }
                ActiveGame::SkyBird(g) => {
                    skybird_scene::render_skybird(frame, area, g, best, *forfeit_pending)
                }
                ActiveGame::Spikes(g) => {
                    spikes_scene::render_spikes(frame, area, g, best, *forfeit_pending)
                }
            }
        }
        Screen::GameOver {
            game,
            remaining_ms,
            outcome,
            forfeited,
        } => game_over_scene::render_game_over(
            frame,
            area,
            game,
            *remaining_ms,
            *outcome,
            *forfeited,
        ),
    }
}

/// World point under a terminal cell on the menu screen, for mouse input.
pub fn menu_point(area: Rect, column: u16, row: u16) -> Option<(f64, f64)> {
    Viewport::fit(game_layout(area, 0).content)?.cell_to_world(column, row)
}
