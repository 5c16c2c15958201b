//! The pause after a round: the final score on an empty sky.

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::games::ActiveGame;
use crate::scores::ScoreOutcome;
use crate::ui::game_common::{create_game_layout, draw_big_number, render_status_bar, SKY};
use crate::ui::playfield::{CellGrid, Viewport};
use ratatui::{layout::Rect, style::Color, widgets::Paragraph, Frame};

const FINAL_SCORE: Color = Color::White;
const NEW_BEST: Color = Color::Yellow;

pub fn render_game_over(
    frame: &mut Frame,
    area: Rect,
    game: &ActiveGame,
    remaining_ms: u64,
    outcome: ScoreOutcome,
    forfeited: bool,
) {
    let title = format!(" {} ", game.kind().name());
    let layout = create_game_layout(frame, area, &title, Color::Red, 0);

    if let Some(viewport) = Viewport::fit(layout.content) {
        let mut grid = CellGrid::new(viewport, SKY);
        draw_big_number(
            &mut grid,
            game.score(),
            WORLD_WIDTH / 2.0,
            WORLD_HEIGHT / 2.0,
            FINAL_SCORE,
        );
        if outcome.is_new_best() {
            grid.text_centered(WORLD_WIDTH / 2.0, WORLD_HEIGHT * 0.75, "NEW BEST!", NEW_BEST);
        }
        frame.render_widget(Paragraph::new(grid.into_lines()), viewport.area);
    }

    let seconds = remaining_ms.div_ceil(1000);
    let status = if forfeited {
        format!("Round abandoned - menu in {}s", seconds)
    } else {
        format!("Game over - menu in {}s", seconds)
    };
    render_status_bar(frame, layout.status_bar, &status, Color::Red, &[]);
}
