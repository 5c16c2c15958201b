//! UI rendering for the game menu.

use crate::constants::WORLD_WIDTH;
use crate::games::menu::{MenuState, BEST_SCORE_Y, DESCRIPTION_Y, LOGO_Y};
use crate::scores::ScoreBook;
use crate::ui::game_common::{create_game_layout, draw_bird, render_status_bar, SKY};
use crate::ui::playfield::{Cell, CellGrid, Viewport};
use ratatui::{
    layout::Rect,
    style::Color,
    widgets::Paragraph,
    Frame,
};

const BUTTON: Color = Color::Rgb(220, 120, 40);
const BUTTON_HOVERED: Color = Color::Rgb(250, 180, 70);

const MENU_CONTROLS: &[(&str, &str)] = &[
    ("[←/→]", "Select"),
    ("[Enter]", "Play"),
    ("[1-3]", "Quick pick"),
    ("[Q]", "Quit"),
];

pub fn render_menu(frame: &mut Frame, area: Rect, menu: &MenuState, scores: &ScoreBook) {
    let layout = create_game_layout(frame, area, " Bird Games ", Color::Cyan, 0);

    if let Some(viewport) = Viewport::fit(layout.content) {
        let mut grid = CellGrid::new(viewport, SKY);

        draw_bird(&mut grid, &menu.bird.rect, menu.bird.direction > 0.0);
        grid.text_centered(WORLD_WIDTH / 2.0, LOGO_Y, "B I R D   G A M E S", Color::White);

        for button in &menu.buttons {
            let hovered = menu.hovered == Some(button.kind);
            let color = if hovered { BUTTON_HOVERED } else { BUTTON };
            grid.fill_rect(&button.rect, Cell::solid(color));
            grid.text_centered(
                button.rect.center_x(),
                button.rect.center_y(),
                button.kind.button_label(),
                Color::Black,
            );
        }

        if let Some(kind) = menu.hovered {
            grid.text_centered(WORLD_WIDTH / 2.0, DESCRIPTION_Y, kind.description(), Color::White);
            grid.text_centered(
                WORLD_WIDTH / 2.0,
                BEST_SCORE_Y,
                &format!("Best score: {}", scores.best(kind)),
                Color::White,
            );
        }

        frame.render_widget(Paragraph::new(grid.into_lines()), viewport.area);
    }

    render_status_bar(
        frame,
        layout.status_bar,
        "Pick a game",
        Color::Yellow,
        MENU_CONTROLS,
    );
}
