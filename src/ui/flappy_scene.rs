//! UI rendering for Flappy Bird.

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::games::flappy::FlappyGame;
use crate::games::GameKind;
use crate::ui::game_common::{
    create_game_layout, draw_big_number, draw_bird, info_line, render_forfeit_status_bar,
    render_info_panel_frame, render_status_bar, INFO_PANEL_WIDTH, SCORE_DIGITS, SKY,
};
use crate::ui::playfield::{Cell, CellGrid, Viewport};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const PIPE: Color = Color::Rgb(40, 170, 60);
const PIPE_EDGE: Color = Color::Rgb(20, 110, 35);

/// Render the Flappy Bird game scene.
pub fn render_flappy(
    frame: &mut Frame,
    area: Rect,
    game: &FlappyGame,
    best: u32,
    forfeit_pending: bool,
) {
    let layout = create_game_layout(frame, area, " Flappy Bird ", Color::Cyan, INFO_PANEL_WIDTH);
    render_play_area(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game, best, forfeit_pending);
    render_info_panel(frame, layout.info_panel, game, best);
}

/// Render the play field: score digits, pipes, then the bird.
fn render_play_area(frame: &mut Frame, area: Rect, game: &FlappyGame) {
    let Some(viewport) = Viewport::fit(area) else {
        return;
    };
    let mut grid = CellGrid::new(viewport, SKY);
    draw_big_number(
        &mut grid,
        game.score,
        WORLD_WIDTH / 2.0,
        WORLD_HEIGHT / 2.0,
        SCORE_DIGITS,
    );

    for pipe in &game.pipes {
        grid.fill_rect(&pipe.upper, Cell::solid(PIPE));
        grid.fill_rect(&pipe.lower, Cell::solid(PIPE));
        // Darker lips on both sides of the gap.
        let mut lip = pipe.upper;
        lip.set_top(pipe.upper.bottom() - 1.0);
        lip.h = 1.0;
        grid.fill_rect(&lip, Cell::glyph('▀', PIPE_EDGE, PIPE));
        let mut lip = pipe.lower;
        lip.h = 1.0;
        grid.fill_rect(&lip, Cell::glyph('▄', PIPE_EDGE, PIPE));
    }

    draw_bird(&mut grid, &game.bird, true);

    frame.render_widget(Paragraph::new(grid.into_lines()), viewport.area);
}

fn render_status_bar_content(
    frame: &mut Frame,
    area: Rect,
    game: &FlappyGame,
    best: u32,
    forfeit_pending: bool,
) {
    if render_forfeit_status_bar(frame, area, forfeit_pending) {
        return;
    }
    render_status_bar(
        frame,
        area,
        &format!("Score: {}   Best: {}", game.score, best),
        Color::Green,
        GameKind::Flappy.controls(),
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &FlappyGame, best: u32) {
    if area.width == 0 {
        return;
    }
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let next_pipe = game
        .pipes
        .iter()
        .find(|pipe| pipe.lower.right() >= game.bird.left())
        .map(|pipe| pipe.number.to_string())
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(Span::styled(
            " Flappy Bird ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        info_line("Score", game.score.to_string(), Color::White),
        info_line("Best", best.to_string(), Color::Yellow),
        Line::from(""),
        info_line("Next pipe", next_pipe, Color::Green),
        info_line("Speed", format!("{:+.1}", -game.velocity_y), Color::Gray),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
