//! UI rendering for Spikes.

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::Rect as WorldRect;
use crate::games::spikes::{Side, SpikesGame, ARENA};
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

const WALL: Color = Color::Rgb(60, 60, 110);
const FLOOR: Color = Color::Rgb(170, 50, 50);
const SPIKE: Color = Color::Rgb(230, 230, 230);

pub fn render_spikes(
    frame: &mut Frame,
    area: Rect,
    game: &SpikesGame,
    best: u32,
    forfeit_pending: bool,
) {
    let layout = create_game_layout(frame, area, " Spikes ", Color::Cyan, INFO_PANEL_WIDTH);
    render_play_area(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game, best, forfeit_pending);
    render_info_panel(frame, layout.info_panel, game, best);
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &SpikesGame) {
    let Some(viewport) = Viewport::fit(area) else {
        return;
    };
    let mut grid = CellGrid::new(viewport, SKY);

    // Everything outside the arena is wall; the strip under it is deadly.
    let walls = [
        WorldRect::new(0.0, 0.0, ARENA.left(), WORLD_HEIGHT),
        WorldRect::new(ARENA.right(), 0.0, WORLD_WIDTH - ARENA.right(), WORLD_HEIGHT),
        WorldRect::new(0.0, 0.0, WORLD_WIDTH, ARENA.top()),
    ];
    for wall in &walls {
        grid.fill_rect(wall, Cell::solid(WALL));
    }
    let floor = WorldRect::new(
        0.0,
        ARENA.bottom(),
        WORLD_WIDTH,
        WORLD_HEIGHT - ARENA.bottom(),
    );
    grid.fill_rect(&floor, Cell::solid(FLOOR));

    draw_big_number(
        &mut grid,
        game.score,
        ARENA.center_x(),
        ARENA.center_y(),
        SCORE_DIGITS,
    );

    for spike in &game.spikes {
        let glyph = match spike.side {
            Side::Left => '▶',
            Side::Right => '◀',
        };
        grid.fill_rect(&spike.rect, Cell::glyph(glyph, SPIKE, SKY));
    }

    draw_bird(&mut grid, &game.bird, game.direction > 0.0);

    frame.render_widget(Paragraph::new(grid.into_lines()), viewport.area);
}

fn render_status_bar_content(
    frame: &mut Frame,
    area: Rect,
    game: &SpikesGame,
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
        GameKind::Spikes.controls(),
    );
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &SpikesGame, best: u32) {
    if area.width == 0 {
        return;
    }
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let heading = match game.target_side() {
        Side::Left => "left",
        Side::Right => "right",
    };
    let lines = vec![
        Line::from(Span::styled(
            " Spikes ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        info_line("Score", game.score.to_string(), Color::White),
        info_line("Best", best.to_string(), Color::Yellow),
        Line::from(""),
        info_line("Heading", heading.to_string(), Color::Green),
        info_line("Spikes", game.spikes.len().to_string(), Color::Red),
        info_line("Speed", format!("{:.2}", game.velocity_x), Color::Gray),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
