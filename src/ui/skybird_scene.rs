//! UI rendering for Sky Bird.

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::games::skybird::SkyBirdGame;
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

const PLATFORM: Color = Color::Rgb(150, 90, 40);
const CRUMBLING: Color = Color::Rgb(120, 110, 100);

pub fn render_skybird(
    frame: &mut Frame,
    area: Rect,
    game: &SkyBirdGame,
    best: u32,
    forfeit_pending: bool,
) {
    let layout = create_game_layout(frame, area, " Sky Bird ", Color::Cyan, INFO_PANEL_WIDTH);
    render_play_area(frame, layout.content, game);
    render_status_bar_content(frame, layout.status_bar, game, best, forfeit_pending);
    render_info_panel(frame, layout.info_panel, game, best);
}

fn render_play_area(frame: &mut Frame, area: Rect, game: &SkyBirdGame) {
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

    for platform in game.platforms.iter().filter(|p| p.is_alive()) {
        let cell = if platform.is_crumbling() {
            Cell::glyph('░', PLATFORM, CRUMBLING)
        } else {
            Cell::solid(PLATFORM)
        };
        grid.fill_rect(&platform.rect, cell);
    }

    draw_bird(&mut grid, &game.bird, game.velocity_x >= 0.0);

    frame.render_widget(Paragraph::new(grid.into_lines()), viewport.area);
}

fn render_status_bar_content(
    frame: &mut Frame,
    area: Rect,
    game: &SkyBirdGame,
    best: u32,
    forfeit_pending: bool,
) {
    if render_forfeit_status_bar(frame, area, forfeit_pending) {
        return;
    }
    let status = if game.score == 0 {
        format!("Bounce up onto a platform!   Best: {}", best)
    } else {
        format!("Score: {}   Best: {}", game.score, best)
    };
    render_status_bar(frame, area, &status, Color::Green, GameKind::SkyBird.controls());
}

fn render_info_panel(frame: &mut Frame, area: Rect, game: &SkyBirdGame, best: u32) {
    if area.width == 0 {
        return;
    }
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let standing_on = game
        .platforms
        .iter()
        .find(|p| p.number == game.score)
        .map(|p| {
            if p.is_crumbling() {
                "crumbling".to_string()
            } else {
                format!("{} bounces", p.lives)
            }
        })
        .unwrap_or_else(|| "-".to_string());

    let lines = vec![
        Line::from(Span::styled(
            " Sky Bird ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        info_line("Height", game.score.to_string(), Color::White),
        info_line("Best", best.to_string(), Color::Yellow),
        Line::from(""),
        info_line("Platform", standing_on, Color::Green),
        info_line("Drift", format!("{:+.1}", game.velocity_x), Color::Gray),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
