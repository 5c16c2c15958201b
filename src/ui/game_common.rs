//! Shared UI components for the games and the menu.

use crate::core::Rect as WorldRect;
use crate::ui::playfield::{Cell, CellGrid};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Sky background shared by every scene.
pub const SKY: Color = Color::Rgb(100, 100, 230);
/// Large score digits drawn behind the entities.
pub const SCORE_DIGITS: Color = Color::Rgb(140, 140, 245);
pub const BIRD: Color = Color::Rgb(250, 215, 40);
pub const BIRD_EYE: Color = Color::Black;

/// Width of the info panel beside the play field.
pub const INFO_PANEL_WIDTH: u16 = 22;

/// Layout areas returned by `create_game_layout`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameLayout {
    /// Play field area - top left, inside outer border
    pub content: Rect,
    /// Status bar area (2 lines) - bottom left, inside outer border
    pub status_bar: Rect,
    /// Info panel area - right side, empty when the panel is off
    pub info_panel: Rect,
}

/// Compute the layout without drawing anything. Mouse hit testing uses this
/// to agree with what was drawn.
///
/// ```text
/// ┌─ Title ─────────────────────────┬─ Info ──────┐
/// │                                 │             │
/// │   [content area]                │  [info]     │
/// │                                 │             │
/// │ [status bar - 2 lines]          │             │
/// └─────────────────────────────────┴─────────────┘
/// ```
pub fn game_layout(area: Rect, info_panel_width: u16) -> GameLayout {
    let inner = Block::default().borders(Borders::ALL).inner(area);

    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(info_panel_width)])
        .split(inner);

    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(2)])
        .split(h_chunks[0]);

    GameLayout {
        content: v_chunks[0],
        status_bar: v_chunks[1],
        info_panel: h_chunks[1],
    }
}

/// Clear `area`, draw the titled outer border and return the inner layout.
pub fn create_game_layout(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    info_panel_width: u16,
) -> GameLayout {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    game_layout(area, info_panel_width)
}

/// Render a standardized status bar (2 lines: status message + controls).
///
/// # Arguments
/// * `frame` - The frame to render to
/// * `area` - A 2-line area at the bottom of the game panel
/// * `status_text` - The status message to display (line 1)
/// * `status_color` - Color for the status message
/// * `controls` - Slice of (key, action) pairs, e.g., `[("[Enter]", "Select"), ("[Esc]", "Quit")]`
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    status_text: &str,
    status_color: Color,
    controls: &[(&str, &str)],
) {
    if area.height < 1 {
        return;
    }

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center);
    frame.render_widget(status, Rect { height: 1, ..area });

    if area.height >= 2 && !controls.is_empty() {
        let mut spans = Vec::new();
        for (i, (key, action)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*key, Style::default().fg(Color::White)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::DarkGray),
            ));
        }

        let controls_line = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(
            controls_line,
            Rect {
                y: area.y + 1,
                height: 1,
                ..area
            },
        );
    }
}

pub const FORFEIT_STATUS_TEXT: &str = "Quit this round?";
pub const FORFEIT_STATUS_COLOR: Color = Color::Red;
pub const FORFEIT_CONTROLS: &[(&str, &str)] = &[("[Esc]", "Confirm"), ("[Any]", "Cancel")];

/// Render the forfeit confirmation status bar. Returns `true` if rendered.
pub fn render_forfeit_status_bar(frame: &mut Frame, area: Rect, forfeit_pending: bool) -> bool {
    if !forfeit_pending {
        return false;
    }
    render_status_bar(
        frame,
        area,
        FORFEIT_STATUS_TEXT,
        FORFEIT_STATUS_COLOR,
        FORFEIT_CONTROLS,
    );
    true
}

/// Render an info panel frame with standard " Info " title and DarkGray border.
///
/// Returns the inner Rect for content rendering.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// One "label: value" row of an info panel.
pub fn info_line(label: &str, value: String, value_color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {}: ", label), Style::default().fg(Color::DarkGray)),
        Span::styled(value, Style::default().fg(value_color)),
    ])
}

/// 3x5 block font for the score digits.
const DIGITS: [[&str; 5]; 10] = [
    ["###", "# #", "# #", "# #", "###"],
    [" # ", "## ", " # ", " # ", "###"],
    ["###", "  #", "###", "#  ", "###"],
    ["###", "  #", "###", "  #", "###"],
    ["# #", "# #", "###", "  #", "  #"],
    ["###", "#  ", "###", "  #", "###"],
    ["###", "#  ", "###", "# #", "###"],
    ["###", "  #", "  #", "  #", "  #"],
    ["###", "# #", "###", "# #", "###"],
    ["###", "# #", "###", "  #", "###"],
];
const DIGIT_ROWS: i32 = 5;
/// Columns per font pixel; cells are about twice as tall as wide.
const PIXEL_COLS: i32 = 2;
const DIGIT_GAP: i32 = 2;

/// Paint `value` in large block digits centered on a world point.
pub fn draw_big_number(grid: &mut CellGrid, value: u32, center_x: f64, center_y: f64, color: Color) {
    let text = value.to_string();
    let digit_cols = 3 * PIXEL_COLS;
    let count = text.len() as i32;
    let total_cols = count * digit_cols + (count - 1) * DIGIT_GAP;

    let viewport = *grid.viewport();
    let left = viewport.col_of(center_x) - total_cols / 2;
    let top = viewport.row_of(center_y) - DIGIT_ROWS / 2;

    for (i, ch) in text.chars().enumerate() {
        let Some(glyph) = ch.to_digit(10).map(|d| DIGITS[d as usize]) else {
            continue;
        };
        let x0 = left + i as i32 * (digit_cols + DIGIT_GAP);
        for (row, pattern) in glyph.iter().enumerate() {
            for (px, pixel) in pattern.chars().enumerate() {
                if pixel != '#' {
                    continue;
                }
                for sub in 0..PIXEL_COLS {
                    grid.paint(x0 + px as i32 * PIXEL_COLS + sub, top + row as i32, color);
                }
            }
        }
    }
}

/// Draw a bird: a body with an eye on the side it faces.
pub fn draw_bird(grid: &mut CellGrid, bird: &WorldRect, facing_right: bool) {
    grid.fill_rect(bird, Cell::solid(BIRD));
    let viewport = *grid.viewport();
    let eye_x = if facing_right {
        bird.right() - 1.0
    } else {
        bird.left()
    };
    grid.text(
        viewport.col_of(eye_x),
        viewport.row_of(bird.top() + bird.h / 3.0),
        "●",
        BIRD_EYE,
    );
}
