//! Rasterizing the 800x600 world into terminal cells.
//!
//! A terminal cell is roughly twice as tall as it is wide, so one row covers
//! twice the world height one column covers. The world is letterboxed inside
//! the content area to keep its shape.

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::Rect as WorldRect;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
};

/// Height of a terminal cell relative to its width.
const CELL_ASPECT: f64 = 2.0;

/// Maps world coordinates onto a block of terminal cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// The cells the world occupies, inside the content area.
    pub area: Rect,
    /// World units per column.
    pub scale_x: f64,
    /// World units per row.
    pub scale_y: f64,
}

impl Viewport {
    /// Fit the world into `content`, centered.
    pub fn fit(content: Rect) -> Option<Self> {
        if content.width == 0 || content.height == 0 {
            return None;
        }
        let unit = (WORLD_WIDTH / content.width as f64)
            .max(WORLD_HEIGHT / (content.height as f64 * CELL_ASPECT));
        let scale_x = unit;
        let scale_y = unit * CELL_ASPECT;

        let width = ((WORLD_WIDTH / scale_x).round() as u16).clamp(1, content.width);
        let height = ((WORLD_HEIGHT / scale_y).round() as u16).clamp(1, content.height);
        let area = Rect {
            x: content.x + (content.width - width) / 2,
            y: content.y + (content.height - height) / 2,
            width,
            height,
        };
        Some(Self {
            area,
            scale_x,
            scale_y,
        })
    }

    /// Column span `[start, end)` covered by world x range, clamped.
    fn cols(&self, left: f64, right: f64) -> (u16, u16) {
        span(left, right, self.scale_x, self.area.width)
    }

    fn rows(&self, top: f64, bottom: f64) -> (u16, u16) {
        span(top, bottom, self.scale_y, self.area.height)
    }

    /// Column of a world x, relative to the viewport.
    pub fn col_of(&self, x: f64) -> i32 {
        (x / self.scale_x).floor() as i32
    }

    /// Row of a world y, relative to the viewport.
    pub fn row_of(&self, y: f64) -> i32 {
        (y / self.scale_y).floor() as i32
    }

    /// World point at the center of a terminal cell, if the cell is inside.
    pub fn cell_to_world(&self, column: u16, row: u16) -> Option<(f64, f64)> {
        let inside = column >= self.area.x
            && column < self.area.x + self.area.width
            && row >= self.area.y
            && row < self.area.y + self.area.height;
        if !inside {
            return None;
        }
        let x = ((column - self.area.x) as f64 + 0.5) * self.scale_x;
        let y = ((row - self.area.y) as f64 + 0.5) * self.scale_y;
        Some((x, y))
    }
}

/// Cells touched by `[start, end)` in world units. Anything with positive
/// size touches at least one cell when on screen.
fn span(start: f64, end: f64, scale: f64, cells: u16) -> (u16, u16) {
    if end <= start || end <= 0.0 {
        return (0, 0);
    }
    let first = (start / scale).floor().max(0.0);
    let last = (end / scale).ceil().min(cells as f64);
    if last <= first {
        return (0, 0);
    }
    (first as u16, last as u16)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
}

impl Cell {
    pub const fn solid(color: Color) -> Self {
        Self {
            ch: ' ',
            fg: color,
            bg: color,
        }
    }

    pub const fn glyph(ch: char, fg: Color, bg: Color) -> Self {
        Self { ch, fg, bg }
    }
}

/// A frame's worth of cells. Later draws cover earlier ones.
pub struct CellGrid {
    viewport: Viewport,
    cells: Vec<Cell>,
}

impl CellGrid {
    pub fn new(viewport: Viewport, background: Color) -> Self {
        let len = viewport.area.width as usize * viewport.area.height as usize;
        Self {
            viewport,
            cells: vec![Cell::solid(background); len],
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn index(&self, col: u16, row: u16) -> usize {
        row as usize * self.viewport.area.width as usize + col as usize
    }

    /// Paint every cell the world rect touches.
    pub fn fill_rect(&mut self, rect: &WorldRect, cell: Cell) {
        let (c0, c1) = self.viewport.cols(rect.left(), rect.right());
        let (r0, r1) = self.viewport.rows(rect.top(), rect.bottom());
        for row in r0..r1 {
            for col in c0..c1 {
                let i = self.index(col, row);
                self.cells[i] = cell;
            }
        }
    }

    /// Write text starting at a viewport-relative cell, keeping backgrounds.
    /// Characters outside the grid are dropped.
    pub fn text(&mut self, col: i32, row: i32, text: &str, fg: Color) {
        let area = self.viewport.area;
        if row < 0 || row >= area.height as i32 {
            return;
        }
        for (offset, ch) in text.chars().enumerate() {
            let c = col + offset as i32;
            if c < 0 || c >= area.width as i32 {
                continue;
            }
            let i = self.index(c as u16, row as u16);
            self.cells[i].ch = ch;
            self.cells[i].fg = fg;
        }
    }

    /// Text centered on a world x at a world y.
    pub fn text_centered(&mut self, center_x: f64, y: f64, text: &str, fg: Color) {
        let len = text.chars().count() as i32;
        let col = self.viewport.col_of(center_x) - len / 2;
        self.text(col, self.viewport.row_of(y), text, fg);
    }

    /// Recolor the background of a viewport-relative cell.
    pub fn paint(&mut self, col: i32, row: i32, bg: Color) {
        let area = self.viewport.area;
        if col < 0 || row < 0 || col >= area.width as i32 || row >= area.height as i32 {
            return;
        }
        let i = self.index(col as u16, row as u16);
        self.cells[i].bg = bg;
    }

    pub fn cell(&self, col: u16, row: u16) -> Option<Cell> {
        let area = self.viewport.area;
        if col >= area.width || row >= area.height {
            return None;
        }
        Some(self.cells[self.index(col, row)])
    }

    /// Convert to styled lines, merging runs of the same style.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        let width = self.viewport.area.width as usize;
        if width == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(width)
            .map(|row| {
                let mut spans = Vec::new();
                let mut run = String::new();
                let mut style: Option<Style> = None;
                for cell in row {
                    let cell_style = Style::default().fg(cell.fg).bg(cell.bg);
                    if style != Some(cell_style) {
                        if let Some(s) = style {
                            spans.push(Span::styled(std::mem::take(&mut run), s));
                        }
                        style = Some(cell_style);
                    }
                    run.push(cell.ch);
                }
                if let Some(s) = style {
                    spans.push(Span::styled(run, s));
                }
                Line::from(spans)
            })
            .collect()
    }
}
