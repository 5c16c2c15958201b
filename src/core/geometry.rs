//! Axis-aligned rectangles in world units.

/// An axis-aligned rectangle. `x`/`y` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// A `size` x `size` square with its top-left at the origin.
    pub const fn square(size: f64) -> Self {
        Self::new(0.0, 0.0, size, size)
    }

    pub fn left(&self) -> f64 {
        self.x
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn top(&self) -> f64 {
        self.y
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.w / 2.0
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    pub fn set_left(&mut self, left: f64) {
        self.x = left;
    }

    pub fn set_right(&mut self, right: f64) {
        self.x = right - self.w;
    }

    pub fn set_top(&mut self, top: f64) {
        self.y = top;
    }

    pub fn set_bottom(&mut self, bottom: f64) {
        self.y = bottom - self.h;
    }

    pub fn set_center_x(&mut self, cx: f64) {
        self.x = cx - self.w / 2.0;
    }

    pub fn set_center_y(&mut self, cy: f64) {
        self.y = cy - self.h / 2.0;
    }

    pub fn set_center(&mut self, cx: f64, cy: f64) {
        self.set_center_x(cx);
        self.set_center_y(cy);
    }

    /// Strict overlap test. Rects that only share an edge do not collide,
    /// and degenerate (zero-area) rects never collide.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0.0 || self.h <= 0.0 || other.w <= 0.0 || other.h <= 0.0 {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Half-open point containment: `left <= x < right`, `top <= y < bottom`.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}
