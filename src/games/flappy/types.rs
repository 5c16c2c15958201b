//! Flappy Bird data structures.

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::Rect;
use rand::Rng;

/// Horizontal pipe speed (units per tick).
pub const MOVE_SPEED: f64 = 2.0;
/// Velocity set while flap is held (negative = upward).
pub const JUMP_VELOCITY: f64 = -3.0;
/// Velocity change per tick (positive = downward).
pub const GRAVITY: f64 = 0.1;
/// Vertical gap between the upper and lower pipe.
pub const PARTS_DISTANCE: f64 = 200.0;

pub const BIRD_SIZE: f64 = 50.0;
pub const BIRD_X: f64 = 150.0;

pub const PIPE_WIDTH: f64 = 80.0;
pub const PIPE_HEIGHT: f64 = 600.0;

/// Ticks between pipe spawns.
pub const SPAWN_PERIOD: u32 = 160;

/// Lowest allowed top edge of the gap.
pub const GAP_TOP_MIN: i32 = 50;
/// Highest allowed top edge of the gap (inclusive).
pub const GAP_TOP_MAX: i32 = 550 - PARTS_DISTANCE as i32;

/// A pipe pair with a gap between the halves.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub upper: Rect,
    pub lower: Rect,
    /// 1-based spawn order. Passing this pipe raises the score to `number`.
    pub number: u32,
}

impl Pipe {
    /// A pipe pair entering at the right edge of the world with its gap
    /// starting at `gap_top`.
    pub fn new(number: u32, gap_top: f64) -> Self {
        let mut upper = Rect::new(0.0, 0.0, PIPE_WIDTH, PIPE_HEIGHT);
        let mut lower = upper;
        upper.set_bottom(gap_top);
        upper.set_left(WORLD_WIDTH);
        lower.set_top(gap_top + PARTS_DISTANCE);
        lower.set_left(WORLD_WIDTH);
        Self {
            upper,
            lower,
            number,
        }
    }

    pub fn shift_left(&mut self, dx: f64) {
        self.upper.x -= dx;
        self.lower.x -= dx;
    }

    pub fn gap_top(&self) -> f64 {
        self.upper.bottom()
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct FlappyGame {
    pub bird: Rect,
    /// Vertical velocity in units/tick (positive = downward).
    pub velocity_y: f64,
    /// Active pipes, oldest first.
    pub pipes: Vec<Pipe>,
    /// Ticks since the last spawn.
    pub spawn_timer: u32,
    /// Number given to the next spawned pipe.
    pub next_number: u32,
    pub score: u32,
    pub game_over: bool,
}

impl FlappyGame {
    pub fn new() -> Self {
        let mut bird = Rect::square(BIRD_SIZE);
        bird.set_center_y(WORLD_HEIGHT / 2.0);
        bird.set_left(BIRD_X);
        Self {
            bird,
            velocity_y: 0.0,
            pipes: Vec::new(),
            spawn_timer: 0,
            next_number: 1,
            score: 0,
            game_over: false,
        }
    }

    /// Spawn the next pipe with a random gap position.
    pub fn spawn_pipe<R: Rng>(&mut self, rng: &mut R) {
        let gap_top = rng.gen_range(GAP_TOP_MIN..=GAP_TOP_MAX) as f64;
        self.pipes.push(Pipe::new(self.next_number, gap_top));
        self.next_number += 1;
    }
}

impl Default for FlappyGame {
    fn default() -> Self {
        Self::new()
    }
}
