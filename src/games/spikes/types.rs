//! Spikes data structures.

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::Rect;
use rand::seq::index::sample;
use rand::Rng;

/// Gap between the world edge and the arena.
pub const PADDING: f64 = 60.0;
pub const SPIKE_WIDTH: f64 = 5.0;
pub const SPIKE_HEIGHT: f64 = 60.0;
/// Spike slots per wall.
pub const SPIKE_ROWS: usize = 8;
/// At most this many spikes at once, so one slot always stays open.
pub const MAX_SPIKES: usize = SPIKE_ROWS - 1;

pub const JUMP_VELOCITY: f64 = -3.0;
pub const GRAVITY: f64 = 0.1;

pub const BIRD_SIZE: f64 = 30.0;
pub const START_SPEED_X: f64 = 3.0;
/// Horizontal speed gained on every wall bounce.
pub const SPEED_GAIN: f64 = 0.05;

/// The walled play area inside the world.
pub const ARENA: Rect = Rect::new(
    PADDING,
    PADDING,
    WORLD_WIDTH - PADDING * 2.0,
    WORLD_HEIGHT - PADDING * 2.0,
);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// A single spike on one of the arena walls.
#[derive(Debug, Clone, PartialEq)]
pub struct Spike {
    pub side: Side,
    /// Slot index from the top, `0..SPIKE_ROWS`.
    pub row: usize,
    pub rect: Rect,
}

impl Spike {
    pub fn new(side: Side, row: usize) -> Self {
        let x = match side {
            Side::Left => PADDING,
            Side::Right => WORLD_WIDTH - (PADDING + SPIKE_WIDTH),
        };
        let y = PADDING + row as f64 * SPIKE_HEIGHT;
        Self {
            side,
            row,
            rect: Rect::new(x, y, SPIKE_WIDTH, SPIKE_HEIGHT),
        }
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SpikesGame {
    pub bird: Rect,
    pub velocity_x: f64,
    pub velocity_y: f64,
    /// +1 moving right, -1 moving left.
    pub direction: f64,
    pub spikes: Vec<Spike>,
    /// How many spikes the next wall gets.
    pub spike_count: usize,
    pub score: u32,
    pub game_over: bool,
}

impl SpikesGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut bird = Rect::square(BIRD_SIZE);
        bird.set_center(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        let mut game = Self {
            bird,
            velocity_x: START_SPEED_X,
            velocity_y: 0.0,
            direction: 1.0,
            spikes: Vec::new(),
            spike_count: 1,
            score: 0,
            game_over: false,
        };
        game.spawn_spikes(rng);
        game
    }

    /// The wall the bird is currently heading for.
    pub fn target_side(&self) -> Side {
        if self.direction < 0.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Replace all spikes with `spike_count` spikes in distinct random rows on
    /// the wall the bird is heading for.
    pub fn spawn_spikes<R: Rng>(&mut self, rng: &mut R) {
        let side = self.target_side();
        let count = self.spike_count.min(SPIKE_ROWS);
        self.spikes = sample(rng, SPIKE_ROWS, count)
            .into_iter()
            .map(|row| Spike::new(side, row))
            .collect();
    }
}

/// Spikes per wall for a given score: one more every five points, capped.
pub fn spike_count_for(score: u32) -> usize {
    // Signed so that score 0 truncates toward zero like the other scores.
    let count = (score as i64 - 1) / 5 + 1;
    (count.max(1) as usize).min(MAX_SPIKES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_arena_bounds() {
        assert_eq!(ARENA.left(), 60.0);
        assert_eq!(ARENA.right(), 740.0);
        assert_eq!(ARENA.top(), 60.0);
        assert_eq!(ARENA.bottom(), 540.0);
    }

    #[test]
    fn test_new_game_defaults() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let game = SpikesGame::new(&mut rng);
        assert_eq!((game.bird.x, game.bird.y), (385.0, 285.0));
        assert_eq!(game.velocity_x, START_SPEED_X);
        assert_eq!(game.direction, 1.0);
        assert_eq!(game.spikes.len(), 1);
        assert_eq!(game.spikes[0].side, Side::Right);
    }

    #[test]
    fn test_spike_placement() {
        let left = Spike::new(Side::Left, 0);
        assert_eq!(left.rect, Rect::new(60.0, 60.0, 5.0, 60.0));
        let right = Spike::new(Side::Right, 7);
        assert_eq!(right.rect, Rect::new(735.0, 480.0, 5.0, 60.0));
        assert_eq!(right.rect.bottom(), ARENA.bottom());
    }

    #[test]
    fn test_spawn_uses_distinct_rows_on_target_wall() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut game = SpikesGame::new(&mut rng);
        game.direction = -1.0;
        game.spike_count = 6;
        game.spawn_spikes(&mut rng);

        assert_eq!(game.spikes.len(), 6);
        let mut rows: Vec<usize> = game.spikes.iter().map(|s| s.row).collect();
        rows.sort_unstable();
        rows.dedup();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|&r| r < SPIKE_ROWS));
        assert!(game.spikes.iter().all(|s| s.side == Side::Left));
    }

    #[test]
    fn test_spike_count_progression() {
        assert_eq!(spike_count_for(0), 1);
        assert_eq!(spike_count_for(1), 1);
        assert_eq!(spike_count_for(5), 1);
        assert_eq!(spike_count_for(6), 2);
        assert_eq!(spike_count_for(10), 2);
        assert_eq!(spike_count_for(11), 3);
        assert_eq!(spike_count_for(31), 7);
        assert_eq!(spike_count_for(500), MAX_SPIKES);
    }
}
