//! Sky Bird data structures.

use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::Rect;
use rand::Rng;

pub const GRAVITY: f64 = 0.2;
/// Bounce velocity (negative = upward).
pub const JUMP_VELOCITY: f64 = -10.0;
/// Horizontal acceleration per tick while steering.
pub const SPEED_X: f64 = 0.3;
pub const MAX_SPEED_X: f64 = 6.0;

/// Minimum distance between a platform and either side of the world.
pub const PLATFORM_WALL_DISTANCE: f64 = 100.0;
/// Vertical distance between consecutive platforms.
pub const PLATFORM_SPACING: f64 = 100.0;
/// How many platforms are kept spawned above the current score.
pub const PLATFORMS_AHEAD: u32 = 8;
/// Downward scroll per tick after reaching a higher platform.
pub const SCREEN_SCROLL_SPEED: f64 = 6.0;

pub const BIRD_SIZE: f64 = 50.0;
pub const PLATFORM_WIDTH: f64 = 80.0;
pub const PLATFORM_HEIGHT: f64 = 20.0;
pub const PLATFORM_LIVES: u32 = 50;
/// Platforms numbered at or above this break after one bounce.
pub const CRUMBLING_FROM: u32 = 100;
/// Tolerance for counting a hit as a landing on top of the platform.
pub const LANDING_TOLERANCE: f64 = 10.0;

/// A platform the bird can bounce on.
#[derive(Debug, Clone, PartialEq)]
pub struct Platform {
    pub rect: Rect,
    /// Height index. Landing here sets the score to this number.
    pub number: u32,
    /// Bounces left before the platform disappears.
    pub lives: u32,
}

impl Platform {
    pub fn is_alive(&self) -> bool {
        self.lives != 0
    }

    pub fn is_crumbling(&self) -> bool {
        self.number >= CRUMBLING_FROM
    }
}

/// Main game state.
#[derive(Debug, Clone)]
pub struct SkyBirdGame {
    pub bird: Rect,
    pub velocity_x: f64,
    pub velocity_y: f64,
    /// Platforms, lowest first.
    pub platforms: Vec<Platform>,
    /// Number of platforms spawned so far (next number to spawn).
    pub spawned: u32,
    pub score: u32,
    /// True while the screen is scrolling down to the newly reached platform.
    pub scrolling: bool,
    pub game_over: bool,
}

impl SkyBirdGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        let mut bird = Rect::square(BIRD_SIZE);
        bird.set_center(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        bird.set_bottom(WORLD_HEIGHT);
        let mut game = Self {
            bird,
            velocity_x: 0.0,
            velocity_y: 0.0,
            platforms: Vec::new(),
            spawned: 0,
            score: 0,
            scrolling: false,
            game_over: false,
        };
        game.spawn_platforms(rng);
        game
    }

    /// Top up platforms so they exist up to `score + PLATFORMS_AHEAD`.
    ///
    /// New platforms are placed relative to the current score, so calling this
    /// before the score is raised puts them above the visible area.
    pub fn spawn_platforms<R: Rng>(&mut self, rng: &mut R) {
        let target = self.score + PLATFORMS_AHEAD;
        for number in self.spawned..target {
            let x = rng.gen_range(
                PLATFORM_WALL_DISTANCE..WORLD_WIDTH - PLATFORM_WALL_DISTANCE - PLATFORM_WIDTH,
            );
            let y = (self.score as f64 - number as f64 - 1.0) * PLATFORM_SPACING + WORLD_HEIGHT;
            let lives = if number >= CRUMBLING_FROM {
                1
            } else {
                PLATFORM_LIVES
            };
            self.platforms.push(Platform {
                rect: Rect::new(x, y, PLATFORM_WIDTH, PLATFORM_HEIGHT),
                number,
                lives,
            });
        }
        self.spawned = self.spawned.max(target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_new_game_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let game = SkyBirdGame::new(&mut rng);
        assert_eq!(game.bird.x, 375.0);
        assert_eq!(game.bird.bottom(), 600.0);
        assert_eq!(game.platforms.len(), 8);
        assert_eq!(game.spawned, 8);

        for (i, platform) in game.platforms.iter().enumerate() {
            assert_eq!(platform.number, i as u32);
            assert_eq!(platform.lives, PLATFORM_LIVES);
            assert_eq!(platform.rect.y, 500.0 - 100.0 * i as f64);
            assert!(platform.rect.x >= 100.0);
            assert!(platform.rect.x < 620.0);
        }
    }

    #[test]
    fn test_spawn_is_incremental() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut game = SkyBirdGame::new(&mut rng);
        game.spawn_platforms(&mut rng);
        assert_eq!(game.platforms.len(), 8, "nothing new without score");

        game.score = 2;
        game.spawn_platforms(&mut rng);
        assert_eq!(game.platforms.len(), 10);
        assert_eq!(game.spawned, 10);
        let last = game.platforms.last().map(|p| p.number);
        assert_eq!(last, Some(9));
    }

    #[test]
    fn test_high_platforms_crumble() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut game = SkyBirdGame::new(&mut rng);
        game.score = 95;
        game.spawned = 98;
        game.spawn_platforms(&mut rng);
        let by_number = |n: u32| game.platforms.iter().find(|p| p.number == n).cloned();
        assert_eq!(by_number(99).map(|p| p.lives), Some(PLATFORM_LIVES));
        let crumbling = by_number(100);
        assert_eq!(crumbling.as_ref().map(|p| p.lives), Some(1));
        assert!(crumbling.is_some_and(|p| p.is_crumbling()));
    }
}
