//! Game logic for the Sky Bird minigame.

use super::types::*;
use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::games::Controls;
use rand::Rng;

/// Process one physics tick: land, cull, steer, fly, scroll.
pub fn process_tick<R: Rng>(game: &mut SkyBirdGame, controls: Controls, rng: &mut R) {
    if game.game_over {
        return;
    }

    check_landings(game, rng);
    cull_platforms(game);
    steer(game, controls);
    move_bird(game);
    if game.game_over {
        return;
    }
    scroll_screen(game);
}

/// Bounce off any live platform the falling bird lands on.
///
/// A hit counts as a landing only when the bird's bottom is within
/// `LANDING_TOLERANCE` of the platform top. Reaching a new platform spawns
/// more above, starts the scroll and moves the score to that platform.
fn check_landings<R: Rng>(game: &mut SkyBirdGame, rng: &mut R) {
    if game.velocity_y <= 0.0 {
        return;
    }

    // Spawning appends above the screen, so indices stay valid while we walk.
    let mut i = 0;
    while i < game.platforms.len() {
        let platform = &game.platforms[i];
        let landed = platform.is_alive()
            && platform.rect.intersects(&game.bird)
            && game.bird.bottom() - LANDING_TOLERANCE < platform.rect.top();

        if landed {
            let number = platform.number;
            if game.score != number {
                game.spawn_platforms(rng);
                game.scrolling = true;
                game.score = number;
            }
            game.platforms[i].lives -= 1;
            game.velocity_y = JUMP_VELOCITY;
        }
        i += 1;
    }
}

/// Drop the lowest platform once it has scrolled below the world.
fn cull_platforms(game: &mut SkyBirdGame) {
    if game
        .platforms
        .first()
        .is_some_and(|p| p.rect.top() > WORLD_HEIGHT)
    {
        game.platforms.remove(0);
    }
}

/// Accelerate horizontally. Holding both directions cancels out.
fn steer(game: &mut SkyBirdGame, controls: Controls) {
    match (controls.left, controls.right) {
        (true, false) => {
            game.velocity_x = (game.velocity_x - SPEED_X).max(-MAX_SPEED_X);
        }
        (false, true) => {
            game.velocity_x = (game.velocity_x + SPEED_X).min(MAX_SPEED_X);
        }
        _ => {}
    }
}

fn move_bird(game: &mut SkyBirdGame) {
    game.velocity_y += GRAVITY;
    game.bird.x += game.velocity_x;
    game.bird.y += game.velocity_y;

    if game.bird.bottom() >= WORLD_HEIGHT {
        if game.score == 0 {
            // The ground is safe until the first platform is reached.
            game.velocity_y = JUMP_VELOCITY;
        } else {
            game.game_over = true;
            return;
        }
    }

    // Wrap around the side walls.
    if game.bird.left() >= WORLD_WIDTH {
        game.bird.set_left(0.0);
    }
    if game.bird.right() <= 0.0 {
        game.bird.set_right(WORLD_WIDTH);
    }
}

/// Shift everything down until the current platform settles near the bottom.
fn scroll_screen(game: &mut SkyBirdGame) {
    if !game.scrolling {
        return;
    }

    game.bird.y += SCREEN_SCROLL_SPEED;
    let settle_line = WORLD_HEIGHT - PLATFORM_SPACING;
    for platform in &mut game.platforms {
        platform.rect.y += SCREEN_SCROLL_SPEED;
        if platform.number == game.score && platform.rect.top() >= settle_line {
            game.scrolling = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rect;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(11)
    }

    fn new_game() -> (SkyBirdGame, ChaCha8Rng) {
        let mut rng = rng();
        let game = SkyBirdGame::new(&mut rng);
        (game, rng)
    }

    /// Put the bird just above platform `index`, falling.
    fn drop_onto(game: &mut SkyBirdGame, index: usize) {
        let top = game.platforms[index].rect.top();
        let x = game.platforms[index].rect.x;
        game.bird.set_left(x);
        game.bird.set_bottom(top + 2.0);
        game.velocity_y = 3.0;
    }

    #[test]
    fn test_ground_bounce_before_first_point() {
        let (mut game, mut rng) = new_game();
        game.velocity_y = 5.0;
        process_tick(&mut game, Controls::default(), &mut rng);
        assert!(!game.game_over);
        assert!((game.velocity_y - JUMP_VELOCITY).abs() < 1e-9);
    }

    #[test]
    fn test_ground_ends_game_after_first_point() {
        let (mut game, mut rng) = new_game();
        game.score = 1;
        game.velocity_y = 5.0;
        process_tick(&mut game, Controls::default(), &mut rng);
        assert!(game.game_over);
    }

    #[test]
    fn test_landing_on_new_platform_scores_and_scrolls() {
        let (mut game, mut rng) = new_game();
        drop_onto(&mut game, 1);
        check_landings(&mut game, &mut rng);

        assert_eq!(game.score, 1);
        assert!(game.scrolling);
        assert!((game.velocity_y - JUMP_VELOCITY).abs() < 1e-9);
        assert_eq!(game.platforms[1].lives, PLATFORM_LIVES - 1);
        // Spawning used the old score, so platforms 0..8 already covered it.
        assert_eq!(game.spawned, 8);
        assert_eq!(game.platforms.len(), 8);

        // The next new height spawns relative to score 1.
        drop_onto(&mut game, 2);
        check_landings(&mut game, &mut rng);
        assert_eq!(game.score, 2);
        assert_eq!(game.spawned, 9);
    }

    #[test]
    fn test_landing_on_same_platform_only_bounces() {
        let (mut game, mut rng) = new_game();
        drop_onto(&mut game, 0);
        check_landings(&mut game, &mut rng);

        assert_eq!(game.score, 0);
        assert!(!game.scrolling);
        assert_eq!(game.platforms[0].lives, PLATFORM_LIVES - 1);
        assert!((game.velocity_y - JUMP_VELOCITY).abs() < 1e-9);
    }

    #[test]
    fn test_rising_bird_passes_through() {
        let (mut game, mut rng) = new_game();
        drop_onto(&mut game, 1);
        game.velocity_y = -3.0;
        check_landings(&mut game, &mut rng);
        assert_eq!(game.score, 0);
        assert_eq!(game.platforms[1].lives, PLATFORM_LIVES);
    }

    #[test]
    fn test_side_hit_is_not_a_landing() {
        let (mut game, mut rng) = new_game();
        let rect = game.platforms[1].rect;
        game.bird.set_left(rect.x);
        // Bird's bottom well below the platform top.
        game.bird.set_top(rect.top() + 5.0);
        game.velocity_y = 3.0;
        check_landings(&mut game, &mut rng);
        assert_eq!(game.score, 0);
        assert_eq!(game.platforms[1].lives, PLATFORM_LIVES);
    }

    #[test]
    fn test_dead_platform_is_ignored() {
        let (mut game, mut rng) = new_game();
        game.platforms[1].lives = 0;
        drop_onto(&mut game, 1);
        check_landings(&mut game, &mut rng);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_crumbling_platform_breaks_after_one_bounce() {
        let (mut game, mut rng) = new_game();
        game.platforms[1].number = CRUMBLING_FROM;
        game.platforms[1].lives = 1;
        drop_onto(&mut game, 1);
        check_landings(&mut game, &mut rng);
        assert!(!game.platforms[1].is_alive());
    }

    #[test]
    fn test_steering_accelerates_and_caps() {
        let (mut game, _) = new_game();
        let right = Controls {
            right: true,
            ..Controls::default()
        };
        steer(&mut game, right);
        assert!((game.velocity_x - SPEED_X).abs() < 1e-9);
        for _ in 0..100 {
            steer(&mut game, right);
        }
        assert_eq!(game.velocity_x, MAX_SPEED_X);

        let both = Controls {
            left: true,
            right: true,
            ..Controls::default()
        };
        steer(&mut game, both);
        assert_eq!(game.velocity_x, MAX_SPEED_X);

        let left = Controls {
            left: true,
            ..Controls::default()
        };
        for _ in 0..100 {
            steer(&mut game, left);
        }
        assert_eq!(game.velocity_x, -MAX_SPEED_X);
    }

    #[test]
    fn test_velocity_persists_without_input() {
        let (mut game, _) = new_game();
        game.velocity_x = 2.0;
        steer(&mut game, Controls::default());
        assert_eq!(game.velocity_x, 2.0);
    }

    #[test]
    fn test_horizontal_wrap() {
        let (mut game, _) = new_game();
        game.bird.set_top(100.0);
        game.velocity_y = 0.0;
        game.bird.set_left(WORLD_WIDTH - 1.0);
        game.velocity_x = 2.0;
        move_bird(&mut game);
        assert_eq!(game.bird.left(), 0.0);

        game.bird.set_right(1.0);
        game.velocity_x = -2.0;
        move_bird(&mut game);
        assert_eq!(game.bird.right(), WORLD_WIDTH);
    }

    #[test]
    fn test_scroll_stops_when_current_platform_settles() {
        let (mut game, _) = new_game();
        game.score = 1;
        game.scrolling = true;
        // Platform 1 starts at y = 400 and must reach 500.
        let mut ticks = 0;
        while game.scrolling && ticks < 100 {
            scroll_screen(&mut game);
            ticks += 1;
        }
        assert!(!game.scrolling);
        assert_eq!(ticks, 17);
        assert!(game.platforms[1].rect.top() >= 500.0);
    }

    #[test]
    fn test_cull_removes_lowest_offscreen_platform() {
        let (mut game, _) = new_game();
        game.platforms[0].rect = Rect::new(200.0, 601.0, PLATFORM_WIDTH, PLATFORM_HEIGHT);
        cull_platforms(&mut game);
        assert_eq!(game.platforms.len(), 7);
        assert_eq!(game.platforms[0].number, 1);
        cull_platforms(&mut game);
        assert_eq!(game.platforms.len(), 7);
    }

    #[test]
    fn test_no_tick_after_game_over() {
        let (mut game, mut rng) = new_game();
        game.game_over = true;
        let before = game.bird;
        process_tick(&mut game, Controls::default(), &mut rng);
        assert_eq!(game.bird, before);
    }
}
