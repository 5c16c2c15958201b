//! Game logic for the Spikes minigame.

use super::types::*;
use crate::games::Controls;
use rand::Rng;

/// Process one physics tick: walls and hazards first, then the bird moves.
pub fn process_tick<R: Rng>(game: &mut SpikesGame, controls: Controls, rng: &mut R) {
    if game.game_over {
        return;
    }

    check_walls(game, rng);
    if check_hazards(game) {
        game.game_over = true;
        return;
    }
    game.spike_count = spike_count_for(game.score);

    move_bird(game, controls);
}

/// Bounce off the wall the bird is heading for, scoring a point and moving
/// the spikes to the opposite wall.
fn check_walls<R: Rng>(game: &mut SpikesGame, rng: &mut R) {
    let hit_right = game.direction > 0.0 && game.bird.right() >= ARENA.right();
    let hit_left = game.direction < 0.0 && game.bird.left() <= ARENA.left();
    if hit_right || hit_left {
        game.direction = -game.direction;
        game.velocity_x += SPEED_GAIN;
        game.spawn_spikes(rng);
        game.score += 1;
    }
}

/// Floor, top of the screen, or any spike. The ceiling check uses the world
/// top, so the bird may fly into the padding above the arena.
fn check_hazards(game: &SpikesGame) -> bool {
    game.bird.bottom() >= ARENA.bottom()
        || game.bird.top() <= 0.0
        || game.spikes.iter().any(|s| s.rect.intersects(&game.bird))
}

fn move_bird(game: &mut SpikesGame, controls: Controls) {
    if controls.jump {
        game.velocity_y = JUMP_VELOCITY;
    }
    game.velocity_y += GRAVITY;
    game.bird.y += game.velocity_y;
    game.bird.x += game.velocity_x * game.direction;
}
