//! Game logic for the Flappy Bird minigame.

use super::types::*;
use crate::constants::WORLD_HEIGHT;
use crate::games::Controls;
use rand::Rng;

/// Process one physics tick: spawn, scroll, collide, fly, score.
///
/// Collisions are tested before the bird moves, so a crash is detected on
/// the tick after the bird enters a pipe.
pub fn process_tick<R: Rng>(game: &mut FlappyGame, controls: Controls, rng: &mut R) {
    if game.game_over {
        return;
    }

    spawn_pipes(game, rng);
    move_pipes(game);

    if check_collisions(game) {
        game.game_over = true;
        return;
    }

    move_bird(game, controls);
    update_score(game);
}

/// Spawn a pipe every `SPAWN_PERIOD` ticks. The first pipe appears on the
/// tick after the timer first reaches the period.
fn spawn_pipes<R: Rng>(game: &mut FlappyGame, rng: &mut R) {
    if game.spawn_timer == SPAWN_PERIOD {
        game.spawn_pipe(rng);
        game.spawn_timer = 0;
    }
    game.spawn_timer += 1;
}

/// Scroll pipes left and drop the oldest once it is fully off screen.
fn move_pipes(game: &mut FlappyGame) {
    for pipe in &mut game.pipes {
        pipe.shift_left(MOVE_SPEED);
    }
    if game.pipes.first().is_some_and(|p| p.lower.right() < 0.0) {
        game.pipes.remove(0);
    }
}

/// True if the bird touches a pipe or leaves the world vertically.
fn check_collisions(game: &FlappyGame) -> bool {
    let bird = &game.bird;
    let hit_pipe = game
        .pipes
        .iter()
        .any(|p| p.lower.intersects(bird) || p.upper.intersects(bird));

    hit_pipe || bird.bottom() > WORLD_HEIGHT || bird.top() < 0.0
}

fn move_bird(game: &mut FlappyGame, controls: Controls) {
    if controls.jump {
        game.velocity_y = JUMP_VELOCITY;
    }
    game.velocity_y += GRAVITY;
    game.bird.y += game.velocity_y;
}

/// Score is the highest pipe number whose lower half is fully behind the bird.
fn update_score(game: &mut FlappyGame) {
    let bird_left = game.bird.left();
    for pipe in &game.pipes {
        if pipe.lower.right() < bird_left && pipe.number > game.score {
            game.score = pipe.number;
        }
    }
}
