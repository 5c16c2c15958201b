//! Sky Bird minigame.
//!
//! A vertical climber. The bird bounces off platforms it lands on, the player
//! steers left and right, and the screen scrolls down each time a higher
//! platform is reached. Falling to the bottom after the first point ends the
//! round. Platforms past number 100 crumble after a single bounce.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
