//! Flappy Bird minigame.
//!
//! The bird holds a fixed column while pipe pairs scroll in from the right.
//! Flapping sets an upward velocity, gravity pulls the bird back down, and
//! touching a pipe, the floor or the ceiling ends the round. The score is the
//! number of the last pipe pair the bird got past.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
