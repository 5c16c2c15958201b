//! Spikes minigame.
//!
//! The bird flies back and forth across a walled arena. Every wall touch is a
//! point and flips its direction, and new spikes then appear on the wall it
//! is now heading for. Touching a spike, the floor or the top of the screen
//! ends the round. More spikes appear as the score grows.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
