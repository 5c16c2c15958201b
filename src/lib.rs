//! Bird Games - arcade minigames in the terminal.
//!
//! Flappy Bird, Sky Bird and Spikes behind a menu, with one best score per
//! game kept in a plain-text file. This library exposes the game logic and
//! app state for testing; the binary wires it to a terminal.

pub mod app;
pub mod build_info;
pub mod config;
pub mod constants;
pub mod core;
pub mod games;
pub mod input;
pub mod scores;
pub mod ui;
pub mod utils;
