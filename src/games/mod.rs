//! The three bird minigames plus the menu that launches them.
//!
//! Every game runs in the same 800x600 world and advances one fixed physics
//! step per call to `ActiveGame::tick`. Input reaches the games only through
//! the UI-agnostic [`Controls`] snapshot, sampled once per step.

pub mod flappy;
pub mod menu;
pub mod skybird;
pub mod spikes;

pub use flappy::FlappyGame;
pub use menu::{MenuButton, MenuState};
pub use skybird::SkyBirdGame;
pub use spikes::SpikesGame;

use rand::Rng;

/// Which minigame. Also identifies its best-score file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    Flappy,
    SkyBird,
    Spikes,
}

impl GameKind {
    pub const ALL: [GameKind; 3] = [GameKind::Flappy, GameKind::SkyBird, GameKind::Spikes];

    pub fn from_index(index: usize) -> Self {
        Self::ALL.get(index).copied().unwrap_or(GameKind::Flappy)
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Flappy => 0,
            Self::SkyBird => 1,
            Self::Spikes => 2,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Flappy => "Flappy Bird",
            Self::SkyBird => "Sky Bird",
            Self::Spikes => "Spikes",
        }
    }

    /// Label shown on the menu button.
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Flappy => "FLAPPY BIRD",
            Self::SkyBird => "SKYBIRD",
            Self::Spikes => "SPIKES",
        }
    }

    /// One-line description shown while the menu button is hovered.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Flappy => "Avoid obstacles and gain points. Use 'SPACE' or 'W'.",
            Self::SkyBird => "Climb up in order to get highest points. Use 'A' and 'D'.",
            Self::Spikes => "Avoid spikes to get points. Use 'SPACE' or 'W'.",
        }
    }

    /// File name of the best-score file inside the scores directory.
    pub fn score_file(&self) -> &'static str {
        match self {
            Self::Flappy => "flappy.txt",
            Self::SkyBird => "skybird.txt",
            Self::Spikes => "spikes.txt",
        }
    }

    /// (key, action) pairs for the in-game status bar.
    pub fn controls(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Flappy | Self::Spikes => &[("[Space/W]", "Flap"), ("[Esc]", "Quit round")],
            Self::SkyBird => &[("[A]", "Left"), ("[D]", "Right"), ("[Esc]", "Quit round")],
        }
    }
}

/// Input state for a single physics step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    pub jump: bool,
    pub left: bool,
    pub right: bool,
}

/// The game currently being played. Only one can be active at a time.
#[derive(Debug, Clone)]
pub enum ActiveGame {
    Flappy(FlappyGame),
    SkyBird(SkyBirdGame),
    Spikes(SpikesGame),
}

impl ActiveGame {
    /// Start a fresh round of `kind`.
    pub fn start<R: Rng>(kind: GameKind, rng: &mut R) -> Self {
        match kind {
            GameKind::Flappy => Self::Flappy(FlappyGame::new()),
            GameKind::SkyBird => Self::SkyBird(SkyBirdGame::new(rng)),
            GameKind::Spikes => Self::Spikes(SpikesGame::new(rng)),
        }
    }

    pub fn kind(&self) -> GameKind {
        match self {
            Self::Flappy(_) => GameKind::Flappy,
            Self::SkyBird(_) => GameKind::SkyBird,
            Self::Spikes(_) => GameKind::Spikes,
        }
    }

    /// Advance one physics step. Does nothing once the round is over.
    pub fn tick<R: Rng>(&mut self, controls: Controls, rng: &mut R) {
        match self {
            Self::Flappy(game) => flappy::process_tick(game, controls, rng),
            Self::SkyBird(game) => skybird::process_tick(game, controls, rng),
            Self::Spikes(game) => spikes::process_tick(game, controls, rng),
        }
    }

    pub fn score(&self) -> u32 {
        match self {
            Self::Flappy(game) => game.score,
            Self::SkyBird(game) => game.score,
            Self::Spikes(game) => game.score,
        }
    }

    pub fn is_over(&self) -> bool {
        match self {
            Self::Flappy(game) => game.game_over,
            Self::SkyBird(game) => game.game_over,
            Self::Spikes(game) => game.game_over,
        }
    }

    /// End the round immediately (player quit).
    pub fn end(&mut self) {
        match self {
            Self::Flappy(game) => game.game_over = true,
            Self::SkyBird(game) => game.game_over = true,
            Self::Spikes(game) => game.game_over = true,
        }
    }
}
