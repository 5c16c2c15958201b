//! Keyboard input: key mapping and held-key tracking.
//!
//! The games read held keys every physics tick, but a terminal only reports
//! key presses (plus auto-repeats), and reports releases only when keyboard
//! enhancement is available. `HeldKeys` bridges the two. With release events
//! a key is held until released. Without them a key stays held for
//! `KEY_HOLD_WINDOW_MS` after its latest press or repeat.

use crate::constants::KEY_HOLD_WINDOW_MS;
use crate::games::menu::MenuInput;
use crate::games::Controls;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key the games care about while playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Jump,
    Left,
    Right,
}

impl GameKey {
    fn slot(self) -> usize {
        match self {
            Self::Jump => 0,
            Self::Left => 1,
            Self::Right => 2,
        }
    }
}

/// Map a key code to a game key. Letters are case-insensitive so Shift or
/// Caps Lock don't break controls.
pub fn game_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Char(' ') | KeyCode::Up => Some(GameKey::Jump),
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'w') => Some(GameKey::Jump),
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'a') => Some(GameKey::Left),
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'d') => Some(GameKey::Right),
        KeyCode::Left => Some(GameKey::Left),
        KeyCode::Right => Some(GameKey::Right),
        _ => None,
    }
}

/// Map a key code to a menu input.
pub fn menu_input(code: KeyCode) -> MenuInput {
    match code {
        KeyCode::Right | KeyCode::Tab => MenuInput::Next,
        KeyCode::Left | KeyCode::BackTab => MenuInput::Prev,
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'d') => MenuInput::Next,
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'a') => MenuInput::Prev,
        KeyCode::Enter | KeyCode::Char(' ') => MenuInput::Confirm,
        KeyCode::Char(c @ '1'..='3') => MenuInput::Pick(c as usize - '1' as usize),
        KeyCode::Esc => MenuInput::Quit,
        KeyCode::Char(c) if c.eq_ignore_ascii_case(&'q') => MenuInput::Quit,
        _ => MenuInput::Other,
    }
}

/// Ctrl+C quits from anywhere (raw mode swallows SIGINT).
pub fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&'c'))
}

/// Tracks which game keys count as held at a given time.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    release_events: bool,
    /// Time of the latest press/repeat per key, in app-clock milliseconds.
    last_pressed: [Option<u64>; 3],
}

impl HeldKeys {
    /// `release_events` tells whether the terminal reports key releases.
    pub fn new(release_events: bool) -> Self {
        Self {
            release_events,
            last_pressed: [None; 3],
        }
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    pub fn press(&mut self, key: GameKey, now_ms: u64) {
        self.last_pressed[key.slot()] = Some(now_ms);
    }

    pub fn release(&mut self, key: GameKey) {
        self.last_pressed[key.slot()] = None;
    }

    pub fn clear(&mut self) {
        self.last_pressed = [None; 3];
    }

    pub fn is_held(&self, key: GameKey, now_ms: u64) -> bool {
        match self.last_pressed[key.slot()] {
            None => false,
            Some(_) if self.release_events => true,
            Some(at) => now_ms.saturating_sub(at) < KEY_HOLD_WINDOW_MS,
        }
    }

    /// Snapshot for one physics step.
    pub fn controls(&self, now_ms: u64) -> Controls {
        Controls {
            jump: self.is_held(GameKey::Jump, now_ms),
            left: self.is_held(GameKey::Left, now_ms),
            right: self.is_held(GameKey::Right, now_ms),
        }
    }
}
