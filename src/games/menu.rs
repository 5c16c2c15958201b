//! Menu screen state: three launch buttons and the bouncing attract bird.

use super::GameKind;
use crate::constants::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::core::Rect;

pub const BUTTON_WIDTH: f64 = 200.0;
pub const BUTTON_HEIGHT: f64 = 100.0;
pub const BUTTON_Y: f64 = 300.0;
/// Left edges of the three buttons, in `GameKind::ALL` order.
pub const BUTTON_XS: [f64; 3] = [50.0, 300.0, 550.0];

/// Top of the title banner.
pub const LOGO_Y: f64 = 150.0;
/// Baseline of the hovered game's description.
pub const DESCRIPTION_Y: f64 = 450.0;
/// Baseline of the hovered game's best score.
pub const BEST_SCORE_Y: f64 = 500.0;

pub const ATTRACT_BIRD_SIZE: f64 = 300.0;
pub const ATTRACT_GRAVITY: f64 = 0.1;
pub const ATTRACT_JUMP_VELOCITY: f64 = -7.0;
pub const ATTRACT_SPEED_X: f64 = 3.0;

/// A clickable launch button.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuButton {
    pub kind: GameKind,
    pub rect: Rect,
}

/// The big background bird that bounces around the menu.
#[derive(Debug, Clone, PartialEq)]
pub struct AttractBird {
    pub rect: Rect,
    pub velocity_y: f64,
    pub velocity_x: f64,
    pub direction: f64,
}

impl AttractBird {
    fn new() -> Self {
        let mut rect = Rect::square(ATTRACT_BIRD_SIZE);
        rect.set_center(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        Self {
            rect,
            velocity_y: 0.0,
            velocity_x: ATTRACT_SPEED_X,
            direction: 1.0,
        }
    }

    fn step(&mut self) {
        self.velocity_y += ATTRACT_GRAVITY;
        self.rect.y += self.velocity_y;
        self.rect.x += self.velocity_x * self.direction;

        if self.rect.bottom() >= WORLD_HEIGHT {
            self.velocity_y = ATTRACT_JUMP_VELOCITY;
        }
        if self.rect.right() >= WORLD_WIDTH {
            self.direction = -1.0;
        }
        if self.rect.left() <= 0.0 {
            self.direction = 1.0;
        }
    }
}

/// UI-agnostic menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Next,
    Prev,
    Confirm,
    /// Direct pick by button index.
    Pick(usize),
    Quit,
    Other,
}

/// What the app should do after a menu input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    None,
    Start(GameKind),
    Quit,
}

/// Menu screen state.
#[derive(Debug, Clone)]
pub struct MenuState {
    pub buttons: Vec<MenuButton>,
    /// Hovered button (mouse over it or selected by keyboard).
    pub hovered: Option<GameKind>,
    pub bird: AttractBird,
}

impl MenuState {
    pub fn new() -> Self {
        let buttons = GameKind::ALL
            .iter()
            .zip(BUTTON_XS)
            .map(|(&kind, x)| MenuButton {
                kind,
                rect: Rect::new(x, BUTTON_Y, BUTTON_WIDTH, BUTTON_HEIGHT),
            })
            .collect();
        Self {
            buttons,
            hovered: None,
            bird: AttractBird::new(),
        }
    }

    /// Advance the attract animation by one physics tick.
    pub fn tick(&mut self) {
        self.bird.step();
    }

    /// The button under a world-space point, if any.
    pub fn button_at(&self, x: f64, y: f64) -> Option<GameKind> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains_point(x, y))
            .map(|b| b.kind)
    }

    /// Mouse moved to a world-space point. Leaving all buttons clears the hover.
    pub fn hover_at(&mut self, x: f64, y: f64) {
        self.hovered = self.button_at(x, y);
    }

    /// Mouse clicked at a world-space point.
    pub fn click_at(&mut self, x: f64, y: f64) -> MenuAction {
        match self.button_at(x, y) {
            Some(kind) => {
                self.hovered = Some(kind);
                MenuAction::Start(kind)
            }
            None => MenuAction::None,
        }
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

/// Process keyboard input on the menu.
pub fn process_input(menu: &mut MenuState, input: MenuInput) -> MenuAction {
    let count = GameKind::ALL.len();
    match input {
        MenuInput::Next => {
            let next = match menu.hovered {
                Some(kind) => (kind.index() + 1) % count,
                None => 0,
            };
            menu.hovered = Some(GameKind::from_index(next));
            MenuAction::None
        }
        MenuInput::Prev => {
            let prev = match menu.hovered {
                Some(kind) => (kind.index() + count - 1) % count,
                None => count - 1,
            };
            menu.hovered = Some(GameKind::from_index(prev));
            MenuAction::None
        }
        MenuInput::Confirm => match menu.hovered {
            Some(kind) => MenuAction::Start(kind),
            None => MenuAction::None,
        },
        MenuInput::Pick(index) if index < count => {
            let kind = GameKind::from_index(index);
            menu.hovered = Some(kind);
            MenuAction::Start(kind)
        }
        MenuInput::Pick(_) | MenuInput::Other => MenuAction::None,
        MenuInput::Quit => MenuAction::Quit,
    }
}
