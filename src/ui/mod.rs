//! Screen state machine and presentation state
//!
//! Nothing here advances the simulation; screens only decide what input means
//! and what gets drawn.

pub mod about;
pub mod layout;

use glam::Vec2;

pub use crate::sim::PlayerClass;
use crate::platform::Key;
use crate::sim::UpgradeKind;
pub use about::{AboutCategory, AboutView};
pub use layout::{Button, Layout};

/// Active screen
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Menu,
    ClassSelect { selected: Option<PlayerClass> },
    Running,
    /// Simulation paused until one of `choices` is picked
    LevelUp { level: u32, choices: Vec<UpgradeKind> },
    GameOver,
    Details,
    About(AboutView),
}

impl Screen {
    /// Short name for logs
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Menu => "menu",
            Screen::ClassSelect { .. } => "class_select",
            Screen::Running => "running",
            Screen::LevelUp { .. } => "level_up",
            Screen::GameOver => "game_over",
            Screen::Details => "details",
            Screen::About(_) => "about",
        }
    }
}

/// Discrete input events consumed by the screen state machine
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    /// Left click at a screen position
    Click(Vec2),
    KeyDown(Key),
    /// Wheel notches, positive scrolls down
    Scroll(i32),
    /// Window closed
    Quit,
}
