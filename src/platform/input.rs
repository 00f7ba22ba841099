//! Keyboard and mouse state

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Currently held keys and mouse buttons
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashSet<Key>,
    buttons: HashSet<MouseButton>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press_key(&mut self, key: Key) {
        self.keys.insert(key);
    }

    pub fn release_key(&mut self, key: Key) {
        self.keys.remove(&key);
    }

    pub fn press_button(&mut self, button: MouseButton) {
        self.buttons.insert(button);
    }

    pub fn release_button(&mut self, button: MouseButton) {
        self.buttons.remove(&button);
    }

    #[inline]
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys.contains(&key)
    }

    #[inline]
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.buttons.contains(&button)
    }

    /// Build one tick's input. WASD and the arrow keys both move, the right
    /// mouse button sprints, and `shoot` carries a click seen since the
    /// previous tick.
    pub fn tick_input(&self, shoot: bool) -> TickInput {
        let any = |a, b| self.is_key_down(a) || self.is_key_down(b);
        TickInput {
            up: any(Key::W, Key::Up),
            down: any(Key::S, Key::Down),
            left: any(Key::A, Key::Left),
            right: any(Key::D, Key::Right),
            sprint: self.is_button_down(MouseButton::Right),
            shoot,
        }
    }
}
