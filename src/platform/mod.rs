//! Platform abstraction layer
//!
//! Handles the collaborators the game consumes from its host:
//! - Held keys and mouse buttons, polled once per tick
//! - Frame timing (fixed-step accumulator and the HUD wall clock)

pub mod input;
pub mod time;

pub use input::{InputState, Key, MouseButton};
pub use time::{FrameClock, RunTimer};
