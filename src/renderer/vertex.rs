//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Colors for game elements
pub mod colors {
    const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const TEXT: [f32; 4] = rgb(255, 255, 255);
    pub const TEXT_DIM: [f32; 4] = rgb(200, 200, 200);
    pub const ACCENT: [f32; 4] = rgb(0, 255, 255);
    pub const DANGER: [f32; 4] = rgb(255, 0, 0);
    pub const SUCCESS: [f32; 4] = rgb(0, 255, 0);

    pub const PLAYER: [f32; 4] = rgb(255, 255, 255);
    pub const ENEMY: [f32; 4] = rgb(255, 0, 0);
    pub const ORB: [f32; 4] = rgb(0, 128, 255);
    pub const ARROW: [f32; 4] = rgb(255, 255, 255);

    pub const HEALTH_BACK: [f32; 4] = rgb(255, 0, 0);
    pub const HEALTH_FILL: [f32; 4] = rgb(0, 255, 0);
    pub const STAMINA_BACK: [f32; 4] = rgb(50, 50, 50);
    pub const STAMINA_SPRINTING: [f32; 4] = rgb(255, 255, 0);
    pub const STAMINA_COOLDOWN: [f32; 4] = rgb(100, 100, 100);
    pub const STAMINA_READY: [f32; 4] = rgb(0, 255, 255);

    pub const BUTTON: [f32; 4] = rgb(100, 100, 100);
    pub const BEGIN_BUTTON: [f32; 4] = rgb(0, 100, 0);
    pub const EXIT_BUTTON: [f32; 4] = rgb(100, 0, 0);
    pub const UPGRADE_BUTTON: [f32; 4] = rgb(50, 50, 50);
    pub const UPGRADE_BORDER: [f32; 4] = rgb(100, 100, 100);
    pub const PANEL: [f32; 4] = rgb(30, 30, 30);
    pub const SCROLLBAR: [f32; 4] = rgb(100, 100, 100);
}
