//! Renderer-agnostic draw output
//!
//! Gameplay entities are turned into primitive [`Shape`]s in screen space
//! (world position minus the camera offset). Text is emitted as [`Label`]s
//! for whatever font backend the host has.

use glam::Vec2;

use super::vertex::colors;
use crate::sim::{Arrow, Bounds, Enemy, GameState, Orb, Player, SprintState};
use crate::ui::Button;

pub const BAR_WIDTH: f32 = 50.0;
pub const BAR_HEIGHT: f32 = 5.0;
const BORDER: f32 = 2.0;

/// A filled primitive, screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    /// Square rotated 45 degrees; `radius` is center to corner
    Diamond {
        center: Vec2,
        radius: f32,
        color: [f32; 4],
    },
    Rect {
        min: Vec2,
        size: Vec2,
        color: [f32; 4],
    },
    /// Rectangle border of `thickness` drawn inside the box
    Outline {
        min: Vec2,
        size: Vec2,
        thickness: f32,
        color: [f32; 4],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    /// `pos` is the top-left corner
    Left,
    /// `pos` is the center
    Center,
    /// `pos` is the top-right corner
    Right,
}

/// A line of text
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub pos: Vec2,
    pub text: String,
    pub color: [f32; 4],
    pub align: Align,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    pub shapes: Vec<Shape>,
    pub labels: Vec<Label>,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&mut self, pos: Vec2, text: impl Into<String>, color: [f32; 4], align: Align) {
        self.labels.push(Label {
            pos,
            text: text.into(),
            color,
            align,
        });
    }

    /// Filled button with its label centered
    pub fn button(&mut self, button: &Button, background: [f32; 4], text: [f32; 4]) {
        self.shapes.push(rect(button.rect, background));
        self.text(button.rect.center(), button.label, text, Align::Center);
    }

    /// Framed panel, used for the class box and About categories
    pub fn panel(&mut self, bounds: Bounds, fill: Option<[f32; 4]>, border: [f32; 4]) {
        if let Some(fill) = fill {
            self.shapes.push(rect(bounds, fill));
        }
        self.shapes.push(Shape::Outline {
            min: bounds.min,
            size: bounds.size,
            thickness: BORDER,
            color: border,
        });
    }

    pub fn label(&self, text: &str) -> Option<&Label> {
        self.labels.iter().find(|l| l.text == text)
    }
}

fn rect(bounds: Bounds, color: [f32; 4]) -> Shape {
    Shape::Rect {
        min: bounds.min,
        size: bounds.size,
        color,
    }
}

pub fn orb_shape(orb: &Orb, camera: Vec2) -> Shape {
    Shape::Circle {
        center: orb.pos() - camera,
        radius: orb.radius,
        color: colors::ORB,
    }
}

pub fn enemy_shape(enemy: &Enemy, camera: Vec2) -> Shape {
    Shape::Diamond {
        center: enemy.pos() - camera,
        radius: enemy.radius,
        color: colors::ENEMY,
    }
}

pub fn arrow_shape(arrow: &Arrow, half_size: f32, camera: Vec2) -> Shape {
    Shape::Circle {
        center: arrow.pos - camera,
        radius: half_size,
        color: colors::ARROW,
    }
}

pub fn stamina_color(sprint: SprintState) -> [f32; 4] {
    match sprint {
        SprintState::Sprinting { .. } => colors::STAMINA_SPRINTING,
        SprintState::CoolingDown { .. } => colors::STAMINA_COOLDOWN,
        SprintState::Ready => colors::STAMINA_READY,
    }
}

/// Player body, health bar above, stamina bar below
pub fn player_shapes(player: &Player, camera: Vec2) -> [Shape; 5] {
    let min = player.pos - camera;
    let health_ratio = player.health() as f32 / player.max_health().max(1) as f32;
    let stamina_ratio = if player.max_stamina() > 0.0 {
        player.stamina() / player.max_stamina()
    } else {
        0.0
    };
    let health_at = min - Vec2::new(0.0, 10.0);
    let stamina_at = min + Vec2::new(0.0, player.size + 5.0);

    [
        Shape::Rect {
            min,
            size: Vec2::splat(player.size),
            color: colors::PLAYER,
        },
        Shape::Rect {
            min: health_at,
            size: Vec2::new(BAR_WIDTH, BAR_HEIGHT),
            color: colors::HEALTH_BACK,
        },
        Shape::Rect {
            min: health_at,
            size: Vec2::new(BAR_WIDTH * health_ratio, BAR_HEIGHT),
            color: colors::HEALTH_FILL,
        },
        Shape::Rect {
            min: stamina_at,
            size: Vec2::new(BAR_WIDTH, BAR_HEIGHT),
            color: colors::STAMINA_BACK,
        },
        Shape::Rect {
            min: stamina_at,
            size: Vec2::new(BAR_WIDTH * stamina_ratio, BAR_HEIGHT),
            color: stamina_color(player.sprint_state()),
        },
    ]
}

/// Orbs, then enemies, then the player, then arrows on top
pub fn world_shapes(state: &GameState) -> Vec<Shape> {
    let camera = state.camera;
    let mut shapes = Vec::with_capacity(state.orbs.len() + state.enemies.len() + 8);
    shapes.extend(state.orbs.iter().map(|o| orb_shape(o, camera)));
    shapes.extend(state.enemies.iter().map(|e| enemy_shape(e, camera)));
    shapes.extend(player_shapes(&state.player, camera));
    if let Some(ranged) = &state.player.ranged {
        let half = ranged.half_size();
        shapes.extend(ranged.arrows().iter().map(|a| arrow_shape(a, half, camera)));
    }
    shapes
}

/// "mm:ss"
pub fn format_timer(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Level, experience and health, top-left
pub fn hud_lines(player: &Player) -> [String; 3] {
    [
        format!("Level: {}", player.level),
        format!("XP: {}/{}", player.experience(), player.experience_to_level()),
        format!("Health: {}", player.health()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::PlayerClass;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        let tuning = Tuning {
            orb_spawn_interval: 1.0e9,
            enemy_spawn_interval: 1.0e9,
            ..Tuning::default()
        };
        GameState::new(1, tuning, Vec2::new(800.0, 600.0), Some(PlayerClass::ArcaneMage))
    }

    #[test]
    fn test_player_drawn_at_screen_center() {
        let s = state();
        let shapes = player_shapes(&s.player, s.camera);
        match shapes[0] {
            Shape::Rect { min, size, .. } => {
                assert_eq!(min, Vec2::new(384.0, 284.0));
                assert_eq!(size, Vec2::splat(32.0));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_health_bar_shrinks() {
        let mut s = state();
        s.player.take_damage(50);
        match player_shapes(&s.player, s.camera)[2] {
            Shape::Rect { size, .. } => assert!((size.x - 25.0).abs() < 1e-4),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_stamina_colors() {
        assert_eq!(stamina_color(SprintState::Ready), colors::STAMINA_READY);
        assert_eq!(
            stamina_color(SprintState::Sprinting { remaining: 1.0 }),
            colors::STAMINA_SPRINTING
        );
        assert_eq!(
            stamina_color(SprintState::CoolingDown { remaining: 1.0 }),
            colors::STAMINA_COOLDOWN
        );
    }

    #[test]
    fn test_world_shapes_use_camera() {
        let mut s = state();
        s.add_enemy(Vec2::new(100.0, 0.0), 0.0);
        let shapes = world_shapes(&s);
        // enemy + 5 player shapes
        assert_eq!(shapes.len(), 6);
        match shapes[0] {
            Shape::Diamond { center, radius, .. } => {
                assert_eq!(center, Vec2::new(100.0, 0.0) - s.camera);
                assert_eq!(radius, 15.0);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_format_timer() {
        assert_eq!(format_timer(0), "00:00");
        assert_eq!(format_timer(75), "01:15");
        assert_eq!(format_timer(3600), "60:00");
    }

    #[test]
    fn test_hud_lines() {
        let s = state();
        assert_eq!(
            hud_lines(&s.player),
            ["Level: 1".to_string(), "XP: 0/100".to_string(), "Health: 100".to_string()]
        );
    }
}
