//! Idle/demo mode: a simple bot that plays the Running state
//!
//! Flees the nearest enemy when it gets close, otherwise walks to the
//! nearest orb, and shoots whenever the attack is ready.

use glam::Vec2;

use super::state::GameState;
use super::tick::TickInput;

/// Enemies closer than this make the bot run away
pub const FLEE_RADIUS: f32 = 220.0;
/// Enemies closer than this make the bot sprint
pub const PANIC_RADIUS: f32 = 120.0;

/// Choose this tick's input from the current state
pub fn autopilot(state: &GameState) -> TickInput {
    let player = &state.player;
    let center = player.pos + Vec2::splat(player.size / 2.0);

    let nearest_enemy = state
        .enemies
        .iter()
        .map(|e| (e.pos(), e.pos().distance(center)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    let mut input = TickInput {
        shoot: player.has_ranged_attack() && nearest_enemy.is_some(),
        ..Default::default()
    };

    let heading = match nearest_enemy {
        Some((pos, dist)) if dist < FLEE_RADIUS => {
            input.sprint = dist < PANIC_RADIUS;
            center - pos
        }
        _ => state
            .orbs
            .iter()
            .map(|o| o.pos() - center)
            .min_by(|a, b| {
                a.length_squared()
                    .partial_cmp(&b.length_squared())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .unwrap_or(Vec2::ZERO),
    };

    // Dead zone of one step avoids jittering around the goal
    let step = player.speed();
    input.right = heading.x > step;
    input.left = heading.x < -step;
    input.down = heading.y > step;
    input.up = heading.y < -step;
    input
}
