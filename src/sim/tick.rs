//! Fixed timestep simulation tick
//!
//! Core game loop that advances the Running state deterministically.

use super::entity::separate_all;
use super::state::{GameState, RunStats};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Sprint button held
    pub sprint: bool,
    /// Shoot clicked since the previous tick
    pub shoot: bool,
}

/// What the screen state machine should do after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep running
    Continue,
    /// The player just reached `level`; an upgrade choice is pending
    LevelUp { level: u32 },
    /// Health reached zero
    GameOver,
}

/// Advance the run by one fixed timestep
pub fn tick(
    state: &mut GameState,
    stats: &mut RunStats,
    input: &TickInput,
    dt: f32,
) -> TickOutcome {
    state.time_ticks += 1;

    // Player movement and sprint state
    state.player.move_with(input, dt);

    // Five-level milestones
    state.apply_level_scaling();

    // Ranged attack
    if state.player.has_ranged_attack() {
        if input.shoot {
            state.player.shoot_arrow(&state.enemies);
        }
        let reward = state.tuning.arrow_kill_experience;
        let kills = state.player.update_ranged(dt, &mut state.enemies, reward);
        stats.enemies_defeated += kills;
        stats.xp_gained += kills * reward;
    }

    state.update_camera();

    // Orb pickups
    let player_box = state.player.bounds();
    let mut collected = 0;
    state.orbs.retain(|orb| {
        if player_box.overlaps(&orb.bounds()) {
            collected += orb.experience;
            false
        } else {
            true
        }
    });
    if collected > 0 {
        state.player.gain_experience(collected);
        stats.xp_gained += collected;
    }

    // Spawning
    let orb_interval = state.tuning.orb_spawn_interval;
    if state.orb_timer.advance(dt, orb_interval) {
        state.spawn_orb();
    }
    let enemy_interval = state.tuning.enemy_spawn_interval_at(state.player.level);
    if state.enemy_timer.advance(dt, enemy_interval) {
        state.spawn_enemy();
    }

    // Enemy steering
    let target = state.player.pos;
    for enemy in &mut state.enemies {
        enemy.update(target);
    }
    separate_all(&mut state.enemies);

    // Contact: each touching enemy hits once and is destroyed
    let player_box = state.player.bounds();
    let before = state.enemies.len();
    state.enemies.retain(|enemy| !player_box.overlaps(&enemy.bounds()));
    let hits = (before - state.enemies.len()) as u32;
    if hits > 0 {
        state.player.take_damage(hits * state.tuning.enemy_contact_damage);
        stats.enemies_defeated += hits;
    }

    // Derived from the tick count so long runs don't drift
    stats.elapsed_secs = state.time_ticks as f64 * dt as f64;
    stats.level_reached = state.player.level;

    if state.player.is_dead() {
        log::info!(
            "Game over after {}s at level {} ({} enemies defeated)",
            stats.time_survived(),
            stats.level_reached,
            stats.enemies_defeated
        );
        return TickOutcome::GameOver;
    }

    if state.player.can_level_up() {
        state.player.level_up();
        stats.level_reached = state.player.level;
        log::info!("Level up! Now level {}", state.player.level);
        return TickOutcome::LevelUp {
            level: state.player.level,
        };
    }

    TickOutcome::Continue
}
