//! Cooldown-gated firing
//!
//! Level-triggered: holding fire shoots once per cooldown window, measured in
//! elapsed time rather than ticks.

use glam::Vec2;

use super::clock::Clock;
use super::state::GameState;

/// Fire one projectile if `fire` is held and the cooldown has elapsed
///
/// Returns true when a shot was fired.
pub fn try_fire(state: &mut GameState, fire: bool, clock: &impl Clock) -> bool {
    if !fire {
        return false;
    }
    let cooldown = state.tuning.fire_cooldown_ms;
    let ready = state
        .last_fire
        .is_none_or(|last| clock.elapsed_ms(last) >= cooldown);
    if !ready {
        return false;
    }

    let muzzle = Vec2::new(
        state.player.pos.x + state.tuning.muzzle_x_offset,
        state.tuning.muzzle_y(),
    );
    let id = state.spawn_projectile_at(muzzle);
    state.last_fire = Some(clock.now());
    log::debug!("Projectile {} fired at ({}, {})", id, muzzle.x, muzzle.y);
    true
}
