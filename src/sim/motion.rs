//! Player steering, fixed-step motion integration and off-field cleanup

use super::state::GameState;
use super::tick::TickInput;

/// Apply held direction keys to the player, clamped to the field
///
/// Left wins when both directions are held.
pub fn steer_player(state: &mut GameState, input: &TickInput) {
    let speed = state.tuning.player_speed;
    let dx = if input.left {
        -speed
    } else if input.right {
        speed
    } else {
        return;
    };
    let max_x = state.tuning.player_max_x();
    state.player.pos.x = (state.player.pos.x + dx).clamp(0.0, max_x);
}

/// Advance projectiles (up) then enemies (down) by one tick
///
/// The enemy pass stops at the first enemy past the game-over line; enemies
/// after it keep their position for this tick. Nothing is removed here.
pub fn integrate(state: &mut GameState) {
    let projectile_step = state.tuning.projectile_speed;
    for projectile in &mut state.projectiles {
        projectile.pos.y -= projectile_step;
    }

    let enemy_step = state.tuning.enemy_speed;
    let line = state.tuning.game_over_line();
    let breached = state.enemies.iter_mut().any(|enemy| {
        enemy.pos.y += enemy_step;
        enemy.pos.y > line
    });

    if breached {
        state.end_run();
    }
}

/// Drop projectiles whose bottom edge has left the top of the field
///
/// No-op unless `cull_offscreen_projectiles` is set. Hit results are
/// unaffected as long as enemies never rise above `y = 0`, which holds for a
/// validated tuning (non-negative spawn row and enemy speed).
///
/// Returns the number of projectiles dropped.
pub fn cull_offscreen_projectiles(state: &mut GameState) -> usize {
    if !state.tuning.cull_offscreen_projectiles {
        return 0;
    }
    let height = state.tuning.projectile_height;
    let before = state.projectiles.len();
    state.projectiles.retain(|p| p.pos.y + height >= 0.0);
    before - state.projectiles.len()
}
