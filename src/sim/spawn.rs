//! Timed enemy spawning

use super::clock::Clock;
use super::rng::RandomSource;
use super::state::GameState;

/// Spawn one enemy at a random column once the current interval has elapsed
///
/// Returns the new enemy's ID, if one was spawned.
pub fn try_spawn(
    state: &mut GameState,
    clock: &impl Clock,
    rng: &mut impl RandomSource,
) -> Option<u32> {
    if clock.elapsed_ms(state.last_spawn) < state.spawn_interval_ms {
        return None;
    }

    let x = rng.below(state.tuning.enemy_spawn_span()) as f32;
    let id = state.spawn_enemy_at(x);
    state.last_spawn = clock.now();
    log::debug!(
        "Enemy {} spawned at x={} (interval {} ms)",
        id,
        x,
        state.spawn_interval_ms
    );
    Some(id)
}
