//! Per-tick simulation step
//!
//! Drives the Playing/GameOver state machine and runs the gameplay systems in
//! a fixed, observable order.

use super::clock::Clock;
use super::rng::RandomSource;
use super::state::GameState;
use super::{collision, difficulty, fire, motion, spawn};

/// Key state sampled once per tick (level-triggered, no edge detection)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    /// Only consulted while the run is over
    pub restart: bool,
}

/// Advance the game state by one tick
///
/// While Playing, the order is: difficulty refresh, steering, firing,
/// motion (projectiles then enemies), off-field cleanup, collisions,
/// spawning. If an enemy breaks through during motion the tick ends there.
/// While GameOver, only the restart key is watched.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    clock: &impl Clock,
    rng: &mut impl RandomSource,
) {
    state.events.clear();

    if state.is_game_over() {
        if input.restart {
            state.reset(clock.now());
        }
        return;
    }

    state.time_ticks += 1;

    difficulty::refresh(state);
    motion::steer_player(state, input);
    fire::try_fire(state, input.fire, clock);
    motion::integrate(state);

    // Entities freeze the moment the run ends
    if state.is_game_over() {
        return;
    }

    motion::cull_offscreen_projectiles(state);
    collision::resolve(state);
    spawn::try_spawn(state, clock, rng);
}
