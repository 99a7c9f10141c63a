//! Star Volley headless driver
//!
//! Plays one autopiloted run on a simulated 60 Hz frame clock and reports the
//! result. Usage: `star-volley [seed] [tuning.json]`.

#[cfg(not(target_arch = "wasm32"))]
use star_volley::Tuning;
#[cfg(not(target_arch = "wasm32"))]
use star_volley::sim::{Clock, GameEvent, GameState, ManualClock, TickInput, seeded, tick};

/// Simulated frame length (ms)
#[cfg(not(target_arch = "wasm32"))]
const FRAME_MS: u64 = 16;
/// Stop after ten minutes of simulated play
#[cfg(not(target_arch = "wasm32"))]
const MAX_TICKS: u64 = 60 * 60 * 10;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let tuning = args.next().map(|path| load_tuning(&path)).unwrap_or_default();

    log::info!("Star Volley (headless) starting with seed {seed}");

    let clock = ManualClock::new();
    let mut rng = seeded(seed);
    let mut state = GameState::new(tuning, clock.now());
    let mut kills = 0u32;
    let mut shots = 0u32;

    while state.time_ticks < MAX_TICKS && !state.is_game_over() {
        clock.advance(FRAME_MS);
        let input = autopilot(&state);
        tick(&mut state, &input, &clock, &mut rng);

        for event in &state.events {
            match event {
                GameEvent::EnemyDestroyed { .. } => kills += 1,
                GameEvent::ProjectileFired { .. } => shots += 1,
                _ => {}
            }
        }
    }

    let outcome = if state.is_game_over() {
        "breached"
    } else {
        "survived"
    };
    println!("Run {outcome} after {} ticks", state.time_ticks);
    println!("  score: {}", state.score);
    println!("  kills: {kills} / {shots} shots");
    println!("  enemies on field: {}", state.enemies.len());
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Headless driver is native-only
}

/// Read a tuning document, falling back to defaults on any problem
#[cfg(not(target_arch = "wasm32"))]
fn load_tuning(path: &str) -> Tuning {
    let loaded = std::fs::read_to_string(path)
        .map_err(|err| err.to_string())
        .and_then(|json| Tuning::from_json(&json).map_err(|err| err.to_string()));

    match loaded {
        Ok(tuning) => {
            log::info!("Loaded tuning from {path}");
            tuning
        }
        Err(err) => {
            log::warn!("Ignoring tuning file {path}: {err}");
            Tuning::default()
        }
    }
}

/// Hold fire and slide under the enemy closest to breaking through
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(state: &GameState) -> TickInput {
    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };

    let threat = state
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y));
    if let Some(enemy) = threat {
        let muzzle = state.player.pos.x + state.tuning.muzzle_x_offset;
        let aim = enemy.pos.x + state.tuning.enemy_size / 2.0;
        let slack = state.tuning.player_speed / 2.0;
        if muzzle < aim - slack {
            input.right = true;
        } else if muzzle > aim + slack {
            input.left = true;
        }
    }

    input
}
