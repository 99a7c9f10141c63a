//! Per-tick simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering and
//! platform code:
//! - One owned `GameState`, passed explicitly to every step
//! - Time only through `Clock`, randomness only through `RandomSource`
//! - Stable iteration order (store order, oldest first)

pub mod clock;
pub mod collision;
pub mod difficulty;
pub mod fire;
pub mod motion;
pub mod rng;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{Clock, ManualClock, SystemClock, Timestamp};
pub use collision::corner_hit;
pub use difficulty::{DifficultyCurve, DifficultyStep};
pub use rng::{RandomSource, ScriptedRandom, seeded};
pub use state::{Enemy, GameEvent, GamePhase, GameState, Player, Projectile};
pub use tick::{TickInput, tick};
