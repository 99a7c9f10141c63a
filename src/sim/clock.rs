//! Monotonic time source for cooldowns and spawn pacing
//!
//! Timers are wall-clock based rather than tick-counted, so the simulation
//! reads time through [`Clock`]. Tests and replays drive a [`ManualClock`].

use std::cell::Cell;
use std::time::Instant;

use serde::{Deserialize, Serialize};

/// A captured instant, in milliseconds since the clock's origin
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Timestamp(pub u64);

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp(0);

    #[inline]
    pub fn as_millis(self) -> u64 {
        self.0
    }
}

/// Source of monotonic time
pub trait Clock {
    /// Current instant
    fn now(&self) -> Timestamp;

    /// Milliseconds elapsed since `since` (zero if `since` lies in the future)
    fn elapsed_ms(&self, since: Timestamp) -> u64 {
        self.now().0.saturating_sub(since.0)
    }
}

/// Real time, measured from the moment the clock was created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        let millis = self.origin.elapsed().as_millis();
        Timestamp(u64::try_from(millis).unwrap_or(u64::MAX))
    }
}

/// Hand-driven clock; time only moves when told to
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at an arbitrary instant
    pub fn starting_at(millis: u64) -> Self {
        Self {
            now: Cell::new(millis),
        }
    }

    /// Move time forward by `millis`
    pub fn advance(&self, millis: u64) {
        self.now.set(self.now.get().saturating_add(millis));
    }

    /// Jump to `millis`; never moves backwards
    pub fn set(&self, millis: u64) {
        self.now.set(self.now.get().max(millis));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        Timestamp(self.now.get())
    }
}
