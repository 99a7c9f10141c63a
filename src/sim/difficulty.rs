//! Score-driven spawn pacing
//!
//! The spawn interval is a step function of score, re-derived every tick so
//! it can never drift out of sync with the current score.

use serde::{Deserialize, Serialize};

use super::state::GameState;

/// One rung of the difficulty ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyStep {
    /// Score at which this rung takes effect (inclusive)
    pub min_score: u32,
    pub spawn_interval_ms: u64,
}

/// Maps score to the enemy spawn interval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyCurve {
    /// Interval below the first rung
    pub base_interval_ms: u64,
    /// Rungs ordered by ascending `min_score`
    pub steps: Vec<DifficultyStep>,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        let step = |min_score, spawn_interval_ms| DifficultyStep {
            min_score,
            spawn_interval_ms,
        };
        Self {
            base_interval_ms: 1000,
            steps: vec![
                step(100, 900),
                step(200, 800),
                step(300, 700),
                step(400, 500),
                step(500, 300),
            ],
        }
    }
}

impl DifficultyCurve {
    /// Constant pacing regardless of score
    pub fn flat(interval_ms: u64) -> Self {
        Self {
            base_interval_ms: interval_ms,
            steps: Vec::new(),
        }
    }

    /// Spawn interval for the given score
    pub fn spawn_interval_ms(&self, score: u32) -> u64 {
        self.steps
            .iter()
            .rev()
            .find(|step| score >= step.min_score)
            .map_or(self.base_interval_ms, |step| step.spawn_interval_ms)
    }

    /// Index of the first rung that breaks ordering, if any
    ///
    /// Thresholds must strictly increase and intervals must never grow, which
    /// keeps the curve non-increasing in score.
    pub fn first_unordered_step(&self) -> Option<usize> {
        let mut prev_score: Option<u32> = None;
        let mut prev_interval = self.base_interval_ms;
        for (index, step) in self.steps.iter().enumerate() {
            if prev_score.is_some_and(|s| step.min_score <= s) || step.spawn_interval_ms > prev_interval
            {
                return Some(index);
            }
            prev_score = Some(step.min_score);
            prev_interval = step.spawn_interval_ms;
        }
        None
    }
}

/// Re-derive the spawn interval from the current score
pub fn refresh(state: &mut GameState) {
    state.spawn_interval_ms = state.tuning.difficulty.spawn_interval_ms(state.score);
}
