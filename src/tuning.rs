//! Data-driven game balance
//!
//! Every gameplay constant the simulation reads lives in [`Tuning`]. The
//! defaults reproduce the classic arcade feel; a JSON document can override
//! any subset of fields.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::DifficultyCurve;

/// Reasons a tuning document is rejected
#[derive(Debug)]
pub enum TuningError {
    /// The document is not valid JSON for [`Tuning`]
    Parse(serde_json::Error),
    /// A size is zero, negative, or not finite
    InvalidDimension { field: &'static str, value: f32 },
    /// A speed is negative or not finite
    InvalidSpeed { field: &'static str, value: f32 },
    /// A row lies above the top of the field or is not finite
    InvalidPosition { field: &'static str, value: f32 },
    /// The playfield cannot hold an entity of the given size
    FieldTooSmall {
        field: &'static str,
        value: f32,
        required: f32,
    },
    /// Difficulty step at `index` raises the interval or repeats a threshold
    UnorderedDifficulty { index: usize },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid tuning document: {err}"),
            Self::InvalidDimension { field, value } => {
                write!(f, "{field} must be a positive size, got {value}")
            }
            Self::InvalidSpeed { field, value } => {
                write!(f, "{field} must be a non-negative speed, got {value}")
            }
            Self::InvalidPosition { field, value } => {
                write!(f, "{field} must lie on or below the top edge, got {value}")
            }
            Self::FieldTooSmall {
                field,
                value,
                required,
            } => write!(f, "{field} is {value}, need at least {required}"),
            Self::UnorderedDifficulty { index } => write!(
                f,
                "difficulty step {index} must have a higher score threshold and no longer interval than the step before it"
            ),
        }
    }
}

impl std::error::Error for TuningError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for TuningError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Gameplay constants for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Player ===
    /// Horizontal travel per tick while a direction is held
    pub player_speed: f32,
    pub player_width: f32,
    pub player_height: f32,
    /// Distance from the bottom edge to the ship's top
    pub player_bottom_offset: f32,

    // === Projectiles ===
    pub projectile_width: f32,
    pub projectile_height: f32,
    /// Upward travel per tick
    pub projectile_speed: f32,
    pub muzzle_x_offset: f32,
    pub muzzle_bottom_offset: f32,
    /// Drop projectiles once they have fully left the top of the field
    pub cull_offscreen_projectiles: bool,

    // === Enemies ===
    pub enemy_size: f32,
    /// Downward travel per tick
    pub enemy_speed: f32,
    pub enemy_spawn_y: f32,
    pub initial_enemy_count: u32,
    pub initial_enemy_spacing: f32,

    // === Pacing ===
    pub fire_cooldown_ms: u64,
    pub score_per_kill: u32,
    pub difficulty: DifficultyCurve,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            player_speed: PLAYER_SPEED,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            player_bottom_offset: PLAYER_BOTTOM_OFFSET,

            projectile_width: PROJECTILE_WIDTH,
            projectile_height: PROJECTILE_HEIGHT,
            projectile_speed: PROJECTILE_SPEED,
            muzzle_x_offset: MUZZLE_X_OFFSET,
            muzzle_bottom_offset: MUZZLE_BOTTOM_OFFSET,
            cull_offscreen_projectiles: true,

            enemy_size: ENEMY_SIZE,
            enemy_speed: ENEMY_SPEED,
            enemy_spawn_y: ENEMY_SPAWN_Y,
            initial_enemy_count: INITIAL_ENEMY_COUNT,
            initial_enemy_spacing: INITIAL_ENEMY_SPACING,

            fire_cooldown_ms: FIRE_COOLDOWN_MS,
            score_per_kill: SCORE_PER_KILL,
            difficulty: DifficultyCurve::default(),
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON document and validate the result
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), TuningError> {
        let dimensions = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("player_width", self.player_width),
            ("player_height", self.player_height),
            ("projectile_width", self.projectile_width),
            ("projectile_height", self.projectile_height),
            ("enemy_size", self.enemy_size),
        ];
        for (field, value) in dimensions {
            if !value.is_finite() || value <= 0.0 {
                return Err(TuningError::InvalidDimension { field, value });
            }
        }

        let speeds = [
            ("player_speed", self.player_speed),
            ("projectile_speed", self.projectile_speed),
            ("enemy_speed", self.enemy_speed),
        ];
        for (field, value) in speeds {
            if !value.is_finite() || value < 0.0 {
                return Err(TuningError::InvalidSpeed { field, value });
            }
        }

        if !self.enemy_spawn_y.is_finite() || self.enemy_spawn_y < 0.0 {
            return Err(TuningError::InvalidPosition {
                field: "enemy_spawn_y",
                value: self.enemy_spawn_y,
            });
        }

        let required_width = self.enemy_size.max(self.player_width);
        if self.field_width < required_width {
            return Err(TuningError::FieldTooSmall {
                field: "field_width",
                value: self.field_width,
                required: required_width,
            });
        }
        if self.field_height < self.enemy_size {
            return Err(TuningError::FieldTooSmall {
                field: "field_height",
                value: self.field_height,
                required: self.enemy_size,
            });
        }

        if let Some(index) = self.difficulty.first_unordered_step() {
            return Err(TuningError::UnorderedDifficulty { index });
        }

        Ok(())
    }

    /// Rightmost x the player's left edge may reach (never below 0)
    #[inline]
    pub fn player_max_x(&self) -> f32 {
        (self.field_width - self.player_width).max(0.0)
    }

    /// Fixed row of the player ship
    #[inline]
    pub fn player_y(&self) -> f32 {
        self.field_height - self.player_bottom_offset
    }

    /// Row new projectiles start on
    #[inline]
    pub fn muzzle_y(&self) -> f32 {
        self.field_height - self.muzzle_bottom_offset
    }

    /// An enemy whose y exceeds this line ends the run
    #[inline]
    pub fn game_over_line(&self) -> f32 {
        self.field_height - self.enemy_size
    }

    /// Number of distinct integer x positions a spawned enemy may take
    #[inline]
    pub fn enemy_spawn_span(&self) -> u32 {
        (self.field_width - self.enemy_size).max(0.0) as u32
    }
}
