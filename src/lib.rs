//! Star Volley - simulation core for a top-down arcade shooter
//!
//! Core modules:
//! - `sim`: Per-tick simulation (movement, firing, spawning, collisions, game state)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, windowing and raw input polling live outside this crate; the
//! simulation only consumes a [`sim::TickInput`] snapshot each tick.

pub mod sim;
pub mod tuning;

pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Player ship defaults - rides a fixed row near the bottom edge
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 10.0;
    /// Distance from the bottom edge to the ship's top
    pub const PLAYER_BOTTOM_OFFSET: f32 = 50.0;

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 5.0;
    pub const PROJECTILE_HEIGHT: f32 = 10.0;
    /// Upward travel per tick
    pub const PROJECTILE_SPEED: f32 = 8.0;
    /// Muzzle position relative to the player's left edge / field bottom
    pub const MUZZLE_X_OFFSET: f32 = 15.0;
    pub const MUZZLE_BOTTOM_OFFSET: f32 = 60.0;

    /// Enemy defaults
    pub const ENEMY_SIZE: f32 = 40.0;
    /// Downward travel per tick
    pub const ENEMY_SPEED: f32 = 1.0;
    pub const ENEMY_SPAWN_Y: f32 = 50.0;

    /// Minimum time between two shots (ms)
    pub const FIRE_COOLDOWN_MS: u64 = 300;
    /// Points credited per destroyed enemy
    pub const SCORE_PER_KILL: u32 = 10;

    /// Enemies present when a fresh run starts
    pub const INITIAL_ENEMY_COUNT: u32 = 5;
    pub const INITIAL_ENEMY_SPACING: f32 = 80.0;
}
