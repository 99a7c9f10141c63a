//! Game state and core simulation types
//!
//! A single owned [`GameState`] holds everything a run needs. Every
//! simulation step receives it explicitly; nothing is global.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::clock::Timestamp;
use crate::tuning::Tuning;

/// Current phase of a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    #[default]
    Playing,
    /// An enemy broke through; waiting for a restart
    GameOver,
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner; only `x` ever changes
    pub pos: Vec2,
}

/// A shot travelling up the field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
}

/// A descending enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
}

/// Notable things that happened during the last tick (for rendering/audio cues)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    ProjectileFired { id: u32, pos: Vec2 },
    EnemySpawned { id: u32, pos: Vec2 },
    EnemyDestroyed {
        enemy_id: u32,
        projectile_id: u32,
        pos: Vec2,
    },
    GameOver { score: u32 },
    Restarted,
}

/// Complete run state (serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Balance constants for this run
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Player ship
    pub player: Player,
    /// Active projectiles, oldest first
    pub projectiles: Vec<Projectile>,
    /// Active enemies, oldest first
    pub enemies: Vec<Enemy>,
    /// Score, credited in fixed increments per kill
    pub score: u32,
    /// Highest score reached since the state was created
    pub best_score: u32,
    /// Spawn interval derived from `score` this tick
    pub spawn_interval_ms: u64,
    /// When the last enemy was spawned (or the run started)
    pub last_spawn: Timestamp,
    /// When the last shot left the muzzle; `None` until the first shot
    pub last_fire: Option<Timestamp>,
    /// Ticks simulated since the run started
    pub time_ticks: u64,
    /// Events emitted by the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default(), Timestamp::ZERO)
    }
}

impl GameState {
    /// Start a fresh run at `now` with the initial enemy formation in place
    pub fn new(tuning: Tuning, now: Timestamp) -> Self {
        let spawn_interval_ms = tuning.difficulty.spawn_interval_ms(0);
        let player = Player {
            pos: Vec2::new(centered_x(&tuning), tuning.player_y()),
        };
        let mut state = Self {
            tuning,
            phase: GamePhase::Playing,
            player,
            projectiles: Vec::new(),
            enemies: Vec::new(),
            score: 0,
            best_score: 0,
            spawn_interval_ms,
            last_spawn: now,
            last_fire: None,
            time_ticks: 0,
            events: Vec::new(),
            next_id: 1,
        };

        state.seed_formation();
        log::info!(
            "Run started: {} enemies, spawn interval {} ms",
            state.enemies.len(),
            state.spawn_interval_ms
        );

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Place an enemy on the spawn row at `x`
    pub fn spawn_enemy_at(&mut self, x: f32) -> u32 {
        let id = self.next_entity_id();
        let pos = Vec2::new(x, self.tuning.enemy_spawn_y);
        self.enemies.push(Enemy { id, pos });
        self.events.push(GameEvent::EnemySpawned { id, pos });
        id
    }

    /// Place a projectile with its top-left corner at `pos`
    pub fn spawn_projectile_at(&mut self, pos: Vec2) -> u32 {
        let id = self.next_entity_id();
        self.projectiles.push(Projectile { id, pos });
        self.events.push(GameEvent::ProjectileFired { id, pos });
        id
    }

    /// Flip to GameOver; entities stay where they are
    pub fn end_run(&mut self) {
        if self.is_game_over() {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.best_score = self.best_score.max(self.score);
        self.events.push(GameEvent::GameOver { score: self.score });
        log::info!(
            "Game over after {} ticks, score {} (best {})",
            self.time_ticks,
            self.score,
            self.best_score
        );
    }

    /// Return to a clean Playing state at `now`
    ///
    /// Score and both entity lists are cleared, the player is re-centered and
    /// both timers restart. The formation is not re-seeded.
    pub fn reset(&mut self, now: Timestamp) {
        self.best_score = self.best_score.max(self.score);
        self.phase = GamePhase::Playing;
        self.player.pos = Vec2::new(centered_x(&self.tuning), self.tuning.player_y());
        self.projectiles.clear();
        self.enemies.clear();
        self.score = 0;
        self.spawn_interval_ms = self.tuning.difficulty.spawn_interval_ms(0);
        self.last_spawn = now;
        self.last_fire = None;
        self.time_ticks = 0;
        self.events.push(GameEvent::Restarted);
        log::info!("Run restarted");
    }

    fn seed_formation(&mut self) {
        let count = self.tuning.initial_enemy_count;
        let spacing = self.tuning.initial_enemy_spacing;
        for i in 0..count {
            self.spawn_enemy_at(i as f32 * spacing);
        }
        // Initial formation is not a tick event
        self.events.clear();
    }
}

fn centered_x(tuning: &Tuning) -> f32 {
    (tuning.field_width / 2.0).clamp(0.0, tuning.player_max_x())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = GameState::new(Tuning::default(), Timestamp(1_234));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.player.pos, Vec2::new(200.0, 550.0));
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.spawn_interval_ms, 1000);
        assert_eq!(state.last_spawn, Timestamp(1_234));
        assert_eq!(state.last_fire, None);
        assert!(state.events.is_empty());

        let xs: Vec<f32> = state.enemies.iter().map(|e| e.pos.x).collect();
        assert_eq!(xs, vec![0.0, 80.0, 160.0, 240.0, 320.0]);
        assert!(state.enemies.iter().all(|e| e.pos.y == 50.0));
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let mut state = GameState::default();
        let a = state.spawn_enemy_at(10.0);
        let b = state.spawn_projectile_at(Vec2::new(0.0, 0.0));
        assert_ne!(a, b);
        let mut ids: Vec<u32> = state.enemies.iter().map(|e| e.id).collect();
        ids.push(b);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_end_run_is_idempotent() {
        let mut state = GameState::default();
        state.score = 40;
        state.end_run();
        state.end_run();
        assert!(state.is_game_over());
        assert_eq!(state.best_score, 40);
        let game_overs = state
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(game_overs, 1);
    }

    #[test]
    fn test_reset_clears_run() {
        let mut state = GameState::default();
        state.score = 520;
        state.spawn_interval_ms = 300;
        state.player.pos.x = 12.0;
        state.spawn_projectile_at(Vec2::new(30.0, 200.0));
        state.last_fire = Some(Timestamp(90));
        state.end_run();

        state.reset(Timestamp(5_000));
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 520);
        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.spawn_interval_ms, 1000);
        assert_eq!(state.last_spawn, Timestamp(5_000));
        assert_eq!(state.last_fire, None);
        assert_eq!(state.player.pos.x, 200.0);
    }

    #[test]
    fn test_snapshot_round_trips_without_events() {
        let mut state = GameState::default();
        state.spawn_projectile_at(Vec2::new(215.0, 540.0));
        let json = serde_json::to_string(&state).expect("serialize");
        let restored: GameState = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(restored.enemies, state.enemies);
        assert_eq!(restored.projectiles, state.projectiles);
        assert!(restored.events.is_empty());
    }

    #[test]
    fn test_oversized_player_pins_to_left_edge() {
        let tuning = Tuning {
            player_width: 500.0,
            ..Tuning::default()
        };
        let mut state = GameState::new(tuning, Timestamp::ZERO);
        assert_eq!(state.player.pos.x, 0.0);

        state.reset(Timestamp(10));
        assert_eq!(state.player.pos.x, 0.0);
    }
}
