//! Projectile/enemy hit detection and resolution
//!
//! Hits use a corner test: only the projectile's top-left corner is checked
//! against the enemy box, with strict bounds on every side. Shots grazing an
//! enemy with their body but not their corner pass straight through.

use glam::Vec2;

use super::state::{GameEvent, GameState};

/// True if `shot` lies strictly inside the `size`×`size` box at `enemy`
#[inline]
pub fn corner_hit(shot: Vec2, enemy: Vec2, size: f32) -> bool {
    shot.x > enemy.x && shot.x < enemy.x + size && shot.y > enemy.y && shot.y < enemy.y + size
}

/// Remove every projectile/enemy pair that hit this tick and credit score
///
/// Projectiles are scanned oldest first; each takes the first enemy (in
/// store order) its corner falls inside. Removal happens in place while
/// scanning, so the projectile that slides into a vacated slot is not tested
/// until the next tick.
///
/// Returns the number of enemies destroyed.
pub fn resolve(state: &mut GameState) -> u32 {
    let size = state.tuning.enemy_size;
    let mut kills = 0;

    let mut bi = 0;
    while bi < state.projectiles.len() {
        let shot = state.projectiles[bi].pos;
        if let Some(ei) = state
            .enemies
            .iter()
            .position(|enemy| corner_hit(shot, enemy.pos, size))
        {
            let enemy = state.enemies.remove(ei);
            let projectile = state.projectiles.remove(bi);
            state.score = state.score.saturating_add(state.tuning.score_per_kill);
            kills += 1;

            log::debug!(
                "Projectile {} destroyed enemy {} at ({}, {}), score {}",
                projectile.id,
                enemy.id,
                enemy.pos.x,
                enemy.pos.y,
                state.score
            );
            state.events.push(GameEvent::EnemyDestroyed {
                enemy_id: enemy.id,
                projectile_id: projectile.id,
                pos: enemy.pos,
            });
        }
        bi += 1;
    }

    kills
}
