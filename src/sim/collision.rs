//! Collision detection and combat resolution
//!
//! Everything in the arena is an axis-aligned box. Overlap uses open
//! intervals, so boxes that merely share an edge do not collide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{GamePhase, GameState};

/// Axis-aligned bounding box anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Strict overlap test (touching edges is not a hit)
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }
}

/// What happened during one collision pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Zombie that reached the player this tick
    pub player_hit_by: Option<u32>,
    /// Bullet impacts (zombie id per hit)
    pub hits: Vec<u32>,
    /// Zombies killed by bullets
    pub kills: Vec<u32>,
}

/// Resolve player contact first, then bullet impacts
pub fn resolve_collisions(state: &mut GameState) -> CollisionReport {
    let player_hit_by = resolve_player_contact(state);
    let (hits, kills) = resolve_bullet_hits(state);
    CollisionReport {
        player_hit_by,
        hits,
        kills,
    }
}

/// Handle the first zombie touching the player
///
/// Only one contact is processed per tick even if several zombies overlap.
/// Returns the id of the zombie that was consumed.
pub fn resolve_player_contact(state: &mut GameState) -> Option<u32> {
    let player = state.player.bounds();
    let idx = state
        .zombies
        .iter()
        .position(|z| player.overlaps(&z.bounds()))?;

    let zombie = state.zombies.remove(idx);
    state.lives = state.lives.saturating_sub(1);
    log::debug!(
        "Player caught by {:?} zombie {} ({} lives left)",
        zombie.kind,
        zombie.id,
        state.lives
    );
    state.spawn_zombie();

    if state.lives == 0 {
        state.phase = GamePhase::GameOver;
        log::info!("Game over with score {}", state.score);
    }
    Some(zombie.id)
}

/// Apply bullet damage; each bullet hits at most one zombie and is consumed
///
/// The newest bullet is resolved first, and it strikes the most recently
/// spawned zombie it overlaps. Bullets are rebuilt into a fresh collection
/// and zombies are removed by index outside of any zombie iteration.
pub fn resolve_bullet_hits(state: &mut GameState) -> (Vec<u32>, Vec<u32>) {
    let mut hits = Vec::new();
    let mut kills = Vec::new();
    let bullets = std::mem::take(&mut state.bullets);
    let mut survivors = Vec::with_capacity(bullets.len());

    for bullet in bullets.into_iter().rev() {
        let bounds = bullet.bounds();
        let Some(idx) = state
            .zombies
            .iter()
            .rposition(|z| bounds.overlaps(&z.bounds()))
        else {
            survivors.push(bullet);
            continue;
        };

        let zombie = &mut state.zombies[idx];
        zombie.hp -= bullet.damage;
        hits.push(zombie.id);
        log::debug!(
            "Bullet {} hit zombie {} for {} ({} hp left)",
            bullet.id,
            zombie.id,
            bullet.damage,
            zombie.hp
        );

        if zombie.is_dead() {
            let dead = state.zombies.remove(idx);
            state.score += dead.score_value;
            kills.push(dead.id);
            state.spawn_zombie();
        }
    }

    survivors.reverse();
    state.bullets = survivors;
    (hits, kills)
}
