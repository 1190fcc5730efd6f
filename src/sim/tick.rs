//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::state::{Facing, GamePhase, GameState, clamp_to_arena};

/// Movement keys held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl TickInput {
    pub fn press(&mut self, dir: Facing) {
        self.set(dir, true);
    }

    pub fn release(&mut self, dir: Facing) {
        self.set(dir, false);
    }

    fn set(&mut self, dir: Facing, held: bool) {
        match dir {
            Facing::Up => self.up = held,
            Facing::Down => self.down = held,
            Facing::Left => self.left = held,
            Facing::Right => self.right = held,
        }
    }

    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }

    /// Summed direction; opposite keys cancel and diagonals are not normalized
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        for (held, facing) in [
            (self.up, Facing::Up),
            (self.down, Facing::Down),
            (self.left, Facing::Left),
            (self.right, Facing::Right),
        ] {
            if held {
                dir += facing.unit();
            }
        }
        dir
    }
}

/// Advance the game state by one fixed timestep of `dt_ms` milliseconds
///
/// Nothing moves after game over, not even the clock.
pub fn tick(state: &mut GameState, input: &TickInput, dt_ms: u64) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.time_ticks += 1;
    state.time_ms += dt_ms;
    if state.cooldown.poll(state.time_ms) {
        log::trace!("Weapon ready at {} ms", state.time_ms);
    }

    move_player(state, input);
    steer_zombies(state);
    advance_bullets(state);

    let report = resolve_collisions(state);
    if !report.kills.is_empty() {
        log::debug!(
            "Tick {}: {} kills, score {}",
            state.time_ticks,
            report.kills.len(),
            state.score
        );
    }
}

/// Apply held directions and clamp to the arena
fn move_player(state: &mut GameState, input: &TickInput) {
    if !input.any() {
        return;
    }
    let arena = state.arena();
    let player = &mut state.player;
    let target = player.pos + input.direction() * player.speed;
    player.pos = clamp_to_arena(target, player.size, arena);
}

/// Every zombie takes one step straight at the player's center
fn steer_zombies(state: &mut GameState) {
    let arena = state.arena();
    let target = state.player.center();
    let base_speed = state.tuning.zombies.base_speed;

    for zombie in &mut state.zombies {
        let to_player = target - zombie.center();
        let distance = to_player.length();
        // Coincident centers have no direction to walk in
        if distance > 0.0 {
            zombie.pos += to_player / distance * base_speed * zombie.speed_factor;
            zombie.pos = clamp_to_arena(zombie.pos, zombie.size, arena);
        }
    }
}

/// Move bullets and drop the ones that left the arena
fn advance_bullets(state: &mut GameState) {
    let arena = state.arena();
    for bullet in &mut state.bullets {
        bullet.pos += bullet.vel;
    }
    state.bullets.retain(|b| !b.is_outside(arena));
}
