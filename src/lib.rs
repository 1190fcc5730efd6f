//! Zombie Arena - a top-down survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, combat, economy, game state)
//! - `input`: Logical key mapping to held directions and commands
//! - `game`: Fixed timestep driver used by every host
//! - `tuning`: Data-driven game balance
//! - `platform`: Browser bindings

pub mod game;
pub mod input;
pub mod platform;
pub mod sim;
pub mod tuning;

pub use game::Game;
pub use input::Key;
pub use sim::{Command, GameState, Snapshot};
pub use tuning::{Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep in milliseconds (~60 Hz)
    pub const TICK_MS: u64 = 16;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame gap the driver will try to catch up on
    pub const MAX_FRAME_MS: f64 = 100.0;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 600.0;
    pub const ARENA_HEIGHT: f32 = 400.0;

    /// Player defaults
    pub const PLAYER_START_X: f32 = 50.0;
    pub const PLAYER_START_Y: f32 = 50.0;
    pub const PLAYER_SIZE: f32 = 30.0;
    pub const PLAYER_BASE_SPEED: f32 = 4.0; // px per tick
    pub const PLAYER_LIVES: u32 = 5;

    /// Zombie defaults
    pub const ZOMBIE_SIZE: f32 = 30.0;
    pub const ZOMBIE_BASE_SPEED: f32 = 1.2; // px per tick, scaled by kind
    pub const INITIAL_ZOMBIE_COUNT: usize = 3;

    /// Cooldown floor no matter how many fire-rate upgrades are bought
    pub const MIN_COOLDOWN_MS: f32 = 50.0;
}

/// Format a multiplier the way the HUD shows it ("1.10")
#[inline]
pub fn format_factor(factor: f32) -> String {
    format!("{factor:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_factor() {
        assert_eq!(format_factor(1.0), "1.00");
        assert_eq!(format_factor(1.1), "1.10");
        assert_eq!(format_factor(1.0 / 0.92), "1.09");
    }
}
