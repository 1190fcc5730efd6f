//! Data-driven game balance
//!
//! Every number a designer might want to tweak lives in [`Tuning`]. The
//! defaults reproduce the shipped game; a JSON file may override any subset
//! of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors raised while loading a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Play field dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaTuning {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaTuning {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    pub start_x: f32,
    pub start_y: f32,
    pub size: f32,
    /// Pixels per tick per held direction
    pub base_speed: f32,
    pub lives: u32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            start_x: PLAYER_START_X,
            start_y: PLAYER_START_Y,
            size: PLAYER_SIZE,
            base_speed: PLAYER_BASE_SPEED,
            lives: PLAYER_LIVES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZombieTuning {
    /// Size used by kinds without their own dimensions
    pub size: f32,
    /// Pixels per tick before the per-kind speed factor
    pub base_speed: f32,
    pub initial_count: usize,
}

impl Default for ZombieTuning {
    fn default() -> Self {
        Self {
            size: ZOMBIE_SIZE,
            base_speed: ZOMBIE_BASE_SPEED,
            initial_count: INITIAL_ZOMBIE_COUNT,
        }
    }
}

/// Starting price and per-level effect of one upgrade track
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackTuning {
    pub base_cost: u64,
    pub factor: f32,
}

/// Shop prices and effects
///
/// Each track may be overridden field by field; whatever a file leaves out
/// keeps that track's own default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "UpgradeOverrides")]
pub struct UpgradeTuning {
    /// Player speed multiplier per level
    pub player_speed: TrackTuning,
    /// Bullet speed multiplier per level
    pub bullet_speed: TrackTuning,
    /// Cooldown multiplier per level (below 1.0 fires faster)
    pub fire_rate: TrackTuning,
    /// Price growth applied after every purchase
    pub cost_multiplier: f32,
}

impl Default for UpgradeTuning {
    fn default() -> Self {
        Self {
            player_speed: TrackTuning {
                base_cost: 50,
                factor: 1.2,
            },
            bullet_speed: TrackTuning {
                base_cost: 70,
                factor: 1.10,
            },
            fire_rate: TrackTuning {
                base_cost: 60,
                factor: 0.92,
            },
            cost_multiplier: 1.5,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
struct TrackOverride {
    base_cost: Option<u64>,
    factor: Option<f32>,
}

impl TrackOverride {
    fn apply(self, track: TrackTuning) -> TrackTuning {
        TrackTuning {
            base_cost: self.base_cost.unwrap_or(track.base_cost),
            factor: self.factor.unwrap_or(track.factor),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
struct UpgradeOverrides {
    player_speed: TrackOverride,
    bullet_speed: TrackOverride,
    fire_rate: TrackOverride,
    cost_multiplier: Option<f32>,
}

impl From<UpgradeOverrides> for UpgradeTuning {
    fn from(overrides: UpgradeOverrides) -> Self {
        let defaults = UpgradeTuning::default();
        Self {
            player_speed: overrides.player_speed.apply(defaults.player_speed),
            bullet_speed: overrides.bullet_speed.apply(defaults.bullet_speed),
            fire_rate: overrides.fire_rate.apply(defaults.fire_rate),
            cost_multiplier: overrides.cost_multiplier.unwrap_or(defaults.cost_multiplier),
        }
    }
}

/// Complete balance sheet for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena: ArenaTuning,
    pub player: PlayerTuning,
    pub zombies: ZombieTuning,
    pub upgrades: UpgradeTuning,
    /// Cooldown floor in milliseconds
    pub min_cooldown_ms: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena: ArenaTuning::default(),
            player: PlayerTuning::default(),
            zombies: ZombieTuning::default(),
            upgrades: UpgradeTuning::default(),
            min_cooldown_ms: MIN_COOLDOWN_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load a tuning file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let invalid = |field, reason| Err(TuningError::Invalid { field, reason });

        // Comparisons are negated so NaN fails them too

        if !(self.player.size > 0.0) {
            return invalid("player.size", "must be positive");
        }
        if !(self.zombies.size > 0.0) {
            return invalid("zombies.size", "must be positive");
        }
        if !(self.arena.width > self.player.size && self.arena.width > self.zombies.size) {
            return invalid("arena.width", "must exceed player and zombie size");
        }
        if !(self.arena.height > self.player.size && self.arena.height > self.zombies.size) {
            return invalid("arena.height", "must exceed player and zombie size");
        }
        if self.zombies.initial_count == 0 {
            return invalid("zombies.initial_count", "must be at least 1");
        }
        if self.player.lives == 0 {
            return invalid("player.lives", "must be at least 1");
        }
        if !(self.player.base_speed >= 0.0) || !(self.zombies.base_speed >= 0.0) {
            return invalid("base_speed", "must not be negative");
        }
        for (field, track) in [
            ("upgrades.player_speed.factor", self.upgrades.player_speed),
            ("upgrades.bullet_speed.factor", self.upgrades.bullet_speed),
            ("upgrades.fire_rate.factor", self.upgrades.fire_rate),
        ] {
            if !(track.factor > 0.0 && track.factor.is_finite()) {
                return invalid(field, "must be positive and finite");
            }
        }
        if !(self.upgrades.cost_multiplier >= 1.0) {
            return invalid("upgrades.cost_multiplier", "must be at least 1.0");
        }
        if !(self.min_cooldown_ms >= 0.0) {
            return invalid("min_cooldown_ms", "must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        assert_eq!(tuning.upgrades.player_speed.base_cost, 50);
        assert_eq!(tuning.zombies.initial_count, 3);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "zombies": { "initial_count": 6 } }"#).unwrap();
        assert_eq!(tuning.zombies.initial_count, 6);
        assert_eq!(tuning.zombies.size, ZOMBIE_SIZE);
        assert_eq!(tuning.arena, ArenaTuning::default());
    }

    #[test]
    fn test_partial_track_override_keeps_track_defaults() {
        let tuning =
            Tuning::from_json(r#"{ "upgrades": { "player_speed": { "base_cost": 10 } } }"#)
                .unwrap();
        let defaults = UpgradeTuning::default();
        assert_eq!(tuning.upgrades.player_speed.base_cost, 10);
        assert_eq!(tuning.upgrades.player_speed.factor, defaults.player_speed.factor);
        assert_eq!(tuning.upgrades.bullet_speed, defaults.bullet_speed);
        assert_eq!(tuning.upgrades.cost_multiplier, defaults.cost_multiplier);

        let tuning = Tuning::from_json(r#"{ "upgrades": { "fire_rate": { "factor": 0.8 } } }"#)
            .unwrap();
        assert_eq!(tuning.upgrades.fire_rate.base_cost, defaults.fire_rate.base_cost);
        assert_eq!(tuning.upgrades.fire_rate.factor, 0.8);
    }

    #[test]
    fn test_json_round_trip() {
        let tuning = Tuning::default();
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_rejects_invalid_values() {
        let err = Tuning::from_json(r#"{ "zombies": { "initial_count": 0 } }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "zombies.initial_count",
                ..
            }
        ));

        let err = Tuning::from_json(r#"{ "arena": { "width": 10.0 } }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "arena.width", .. }));

        let err = Tuning::from_json(
            r#"{ "upgrades": { "bullet_speed": { "base_cost": 1, "factor": 0.0 } } }"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "upgrades.bullet_speed.factor",
                ..
            }
        ));

        let err =
            Tuning::from_json(r#"{ "upgrades": { "fire_rate": { "factor": -0.5 } } }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "upgrades.fire_rate.factor",
                ..
            }
        ));

        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}
