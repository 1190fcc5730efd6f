//! Upgrade tracks
//!
//! Three independent leveled multipliers. Levels start at 1 and each
//! purchase raises the price geometrically.

use serde::{Deserialize, Serialize};

use crate::tuning::{TrackTuning, UpgradeTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeKind {
    PlayerSpeed,
    BulletSpeed,
    FireRate,
}

/// One leveled multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UpgradeTrack {
    pub level: u32,
    /// Price of the next level
    pub cost: u64,
    /// Effect applied once per level above 1
    pub factor: f32,
}

impl UpgradeTrack {
    pub fn new(tuning: &TrackTuning) -> Self {
        Self {
            level: 1,
            cost: tuning.base_cost,
            factor: tuning.factor,
        }
    }

    /// `factor^(level - 1)`
    pub fn multiplier(&self) -> f32 {
        self.factor.powi(self.level as i32 - 1)
    }

    /// Raise the level and reprice as `floor(cost * cost_multiplier)`
    pub fn level_up(&mut self, cost_multiplier: f32) {
        self.level += 1;
        self.cost = (self.cost as f64 * cost_multiplier as f64).floor() as u64;
    }
}

/// All upgrade tracks of a session
#[derive(Debug, Clone, PartialEq)]
pub struct Upgrades {
    pub player_speed: UpgradeTrack,
    pub bullet_speed: UpgradeTrack,
    pub fire_rate: UpgradeTrack,
    pub cost_multiplier: f32,
}

impl Upgrades {
    pub fn new(tuning: &UpgradeTuning) -> Self {
        Self {
            player_speed: UpgradeTrack::new(&tuning.player_speed),
            bullet_speed: UpgradeTrack::new(&tuning.bullet_speed),
            fire_rate: UpgradeTrack::new(&tuning.fire_rate),
            cost_multiplier: tuning.cost_multiplier,
        }
    }

    pub fn track(&self, kind: UpgradeKind) -> &UpgradeTrack {
        match kind {
            UpgradeKind::PlayerSpeed => &self.player_speed,
            UpgradeKind::BulletSpeed => &self.bullet_speed,
            UpgradeKind::FireRate => &self.fire_rate,
        }
    }

    pub fn track_mut(&mut self, kind: UpgradeKind) -> &mut UpgradeTrack {
        match kind {
            UpgradeKind::PlayerSpeed => &mut self.player_speed,
            UpgradeKind::BulletSpeed => &mut self.bullet_speed,
            UpgradeKind::FireRate => &mut self.fire_rate,
        }
    }

    /// Multiplier on the weapon's base bullet speed
    pub fn bullet_speed_multiplier(&self) -> f32 {
        self.bullet_speed.multiplier()
    }

    /// Multiplier on the weapon's base cooldown
    pub fn cooldown_multiplier(&self) -> f32 {
        self.fire_rate.multiplier()
    }

    /// How many times faster the gun fires than at level 1
    pub fn fire_rate_display_multiplier(&self) -> f32 {
        (1.0 / self.fire_rate.factor).powi(self.fire_rate.level as i32 - 1)
    }
}
