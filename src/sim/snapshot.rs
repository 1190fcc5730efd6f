//! Read-only view of a session for renderers
//!
//! Hosts never touch `GameState` directly; they receive a `Snapshot` after
//! every frame and draw from it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Bullet, GamePhase, GameState, Player, Zombie};
use super::upgrades::UpgradeTrack;
use super::weapons::WeaponId;
use crate::format_factor;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponView {
    pub id: WeaponId,
    pub name: String,
    pub cost: u64,
    pub damage: i32,
    pub pellets: u32,
    pub acquired: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpgradeView {
    pub player_speed: UpgradeTrack,
    pub bullet_speed: UpgradeTrack,
    pub fire_rate: UpgradeTrack,
    /// Bullet speed multiplier, e.g. "1.10"
    pub bullet_speed_multiplier: String,
    /// How many times faster the gun fires, e.g. "1.09"
    pub fire_rate_multiplier: String,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena: Vec2,
    pub tick: u64,
    pub phase: GamePhase,
    pub game_over: bool,
    pub player: Player,
    pub lives: u32,
    pub score: u64,
    pub zombies: Vec<Zombie>,
    pub bullets: Vec<Bullet>,
    pub weapons: Vec<WeaponView>,
    pub current_weapon: WeaponId,
    pub ready_to_fire: bool,
    pub upgrades: UpgradeView,
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        let weapons = self
            .loadout
            .weapons()
            .iter()
            .map(|w| WeaponView {
                id: w.spec.id,
                name: w.spec.name.to_string(),
                cost: w.spec.cost,
                damage: w.spec.damage,
                pellets: w.spec.pellets,
                acquired: w.acquired,
            })
            .collect();

        Snapshot {
            arena: self.arena(),
            tick: self.time_ticks,
            phase: self.phase,
            game_over: self.is_game_over(),
            player: self.player.clone(),
            lives: self.lives,
            score: self.score,
            zombies: self.zombies.clone(),
            bullets: self.bullets.clone(),
            weapons,
            current_weapon: self.loadout.current().spec.id,
            ready_to_fire: self.cooldown.is_ready(),
            upgrades: UpgradeView {
                player_speed: self.upgrades.player_speed,
                bullet_speed: self.upgrades.bullet_speed,
                fire_rate: self.upgrades.fire_rate,
                bullet_speed_multiplier: format_factor(self.upgrades.bullet_speed_multiplier()),
                fire_rate_multiplier: format_factor(self.upgrades.fire_rate_display_multiplier()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actions::{fire, try_upgrade};
    use crate::sim::upgrades::UpgradeKind;

    #[test]
    fn test_snapshot_reflects_state() {
        let mut state = GameState::new(8);
        fire(&mut state);
        let snap = state.snapshot();
        assert_eq!(snap.arena, Vec2::new(600.0, 400.0));
        assert_eq!(snap.zombies.len(), 3);
        assert_eq!(snap.bullets.len(), 1);
        assert_eq!(snap.current_weapon, WeaponId::Pistol);
        assert!(!snap.ready_to_fire);
        assert!(!snap.game_over);
        assert_eq!(snap.weapons.len(), 3);
        assert_eq!(snap.weapons.iter().filter(|w| w.acquired).count(), 1);
        assert_eq!(snap.upgrades.bullet_speed_multiplier, "1.00");
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut state = GameState::new(8);
        let snap = state.snapshot();
        state.zombies.clear();
        assert_eq!(snap.zombies.len(), 3);
    }

    #[test]
    fn test_display_multipliers() {
        let mut state = GameState::new(8);
        state.score = 70 + 60;
        try_upgrade(&mut state, UpgradeKind::BulletSpeed);
        try_upgrade(&mut state, UpgradeKind::FireRate);
        let snap = state.snapshot();
        assert_eq!(snap.upgrades.bullet_speed_multiplier, "1.10");
        assert_eq!(snap.upgrades.fire_rate_multiplier, "1.09");
        assert_eq!(snap.upgrades.bullet_speed.level, 2);
        assert_eq!(snap.upgrades.fire_rate.cost, 90);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snap = GameState::new(8).snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"current_weapon\":\"pistol\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back.zombies.len(), snap.zombies.len());
    }
}
