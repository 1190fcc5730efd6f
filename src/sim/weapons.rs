//! Weapon catalog, per-session roster and fire cooldown
//!
//! The catalog is an immutable static table. Each session builds its own
//! [`Loadout`] from it, so acquiring a weapon never leaks into the next run.

use serde::{Deserialize, Serialize};

/// Weapon identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeaponId {
    Pistol,
    Shotgun,
    MachineGun,
}

impl WeaponId {
    pub fn as_str(&self) -> &'static str {
        match self {
            WeaponId::Pistol => "pistol",
            WeaponId::Shotgun => "shotgun",
            WeaponId::MachineGun => "machinegun",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "pistol" => Some(WeaponId::Pistol),
            "shotgun" => Some(WeaponId::Shotgun),
            "machinegun" | "machine_gun" | "mg" => Some(WeaponId::MachineGun),
            _ => None,
        }
    }

    pub fn spec(self) -> &'static WeaponSpec {
        match self {
            WeaponId::Pistol => &CATALOG[0],
            WeaponId::Shotgun => &CATALOG[1],
            WeaponId::MachineGun => &CATALOG[2],
        }
    }
}

/// Static weapon stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeaponSpec {
    pub id: WeaponId,
    pub name: &'static str,
    /// Pixels per tick before upgrades
    pub bullet_speed: f32,
    /// Milliseconds between shots before upgrades
    pub cooldown_ms: f32,
    pub damage: i32,
    /// Bullet size when travelling vertically (swapped for horizontal shots)
    pub bullet_width: f32,
    pub bullet_height: f32,
    /// Pellets per shot
    pub pellets: u32,
    /// Full spread cone in degrees (only used with several pellets)
    pub spread_deg: f32,
    pub cost: u64,
}

impl WeaponSpec {
    pub fn is_spread(&self) -> bool {
        self.pellets > 1 && self.spread_deg > 0.0
    }
}

/// Weapon the player always owns
pub const STARTING_WEAPON: WeaponId = WeaponId::Pistol;

/// Every weapon in the game, in cycling order
pub static CATALOG: [WeaponSpec; 3] = [
    WeaponSpec {
        id: WeaponId::Pistol,
        name: "Pistol",
        bullet_speed: 15.0,
        cooldown_ms: 400.0,
        damage: 10,
        bullet_width: 5.0,
        bullet_height: 15.0,
        pellets: 1,
        spread_deg: 0.0,
        cost: 0,
    },
    WeaponSpec {
        id: WeaponId::Shotgun,
        name: "Shotgun",
        bullet_speed: 12.0,
        cooldown_ms: 700.0,
        damage: 7,
        bullet_width: 7.0,
        bullet_height: 7.0,
        pellets: 5,
        spread_deg: 30.0,
        cost: 200,
    },
    WeaponSpec {
        id: WeaponId::MachineGun,
        name: "Machine Gun",
        bullet_speed: 20.0,
        cooldown_ms: 100.0,
        damage: 5,
        bullet_width: 4.0,
        bullet_height: 12.0,
        pellets: 1,
        spread_deg: 0.0,
        cost: 350,
    },
];

/// A weapon in the session roster
#[derive(Debug, Clone, PartialEq)]
pub struct Weapon {
    pub spec: WeaponSpec,
    pub acquired: bool,
}

/// The session's weapon roster plus the equipped slot
#[derive(Debug, Clone, PartialEq)]
pub struct Loadout {
    weapons: Vec<Weapon>,
    current: usize,
}

impl Default for Loadout {
    fn default() -> Self {
        Self::new()
    }
}

impl Loadout {
    /// Fresh roster: only the starting weapon is owned and equipped
    pub fn new() -> Self {
        let weapons: Vec<Weapon> = CATALOG
            .iter()
            .map(|spec| Weapon {
                spec: *spec,
                acquired: spec.id == STARTING_WEAPON,
            })
            .collect();
        let current = weapons
            .iter()
            .position(|w| w.spec.id == STARTING_WEAPON)
            .unwrap_or(0);
        Self { weapons, current }
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn current(&self) -> &Weapon {
        &self.weapons[self.current]
    }

    pub fn get(&self, id: WeaponId) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.spec.id == id)
    }

    pub fn acquired_count(&self) -> usize {
        self.weapons.iter().filter(|w| w.acquired).count()
    }

    /// Mark as owned; returns false when the roster has no such weapon
    pub fn acquire(&mut self, id: WeaponId) -> bool {
        match self.weapons.iter_mut().find(|w| w.spec.id == id) {
            Some(weapon) => {
                weapon.acquired = true;
                true
            }
            None => false,
        }
    }

    /// Equip an owned weapon; returns false if missing or not owned
    pub fn equip(&mut self, id: WeaponId) -> bool {
        match self.weapons.iter().position(|w| w.spec.id == id && w.acquired) {
            Some(idx) => {
                self.current = idx;
                true
            }
            None => false,
        }
    }

    /// Next owned weapon after the current one, wrapping around
    ///
    /// `None` when fewer than two weapons are owned.
    pub fn next_acquired(&self) -> Option<WeaponId> {
        if self.acquired_count() < 2 {
            return None;
        }
        let len = self.weapons.len();
        (1..len)
            .map(|step| &self.weapons[(self.current + step) % len])
            .find(|w| w.acquired)
            .map(|w| w.spec.id)
    }
}

/// Fire cooldown as a deadline on the simulation clock
///
/// Ready while no deadline is pending. Cancelling simply drops the deadline,
/// so a stale expiry can never re-arm firing after a switch or reset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cooldown {
    ready_at_ms: Option<u64>,
}

impl Cooldown {
    pub fn is_ready(&self) -> bool {
        self.ready_at_ms.is_none()
    }

    /// Clear the ready flag until `now_ms + duration_ms`
    pub fn start(&mut self, now_ms: u64, duration_ms: f32) {
        let duration = duration_ms.max(0.0).round() as u64;
        self.ready_at_ms = Some(now_ms + duration);
    }

    pub fn cancel(&mut self) {
        self.ready_at_ms = None;
    }

    /// Re-arm once the deadline has passed; true when it just expired
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.ready_at_ms {
            Some(deadline) if now_ms >= deadline => {
                self.ready_at_ms = None;
                true
            }
            _ => false,
        }
    }

    /// Milliseconds until ready (0 when ready)
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.ready_at_ms
            .map_or(0, |deadline| deadline.saturating_sub(now_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookup_matches_ids() {
        for spec in &CATALOG {
            assert_eq!(spec.id.spec().id, spec.id);
            assert_eq!(WeaponId::from_str(spec.id.as_str()), Some(spec.id));
        }
        assert_eq!(WeaponId::from_str("  Shotgun "), Some(WeaponId::Shotgun));
        assert_eq!(WeaponId::from_str("bazooka"), None);
    }

    #[test]
    fn test_new_loadout_owns_only_pistol() {
        let loadout = Loadout::new();
        assert_eq!(loadout.current().spec.id, WeaponId::Pistol);
        assert_eq!(loadout.acquired_count(), 1);
        assert!(!loadout.get(WeaponId::Shotgun).unwrap().acquired);
        assert_eq!(loadout.next_acquired(), None);
    }

    #[test]
    fn test_loadouts_are_independent() {
        let mut first = Loadout::new();
        first.acquire(WeaponId::Shotgun);
        let second = Loadout::new();
        assert!(!second.get(WeaponId::Shotgun).unwrap().acquired);
    }

    #[test]
    fn test_equip_requires_ownership() {
        let mut loadout = Loadout::new();
        assert!(!loadout.equip(WeaponId::MachineGun));
        assert_eq!(loadout.current().spec.id, WeaponId::Pistol);
        loadout.acquire(WeaponId::MachineGun);
        assert!(loadout.equip(WeaponId::MachineGun));
        assert_eq!(loadout.current().spec.id, WeaponId::MachineGun);
    }

    #[test]
    fn test_next_acquired_skips_unowned() {
        let mut loadout = Loadout::new();
        loadout.acquire(WeaponId::MachineGun);
        assert_eq!(loadout.next_acquired(), Some(WeaponId::MachineGun));
        loadout.equip(WeaponId::MachineGun);
        assert_eq!(loadout.next_acquired(), Some(WeaponId::Pistol));

        loadout.acquire(WeaponId::Shotgun);
        loadout.equip(WeaponId::Pistol);
        assert_eq!(loadout.next_acquired(), Some(WeaponId::Shotgun));
    }

    #[test]
    fn test_cooldown_deadline() {
        let mut cooldown = Cooldown::default();
        assert!(cooldown.is_ready());

        cooldown.start(100, 400.0);
        assert!(!cooldown.is_ready());
        assert_eq!(cooldown.remaining_ms(300), 200);
        assert!(!cooldown.poll(499));
        assert!(cooldown.poll(500));
        assert!(cooldown.is_ready());
        assert!(!cooldown.poll(600));

        cooldown.start(0, 700.0);
        cooldown.cancel();
        assert!(cooldown.is_ready());
        assert_eq!(cooldown.remaining_ms(0), 0);
    }
}
