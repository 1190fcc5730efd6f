//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (by spawn order)
//! - No rendering or platform dependencies

pub mod actions;
pub mod collision;
pub mod snapshot;
pub mod spawn;
pub mod state;
pub mod tick;
pub mod upgrades;
pub mod weapons;

pub use actions::{
    Command, CommandOutcome, CycleOutcome, FireOutcome, PurchaseOutcome, apply_command, cycle_weapon,
    effective_bullet_speed, effective_cooldown_ms, fire, try_acquire_weapon,
    try_acquire_weapon_named, try_upgrade,
};
pub use collision::{CollisionReport, Rect, resolve_collisions};
pub use snapshot::{Snapshot, UpgradeView, WeaponView};
pub use spawn::Edge;
pub use state::{Bullet, Facing, GamePhase, GameState, Player, Zombie, ZombieKind};
pub use tick::{TickInput, tick};
pub use upgrades::{UpgradeKind, UpgradeTrack, Upgrades};
pub use weapons::{CATALOG, Cooldown, Loadout, Weapon, WeaponId, WeaponSpec};
