//! Discrete player actions
//!
//! Firing, shop purchases and weapon switching happen between ticks, as soon
//! as the input arrives. None of them can fail: refusals are reported as
//! outcomes and leave the state untouched.

use glam::Vec2;
use rand::Rng;

use super::state::{Bullet, Facing, GamePhase, GameState};
use super::upgrades::UpgradeKind;
use super::weapons::WeaponId;

/// A one-shot request from the input layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Fire,
    /// Only honored after game over
    Reset,
    Upgrade(UpgradeKind),
    /// Buy the weapon, or equip it if already owned
    AcquireWeapon(WeaponId),
    CycleWeapon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FireOutcome {
    Fired { bullets: usize },
    CoolingDown { remaining_ms: u64 },
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseOutcome {
    Upgraded {
        kind: UpgradeKind,
        level: u32,
        next_cost: u64,
    },
    Acquired(WeaponId),
    /// Already owned; equipped without charge
    Equipped(WeaponId),
    InsufficientScore { cost: u64, score: u64 },
    GameOver { cost: u64 },
    UnknownWeapon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Switched(WeaponId),
    NotEnoughWeapons,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Fire(FireOutcome),
    Purchase(PurchaseOutcome),
    Cycle(CycleOutcome),
    /// Whether the reset was honored
    Reset(bool),
}

/// Dispatch a command against the session
pub fn apply_command(state: &mut GameState, command: Command) -> CommandOutcome {
    match command {
        Command::Fire => CommandOutcome::Fire(fire(state)),
        Command::Reset => {
            let honored = state.phase == GamePhase::GameOver;
            if honored {
                state.reset();
            }
            CommandOutcome::Reset(honored)
        }
        Command::Upgrade(kind) => CommandOutcome::Purchase(try_upgrade(state, kind)),
        Command::AcquireWeapon(id) => CommandOutcome::Purchase(try_acquire_weapon(state, id)),
        Command::CycleWeapon => CommandOutcome::Cycle(cycle_weapon(state)),
    }
}

/// Bullet speed of the equipped weapon after upgrades
pub fn effective_bullet_speed(state: &GameState) -> f32 {
    state.loadout.current().spec.bullet_speed * state.upgrades.bullet_speed_multiplier()
}

/// Cooldown of the equipped weapon after upgrades, never below the floor
pub fn effective_cooldown_ms(state: &GameState) -> f32 {
    let base = state.loadout.current().spec.cooldown_ms;
    (base * state.upgrades.cooldown_multiplier()).max(state.tuning.min_cooldown_ms)
}

/// Shoot the equipped weapon in the facing direction
///
/// Spread weapons give every pellet its own uniform random angle within
/// the cone; single-shot weapons fire dead straight.
pub fn fire(state: &mut GameState) -> FireOutcome {
    if state.phase == GamePhase::GameOver {
        return FireOutcome::GameOver;
    }
    if !state.cooldown.is_ready() {
        return FireOutcome::CoolingDown {
            remaining_ms: state.cooldown.remaining_ms(state.time_ms),
        };
    }

    let spec = state.loadout.current().spec;
    let speed = effective_bullet_speed(state);
    let facing = state.player.facing;
    let (player_pos, player_size) = (state.player.pos, state.player.size);

    // Muzzle sits in front of the player, centered on the other axis
    let size = if facing.is_horizontal() {
        Vec2::new(spec.bullet_height, spec.bullet_width)
    } else {
        Vec2::new(spec.bullet_width, spec.bullet_height)
    };
    let pos = match facing {
        Facing::Up => Vec2::new(
            player_pos.x + player_size.x / 2.0 - size.x / 2.0,
            player_pos.y - size.y,
        ),
        Facing::Down => Vec2::new(
            player_pos.x + player_size.x / 2.0 - size.x / 2.0,
            player_pos.y + player_size.y,
        ),
        Facing::Left => Vec2::new(
            player_pos.x - size.x,
            player_pos.y + player_size.y / 2.0 - size.y / 2.0,
        ),
        Facing::Right => Vec2::new(
            player_pos.x + player_size.x,
            player_pos.y + player_size.y / 2.0 - size.y / 2.0,
        ),
    };
    let base_vel = facing.unit() * speed;

    let pellets = spec.pellets.max(1) as usize;
    for _ in 0..pellets {
        let vel = if spec.is_spread() {
            let offset_deg = (state.rng().random::<f32>() - 0.5) * spec.spread_deg;
            Vec2::from_angle(offset_deg.to_radians()).rotate(base_vel)
        } else {
            base_vel
        };
        let id = state.next_bullet_id();
        state.bullets.push(Bullet {
            id,
            pos,
            size,
            vel,
            damage: spec.damage,
        });
    }

    let cooldown = effective_cooldown_ms(state);
    state.cooldown.start(state.time_ms, cooldown);
    log::trace!(
        "Fired {} x{} facing {:?} (cooldown {:.0} ms)",
        spec.name,
        pellets,
        facing,
        cooldown
    );
    FireOutcome::Fired { bullets: pellets }
}

/// Buy one level of an upgrade track
pub fn try_upgrade(state: &mut GameState, kind: UpgradeKind) -> PurchaseOutcome {
    let cost = state.upgrades.track(kind).cost;
    if state.phase == GamePhase::GameOver {
        log::info!("Cannot upgrade {kind:?}: game over (cost {cost})");
        return PurchaseOutcome::GameOver { cost };
    }
    if state.score < cost {
        log::info!(
            "Not enough score to upgrade {kind:?}: need {cost}, have {}",
            state.score
        );
        return PurchaseOutcome::InsufficientScore {
            cost,
            score: state.score,
        };
    }

    state.score -= cost;
    let cost_multiplier = state.upgrades.cost_multiplier;
    let track = state.upgrades.track_mut(kind);
    track.level_up(cost_multiplier);
    let (level, next_cost) = (track.level, track.cost);

    if kind == UpgradeKind::PlayerSpeed {
        state.player.speed = state.upgraded_player_speed();
    }
    log::info!("{kind:?} upgraded to level {level} (next cost {next_cost})");
    PurchaseOutcome::Upgraded {
        kind,
        level,
        next_cost,
    }
}

/// Buy and equip a weapon, or just equip it when already owned
///
/// Either way any pending cooldown is cancelled.
pub fn try_acquire_weapon(state: &mut GameState, id: WeaponId) -> PurchaseOutcome {
    let Some(weapon) = state.loadout.get(id) else {
        log::info!("Weapon {} is not in the roster", id.as_str());
        return PurchaseOutcome::UnknownWeapon;
    };
    let (owned, cost, name) = (weapon.acquired, weapon.spec.cost, weapon.spec.name);

    if owned {
        equip(state, id);
        log::info!("Switched to already acquired weapon: {name}");
        return PurchaseOutcome::Equipped(id);
    }
    if state.phase == GamePhase::GameOver {
        log::info!("Cannot acquire {name}: game over (cost {cost})");
        return PurchaseOutcome::GameOver { cost };
    }
    if state.score < cost {
        log::info!(
            "Not enough score to acquire {name}: need {cost}, have {}",
            state.score
        );
        return PurchaseOutcome::InsufficientScore {
            cost,
            score: state.score,
        };
    }

    state.score -= cost;
    state.loadout.acquire(id);
    equip(state, id);
    log::info!("Acquired and equipped: {name}");
    PurchaseOutcome::Acquired(id)
}

/// Parse a weapon name and acquire it; unknown names are refused
pub fn try_acquire_weapon_named(state: &mut GameState, name: &str) -> PurchaseOutcome {
    match WeaponId::from_str(name) {
        Some(id) => try_acquire_weapon(state, id),
        None => {
            log::info!("Weapon {name:?} not found");
            PurchaseOutcome::UnknownWeapon
        }
    }
}

/// Switch to the next owned weapon in roster order
pub fn cycle_weapon(state: &mut GameState) -> CycleOutcome {
    match state.loadout.next_acquired() {
        Some(id) => {
            equip(state, id);
            log::info!("Switched to weapon: {}", id.spec().name);
            CycleOutcome::Switched(id)
        }
        None => {
            log::info!("Not enough acquired weapons to switch");
            CycleOutcome::NotEnoughWeapons
        }
    }
}

fn equip(state: &mut GameState, id: WeaponId) {
    if state.loadout.equip(id) {
        state.cooldown.cancel();
    }
}
