//! Game state and core simulation types
//!
//! A `GameState` owns everything for one session: the player, the zombie
//! horde, bullets in flight, the weapon roster, upgrade tracks, the fire
//! cooldown and the seeded RNG.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::upgrades::Upgrades;
use super::weapons::{Cooldown, Loadout};
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Active,
    /// Lives ran out; only a reset leaves this phase
    GameOver,
}

/// Direction the player faces (and shoots)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Facing {
    #[default]
    Up,
    Down,
    Left,
    Right,
}

impl Facing {
    /// Unit vector in screen space (y grows downward)
    pub fn unit(self) -> Vec2 {
        match self {
            Facing::Up => Vec2::NEG_Y,
            Facing::Down => Vec2::Y,
            Facing::Left => Vec2::NEG_X,
            Facing::Right => Vec2::X,
        }
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Facing::Left | Facing::Right)
    }
}

/// The player-controlled survivor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick per held direction
    pub speed: f32,
    pub facing: Facing,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.player.start_x, tuning.player.start_y),
            size: Vec2::splat(tuning.player.size),
            speed: tuning.player.base_speed,
            facing: Facing::Up,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }
}

/// Zombie variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZombieKind {
    Normal,
    Runner,
    Brute,
}

/// Per-kind stats
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZombieStats {
    pub max_hp: i32,
    /// Multiplier on the global zombie speed
    pub speed_factor: f32,
    pub score_value: u64,
    /// Overrides the base zombie size when set
    pub size: Option<Vec2>,
}

impl ZombieKind {
    /// Spawn roster, picked from uniformly
    pub const ALL: [ZombieKind; 3] = [ZombieKind::Normal, ZombieKind::Runner, ZombieKind::Brute];

    pub fn stats(self) -> ZombieStats {
        match self {
            ZombieKind::Normal => ZombieStats {
                max_hp: 20,
                speed_factor: 1.0,
                score_value: 10,
                size: None,
            },
            // Faster but fragile
            ZombieKind::Runner => ZombieStats {
                max_hp: 15,
                speed_factor: 1.5,
                score_value: 15,
                size: None,
            },
            // Slow and tanky
            ZombieKind::Brute => ZombieStats {
                max_hp: 40,
                speed_factor: 0.7,
                score_value: 25,
                size: None,
            },
        }
    }
}

/// A zombie entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Zombie {
    pub id: u32,
    pub kind: ZombieKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub hp: i32,
    pub max_hp: i32,
    pub speed_factor: f32,
    pub score_value: u64,
}

impl Zombie {
    pub fn new(id: u32, kind: ZombieKind, pos: Vec2, base_size: f32) -> Self {
        let stats = kind.stats();
        Self {
            id,
            kind,
            pos,
            size: stats.size.unwrap_or(Vec2::splat(base_size)),
            hp: stats.max_hp,
            max_hp: stats.max_hp,
            speed_factor: stats.speed_factor,
            score_value: stats.score_value,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size / 2.0
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    pub fn is_dead(&self) -> bool {
        self.hp <= 0
    }
}

/// A projectile in flight
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    /// Pixels per tick
    pub vel: Vec2,
    pub damage: i32,
}

impl Bullet {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    /// True once the bullet has completely left the arena on any side
    pub fn is_outside(&self, arena: Vec2) -> bool {
        self.pos.x + self.size.x < 0.0
            || self.pos.x > arena.x
            || self.pos.y + self.size.y < 0.0
            || self.pos.y > arena.y
    }
}

/// Complete game state for one session
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Balance sheet the session was built with
    pub tuning: Tuning,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulation clock in milliseconds (drives cooldown deadlines)
    pub time_ms: u64,
    pub player: Player,
    pub lives: u32,
    /// Score, spent as currency in the shop
    pub score: u64,
    /// Live zombies (ids increase in spawn order)
    pub zombies: Vec<Zombie>,
    /// Bullets in flight (ids increase in fire order)
    pub bullets: Vec<Bullet>,
    pub loadout: Loadout,
    pub cooldown: Cooldown,
    pub upgrades: Upgrades,
    next_zombie_id: u32,
    next_bullet_id: u32,
}

impl GameState {
    /// Create a new session with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a new session; `tuning` is expected to have passed validation
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            phase: GamePhase::Active,
            time_ticks: 0,
            time_ms: 0,
            player: Player::new(&tuning),
            lives: tuning.player.lives,
            score: 0,
            zombies: Vec::new(),
            bullets: Vec::new(),
            loadout: Loadout::new(),
            cooldown: Cooldown::default(),
            upgrades: Upgrades::new(&tuning.upgrades),
            next_zombie_id: 0,
            next_bullet_id: 0,
        };
        state.reset();
        state
    }

    /// Start a fresh session in place
    ///
    /// Everything except the RNG stream and the clock returns to its
    /// defaults, and the initial horde is respawned.
    pub fn reset(&mut self) {
        let tuning = self.tuning;
        self.phase = GamePhase::Active;
        self.player = Player::new(&tuning);
        self.lives = tuning.player.lives;
        self.score = 0;
        self.zombies.clear();
        self.bullets.clear();
        self.loadout = Loadout::new();
        self.cooldown.cancel();
        self.upgrades = Upgrades::new(&tuning.upgrades);
        self.next_zombie_id = 0;
        self.next_bullet_id = 0;

        for _ in 0..tuning.zombies.initial_count {
            self.spawn_zombie();
        }
        log::info!(
            "Game reset with {} initial zombies (seed {})",
            tuning.zombies.initial_count,
            self.seed
        );
    }

    pub fn arena(&self) -> Vec2 {
        Vec2::new(self.tuning.arena.width, self.tuning.arena.height)
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub(crate) fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn next_zombie_id(&mut self) -> u32 {
        let id = self.next_zombie_id;
        self.next_zombie_id += 1;
        id
    }

    pub fn next_bullet_id(&mut self) -> u32 {
        let id = self.next_bullet_id;
        self.next_bullet_id += 1;
        id
    }

    /// Player speed after upgrades, recomputed from the base speed
    pub fn upgraded_player_speed(&self) -> f32 {
        self.tuning.player.base_speed * self.upgrades.player_speed.multiplier()
    }
}

/// Keep a box of `size` fully inside the arena
#[inline]
pub fn clamp_to_arena(pos: Vec2, size: Vec2, arena: Vec2) -> Vec2 {
    pos.max(Vec2::ZERO).min((arena - size).max(Vec2::ZERO))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = GameState::new(7);
        assert_eq!(state.phase, GamePhase::Active);
        assert_eq!(state.lives, 5);
        assert_eq!(state.score, 0);
        assert_eq!(state.player.pos, Vec2::new(50.0, 50.0));
        assert_eq!(state.player.facing, Facing::Up);
        assert_eq!(state.zombies.len(), 3);
        assert!(state.bullets.is_empty());
        assert!(state.cooldown.is_ready());
    }

    #[test]
    fn test_zombie_ids_increase() {
        let state = GameState::new(7);
        let ids: Vec<u32> = state.zombies.iter().map(|z| z.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }

    #[test]
    fn test_zombie_kind_stats() {
        let z = Zombie::new(0, ZombieKind::Brute, Vec2::ZERO, 30.0);
        assert_eq!(z.hp, 40);
        assert_eq!(z.max_hp, 40);
        assert_eq!(z.score_value, 25);
        assert_eq!(z.size, Vec2::splat(30.0));
        assert!((ZombieKind::Runner.stats().speed_factor - 1.5).abs() < f32::EPSILON);
        assert_eq!(ZombieKind::Normal.stats().score_value, 10);
    }

    #[test]
    fn test_bullet_outside() {
        let arena = Vec2::new(600.0, 400.0);
        let mut bullet = Bullet {
            id: 0,
            pos: Vec2::new(100.0, -14.0),
            size: Vec2::new(5.0, 15.0),
            vel: Vec2::ZERO,
            damage: 10,
        };
        assert!(!bullet.is_outside(arena)); // 1px still visible
        bullet.pos.y = -16.0;
        assert!(bullet.is_outside(arena));
        bullet.pos = Vec2::new(600.5, 100.0);
        assert!(bullet.is_outside(arena));
        bullet.pos = Vec2::new(600.0, 100.0);
        assert!(!bullet.is_outside(arena));
    }

    #[test]
    fn test_clamp_to_arena() {
        let arena = Vec2::new(600.0, 400.0);
        let size = Vec2::splat(30.0);
        assert_eq!(clamp_to_arena(Vec2::new(-5.0, 500.0), size, arena), Vec2::new(0.0, 370.0));
        assert_eq!(clamp_to_arena(Vec2::new(10.0, 20.0), size, arena), Vec2::new(10.0, 20.0));
    }
}
