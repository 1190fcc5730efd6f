//! Logical key mapping
//!
//! Hosts forward raw key names ("w", "ArrowUp", " ", ...); this module turns
//! them into movement keys and one-shot commands.

use crate::sim::{Command, Facing, UpgradeKind, WeaponId};

/// A key the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Held movement; pressing also turns the player
    Move(Facing),
    /// One-shot action
    Action(Command),
}

impl Key {
    /// Map a key name (as in `KeyboardEvent.key`) to a game key
    pub fn from_name(name: &str) -> Option<Self> {
        let key = match name {
            " " | "Spacebar" => return Some(Key::Action(Command::Fire)),
            "ArrowUp" => return Some(Key::Move(Facing::Up)),
            "ArrowDown" => return Some(Key::Move(Facing::Down)),
            "ArrowLeft" => return Some(Key::Move(Facing::Left)),
            "ArrowRight" => return Some(Key::Move(Facing::Right)),
            other => other.to_lowercase(),
        };
        match key.as_str() {
            "w" => Some(Key::Move(Facing::Up)),
            "s" => Some(Key::Move(Facing::Down)),
            "a" => Some(Key::Move(Facing::Left)),
            "d" => Some(Key::Move(Facing::Right)),
            "space" => Some(Key::Action(Command::Fire)),
            "r" => Some(Key::Action(Command::Reset)),
            "1" => Some(Key::Action(Command::Upgrade(UpgradeKind::PlayerSpeed))),
            "2" => Some(Key::Action(Command::Upgrade(UpgradeKind::BulletSpeed))),
            "3" => Some(Key::Action(Command::Upgrade(UpgradeKind::FireRate))),
            "4" => Some(Key::Action(Command::AcquireWeapon(WeaponId::Shotgun))),
            "5" => Some(Key::Action(Command::AcquireWeapon(WeaponId::MachineGun))),
            "q" => Some(Key::Action(Command::CycleWeapon)),
            _ => None,
        }
    }

    /// Shop and weapon keys keep working on the game over screen
    pub fn works_when_game_over(&self) -> bool {
        matches!(
            self,
            Key::Action(
                Command::Reset
                    | Command::Upgrade(_)
                    | Command::AcquireWeapon(_)
                    | Command::CycleWeapon
            )
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys() {
        assert_eq!(Key::from_name("w"), Some(Key::Move(Facing::Up)));
        assert_eq!(Key::from_name("W"), Some(Key::Move(Facing::Up)));
        assert_eq!(Key::from_name("ArrowLeft"), Some(Key::Move(Facing::Left)));
        assert_eq!(Key::from_name("d"), Some(Key::Move(Facing::Right)));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(Key::from_name(" "), Some(Key::Action(Command::Fire)));
        assert_eq!(Key::from_name("R"), Some(Key::Action(Command::Reset)));
        assert_eq!(
            Key::from_name("4"),
            Some(Key::Action(Command::AcquireWeapon(WeaponId::Shotgun)))
        );
        assert_eq!(Key::from_name("q"), Some(Key::Action(Command::CycleWeapon)));
        assert_eq!(Key::from_name("x"), None);
        assert_eq!(Key::from_name("Shift"), None);
    }

    #[test]
    fn test_game_over_keys() {
        assert!(Key::from_name("r").unwrap().works_when_game_over());
        assert!(Key::from_name("1").unwrap().works_when_game_over());
        assert!(!Key::from_name(" ").unwrap().works_when_game_over());
        assert!(!Key::from_name("w").unwrap().works_when_game_over());
    }
}
