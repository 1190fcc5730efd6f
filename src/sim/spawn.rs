//! Zombie spawning at the arena edges

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::{GameState, Zombie, ZombieKind};

/// Arena side a zombie walks in from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl ZombieKind {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Position for a box of `size` entering from `edge`
///
/// The coordinate along the edge is uniform over the arena; the other one
/// sits just outside so the zombie walks in.
pub fn edge_position<R: Rng + ?Sized>(rng: &mut R, edge: Edge, arena: Vec2, size: Vec2) -> Vec2 {
    let along_x = rng.random::<f32>() * (arena.x - size.x).max(0.0);
    let along_y = rng.random::<f32>() * (arena.y - size.y).max(0.0);
    match edge {
        Edge::Top => Vec2::new(along_x, -size.y),
        Edge::Right => Vec2::new(arena.x, along_y),
        Edge::Bottom => Vec2::new(along_x, arena.y),
        Edge::Left => Vec2::new(-size.x, along_y),
    }
}

impl GameState {
    /// Add one zombie of a random kind at a random edge, returning its id
    pub fn spawn_zombie(&mut self) -> u32 {
        let kind = ZombieKind::random(self.rng());
        let edge = Edge::random(self.rng());
        let base_size = self.tuning.zombies.size;
        let size = kind.stats().size.unwrap_or(Vec2::splat(base_size));
        let arena = self.arena();
        let pos = edge_position(self.rng(), edge, arena, size);

        let id = self.next_zombie_id();
        self.zombies.push(Zombie::new(id, kind, pos, base_size));
        log::trace!("Spawned {kind:?} zombie {id} from {edge:?} at {pos}");
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const ARENA: Vec2 = Vec2::new(600.0, 400.0);

    #[test]
    fn test_edge_positions_sit_outside() {
        let mut rng = Pcg32::seed_from_u64(1);
        let size = Vec2::splat(30.0);
        for _ in 0..200 {
            let top = edge_position(&mut rng, Edge::Top, ARENA, size);
            assert_eq!(top.y, -30.0);
            assert!(top.x >= 0.0 && top.x <= 570.0);

            let right = edge_position(&mut rng, Edge::Right, ARENA, size);
            assert_eq!(right.x, 600.0);
            assert!(right.y >= 0.0 && right.y <= 370.0);

            let bottom = edge_position(&mut rng, Edge::Bottom, ARENA, size);
            assert_eq!(bottom.y, 400.0);

            let left = edge_position(&mut rng, Edge::Left, ARENA, size);
            assert_eq!(left.x, -30.0);
        }
    }

    #[test]
    fn test_all_kinds_and_edges_appear() {
        let mut rng = Pcg32::seed_from_u64(99);
        let mut kinds = std::collections::HashSet::new();
        let mut edges = std::collections::HashSet::new();
        for _ in 0..500 {
            kinds.insert(ZombieKind::random(&mut rng));
            edges.insert(Edge::random(&mut rng));
        }
        assert_eq!(kinds.len(), ZombieKind::ALL.len());
        assert_eq!(edges.len(), Edge::ALL.len());
    }

    #[test]
    fn test_spawn_zombie_appends_with_fresh_id() {
        let mut state = GameState::new(5);
        let before = state.zombies.len();
        let id = state.spawn_zombie();
        assert_eq!(state.zombies.len(), before + 1);
        assert_eq!(state.zombies.last().map(|z| z.id), Some(id));
        assert!(state.zombies.iter().filter(|z| z.id == id).count() == 1);
    }
}
