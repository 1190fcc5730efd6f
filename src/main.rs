//! Zombie Arena entry point
//!
//! The browser build is driven through `platform::web`; natively this runs a
//! headless scripted session and logs how it went.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(0x5EED);
    let tuning = match args.next() {
        Some(path) => match zombie_arena::Tuning::load(&path) {
            Ok(tuning) => tuning,
            Err(err) => {
                log::error!("{err}");
                std::process::exit(1);
            }
        },
        None => zombie_arena::Tuning::default(),
    };

    log::info!("Zombie Arena (native, headless) starting with seed {seed}");
    let snapshot = autopilot::run(seed, tuning, 60);

    println!(
        "Survived {} ticks: score {}, lives {}, weapon {:?}{}",
        snapshot.tick,
        snapshot.score,
        snapshot.lives,
        snapshot.current_weapon,
        if snapshot.game_over { " (game over)" } else { "" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Scripted player for headless runs
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use zombie_arena::consts::TICK_MS;
    use zombie_arena::sim::{Facing, Snapshot, WeaponId};
    use zombie_arena::{Game, Tuning};

    const KEYS: [(&str, Facing); 4] = [
        ("w", Facing::Up),
        ("s", Facing::Down),
        ("a", Facing::Left),
        ("d", Facing::Right),
    ];

    /// Stand still, turn toward the nearest zombie and keep shooting
    pub fn run(seed: u64, tuning: Tuning, seconds: u64) -> Snapshot {
        let mut game = Game::with_tuning(seed, tuning);
        let ticks = seconds * 1000 / TICK_MS;

        for i in 0..ticks {
            let snapshot = game.snapshot();
            if snapshot.game_over {
                break;
            }

            let center = snapshot.player.pos + snapshot.player.size / 2.0;
            if let Some(nearest) = snapshot.zombies.iter().min_by(|a, b| {
                let da = (a.pos + a.size / 2.0).distance_squared(center);
                let db = (b.pos + b.size / 2.0).distance_squared(center);
                da.total_cmp(&db)
            }) {
                let to = nearest.pos + nearest.size / 2.0 - center;
                let aim = if to.x.abs() > to.y.abs() {
                    if to.x > 0.0 { Facing::Right } else { Facing::Left }
                } else if to.y > 0.0 {
                    Facing::Down
                } else {
                    Facing::Up
                };
                // A tap turns the player without moving them
                if let Some((key, _)) = KEYS.iter().find(|(_, facing)| *facing == aim) {
                    game.key_down(key);
                    game.key_up(key);
                }
            }
            game.key_down(" ");

            // Spend score as soon as something is affordable
            let has_shotgun = snapshot
                .weapons
                .iter()
                .any(|w| w.id == WeaponId::Shotgun && w.acquired);
            if !has_shotgun {
                game.key_down("4");
            }
            for key in ["3", "2", "1"] {
                game.key_down(key);
            }

            game.step();
            if i % 600 == 0 {
                let s = game.snapshot();
                log::info!("tick {}: score {}, lives {}", s.tick, s.score, s.lives);
            }
        }

        game.snapshot()
    }
}
