//! `wasm-bindgen` surface for the browser host

use wasm_bindgen::prelude::*;

use crate::game::Game;

#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("Zombie Arena core loaded");
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WebGame {
    game: Game,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> WebGame {
        WebGame {
            game: Game::new(u64::from(seed)),
        }
    }

    /// Forward `KeyboardEvent.key`; returns true when the game used the key
    #[wasm_bindgen(js_name = keyDown)]
    pub fn key_down(&mut self, key: &str) -> bool {
        let known = crate::input::Key::from_name(key).is_some();
        if let Some(outcome) = self.game.key_down(key) {
            log::debug!("{key:?} -> {outcome:?}");
        }
        known
    }

    #[wasm_bindgen(js_name = keyUp)]
    pub fn key_up(&mut self, key: &str) {
        self.game.key_up(key);
    }

    /// Advance to `now_ms` (from `requestAnimationFrame`) and return the
    /// snapshot as JSON
    pub fn frame(&mut self, now_ms: f64) -> String {
        let snapshot = self.game.frame(now_ms);
        to_json(&snapshot)
    }

    #[wasm_bindgen(js_name = snapshotJson)]
    pub fn snapshot_json(&self) -> String {
        to_json(&self.game.snapshot())
    }
}

fn to_json(snapshot: &crate::sim::Snapshot) -> String {
    match serde_json::to_string(snapshot) {
        Ok(json) => json,
        Err(err) => {
            log::error!("Failed to serialize snapshot: {err}");
            String::from("null")
        }
    }
}
