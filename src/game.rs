//! Fixed timestep driver
//!
//! Owns a session plus the held-key state, turns wall-clock frames into
//! whole simulation ticks, and hands a snapshot back to the host.

use crate::consts::*;
use crate::input::Key;
use crate::sim::{CommandOutcome, GameState, Snapshot, TickInput, apply_command, tick};
use crate::tuning::Tuning;

/// Game instance driven by a host loop
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
    input: TickInput,
    accumulator_ms: f64,
    last_frame_ms: Option<f64>,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        Self {
            state: GameState::with_tuning(seed, tuning),
            input: TickInput::default(),
            accumulator_ms: 0.0,
            last_frame_ms: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn input(&self) -> &TickInput {
        &self.input
    }

    /// Handle a key press; returns the outcome of any command it triggered
    pub fn key_down(&mut self, name: &str) -> Option<CommandOutcome> {
        let Some(key) = Key::from_name(name) else {
            log::trace!("Ignoring key {name:?}");
            return None;
        };
        if self.state.is_game_over() && !key.works_when_game_over() {
            return None;
        }

        match key {
            Key::Move(dir) => {
                self.input.press(dir);
                self.state.player.facing = dir;
                None
            }
            Key::Action(command) => {
                let outcome = apply_command(&mut self.state, command);
                if outcome == CommandOutcome::Reset(true) {
                    self.restart_driver();
                }
                Some(outcome)
            }
        }
    }

    /// Release a held movement key (in any phase)
    pub fn key_up(&mut self, name: &str) {
        if let Some(Key::Move(dir)) = Key::from_name(name) {
            self.input.release(dir);
        }
    }

    /// Run as many fixed ticks as `elapsed_ms` of wall time covers
    ///
    /// Returns the number of ticks run. Gaps are clamped and substeps capped
    /// so a stalled tab does not fast-forward the horde. Non-finite gaps
    /// count as zero.
    pub fn update(&mut self, elapsed_ms: f64) -> u32 {
        let step = TICK_MS as f64;
        if elapsed_ms.is_finite() {
            self.accumulator_ms += elapsed_ms.clamp(0.0, MAX_FRAME_MS);
        }

        let mut substeps = 0;
        while self.accumulator_ms >= step && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, TICK_MS);
            self.accumulator_ms -= step;
            substeps += 1;
        }
        substeps
    }

    /// Advance to the host timestamp `now_ms` and return the frame to draw
    ///
    /// A bogus timestamp is skipped and the previous one kept.
    pub fn frame(&mut self, now_ms: f64) -> Snapshot {
        if now_ms.is_finite() {
            let elapsed = self.last_frame_ms.map_or(0.0, |last| now_ms - last);
            self.last_frame_ms = Some(now_ms);
            self.update(elapsed);
        } else {
            log::warn!("Ignoring non-finite frame timestamp {now_ms}");
        }
        self.state.snapshot()
    }

    /// Run exactly one tick
    pub fn step(&mut self) -> Snapshot {
        tick(&mut self.state, &self.input, TICK_MS);
        self.state.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    fn restart_driver(&mut self) {
        self.input = TickInput::default();
        self.accumulator_ms = 0.0;
        self.last_frame_ms = None;
    }
}
