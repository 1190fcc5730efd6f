//! Platform abstraction layer
//!
//! The browser page owns rendering and the animation-frame loop; it forwards
//! key events and timestamps here and draws the JSON snapshot it gets back.

#[cfg(target_arch = "wasm32")]
pub mod web;
