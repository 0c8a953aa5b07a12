//! Ballpit Engine - 2D ball-pit physics core in WASM
//!
//! The browser owns rendering, input and the frame loop; this crate owns
//! one simulation step per frame: gravity integration, wall reflection,
//! grid broad phase and elastic pairwise collision resolution.
//!
//! Layout:
//! - core/       - value types (polar velocity)
//! - domain/     - simulation entities
//! - spatial/    - broad-phase bucket grid
//! - systems/    - integrator, boundary reflector, collision solver
//! - simulation/ - orchestration, config, wasm facade

pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;

pub use simulation::{SimConfig, StepStats, World};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&"🦀 Ballpit WASM engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Console warning that is a no-op outside the browser.
pub(crate) fn console_warn(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&JsValue::from_str(message));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = message;
}
