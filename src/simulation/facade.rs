use wasm_bindgen::prelude::*;

use super::perf_stats::StepStats;
use super::SimCore;

/// JS-facing simulation handle.
///
/// The browser drives one `step` per animation frame, reads the render
/// buffers between steps, and forwards input events as spawn commands and
/// toggles.
#[wasm_bindgen]
pub struct World {
    core: SimCore,
}

#[wasm_bindgen]
impl World {
    /// Create a simulation sized to the canvas.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32) -> Result<World, JsValue> {
        let core = SimCore::new(width, height).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> f32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> f32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn body_count(&self) -> usize { self.core.body_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn gravity_enabled(&self) -> bool { self.core.gravity_enabled() }

    #[wasm_bindgen(getter)]
    pub fn collisions_enabled(&self) -> bool { self.core.collisions_enabled() }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        self.core.set_gravity_enabled(enabled);
    }

    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        self.core.set_collisions_enabled(enabled);
    }

    /// Track a canvas resize; takes effect at the next step.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), JsValue> {
        self.core.resize(width, height).map_err(|e| JsValue::from_str(&e))
    }

    /// Replace the active configuration from a JSON bundle.
    pub fn load_config_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))
    }

    /// Export the active configuration as JSON.
    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    /// Add one body at rest. Rejects non-positive or non-finite mass.
    pub fn spawn_body(&mut self, x: f32, y: f32, mass: f32, color: u32) -> bool {
        self.core.spawn_body(x, y, mass, color)
    }

    /// Add a ring of bodies around a click point.
    pub fn spawn_ring(&mut self, cx: f32, cy: f32) {
        self.core.spawn_ring(cx, cy);
    }

    /// Add a `side x side` block of bodies below-right of a click point.
    pub fn spawn_block(&mut self, cx: f32, cy: f32, side: u32) {
        self.core.spawn_block(cx, cy, side);
    }

    /// Drop all bodies.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Advance the simulation by one frame's elapsed time in milliseconds.
    pub fn step(&mut self, delta_ms: f64) {
        self.core.step((delta_ms / 1000.0) as f32);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when
    /// enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> StepStats {
        self.core.get_perf_stats()
    }

    /// Refresh the render transfer buffers. Returns the body count.
    pub fn sync_render_buffers(&mut self) -> usize {
        self.core.sync_render_buffers()
    }

    /// Pointer to interleaved `[x, y]` positions (for JS rendering).
    pub fn positions_ptr(&self) -> *const f32 {
        self.core.positions_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.core.positions_len()
    }

    /// Pointer to per-body colors (for JS rendering).
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.core.colors_len()
    }
}
