use wasm_bindgen::prelude::*;

/// Snapshot of the last step, captured only while perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct StepStats {
    pub(super) step_ms: f64,
    pub(super) bodies: u32,
    pub(super) occupied_cells: u32,
    pub(super) pairs_tested: u32,
    pub(super) collisions_resolved: u32,
    pub(super) wall_bounces: u32,
}

impl StepStats {
    pub(crate) fn reset(&mut self) {
        *self = StepStats::default();
    }
}

#[wasm_bindgen]
impl StepStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn bodies(&self) -> u32 { self.bodies }
    #[wasm_bindgen(getter)]
    pub fn occupied_cells(&self) -> u32 { self.occupied_cells }
    #[wasm_bindgen(getter)]
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    #[wasm_bindgen(getter)]
    pub fn collisions_resolved(&self) -> u32 { self.collisions_resolved }
    #[wasm_bindgen(getter)]
    pub fn wall_bounces(&self) -> u32 { self.wall_bounces }
}
