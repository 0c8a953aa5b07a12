//! Simulation orchestration.
//!
//! `SimCore` owns the whole simulation state explicitly (bodies, toggles,
//! viewport, grid, frame counter) and each `step` is one atomic transition
//! over it; there are no ambient singletons. A step runs to completion
//! before the JS side reads the render buffers, so a frame is never torn.
//!
//! The methods here only delegate; the logic lives in the submodules.

use crate::domain::body::Body;
use crate::spatial::grid::SpatialGrid;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
mod config;
mod facade;

pub use config::SimConfig;
pub use facade::World;
pub use perf_stats::StepStats;

use perf_timer::PerfTimer;

pub(crate) struct RenderBuffers {
    pub(crate) positions: Vec<f32>,
    pub(crate) colors: Vec<u32>,
}

/// The simulation state and its sole mutator.
pub struct SimCore {
    config: SimConfig,
    bodies: Vec<Body>,
    grid: SpatialGrid,

    // Viewport; updated between steps on resize
    width: f32,
    height: f32,

    // Toggles read once per step
    gravity_enabled: bool,
    collisions_enabled: bool,

    frame: u64,
    palette_cursor: usize,

    render: RenderBuffers,

    perf_enabled: bool,
    perf_stats: StepStats,
}

impl SimCore {
    /// Create a simulation with the default configuration.
    pub fn new(width: f32, height: f32) -> Result<Self, String> {
        init::create_sim_core(width, height, SimConfig::default())
    }

    /// Create a simulation with an explicit configuration.
    pub fn with_config(width: f32, height: f32, config: SimConfig) -> Result<Self, String> {
        init::create_sim_core(width, height, config)
    }

    /// Replace the active configuration from a JSON bundle.
    ///
    /// Invalid bundles are rejected whole; the current config stays in
    /// place.
    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        let config = SimConfig::from_json(json)?;
        init::warn_on_undersized_cells(&config);
        self.config = config;
        Ok(())
    }

    /// Export the active configuration as JSON.
    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn gravity_enabled(&self) -> bool {
        self.gravity_enabled
    }

    pub fn collisions_enabled(&self) -> bool {
        self.collisions_enabled
    }

    pub fn set_gravity_enabled(&mut self, enabled: bool) {
        settings::set_gravity_enabled(self, enabled);
    }

    pub fn set_collisions_enabled(&mut self, enabled: bool) {
        settings::set_collisions_enabled(self, enabled);
    }

    /// Track a viewport resize; takes effect at the next step.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), String> {
        settings::resize(self, width, height)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when
    /// enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> StepStats {
        settings::get_perf_stats(self)
    }

    /// Add one body at rest. Rejects non-positive or non-finite mass.
    pub fn spawn_body(&mut self, x: f32, y: f32, mass: f32, color: u32) -> bool {
        commands::spawn_body(self, x, y, mass, color)
    }

    /// Add a ring of bodies around a point, all in the next palette color.
    pub fn spawn_ring(&mut self, cx: f32, cy: f32) {
        commands::spawn_ring(self, cx, cy)
    }

    /// Add a `side x side` block of bodies below-right of a point.
    pub fn spawn_block(&mut self, cx: f32, cy: f32, side: u32) {
        commands::spawn_block(self, cx, cy, side)
    }

    /// Drop all bodies.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Advance the simulation by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }

    /// Refresh the render transfer buffers from the body population.
    /// Returns the body count.
    pub fn sync_render_buffers(&mut self) -> usize {
        render_extract::sync_render_buffers(self)
    }

    /// Pointer to interleaved `[x, y]` positions (for JS rendering).
    pub fn positions_ptr(&self) -> *const f32 {
        self.render.positions.as_ptr()
    }

    pub fn positions_len(&self) -> usize {
        self.render.positions.len()
    }

    /// Pointer to per-body colors (for JS rendering).
    pub fn colors_ptr(&self) -> *const u32 {
        self.render.colors.as_ptr()
    }

    pub fn colors_len(&self) -> usize {
        self.render.colors.len()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
