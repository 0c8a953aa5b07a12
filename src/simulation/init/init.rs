use crate::spatial::grid::SpatialGrid;

use super::perf_stats::StepStats;
use super::{RenderBuffers, SimConfig, SimCore};

pub(super) fn create_sim_core(
    width: f32,
    height: f32,
    config: SimConfig,
) -> Result<SimCore, String> {
    config.validate()?;
    check_viewport(width, height)?;
    warn_on_undersized_cells(&config);

    Ok(SimCore {
        config,
        bodies: Vec::new(),
        grid: SpatialGrid::new(),
        width,
        height,
        gravity_enabled: true,
        collisions_enabled: true,
        frame: 0,
        palette_cursor: 0,
        render: RenderBuffers {
            positions: Vec::new(),
            colors: Vec::new(),
        },
        perf_enabled: false,
        perf_stats: StepStats::default(),
    })
}

pub(super) fn check_viewport(width: f32, height: f32) -> Result<(), String> {
    if !width.is_finite() || width <= 0.0 || !height.is_finite() || height <= 0.0 {
        return Err(format!(
            "viewport must be positive and finite, got {width}x{height}"
        ));
    }
    Ok(())
}

/// Advisory only: a small cell still works, it just drops more near-boundary
/// pairs from the broad phase.
pub(super) fn warn_on_undersized_cells(config: &SimConfig) {
    if config.grid_cell_size < config.ball_diameter {
        crate::console_warn(&format!(
            "grid_cell_size {} is below ball_diameter {}; broad phase will miss more pairs",
            config.grid_cell_size, config.ball_diameter
        ));
    }
}
