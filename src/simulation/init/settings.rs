use super::init::check_viewport;
use super::perf_stats::StepStats;
use super::SimCore;

pub(super) fn set_gravity_enabled(core: &mut SimCore, enabled: bool) {
    core.gravity_enabled = enabled;
}

pub(super) fn set_collisions_enabled(core: &mut SimCore, enabled: bool) {
    core.collisions_enabled = enabled;
}

pub(super) fn resize(core: &mut SimCore, width: f32, height: f32) -> Result<(), String> {
    check_viewport(width, height)?;
    core.width = width;
    core.height = height;
    Ok(())
}

pub(super) fn enable_perf_metrics(core: &mut SimCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(core: &SimCore) -> StepStats {
    core.perf_stats.clone()
}
