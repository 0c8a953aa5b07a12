use crate::domain::body::Body;
use crate::systems::{boundary, collision, integrator};

use super::{PerfTimer, SimCore};

/// One frame: rebuild the broad-phase grid, then for each body in
/// population order integrate, reflect off the walls, commit the position,
/// and (with collisions on) resolve against bodies already bucketed into
/// the same cell before bucketing it too.
///
/// Pairing only against already-present bodies tests each unordered pair at
/// most once per cell per step, and population order fixes the tie-break
/// order for multi-body pileups, so a step is deterministic.
pub(super) fn step(core: &mut SimCore, dt: f32) {
    let perf_on = core.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let diameter = core.config.ball_diameter;
    let energy_loss = core.config.collision_energy_loss;
    let gravity = core.config.gravitational_acceleration;

    let mut pairs_tested = 0u32;
    let mut collisions_resolved = 0u32;
    let mut wall_bounces = 0u32;

    core.grid
        .rebuild(core.width, core.height, core.config.grid_cell_size);

    for i in 0..core.bodies.len() {
        let (new_x, new_y) =
            integrator::integrate(&mut core.bodies[i], core.gravity_enabled, gravity, dt);
        wall_bounces += boundary::reflect(
            &mut core.bodies[i],
            new_x,
            new_y,
            core.width,
            core.height,
            diameter,
            energy_loss,
        );

        if !core.collisions_enabled {
            continue;
        }

        // Bucket by the post-integration position; the body stays in this
        // cell for the rest of the step even if resolution nudges it.
        let Some(ci) = core.grid.cell_for(core.bodies[i].x, core.bodies[i].y) else {
            continue;
        };
        for k in 0..core.grid.cell(ci).len() {
            let j = core.grid.cell(ci)[k];
            pairs_tested += 1;
            let (a, b) = pair_mut(&mut core.bodies, j, i);
            if collision::overlaps(a, b, diameter) {
                collision::resolve(a, b, diameter);
                collisions_resolved += 1;
            }
        }
        core.grid.push(ci, i);
    }

    core.frame += 1;

    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.bodies = core.bodies.len() as u32;
        core.perf_stats.occupied_cells = core.grid.occupied_cells() as u32;
        core.perf_stats.pairs_tested = pairs_tested;
        core.perf_stats.collisions_resolved = collisions_resolved;
        core.perf_stats.wall_bounces = wall_bounces;
        if let Some(start) = step_start {
            core.perf_stats.step_ms = start.elapsed_ms();
        }
    }
}

/// Disjoint mutable borrows of two bodies in the population.
fn pair_mut(bodies: &mut [Body], i: usize, j: usize) -> (&mut Body, &mut Body) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = bodies.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = bodies.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}
