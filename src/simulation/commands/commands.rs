use std::f32::consts::TAU;

use crate::domain::body::Body;

use super::SimCore;

/// Bodies per ring spawn.
pub(super) const RING_BODIES: u32 = 40;
/// Ring radius around the click point, in pixels.
const RING_RADIUS: f32 = 100.0;
/// Mass given to every spawned body.
const SPAWN_MASS: f32 = 100.0;
/// Gap between bodies in a block spawn, in pixels.
const BLOCK_GAP: f32 = 10.0;

pub(super) fn spawn_body(core: &mut SimCore, x: f32, y: f32, mass: f32, color: u32) -> bool {
    if !mass.is_finite() || mass <= 0.0 {
        return false;
    }
    core.bodies.push(Body::new(x, y, mass, color));
    true
}

/// Evenly spaced ring of bodies around `(cx, cy)`, offset by the ball
/// radius so the circle of *centers* passes through the click point.
pub(super) fn spawn_ring(core: &mut SimCore, cx: f32, cy: f32) {
    let color = next_color(core);
    let radius = core.config.ball_radius();
    for i in 0..RING_BODIES {
        let angle = (i as f32 / RING_BODIES as f32) * TAU;
        let x = cx + RING_RADIUS * angle.cos() - radius;
        let y = cy + RING_RADIUS * angle.sin() - radius;
        spawn_body(core, x, y, SPAWN_MASS, color);
    }
}

/// `side x side` block of bodies spaced one diameter plus a gap apart,
/// growing down-right from `(cx, cy)`.
pub(super) fn spawn_block(core: &mut SimCore, cx: f32, cy: f32, side: u32) {
    let color = next_color(core);
    let pitch = core.config.ball_diameter + BLOCK_GAP;
    for i in 0..side {
        for j in 0..side {
            spawn_body(
                core,
                cx + i as f32 * pitch,
                cy + j as f32 * pitch,
                SPAWN_MASS,
                color,
            );
        }
    }
}

pub(super) fn clear(core: &mut SimCore) {
    core.bodies.clear();
}

/// Current palette color; advances the cursor for the next spawn command.
fn next_color(core: &mut SimCore) -> u32 {
    let palette = &core.config.palette;
    let color = palette[core.palette_cursor % palette.len()];
    core.palette_cursor = (core.palette_cursor + 1) % palette.len();
    color
}
