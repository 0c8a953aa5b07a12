//! SoA transfer buffers for the JS renderer.
//!
//! The renderer reads these through raw pointers into wasm linear memory
//! between steps. Positions stay in corner space; the renderer adds the
//! ball radius when drawing arcs.

use super::SimCore;

pub(super) fn sync_render_buffers(core: &mut SimCore) -> usize {
    let count = core.bodies.len();

    core.render.positions.clear();
    core.render.positions.reserve(count * 2);
    core.render.colors.clear();
    core.render.colors.reserve(count);

    for body in &core.bodies {
        core.render.positions.push(body.x);
        core.render.positions.push(body.y);
        core.render.colors.push(body.color);
    }

    count
}
