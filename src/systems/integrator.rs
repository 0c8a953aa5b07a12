//! Gravity and translational motion for a single body over one time step.

use crate::core::vector::PolarVec;
use crate::domain::body::Body;

/// Accelerate the body downward (positive Y) by `accel * dt`.
///
/// The horizontal component is untouched; the vertical component grows and
/// the polar vector is recomposed from the new Cartesian pair.
pub fn apply_gravity(body: &mut Body, accel: f32, dt: f32) {
    let vx = body.vector.vx();
    let vy = body.vector.vy() + accel * dt;
    body.vector = PolarVec::from_cartesian(vx, vy);
}

/// Advance one step: optional gravity, then translation along the (possibly
/// updated) vector. Returns the uncommitted `(new_x, new_y)` so the boundary
/// reflector can clamp it before it lands on the body.
///
/// `dt == 0` leaves the body where it is; there is no division anywhere.
pub fn integrate(body: &mut Body, gravity_enabled: bool, gravity: f32, dt: f32) -> (f32, f32) {
    if gravity_enabled {
        apply_gravity(body, gravity, dt);
    }
    let distance = body.vector.speed * dt;
    (
        body.x + distance * body.vector.direction.cos(),
        body.y + distance * body.vector.direction.sin(),
    )
}
