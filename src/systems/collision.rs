//! Narrow phase and elastic collision resolution.
//!
//! Positions are bounding-box corners, not centers; detection and the
//! resolution normal both use corner-to-corner distance, so the physics is
//! self-consistent even though it is not geometrically exact.

use crate::core::vector::PolarVec;
use crate::domain::body::Body;

/// Narrow-phase overlap test: corner distance strictly below the diameter.
pub fn overlaps(a: &Body, b: &Body, diameter: f32) -> bool {
    a.distance_to(b) < diameter
}

/// Resolve a pair elastically along the contact normal, then separate the
/// overlap.
///
/// The velocities are decomposed against the normal from `a` to `b` and its
/// tangent; the tangential components pass through unchanged while the
/// normal components exchange via the 1-D elastic formula weighted by mass.
/// Afterwards each body is pushed half the overlap apart so the pair does
/// not stay interpenetrated into the next frame.
///
/// Exactly coincident bodies have no defined normal; that pair is skipped
/// for this step (accepted approximation, not a physical fix).
pub fn resolve(a: &mut Body, b: &mut Body, diameter: f32) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let distance = (dx * dx + dy * dy).sqrt();
    if distance == 0.0 {
        return;
    }

    let nx = dx / distance;
    let ny = dy / distance;
    let (tx, ty) = (-ny, nx);

    let (avx, avy) = (a.vector.vx(), a.vector.vy());
    let (bvx, bvy) = (b.vector.vx(), b.vector.vy());

    let dp_tan_a = avx * tx + avy * ty;
    let dp_tan_b = bvx * tx + bvy * ty;
    let dp_norm_a = avx * nx + avy * ny;
    let dp_norm_b = bvx * nx + bvy * ny;

    // 1-D elastic exchange along the normal.
    let total_mass = a.mass + b.mass;
    let norm_a = (dp_norm_a * (a.mass - b.mass) + 2.0 * b.mass * dp_norm_b) / total_mass;
    let norm_b = (dp_norm_b * (b.mass - a.mass) + 2.0 * a.mass * dp_norm_a) / total_mass;

    a.vector = PolarVec::from_cartesian(norm_a * nx + dp_tan_a * tx, norm_a * ny + dp_tan_a * ty);
    b.vector = PolarVec::from_cartesian(norm_b * nx + dp_tan_b * tx, norm_b * ny + dp_tan_b * ty);

    if distance < diameter {
        let push = 0.5 * (diameter - distance);
        a.x -= push * nx;
        a.y -= push * ny;
        b.x += push * nx;
        b.y += push * ny;
    }
}
