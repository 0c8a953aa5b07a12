//! Viewport walls: reflect the vector, damp the speed, clamp the position.

use crate::domain::body::Body;

/// Reflect a body's uncommitted `(new_x, new_y)` off the viewport walls and
/// commit the clamped position. Returns how many axes bounced (0..=2).
///
/// The X check runs first and the Y check reads the vector the X check may
/// already have replaced, so a corner hit composes both reflections in that
/// order. Reflection happens in polar form (X: dir -> pi - dir, Y: dir ->
/// -dir), which is the Cartesian component flip without leaving polar space.
pub fn reflect(
    body: &mut Body,
    mut new_x: f32,
    mut new_y: f32,
    width: f32,
    height: f32,
    diameter: f32,
    energy_loss: f32,
) -> u32 {
    let max_x = (width - diameter).max(0.0);
    let max_y = (height - diameter).max(0.0);
    let mut bounces = 0;

    if new_x < 0.0 || new_x > max_x {
        body.vector = body.vector.reflected_x().damped(energy_loss);
        new_x = new_x.clamp(0.0, max_x);
        bounces += 1;
    }
    if new_y < 0.0 || new_y > max_y {
        body.vector = body.vector.reflected_y().damped(energy_loss);
        new_y = new_y.clamp(0.0, max_y);
        bounces += 1;
    }

    body.x = new_x;
    body.y = new_y;
    bounces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::vector::PolarVec;
    use std::f32::consts::PI;

    const DIAMETER: f32 = 4.0;
    const LOSS: f32 = 0.15;

    #[test]
    fn wall_hit_damps_speed_and_clamps_position() {
        let mut body = Body::new(0.0, 50.0, 100.0, 0);
        body.vector = PolarVec::new(10.0, PI); // heading left

        let bounces = reflect(&mut body, -3.0, 50.0, 200.0, 200.0, DIAMETER, LOSS);
        assert_eq!(bounces, 1);
        assert_eq!(body.x, 0.0);
        assert_eq!(body.y, 50.0);
        assert!((body.vector.speed - 8.5).abs() < 1e-4);
        // Direction flipped: now heading right.
        assert!(body.vector.vx() > 0.0);
    }

    #[test]
    fn speed_never_increases_on_a_bounce() {
        let mut body = Body::new(0.0, 0.0, 100.0, 0);
        body.vector = PolarVec::new(42.0, -1.1);
        reflect(&mut body, 500.0, -10.0, 300.0, 300.0, DIAMETER, 0.0);
        assert!(body.vector.speed <= 42.0 + 1e-4);
    }

    #[test]
    fn corner_hit_applies_x_then_y_on_the_same_vector() {
        let dir = 0.5;
        let mut body = Body::new(0.0, 0.0, 100.0, 0);
        body.vector = PolarVec::new(10.0, dir);

        let bounces = reflect(&mut body, -1.0, -1.0, 200.0, 200.0, DIAMETER, LOSS);
        assert_eq!(bounces, 2);
        // Y reflection negates the already-X-reflected direction.
        assert_eq!(body.vector.direction, -(PI - dir));
        assert!((body.vector.speed - 10.0 * 0.85 * 0.85).abs() < 1e-4);
        assert_eq!((body.x, body.y), (0.0, 0.0));
    }

    #[test]
    fn in_bounds_position_commits_untouched() {
        let mut body = Body::new(0.0, 0.0, 100.0, 0);
        body.vector = PolarVec::new(10.0, 0.25);
        let before = body.vector;

        let bounces = reflect(&mut body, 80.0, 90.0, 200.0, 200.0, DIAMETER, LOSS);
        assert_eq!(bounces, 0);
        assert_eq!((body.x, body.y), (80.0, 90.0));
        assert_eq!(body.vector, before);
    }
}
