use crate::core::vector::PolarVec;

/// A simulated circular point-mass particle.
///
/// `(x, y)` is the top-left corner of the body's bounding box, not its
/// center. All physics (detection, resolution, reflection) runs in this
/// corner space; the renderer adds the radius when drawing.
pub struct Body {
    pub x: f32,
    pub y: f32,
    /// Mass, > 0. Enforced at spawn time.
    pub mass: f32,
    /// Current velocity; replaced as a whole on every update.
    pub vector: PolarVec,
    /// Render-only tag (0xRRGGBB), ignored by physics.
    pub color: u32,
}

impl Body {
    /// Spawn a body at rest.
    pub fn new(x: f32, y: f32, mass: f32, color: u32) -> Self {
        Self {
            x,
            y,
            mass,
            vector: PolarVec::zero(),
            color,
        }
    }

    pub fn with_vector(x: f32, y: f32, mass: f32, vector: PolarVec, color: u32) -> Self {
        Self { x, y, mass, vector, color }
    }

    /// Corner-to-corner Euclidean distance to another body.
    pub fn distance_to(&self, other: &Body) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
