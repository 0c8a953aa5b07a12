use std::f32::consts::PI;

/// Velocity in polar form: a non-negative speed and a heading in radians.
///
/// A body's vector is always replaced wholesale with a new value, never
/// mutated one field at a time, so the speed/direction pair can never be
/// observed in a half-updated state.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PolarVec {
    /// Distance per second, >= 0.
    pub speed: f32,
    /// Heading in radians; meaningless (but finite) when speed is 0.
    pub direction: f32,
}

impl PolarVec {
    pub fn new(speed: f32, direction: f32) -> Self {
        Self { speed, direction }
    }

    /// At rest, heading 0.
    pub fn zero() -> Self {
        Self { speed: 0.0, direction: 0.0 }
    }

    /// Recompose from Cartesian components.
    pub fn from_cartesian(vx: f32, vy: f32) -> Self {
        Self {
            speed: vx.hypot(vy),
            direction: vy.atan2(vx),
        }
    }

    /// Horizontal component.
    pub fn vx(&self) -> f32 {
        self.speed * self.direction.cos()
    }

    /// Vertical component (positive = down).
    pub fn vy(&self) -> f32 {
        self.speed * self.direction.sin()
    }

    /// Mirror across a vertical wall: flips the horizontal component.
    pub fn reflected_x(&self) -> Self {
        Self {
            speed: self.speed,
            direction: PI - self.direction,
        }
    }

    /// Mirror across a horizontal wall: flips the vertical component.
    pub fn reflected_y(&self) -> Self {
        Self {
            speed: self.speed,
            direction: -self.direction,
        }
    }

    /// Scale speed down by an energy-loss fraction in [0, 1].
    pub fn damped(&self, loss: f32) -> Self {
        Self {
            speed: self.speed * (1.0 - loss),
            direction: self.direction,
        }
    }
}
