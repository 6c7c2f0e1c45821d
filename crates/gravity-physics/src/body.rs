//! Point-mass bodies and the read-only snapshots handed to the renderer

use crate::vector::Vector2;

/// A massive body in the simulation
///
/// `velocity` holds the accumulated impulse rather than a true velocity:
/// impulses are added to it directly and each step displaces the body by
/// `velocity / mass`. Velocity is never damped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Body {
    /// Position in world units (pixels)
    pub position: Vector2,
    /// Accumulated impulse (pixels * kg per step)
    pub velocity: Vector2,
    /// Mass in kg, strictly positive
    pub mass: f64,
    /// Radius for rendering, in world units
    pub radius: f64,
    /// Packed 0xAARRGGBB color (alpha byte ignored)
    pub color: u32,
}

impl Body {
    /// Create a body at rest
    pub fn new(position: Vector2, mass: f64, radius: f64, color: u32) -> Self {
        Self {
            position,
            velocity: Vector2::ZERO,
            mass,
            radius,
            color,
        }
    }

    /// Builder form of [`Body::apply_impulse`]
    pub fn with_impulse(mut self, impulse: Vector2) -> Self {
        self.apply_impulse(impulse);
        self
    }

    /// Add an impulse to the accumulated velocity
    pub fn apply_impulse(&mut self, impulse: Vector2) {
        self.velocity += impulse;
    }

    /// Move the body without touching its velocity
    pub fn displace(&mut self, offset: Vector2) {
        self.position += offset;
    }

    /// Advance one fixed step: `position += velocity / mass`
    pub fn step(&mut self) {
        self.displace(self.velocity / self.mass);
    }

    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot {
            position: self.position,
            radius: self.radius,
            color: self.color,
        }
    }
}

/// Copied render-facing fields of a [`Body`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySnapshot {
    pub position: Vector2,
    pub radius: f64,
    pub color: u32,
}
