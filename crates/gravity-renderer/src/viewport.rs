//! World → normalized device coordinate mapping

use gravity_physics::Vector2;

/// How world lengths (circle radii) map onto device space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RadiusScale {
    /// Divide x extents by width and y extents by height, like positions.
    /// Circles stay round on any viewport.
    #[default]
    PerAxis,
    /// Divide both extents by height only. Circles stretch horizontally
    /// unless the viewport is square. Kept for output compatibility with
    /// renderers that scaled this way.
    HeightOnly,
}

/// Drawable size in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn from_physical(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    /// True when either side is zero (e.g. a minimized window)
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Map a world position to device space: `(x / width, y / height)`
    pub fn to_device(&self, position: Vector2) -> Vector2 {
        Vector2::new(position.x / self.width, position.y / self.height)
    }

    /// Device-space half extents of a world radius
    pub fn radius_extent(&self, radius: f64, scale: RadiusScale) -> Vector2 {
        match scale {
            RadiusScale::PerAxis => Vector2::new(radius / self.width, radius / self.height),
            RadiusScale::HeightOnly => Vector2::splat(radius / self.height),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_device_divides_per_axis() {
        let viewport = Viewport::new(800.0, 400.0);
        assert_eq!(
            viewport.to_device(Vector2::new(200.0, -100.0)),
            Vector2::new(0.25, -0.25)
        );
    }

    #[test]
    fn test_radius_extent_modes() {
        let viewport = Viewport::new(800.0, 400.0);
        assert_eq!(
            viewport.radius_extent(100.0, RadiusScale::PerAxis),
            Vector2::new(0.125, 0.25)
        );
        assert_eq!(
            viewport.radius_extent(100.0, RadiusScale::HeightOnly),
            Vector2::new(0.25, 0.25)
        );
    }

    #[test]
    fn test_empty_viewport() {
        assert!(Viewport::from_physical(0, 600).is_empty());
        assert!(!Viewport::from_physical(900, 900).is_empty());
    }
}
