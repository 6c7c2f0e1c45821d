//! Pairwise Newtonian gravity
//!
//! F = G * m1 * m2 / r², expressed as an impulse along the line between
//! the two bodies.

use crate::body::Body;
use crate::vector::Vector2;

/// Impulse that `first` receives from `second`
///
/// `second` receives the exact negation. The separation used in the force
/// law is clamped to at least `min_distance`. Returns `None` when the bodies
/// coincide (or the separation is not finite), since the direction is then
/// undefined.
pub fn gravitational_impulse(first: &Body, second: &Body, g: f64, min_distance: f64) -> Option<Vector2> {
    let diff = second.position - first.position;
    let distance = diff.length();

    if distance == 0.0 || !distance.is_finite() {
        return None;
    }

    let direction = diff / distance;
    let r = distance.max(min_distance);
    let force = g * first.mass * second.mass / (r * r);

    Some(direction * force)
}
