//! Physical constants for the gravity simulation
//!
//! World units are pixels and masses are kilograms, so the constants keep
//! their SI magnitudes while distances stay screen-sized.

/// Gravitational constant
pub const G: f64 = 6.67430151515e-11;

/// Default lower bound on the separation used in the force law.
/// Keeps the impulse finite when two bodies pass through each other.
pub const MIN_DISTANCE: f64 = 1.0;
