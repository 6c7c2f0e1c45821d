//! Error types for simulation setup.
//!
//! Everything here is a configuration error caught at construction time.
//! Nothing fails once a simulation is running.

use std::fmt;

/// Errors raised while validating a scenario or its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A body's mass is zero, negative, or not finite.
    NonPositiveMass { index: usize, mass: f64 },
    /// A body's radius is negative.
    NegativeRadius { index: usize, radius: f64 },
    /// A body's position or initial impulse is not finite.
    NonFiniteBody { index: usize },
    /// Two bodies start at exactly the same position.
    CoincidentBodies { first: usize, second: usize },
    /// Steps per second must be at least 1.
    InvalidTickRate(u32),
    /// The ticker was started from a non-finite clock reading.
    InvalidTimestamp(f64),
    /// The gravitational constant is not finite.
    InvalidGravitationalConstant(f64),
    /// The minimum force distance is negative or not finite.
    InvalidMinDistance(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveMass { index, mass } => {
                write!(f, "Body {} has non-positive mass {}", index, mass)
            }
            ConfigError::NegativeRadius { index, radius } => {
                write!(f, "Body {} has negative radius {}", index, radius)
            }
            ConfigError::NonFiniteBody { index } => {
                write!(f, "Body {} has a non-finite position or impulse", index)
            }
            ConfigError::CoincidentBodies { first, second } => {
                write!(f, "Bodies {} and {} start at the same position", first, second)
            }
            ConfigError::InvalidTickRate(rate) => {
                write!(f, "Tick rate must be at least 1 step per second, got {}", rate)
            }
            ConfigError::InvalidTimestamp(now) => {
                write!(f, "Ticker start time must be finite, got {}", now)
            }
            ConfigError::InvalidGravitationalConstant(g) => {
                write!(f, "Gravitational constant must be finite, got {}", g)
            }
            ConfigError::InvalidMinDistance(d) => {
                write!(f, "Minimum distance must be finite and non-negative, got {}", d)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
