//! Initial conditions for a simulation run
//!
//! A [`Scenario`] bundles the parameters with the starting body set. It is
//! validated when a [`crate::Simulation`] is built from it.

use crate::error::ConfigError;
use crate::params::SimulationParams;
use gravity_physics::{Body, Vector2};

pub const WHITE: u32 = 0xFFFF_FFFF;
pub const RED: u32 = 0xFFFF_0000;

/// Starting state of one body
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySpec {
    pub position: Vector2,
    pub mass: f64,
    pub radius: f64,
    /// Packed 0xAARRGGBB color
    pub color: u32,
    /// Impulse applied once before the first step
    pub impulse: Vector2,
}

impl BodySpec {
    pub fn new(position: Vector2, mass: f64, radius: f64, color: u32) -> Self {
        Self {
            position,
            mass,
            radius,
            color,
            impulse: Vector2::ZERO,
        }
    }

    pub fn with_impulse(mut self, impulse: Vector2) -> Self {
        self.impulse = impulse;
        self
    }

    pub fn to_body(&self) -> Body {
        Body::new(self.position, self.mass, self.radius, self.color).with_impulse(self.impulse)
    }

    fn validate(&self, index: usize) -> Result<(), ConfigError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::NonPositiveMass {
                index,
                mass: self.mass,
            });
        }
        if self.radius < 0.0 || self.radius.is_nan() {
            return Err(ConfigError::NegativeRadius {
                index,
                radius: self.radius,
            });
        }
        if !(self.position.is_finite() && self.impulse.is_finite()) {
            return Err(ConfigError::NonFiniteBody { index });
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scenario {
    pub params: SimulationParams,
    pub bodies: Vec<BodySpec>,
}

impl Scenario {
    pub fn new(params: SimulationParams) -> Self {
        Self {
            params,
            bodies: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: BodySpec) -> Self {
        self.bodies.push(body);
        self
    }

    /// Heavy central body with a lighter one launched sideways above it
    pub fn two_body() -> Self {
        Self::new(SimulationParams::default())
            .with_body(BodySpec::new(Vector2::new(0.0, 0.0), 5e14, 50.0, WHITE))
            .with_body(
                BodySpec::new(Vector2::new(0.0, 600.0), 1e12, 20.0, RED)
                    .with_impulse(Vector2::new(6e12, 0.0)),
            )
    }

    /// Check parameters and every body; reject bodies sharing a position
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;

        for (index, body) in self.bodies.iter().enumerate() {
            body.validate(index)?;
        }

        for (i, first) in self.bodies.iter().enumerate() {
            for (offset, second) in self.bodies[i + 1..].iter().enumerate() {
                if first.position == second.position {
                    return Err(ConfigError::CoincidentBodies {
                        first: i,
                        second: i + 1 + offset,
                    });
                }
            }
        }

        Ok(())
    }
}
