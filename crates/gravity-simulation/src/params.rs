//! Simulation parameters

use crate::error::ConfigError;
use gravity_physics::{G, MIN_DISTANCE};

/// Default simulation rate
pub const DEFAULT_STEPS_PER_SECOND: u32 = 40;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParams {
    /// Fixed steps per second of wall-clock time
    pub steps_per_second: u32,
    /// Gravitational constant used by the force law
    pub gravitational_constant: f64,
    /// Separations below this are clamped in the force law; 0 disables the clamp
    pub min_distance: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            steps_per_second: DEFAULT_STEPS_PER_SECOND,
            gravitational_constant: G,
            min_distance: MIN_DISTANCE,
        }
    }
}

impl SimulationParams {
    /// Seconds per step
    pub fn step_period(&self) -> f64 {
        1.0 / self.steps_per_second as f64
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps_per_second == 0 {
            return Err(ConfigError::InvalidTickRate(self.steps_per_second));
        }
        if !self.gravitational_constant.is_finite() {
            return Err(ConfigError::InvalidGravitationalConstant(
                self.gravitational_constant,
            ));
        }
        if !(self.min_distance.is_finite() && self.min_distance >= 0.0) {
            return Err(ConfigError::InvalidMinDistance(self.min_distance));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let params = SimulationParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.step_period(), 1.0 / 40.0);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let params = SimulationParams {
            steps_per_second: 0,
            ..Default::default()
        };
        assert_eq!(params.validate(), Err(ConfigError::InvalidTickRate(0)));
    }

    #[test]
    fn test_negative_min_distance_rejected() {
        let params = SimulationParams {
            min_distance: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidMinDistance(_))
        ));
    }
}
