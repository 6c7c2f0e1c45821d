//! Fixed-step timing
//!
//! The [`Ticker`] converts elapsed wall-clock seconds into a whole number of
//! simulation steps, carrying the fractional remainder into the next call so
//! no time is lost or counted twice.

use crate::error::ConfigError;
use std::time::Instant;

/// Source of monotonic seconds
pub trait Clock {
    fn now(&self) -> f64;
}

/// [`Clock`] backed by `std::time::Instant`, counting from its creation
#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[derive(Clone, Debug)]
pub struct Ticker {
    previous_timestamp: f64,
    step_period: f64,
    /// Always in [0, 1)
    accumulated_fraction: f64,
}

impl Ticker {
    /// Create a ticker that starts counting at `now`
    pub fn new(steps_per_second: u32, now: f64) -> Result<Self, ConfigError> {
        if steps_per_second == 0 {
            return Err(ConfigError::InvalidTickRate(steps_per_second));
        }
        if !now.is_finite() {
            return Err(ConfigError::InvalidTimestamp(now));
        }

        Ok(Self {
            previous_timestamp: now,
            step_period: 1.0 / steps_per_second as f64,
            accumulated_fraction: 0.0,
        })
    }

    /// Number of whole steps due since the previous call
    ///
    /// A timestamp earlier than the previous one counts as zero elapsed time.
    pub fn tick(&mut self, now: f64) -> u64 {
        if !now.is_finite() {
            log::warn!("Ignoring non-finite clock reading {}", now);
            return 0;
        }

        let mut delta = now - self.previous_timestamp;
        if delta < 0.0 {
            log::warn!(
                "Clock went backwards by {:.6}s, treating as no elapsed time",
                -delta
            );
            delta = 0.0;
        }
        self.previous_timestamp = now;

        let total = delta / self.step_period + self.accumulated_fraction;
        let steps = total.floor();
        self.accumulated_fraction = (total - steps).clamp(0.0, 1.0 - f64::EPSILON);

        steps as u64
    }

    pub fn step_period(&self) -> f64 {
        self.step_period
    }

    pub fn accumulated_fraction(&self) -> f64 {
        self.accumulated_fraction
    }

    pub fn previous_timestamp(&self) -> f64 {
        self.previous_timestamp
    }
}
