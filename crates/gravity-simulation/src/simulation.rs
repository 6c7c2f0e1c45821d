//! N-body simulation manager
//!
//! Owns the body set and advances it one fixed step at a time. Each step
//! first accumulates every pairwise impulse from the positions as they stood
//! at the start of the step, then integrates every body once. Pair order is
//! the insertion order of the bodies, so runs are reproducible.
//!
//! Cost is O(n²) per step, which is fine for tens of bodies. Larger scenes
//! would need spatial partitioning.

use crate::error::ConfigError;
use crate::params::SimulationParams;
use crate::scenario::Scenario;
use gravity_physics::{gravitational_impulse, Body, BodySnapshot, Vector2};

pub struct Simulation {
    bodies: Vec<Body>,
    params: SimulationParams,
    step_count: u64,
}

impl Simulation {
    /// Build a simulation from a validated scenario
    pub fn new(scenario: &Scenario) -> Result<Self, ConfigError> {
        scenario.validate()?;

        log::info!(
            "Simulation initialized with {} bodies at {} steps/s",
            scenario.bodies.len(),
            scenario.params.steps_per_second
        );

        Ok(Self {
            bodies: scenario.bodies.iter().map(|spec| spec.to_body()).collect(),
            params: scenario.params,
            step_count: 0,
        })
    }

    /// Replace the whole body set and parameters
    ///
    /// On error the current state is left untouched.
    pub fn reset(&mut self, scenario: &Scenario) -> Result<(), ConfigError> {
        *self = Self::new(scenario)?;
        Ok(())
    }

    /// Advance all bodies by one fixed step
    pub fn step(&mut self) {
        self.apply_gravity();

        for body in &mut self.bodies {
            body.step();
        }

        self.step_count += 1;
    }

    /// Run `steps` consecutive steps
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    fn apply_gravity(&mut self) {
        let g = self.params.gravitational_constant;
        let min_distance = self.params.min_distance;

        // Impulses only change velocities, so later pairs still see the
        // positions from the start of the step.
        for i in 0..self.bodies.len() {
            let (head, tail) = self.bodies.split_at_mut(i + 1);
            let first = &mut head[i];

            for (offset, second) in tail.iter_mut().enumerate() {
                match gravitational_impulse(first, second, g, min_distance) {
                    Some(impulse) => {
                        first.apply_impulse(impulse);
                        second.apply_impulse(-impulse);
                    }
                    None => {
                        log::warn!(
                            "Bodies {} and {} have no defined separation, skipping pair",
                            i,
                            i + 1 + offset
                        );
                    }
                }
            }
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Copies of the render-facing fields, in body order
    pub fn snapshots(&self) -> impl Iterator<Item = BodySnapshot> + '_ {
        self.bodies.iter().map(Body::snapshot)
    }

    /// Sum of the accumulated impulses of all bodies
    ///
    /// `velocity` stores momentum in this integrator's units, so this is
    /// the quantity pairwise gravity conserves.
    pub fn total_momentum(&self) -> Vector2 {
        self.bodies.iter().map(|body| body.velocity).sum()
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Steps taken since construction or the last reset
    pub fn step_count(&self) -> u64 {
        self.step_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::{BodySpec, WHITE};

    fn params(g: f64) -> SimulationParams {
        SimulationParams {
            gravitational_constant: g,
            min_distance: 0.0,
            ..Default::default()
        }
    }

    fn three_body() -> Scenario {
        Scenario::new(params(1.0))
            .with_body(BodySpec::new(Vector2::new(0.0, 0.0), 10.0, 1.0, WHITE))
            .with_body(
                BodySpec::new(Vector2::new(30.0, 0.0), 3.0, 1.0, WHITE)
                    .with_impulse(Vector2::new(0.0, 2.0)),
            )
            .with_body(BodySpec::new(Vector2::new(-5.0, 20.0), 7.0, 1.0, WHITE))
    }

    #[test]
    fn test_invalid_scenario_rejected() {
        let scenario = Scenario::new(params(1.0))
            .with_body(BodySpec::new(Vector2::ZERO, -1.0, 1.0, WHITE));

        assert!(matches!(
            Simulation::new(&scenario),
            Err(ConfigError::NonPositiveMass { index: 0, .. })
        ));
    }

    #[test]
    fn test_initial_impulse_applied() {
        let sim = Simulation::new(&three_body()).unwrap();
        assert_eq!(sim.bodies()[1].velocity, Vector2::new(0.0, 2.0));
        assert_eq!(sim.step_count(), 0);
    }

    #[test]
    fn test_step_integrates_updated_velocity() {
        let scenario = Scenario::new(params(2.0))
            .with_body(BodySpec::new(Vector2::new(0.0, 0.0), 4.0, 1.0, WHITE))
            .with_body(BodySpec::new(Vector2::new(2.0, 0.0), 1.0, 1.0, WHITE));
        let mut sim = Simulation::new(&scenario).unwrap();

        sim.step();

        // force = 2 * 4 * 1 / 2² = 2
        let bodies = sim.bodies();
        assert_eq!(bodies[0].velocity, Vector2::new(2.0, 0.0));
        assert_eq!(bodies[1].velocity, Vector2::new(-2.0, 0.0));
        assert_eq!(bodies[0].position, Vector2::new(0.5, 0.0));
        assert_eq!(bodies[1].position, Vector2::new(0.0, 0.0));
    }

    #[test]
    fn test_forces_use_positions_from_start_of_step() {
        let scenario = three_body();
        let mut sim = Simulation::new(&scenario).unwrap();

        // Expected result computed from the initial bodies only
        let mut expected: Vec<Body> = scenario.bodies.iter().map(BodySpec::to_body).collect();
        let initial = expected.clone();
        for i in 0..initial.len() {
            for j in (i + 1)..initial.len() {
                let impulse = gravitational_impulse(&initial[i], &initial[j], 1.0, 0.0).unwrap();
                expected[i].apply_impulse(impulse);
                expected[j].apply_impulse(-impulse);
            }
        }
        for body in &mut expected {
            body.step();
        }

        sim.step();
        assert_eq!(sim.bodies(), expected.as_slice());
    }

    #[test]
    fn test_pairwise_impulses_are_equal_and_opposite() {
        let scenario = Scenario::new(params(1.0))
            .with_body(BodySpec::new(Vector2::new(1.0, 2.0), 5.0, 1.0, WHITE))
            .with_body(BodySpec::new(Vector2::new(-3.0, 7.0), 2.0, 1.0, WHITE));
        let mut sim = Simulation::new(&scenario).unwrap();

        sim.step();

        let bodies = sim.bodies();
        assert_eq!(bodies[0].velocity, -bodies[1].velocity);
    }

    #[test]
    fn test_momentum_conserved_per_step() {
        let mut sim = Simulation::new(&three_body()).unwrap();
        let initial = sim.total_momentum();

        for _ in 0..100 {
            sim.step();
            let drift = (sim.total_momentum() - initial).length();
            assert!(drift < 1e-9, "momentum drifted by {}", drift);
        }
    }

    #[test]
    fn test_zero_separation_pair_skipped() {
        // Two bodies meet exactly at the midpoint after one step
        let scenario = Scenario::new(params(0.0))
            .with_body(
                BodySpec::new(Vector2::new(-1.0, 0.0), 1.0, 1.0, WHITE)
                    .with_impulse(Vector2::new(1.0, 0.0)),
            )
            .with_body(
                BodySpec::new(Vector2::new(1.0, 0.0), 1.0, 1.0, WHITE)
                    .with_impulse(Vector2::new(-1.0, 0.0)),
            );
        let mut sim = Simulation::new(&scenario).unwrap();

        sim.run(2);

        for body in sim.bodies() {
            assert!(body.position.is_finite());
            assert!(body.velocity.is_finite());
        }
        assert_eq!(sim.bodies()[0].position, Vector2::new(1.0, 0.0));
    }

    #[test]
    fn test_reset_replaces_bodies() {
        let mut sim = Simulation::new(&three_body()).unwrap();
        sim.run(10);

        sim.reset(&Scenario::two_body()).unwrap();
        assert_eq!(sim.bodies().len(), 2);
        assert_eq!(sim.step_count(), 0);
    }

    #[test]
    fn test_failed_reset_keeps_state() {
        let mut sim = Simulation::new(&three_body()).unwrap();
        sim.run(3);
        let before = sim.bodies().to_vec();

        let bad = Scenario::new(params(1.0))
            .with_body(BodySpec::new(Vector2::ZERO, 0.0, 1.0, WHITE));
        assert!(sim.reset(&bad).is_err());
        assert_eq!(sim.bodies(), before.as_slice());
        assert_eq!(sim.step_count(), 3);
    }

    #[test]
    fn test_snapshots_follow_body_order() {
        let sim = Simulation::new(&three_body()).unwrap();
        let snapshots: Vec<BodySnapshot> = sim.snapshots().collect();

        assert_eq!(snapshots.len(), 3);
        for (snapshot, body) in snapshots.iter().zip(sim.bodies()) {
            assert_eq!(snapshot.position, body.position);
            assert_eq!(snapshot.radius, body.radius);
        }
    }
}
