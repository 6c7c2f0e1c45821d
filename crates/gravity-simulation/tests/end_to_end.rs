use gravity_physics::Vector2;
use gravity_simulation::{BodySpec, Scenario, Simulation, SimulationParams, Ticker, RED, WHITE};

fn attraction_scenario() -> Scenario {
    let params = SimulationParams {
        steps_per_second: 40,
        gravitational_constant: 6.674e-11,
        ..Default::default()
    };

    Scenario::new(params)
        .with_body(BodySpec::new(Vector2::new(0.0, 0.0), 1e12, 50.0, WHITE))
        .with_body(BodySpec::new(Vector2::new(0.0, 500.0), 1.0, 5.0, RED))
}

#[test]
fn two_bodies_fall_toward_each_other() {
    let mut sim = Simulation::new(&attraction_scenario()).unwrap();

    let mut heavy_y = 0.0;
    let mut light_y = 500.0;
    let mut separation = 500.0;

    for _ in 0..1000 {
        sim.step();

        let bodies = sim.bodies();
        let (heavy, light) = (bodies[0], bodies[1]);

        // Motion stays on the initial separation axis
        assert_eq!(heavy.position.x, 0.0);
        assert_eq!(light.position.x, 0.0);

        assert!(heavy.position.y > heavy_y);
        assert!(light.position.y < light_y);

        let new_separation = (light.position - heavy.position).length();
        assert!(new_separation < separation);

        let momentum = sim.total_momentum().length();
        assert!(
            momentum <= 1e-9 * light.velocity.length(),
            "momentum {} not ~0",
            momentum
        );

        heavy_y = heavy.position.y;
        light_y = light.position.y;
        separation = new_separation;
    }

    assert_eq!(sim.step_count(), 1000);
    assert!(separation < 400.0);
}

#[test]
fn ticker_drives_whole_steps() {
    let mut sim = Simulation::new(&attraction_scenario()).unwrap();
    let mut ticker = Ticker::new(sim.params().steps_per_second, 0.0).unwrap();

    // One second of 16ms frames
    let mut now = 0.0;
    while now < 1.0 {
        now += 1.0 / 64.0;
        sim.run(ticker.tick(now));
    }

    let expected = now * 40.0;
    assert!((sim.step_count() as f64 - expected).abs() <= 1.0);
}
