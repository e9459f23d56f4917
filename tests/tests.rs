use orbsim::{
    diagnostics, Body, ForceModel, Integrator, NewtonianGravity, Parameters, SimConfig,
    SimulationEngine, Vec2, CATALOG, G,
};

use orbsim::simulation::integrator::verlet_step;

/// Build a test body; radius and color are irrelevant to the physics
pub fn body(name: &str, mass: f64, x: [f64; 2], v: [f64; 2]) -> Body {
    Body::new(
        name,
        mass,
        Vec2::new(x[0], x[1]),
        Vec2::new(v[0], v[1]),
        0.05,
        [255, 255, 255],
    )
    .expect("valid test body")
}

/// Equal solar masses on a circular mutual orbit at separation `d` AU.
/// Each star circles the barycentre with speed sqrt(G m / (2 d)).
pub fn circular_pair(d: f64) -> Vec<Body> {
    let v = (G / (2.0 * d)).sqrt();
    vec![
        body("a", 1.0, [-d / 2.0, 0.0], [0.0, v]),
        body("b", 1.0, [d / 2.0, 0.0], [0.0, -v]),
    ]
}

/// Orbital period of the pair from Kepler's third law, T = sqrt(a^3 / M)
pub fn pair_period(d: f64) -> f64 {
    (d * d * d / 2.0).sqrt()
}

// ==================================================================================
// Body construction
// ==================================================================================

#[test]
fn mass_must_be_positive_and_finite() {
    let make = |m: f64| Body::new("b", m, Vec2::zeros(), Vec2::zeros(), 0.05, [0, 0, 0]);

    assert!(make(1.0).is_ok());
    assert!(make(0.0).is_err());
    assert!(make(-1.0).is_err());
    assert!(make(f64::NAN).is_err());
    assert!(make(f64::INFINITY).is_err());
}

#[test]
fn trail_records_in_order_and_respects_capacity() {
    let mut b = body("b", 1.0, [0.0, 0.0], [0.0, 0.0]);
    b.set_trail_capacity(3);

    for i in 0..10 {
        b.position = Vec2::new(i as f64, 0.0);
        b.record_trail();
    }

    assert_eq!(b.trail().len(), 3);
    // Oldest evicted first, insertion order preserved
    let xs: Vec<f64> = b.trail().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![7.0, 8.0, 9.0]);
}

// ==================================================================================
// Gravity tests
// ==================================================================================

#[test]
fn gravity_newton_third_law() {
    let bodies = vec![
        body("a", 2.0, [-0.3, 0.1], [0.0, 0.0]),
        body("b", 3.0, [0.7, -0.4], [0.0, 0.0]),
    ];
    let gravity = NewtonianGravity::default();

    let a0 = gravity.acceleration_on(0, &bodies);
    let a1 = gravity.acceleration_on(1, &bodies);

    // Momentum balance: m0 a0 + m1 a1 = 0
    let net = a0 * bodies[0].mass + a1 * bodies[1].mass;
    assert!(net.norm() < 1e-8, "net momentum rate not zero: {net:?}");
}

#[test]
fn gravity_points_toward_other_body() {
    let bodies = circular_pair(2.0);
    let gravity = NewtonianGravity::default();

    let a0 = gravity.acceleration_on(0, &bodies);
    let toward = bodies[1].position - bodies[0].position;
    assert!(a0.dot(&toward) > 0.0, "acceleration not attractive");
}

#[test]
fn gravity_inverse_square_law() {
    // No softening so the ratio is exact
    let gravity = NewtonianGravity { g: G, eps: 0.0 };

    let near = circular_pair(1.0);
    let far = circular_pair(2.0);

    let a_near = gravity.acceleration_on(0, &near).norm();
    let a_far = gravity.acceleration_on(0, &far).norm();

    let ratio = a_near / a_far;
    assert!((ratio - 4.0).abs() < 1e-9, "expected ~4x, got {ratio}");
}

#[test]
fn gravity_softening_keeps_coincident_bodies_finite() {
    let bodies = vec![
        body("a", 1.0, [0.5, 0.5], [0.0, 0.0]),
        body("b", 1.0, [0.5, 0.5], [0.0, 0.0]),
    ];
    let gravity = NewtonianGravity::default();

    let a0 = gravity.acceleration_on(0, &bodies);
    assert!(a0.x.is_finite() && a0.y.is_finite());
    // At zero separation the softened displacement is zero, so the
    // acceleration is too
    assert!(a0.norm() < 1e-12);
}

#[test]
fn gravity_symmetric_triple_leaves_middle_body_balanced() {
    let d = 1.5;
    let bodies = vec![
        body("left", 1.0, [-d, 0.0], [0.0, 0.0]),
        body("mid", 1.0, [0.0, 0.0], [0.0, 0.0]),
        body("right", 1.0, [d, 0.0], [0.0, 0.0]),
    ];
    let gravity = NewtonianGravity::default();

    let a_mid = gravity.acceleration_on(1, &bodies);
    assert!(a_mid.norm() < 1e-12, "middle body feels net pull: {a_mid:?}");
}

// ==================================================================================
// Integrator tests
// ==================================================================================

/// Largest sampled relative energy drift over ten orbital periods of the
/// bound pair
fn orbit_drift(integrator: Integrator) -> f64 {
    let gravity = NewtonianGravity::default();
    let mut bodies = circular_pair(1.0);
    let e0 = diagnostics::total_energy(&bodies, gravity.g, gravity.eps);

    let dt = 1e-3;
    let steps = (10.0 * pair_period(1.0) / dt).ceil() as usize;

    let mut max_drift = 0.0_f64;
    for i in 0..steps {
        integrator.advance(&mut bodies, &gravity, dt, false);
        if i % 50 == 0 {
            let e = diagnostics::total_energy(&bodies, gravity.g, gravity.eps);
            max_drift = max_drift.max(diagnostics::relative_energy_drift(e0, e));
        }
    }
    max_drift
}

#[test]
fn energy_drift_orders_the_integrator_family() {
    let euler = orbit_drift(Integrator::Euler);
    let verlet = orbit_drift(Integrator::Verlet);
    let yoshida = orbit_drift(Integrator::Yoshida4);

    // The first-order scheme drifts measurably more than second order,
    // which drifts more than fourth; that separation is the family's
    // guarantee. The velocity-first Euler update keeps even its error
    // bounded on this orbit, so no monotonic-blowup floor applies.
    assert!(
        euler > verlet && verlet > yoshida,
        "drift not ordered: euler {euler:.3e}, verlet {verlet:.3e}, yoshida {yoshida:.3e}"
    );
    assert!(euler < 1e-2, "Euler drift unbounded: {euler:.3e}");
    assert!(yoshida < 1e-6, "Yoshida drift too coarse: {yoshida:.3e}");
}

#[test]
fn kepler_orbit_closes_after_one_period() {
    let gravity = NewtonianGravity::default();
    let mut bodies = circular_pair(1.0);
    let start: Vec<Vec2> = bodies.iter().map(|b| b.position).collect();

    let steps = 4096;
    let dt = pair_period(1.0) / steps as f64;
    for _ in 0..steps {
        verlet_step(&mut bodies, &gravity, dt, false);
    }

    for (b, x0) in bodies.iter().zip(&start) {
        let err = (b.position - x0).norm();
        assert!(err < 1e-3, "{} ended {err:.2e} AU from start", b.name);
    }
}

#[test]
fn euler_preserves_mirror_symmetry() {
    // Regression for the force-snapshot rule: if the second body saw the
    // first body's already-updated position, the mirror symmetry of this
    // setup would break within a few steps
    let gravity = NewtonianGravity::default();
    let mut bodies = circular_pair(1.0);

    for _ in 0..200 {
        Integrator::Euler.advance(&mut bodies, &gravity, 1e-3, false);
        let net = bodies[0].position + bodies[1].position;
        assert!(net.norm() < 1e-12, "mirror symmetry broken: {net:?}");
    }
}

#[test]
fn yoshida_step_records_at_most_one_trail_entry() {
    let gravity = NewtonianGravity::default();

    let mut bodies = circular_pair(1.0);
    Integrator::Yoshida4.advance(&mut bodies, &gravity, 0.01, true);
    for b in &bodies {
        assert_eq!(b.trail().len(), 1, "{} trail polluted by substeps", b.name);
    }

    let mut bodies = circular_pair(1.0);
    Integrator::Yoshida4.advance(&mut bodies, &gravity, 0.01, false);
    for b in &bodies {
        assert!(b.trail().is_empty());
    }
}

#[test]
fn verlet_records_pre_step_position() {
    let gravity = NewtonianGravity::default();
    let mut bodies = circular_pair(1.0);
    let before = bodies[0].position;

    verlet_step(&mut bodies, &gravity, 0.01, true);

    assert_eq!(bodies[0].trail()[0], before);
    assert_ne!(bodies[0].position, before);
}

#[test]
fn energy_drift_is_defined_for_zero_reference_energy() {
    assert_eq!(diagnostics::relative_energy_drift(0.0, 0.0), 0.0);
    assert!(diagnostics::relative_energy_drift(0.0, 1.0).is_finite());
    assert!(!diagnostics::relative_energy_drift(0.0, -1.0).is_nan());
}

// ==================================================================================
// Engine tests
// ==================================================================================

#[test]
fn catalog_scenarios_all_build() {
    for (i, scenario) in CATALOG.iter().enumerate() {
        let bodies = (scenario.build)().expect("catalog scenario must build");
        assert!(!bodies.is_empty(), "scenario {i} ({}) is empty", scenario.name);
        assert!(bodies.iter().all(|b| b.mass > 0.0));
    }
}

#[test]
fn out_of_range_scenario_index_wraps_to_zero() {
    let mut engine = SimulationEngine::new(Parameters::default());
    engine.load_scenario(CATALOG.len() + 7).unwrap();
    assert_eq!(engine.scenario_index(), 0);
    assert!(!engine.bodies().is_empty());
}

#[test]
fn switching_past_the_catalog_end_wraps() {
    let mut engine = SimulationEngine::new(Parameters::default());
    engine.load_scenario(0).unwrap();

    let switches = 2 * CATALOG.len() + 1;
    for _ in 0..switches {
        engine.switch_scenario().unwrap();
        assert!(engine.scenario_index() < CATALOG.len());
        assert!(!engine.bodies().is_empty());
    }
    assert_eq!(engine.scenario_index(), switches % CATALOG.len());
}

#[test]
fn switching_integrator_resets_to_initial_conditions() {
    let mut engine = SimulationEngine::new(Parameters::default());
    engine.load_scenario(0).unwrap();
    let initial: Vec<Vec2> = engine.bodies().iter().map(|b| b.position).collect();

    engine.update(1.0);
    assert!(engine.bodies()[0].position != initial[0], "pair never moved");

    engine.switch_integrator().unwrap();
    assert_eq!(engine.integrator(), Integrator::Yoshida4); // default Verlet, cycled once
    assert_eq!(engine.elapsed(), 0.0);
    for (b, x0) in engine.bodies().iter().zip(&initial) {
        assert_eq!(b.position, *x0);
        assert!(b.trail().is_empty());
    }
}

#[test]
fn update_covers_the_requested_timestep_with_substeps() {
    let mut engine = SimulationEngine::new(Parameters::default());
    engine.load_scenario(0).unwrap();

    // A request smaller than one substep still advances one full substep
    engine.update(0.003);
    let substep = engine.params().substep;
    assert!((engine.elapsed() - substep).abs() < 1e-12);

    // A coarse request is decomposed, never integrated in one jump
    engine.update(1.0);
    assert!(engine.elapsed() >= 1.0 + substep - 1e-9);
}

#[test]
fn trails_stay_bounded_across_many_updates() {
    let params = Parameters {
        trail_capacity: 16,
        ..Parameters::default()
    };
    let mut engine = SimulationEngine::new(params);
    engine.load_scenario(0).unwrap();

    for _ in 0..200 {
        engine.update(0.1);
    }

    for b in engine.bodies() {
        assert!(b.trail().len() <= 16, "{} trail overflowed", b.name);
        assert!(!b.trail().is_empty());
    }
}

#[test]
fn add_sunlike_body_appends_one_star() {
    let mut engine = SimulationEngine::new(Parameters::default());
    engine.load_scenario(0).unwrap();
    let before = engine.bodies().len();

    engine.add_sunlike_body().unwrap();
    assert_eq!(engine.bodies().len(), before + 1);
    assert_eq!(engine.bodies().last().unwrap().mass, 1.0);

    engine.clear_bodies();
    assert!(engine.bodies().is_empty());
}

// ==================================================================================
// Configuration tests
// ==================================================================================

#[test]
fn yaml_config_with_custom_bodies_builds_an_engine() {
    let yaml = r#"
engine:
  integrator: "yoshida4"
parameters:
  substep: 0.005
  trail_capacity: 64
bodies:
  - name: "Star 1"
    m: 1.0
    x: [-0.5, 0.0]
    v: [0.0, 4.44]
  - name: "Star 2"
    m: 1.0
    x: [0.5, 0.0]
    v: [0.0, -4.44]
"#;
    let cfg: SimConfig = serde_yaml::from_str(yaml).unwrap();
    let engine = cfg.build_engine().unwrap();

    assert_eq!(engine.bodies().len(), 2);
    assert_eq!(engine.integrator(), Integrator::Yoshida4);
    assert_eq!(engine.params().substep, 0.005);
    assert!(engine.bodies().iter().all(|b| b.trail_capacity() == 64));
}

#[test]
fn yaml_config_rejects_non_positive_mass() {
    let yaml = r#"
engine:
  integrator: "verlet"
bodies:
  - name: "ghost"
    m: 0.0
    x: [0.0, 0.0]
    v: [0.0, 0.0]
"#;
    let cfg: SimConfig = serde_yaml::from_str(yaml).unwrap();
    assert!(cfg.build_engine().is_err());
}

#[test]
fn yaml_config_without_bodies_loads_the_catalog_scenario() {
    let yaml = r#"
engine:
  integrator: "euler"
  scenario: 3
"#;
    let cfg: SimConfig = serde_yaml::from_str(yaml).unwrap();
    let engine = cfg.build_engine().unwrap();

    assert_eq!(engine.scenario_index(), 3);
    assert_eq!(engine.integrator(), Integrator::Euler);
    assert_eq!(engine.bodies().len(), 3); // figure eight
}
