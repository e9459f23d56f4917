//! Wall-clock timing of the integrator family
//!
//! Direct-sum gravity is O(n^2) per force pass, Verlet spends two passes
//! per step and Yoshida three Verlet applications; this prints per-step
//! times for all three schemes across a range of body counts.
//! Paste the CSV output straight into a spreadsheet to graph.

use std::time::Instant;

use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::Integrator;
use crate::simulation::states::{Body, BodyError, Vec2};

/// Deterministic pseudo-random cloud of `n` unit masses, no rand needed
fn make_bodies(n: usize) -> Result<Vec<Body>, BodyError> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            let x = Vec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0);
            Body::new(format!("body {i}"), 1.0, x, Vec2::zeros(), 0.01, [255, 255, 255])
        })
        .collect()
}

/// Time one step of each integrator for a range of n, CSV to stdout
pub fn bench_integrators() -> Result<(), BodyError> {
    let schemes = [Integrator::Euler, Integrator::Verlet, Integrator::Yoshida4];
    let steps = 10;
    let dt = 0.001;

    println!("n,euler_ms,verlet_ms,yoshida4_ms");

    for n in [50, 100, 200, 400, 800, 1600] {
        let template = make_bodies(n)?;
        let gravity = NewtonianGravity::default();

        let mut per_step_ms = [0.0; 3];
        for (slot, scheme) in per_step_ms.iter_mut().zip(schemes) {
            let mut bodies = template.clone();

            // Warm up
            scheme.advance(&mut bodies, &gravity, dt, false);

            let t0 = Instant::now();
            for _ in 0..steps {
                scheme.advance(&mut bodies, &gravity, dt, false);
            }
            *slot = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;
        }

        println!(
            "{},{:.4},{:.4},{:.4}",
            n, per_step_ms[0], per_step_ms[1], per_step_ms[2]
        );
    }

    Ok(())
}
