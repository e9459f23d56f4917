//! Energy bookkeeping for drift reporting and the conservation tests

use crate::simulation::states::Body;

pub fn kinetic_energy(bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| 0.5 * b.mass * b.velocity.norm_squared())
        .sum()
}

/// Pairwise gravitational potential with the same softening as the force
/// law, so the reported total is the quantity the integrators conserve
pub fn potential_energy(bodies: &[Body], g: f64, eps: f64) -> f64 {
    let mut pe = 0.0;
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            let d = bodies[i].position - bodies[j].position;
            let dist = (d.norm_squared() + eps * eps).sqrt();
            pe -= g * bodies[i].mass * bodies[j].mass / dist;
        }
    }
    pe
}

pub fn total_energy(bodies: &[Body], g: f64, eps: f64) -> f64 {
    kinetic_energy(bodies) + potential_energy(bodies, g, eps)
}

/// Relative drift |E - E0| / |E0|. A zero reference energy divides by the
/// smallest positive normal instead, so the result is always a number.
pub fn relative_energy_drift(e0: f64, e: f64) -> f64 {
    ((e - e0) / e0.abs().max(f64::MIN_POSITIVE)).abs()
}
