//! Gravitational force model
//!
//! Defines the [`ForceModel`] seam consumed by the integrators and the
//! direct-sum softened Newtonian gravity that implements it

use std::f64::consts::PI;

use crate::simulation::states::{Body, Vec2};

/// Kepler-normalized gravitational constant in AU^3 / (solar mass * year^2):
/// a 1 AU circular orbit around one solar mass closes in exactly one year
pub const G: f64 = 4.0 * PI * PI;

/// Default softening length in AU
pub const DEFAULT_SOFTENING: f64 = 1e-3;

/// Acceleration source for the integrators
///
/// Every entry of a pass is computed from the same snapshot of positions;
/// an implementation must never read state it has itself updated mid-pass
pub trait ForceModel {
    /// Net acceleration on `bodies[target]` from every other body, using
    /// the positions as they currently stand. Pure with respect to the
    /// body set; the integrators own writing the result back.
    fn acceleration_on(&self, target: usize, bodies: &[Body]) -> Vec2;

    /// One full pass: `out[i]` receives the net acceleration on body `i`
    fn accumulate(&self, bodies: &[Body], out: &mut [Vec2]) {
        for i in 0..bodies.len() {
            out[i] = self.acceleration_on(i, bodies);
        }
    }
}

/// Direct O(n^2) Newtonian gravity with softening
///
/// The softening length `eps` is added in quadrature to the separation, so
/// the acceleration stays finite even for coincident bodies
#[derive(Debug, Clone)]
pub struct NewtonianGravity {
    pub g: f64,   // gravitational constant
    pub eps: f64, // softening length
}

impl Default for NewtonianGravity {
    fn default() -> Self {
        Self {
            g: G,
            eps: DEFAULT_SOFTENING,
        }
    }
}

impl ForceModel for NewtonianGravity {
    fn acceleration_on(&self, target: usize, bodies: &[Body]) -> Vec2 {
        let body = &bodies[target];
        let mut acc = Vec2::zeros();

        for (j, other) in bodies.iter().enumerate() {
            // Identity by index, not by value: two distinct bodies may
            // legitimately coincide in position
            if j == target {
                continue;
            }

            // Displacement from the other body to the target
            let d = body.position - other.position;

            // Softened separation |d|_eps = sqrt(|d|^2 + eps^2)
            let dist = (d.norm_squared() + self.eps * self.eps).sqrt();
            let inv_r3 = 1.0 / (dist * dist * dist);

            // a += -G m_other d / |d|_eps^3
            // Gravity attracts, so the contribution points from the target
            // toward the other body: the sign flips the target-minus-other
            // displacement. Checked by the Newton's-third-law test.
            acc -= d * (self.g * other.mass * inv_r3);
        }

        acc
    }
}
