//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the runtime settings shared by the engine and its
//! force model: gravitational constant, softening length, the fixed
//! internal substep, and the per-body trail bound

use crate::simulation::forces;
use crate::simulation::states;

#[derive(Debug, Clone)]
pub struct Parameters {
    pub g: f64,       // gravitational constant, AU^3 / (solar mass * year^2)
    pub eps: f64,     // softening length, AU
    pub substep: f64, // fixed internal integration step, years
    pub trail_capacity: usize, // per-body trail bound
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: forces::G,
            eps: forces::DEFAULT_SOFTENING,
            substep: 0.01,
            trail_capacity: states::DEFAULT_TRAIL_CAPACITY,
        }
    }
}
