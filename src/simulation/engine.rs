//! Simulation engine: owns the body set, the active integrator, and the
//! substep policy
//!
//! The engine is the single entry point for the driving loop: it decomposes
//! a caller-sized timestep (possibly many simulated years) into fixed-size
//! substeps so the scheme stays stable no matter how coarse the caller's
//! step is, and it bounds trail growth by recording on a sparse subset of
//! those substeps. Everything runs synchronously on the calling thread; the
//! engine holds the only live body list.

use crate::simulation::forces::NewtonianGravity;
use crate::simulation::integrator::Integrator;
use crate::simulation::params::Parameters;
use crate::simulation::scenario;
use crate::simulation::states::{Body, BodyError};

pub struct SimulationEngine {
    bodies: Vec<Body>,
    gravity: NewtonianGravity,
    integrator: Integrator,
    params: Parameters,
    scenario_index: usize,
    elapsed: f64, // simulated years since the last (re)load
}

impl SimulationEngine {
    pub fn new(params: Parameters) -> Self {
        let gravity = NewtonianGravity {
            g: params.g,
            eps: params.eps,
        };
        Self {
            bodies: Vec::new(),
            gravity,
            integrator: Integrator::Verlet,
            params,
            scenario_index: 0,
            elapsed: 0.0,
        }
    }

    /// Select the starting integrator at construction time, without the
    /// reset that a mid-run switch performs
    pub fn with_integrator(mut self, integrator: Integrator) -> Self {
        self.integrator = integrator;
        self
    }

    /// Advance the simulation by `timestep` simulated years
    ///
    /// The step is decomposed into `ceil(timestep / substep)` fixed-size
    /// sub-integrations. The trail records only on the first and middle
    /// substep, so history growth per call is constant regardless of how
    /// many substeps run.
    pub fn update(&mut self, timestep: f64) {
        if timestep <= 0.0 || self.bodies.is_empty() {
            return;
        }

        let steps = (timestep / self.params.substep).ceil().max(1.0) as usize;
        for i in 0..steps {
            let record = i == 0 || i == steps / 2;
            self.integrator
                .advance(&mut self.bodies, &self.gravity, self.params.substep, record);
        }
        self.elapsed += steps as f64 * self.params.substep;
    }

    /// Replace the body set with the catalog scenario at `index`.
    /// Out-of-range indices wrap to scenario 0.
    pub fn load_scenario(&mut self, index: usize) -> Result<(), BodyError> {
        let (index, scenario) = scenario::lookup(index);
        let mut bodies = (scenario.build)()?;
        for body in &mut bodies {
            body.set_trail_capacity(self.params.trail_capacity);
        }
        self.bodies = bodies;
        self.scenario_index = index;
        self.elapsed = 0.0;
        Ok(())
    }

    /// Advance to the next catalog scenario, wrapping past the end
    pub fn switch_scenario(&mut self) -> Result<(), BodyError> {
        self.load_scenario(self.scenario_index + 1)
    }

    /// Reload the current catalog scenario's initial conditions
    pub fn reset(&mut self) -> Result<(), BodyError> {
        self.load_scenario(self.scenario_index)
    }

    /// Cycle to the next integrator and reset to the scenario's initial
    /// conditions. `previous_acceleration` and the velocity semantics are
    /// not transferable between schemes, so a switch never continues with
    /// mixed-history state.
    pub fn switch_integrator(&mut self) -> Result<(), BodyError> {
        self.integrator = self.integrator.cycled();
        self.reset()
    }

    pub fn add_body(&mut self, mut body: Body) {
        body.set_trail_capacity(self.params.trail_capacity);
        self.bodies.push(body);
    }

    /// Drop a fresh solar-mass star at the origin
    pub fn add_sunlike_body(&mut self) -> Result<(), BodyError> {
        let body = scenario::sunlike()?;
        self.add_body(body);
        Ok(())
    }

    /// Replace the body set wholesale, e.g. with bodies loaded from a
    /// configuration file. A later `reset` falls back to the catalog.
    pub fn set_bodies(&mut self, bodies: Vec<Body>) {
        self.bodies = bodies;
        for body in &mut self.bodies {
            body.set_trail_capacity(self.params.trail_capacity);
        }
        self.elapsed = 0.0;
    }

    pub fn clear_bodies(&mut self) {
        self.bodies.clear();
    }

    // Read-only state for the driving loop's status display

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn scenario_index(&self) -> usize {
        self.scenario_index
    }

    pub fn scenario_name(&self) -> &'static str {
        scenario::lookup(self.scenario_index).1.name
    }

    pub fn integrator(&self) -> Integrator {
        self.integrator
    }

    pub fn integrator_name(&self) -> &'static str {
        self.integrator.name()
    }

    pub fn params(&self) -> &Parameters {
        &self.params
    }

    /// Simulated years since the last scenario (re)load
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
