pub mod benchmark;
pub mod configuration;
pub mod simulation;

pub use simulation::diagnostics;
pub use simulation::engine::SimulationEngine;
pub use simulation::forces::{ForceModel, NewtonianGravity, DEFAULT_SOFTENING, G};
pub use simulation::integrator::Integrator;
pub use simulation::params::Parameters;
pub use simulation::scenario::{Scenario, CATALOG};
pub use simulation::states::{Body, BodyError, Color, Vec2};

pub use configuration::config::{
    BodyConfig, EngineConfig, IntegratorConfig, ParametersConfig, SimConfig,
};

pub use benchmark::benchmark::bench_integrators;
