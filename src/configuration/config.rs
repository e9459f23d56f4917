//! Configuration types for loading a simulation from YAML
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation setup:
//!
//! - [`EngineConfig`]     – integrator selection and starting scenario
//! - [`ParametersConfig`] – numerical parameters and physical constants
//! - [`BodyConfig`]       – initial state for a custom body
//! - [`SimConfig`]        – top-level wrapper used to load a run from YAML
//!
//! # YAML format
//!
//! ```yaml
//! engine:
//!   integrator: "verlet"   # "euler", "verlet" or "yoshida4"
//!   scenario: 0            # catalog index, ignored when bodies are given
//!
//! parameters:
//!   g: 39.478417604357434  # 4 pi^2, AU^3 / (solar mass * year^2)
//!   eps: 1.0e-3            # softening length, AU
//!   substep: 0.01          # internal step, years
//!   trail_capacity: 1000
//!
//! bodies:                  # optional, replaces the catalog scenario
//!   - name: "Star 1"
//!     m: 1.0
//!     x: [-0.5, 0.0]
//!     v: [0.0, 4.44]
//!   - name: "Star 2"
//!     m: 1.0
//!     x: [0.5, 0.0]
//!     v: [0.0, -4.44]
//! ```
//!
//! Custom bodies go through [`Body::new`], so a non-positive mass in the
//! file is rejected at load time.

use serde::Deserialize;

use crate::simulation::engine::SimulationEngine;
use crate::simulation::integrator::Integrator;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, BodyError, Color, Vec2};

/// Which integration scheme the engine starts with
#[derive(Deserialize, Debug, Clone, Copy)]
pub enum IntegratorConfig {
    #[serde(rename = "euler")]
    Euler,
    #[serde(rename = "verlet")]
    Verlet,
    #[serde(rename = "yoshida4")]
    Yoshida4,
}

impl From<IntegratorConfig> for Integrator {
    fn from(cfg: IntegratorConfig) -> Self {
        match cfg {
            IntegratorConfig::Euler => Integrator::Euler,
            IntegratorConfig::Verlet => Integrator::Verlet,
            IntegratorConfig::Yoshida4 => Integrator::Yoshida4,
        }
    }
}

/// High-level engine configuration
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub integrator: IntegratorConfig,
    #[serde(default)]
    pub scenario: usize, // catalog index, wraps when out of range
}

/// Numerical parameters; every field falls back to the crate default
#[derive(Deserialize, Debug, Default, Clone)]
pub struct ParametersConfig {
    pub g: Option<f64>,
    pub eps: Option<f64>,
    pub substep: Option<f64>,
    pub trail_capacity: Option<usize>,
}

impl ParametersConfig {
    pub fn into_parameters(self) -> Parameters {
        let defaults = Parameters::default();
        Parameters {
            g: self.g.unwrap_or(defaults.g),
            eps: self.eps.unwrap_or(defaults.eps),
            substep: self.substep.unwrap_or(defaults.substep),
            trail_capacity: self.trail_capacity.unwrap_or(defaults.trail_capacity),
        }
    }
}

fn default_radius() -> f64 {
    0.05
}

fn default_color() -> Color {
    [255, 255, 255]
}

/// Initial state for a single custom body
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub name: String,
    pub m: f64,      // solar masses
    pub x: [f64; 2], // AU
    pub v: [f64; 2], // AU / year
    #[serde(default = "default_radius")]
    pub radius: f64, // display only
    #[serde(default = "default_color")]
    pub color: Color, // display only
}

impl BodyConfig {
    pub fn build(&self) -> Result<Body, BodyError> {
        Body::new(
            self.name.clone(),
            self.m,
            Vec2::new(self.x[0], self.x[1]),
            Vec2::new(self.v[0], self.v[1]),
            self.radius,
            self.color,
        )
    }
}

/// Top-level configuration loaded from YAML
#[derive(Deserialize, Debug)]
pub struct SimConfig {
    pub engine: EngineConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Option<Vec<BodyConfig>>,
}

impl SimConfig {
    /// Map the configuration into a ready-to-run engine
    pub fn build_engine(self) -> Result<SimulationEngine, BodyError> {
        let params = self.parameters.into_parameters();
        let mut engine =
            SimulationEngine::new(params).with_integrator(self.engine.integrator.into());

        match self.bodies {
            Some(configs) => {
                let bodies = configs
                    .iter()
                    .map(BodyConfig::build)
                    .collect::<Result<Vec<_>, _>>()?;
                engine.set_bodies(bodies);
            }
            None => engine.load_scenario(self.engine.scenario)?,
        }
        Ok(engine)
    }
}
