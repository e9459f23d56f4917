use orbsim::{bench_integrators, diagnostics, Integrator, Parameters, SimConfig, SimulationEngine};

use anyhow::{bail, Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Headless driver for the planar n-body simulation
#[derive(Parser, Debug)]
struct Args {
    /// Scenario index from the built-in catalog (wraps when out of range)
    #[arg(short, long, default_value_t = 0)]
    scenario: usize,

    /// Integration scheme: euler, verlet or yoshida4
    #[arg(short, long, default_value = "verlet")]
    integrator: String,

    /// Simulated years advanced per frame
    #[arg(short, long, default_value_t = 0.1)]
    delta: f64,

    /// Number of frames to run
    #[arg(short, long, default_value_t = 100)]
    frames: usize,

    /// YAML configuration file; overrides the flags above
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Time the integrator family instead of running a simulation
    #[arg(long)]
    bench: bool,
}

fn parse_integrator(name: &str) -> Result<Integrator> {
    match name {
        "euler" => Ok(Integrator::Euler),
        "verlet" => Ok(Integrator::Verlet),
        "yoshida4" => Ok(Integrator::Yoshida4),
        other => bail!("unknown integrator {other:?}, expected euler, verlet or yoshida4"),
    }
}

fn build_engine(args: &Args) -> Result<SimulationEngine> {
    if let Some(path) = &args.config {
        let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
        let cfg: SimConfig = serde_yaml::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(cfg.build_engine()?)
    } else {
        let mut engine = SimulationEngine::new(Parameters::default())
            .with_integrator(parse_integrator(&args.integrator)?);
        engine.load_scenario(args.scenario)?;
        Ok(engine)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_integrators()?;
        return Ok(());
    }

    let mut engine = build_engine(&args)?;
    log::info!(
        "scenario {} ({}), {} with {} bodies, {} frames of {} yr",
        engine.scenario_index(),
        engine.scenario_name(),
        engine.integrator_name(),
        engine.bodies().len(),
        args.frames,
        args.delta,
    );

    let params = engine.params().clone();
    let e0 = diagnostics::total_energy(engine.bodies(), params.g, params.eps);

    let report_every = (args.frames / 10).max(1);
    for frame in 0..args.frames {
        engine.update(args.delta);

        if (frame + 1) % report_every == 0 {
            let e = diagnostics::total_energy(engine.bodies(), params.g, params.eps);
            log::info!(
                "t = {:9.3} yr, energy drift {:.3e}",
                engine.elapsed(),
                diagnostics::relative_energy_drift(e0, e),
            );
        }
    }

    let e = diagnostics::total_energy(engine.bodies(), params.g, params.eps);
    println!(
        "simulated {:.3} years with {}: relative energy drift {:.3e}",
        engine.elapsed(),
        engine.integrator_name(),
        diagnostics::relative_energy_drift(e0, e),
    );
    for body in engine.bodies() {
        println!(
            "  {:<8} x = ({:+9.4}, {:+9.4}) AU  v = ({:+8.4}, {:+8.4}) AU/yr  trail {:4} pts",
            body.name,
            body.position.x,
            body.position.y,
            body.velocity.x,
            body.velocity.y,
            body.trail().len(),
        );
    }

    Ok(())
}
