use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use boid_cli::config::{load_settings, Overrides, SimulationPlan};
use boid_cli::report;
use boid_cli::runner::{run_batch, run_single};
use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(author, about = "Boid flocking simulation with predators", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one simulation and report flock statistics
    Run(Common),

    /// Run many simulations and report how many boids each one lost
    Batch {
        #[command(flatten)]
        common: Common,

        /// Number of simulations
        #[arg(short = 'n', long, default_value_t = 100)]
        runs: u32,
    },
}

#[derive(ClapArgs, Debug)]
struct Common {
    /// JSON settings file; missing fields take their defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the report here instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the report as JSON
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    overrides: Overrides,
}

impl Common {
    fn plan(&self) -> Result<SimulationPlan> {
        let mut settings =
            load_settings(self.config.as_deref()).context("Failed to load settings")?;
        self.overrides.apply(&mut settings);
        let plan = SimulationPlan::from_settings(&settings).context("Invalid parameter")?;
        log::info!("Parameters used in the simulation:\n{}", report::format_parameters(&plan));
        Ok(plan)
    }

    fn writer(&self) -> Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => Box::new(BufWriter::new(create(path)?)),
            None => Box::new(io::stdout().lock()),
        })
    }
}

fn create(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Cannot open file {}", path.display()))
}

fn run(common: &Common) -> Result<()> {
    let plan = common.plan()?;
    log::info!("{}", report::state_header());
    let outcome = run_single(&plan);

    let mut out = common.writer()?;
    let written = if common.json {
        report::write_json(&mut out, &outcome.stats)
    } else {
        report::write_stats(&mut out, &outcome.stats)
    };
    written.context("Failed to write statistics")?;
    out.flush()?;

    if let Some(path) = &common.output {
        log::info!("Statistics saved to {}", path.display());
    }
    Ok(())
}

fn batch(common: &Common, runs: u32) -> Result<()> {
    let plan = common.plan()?;
    log::info!("Running {} simulations from seed {}", runs, plan.seed);
    let records = run_batch(&plan, runs);

    let total: usize = records.iter().map(|r| r.eaten).sum();
    if runs > 0 {
        log::info!(
            "Mean boids eaten per run: {:.3}",
            total as f64 / f64::from(runs)
        );
    }

    let mut out = common.writer()?;
    let written = if common.json {
        report::write_json(&mut out, &records)
    } else {
        report::write_eaten_counts(&mut out, plan.seek_type(), &records)
    };
    written.context("Failed to write eaten counts")?;
    out.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    match &args.command {
        Command::Run(common) => run(common).context("Simulation failed")?,
        Command::Batch { common, runs } => batch(common, *runs).context("Batch failed")?,
    }

    Ok(())
}
