use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use critters::simulation::genetic::GeneticAlgorithm;
use critters::simulation::params::Params;
use critters::simulation::report::{GenerationSummary, GenomeUpdate, UpdateSchedule};

/// Headless evolution of neural critters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON parameter file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Stop after this many generations (runs forever when omitted)
    #[arg(long)]
    generations: Option<u64>,

    /// Where to write the best genomes for the display
    #[arg(long, default_value = "genomes.json")]
    output: PathBuf,

    /// Write the effective parameters to this file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(false)
        .init();

    let args = Args::parse();

    let params = match &args.config {
        Some(path) => Params::load_from_file(path)
            .with_context(|| format!("loading parameters from {}", path.display()))?,
        None => Params::default(),
    };

    if let Some(path) = &args.write_config {
        params
            .save_to_file(path)
            .with_context(|| format!("writing parameters to {}", path.display()))?;
        info!("Parameters written to {}", path.display());
        return Ok(());
    }

    let mut ga = GeneticAlgorithm::new(params.clone()).context("invalid parameters")?;
    let mut schedule = UpdateSchedule::new(&params, Instant::now());

    info!(
        population = params.population_size,
        pool = params.pool_size(),
        steps = params.sim_steps(),
        "Evolution started"
    );

    loop {
        let started = Instant::now();
        let results = ga.run();
        let finished = Instant::now();

        let summary = GenerationSummary::new(ga.generation(), finished - started, &results, &params);

        if schedule.is_due(finished) {
            info!("Sending update. Fitness: {:.3}", summary.fitness);
            GenomeUpdate::from_results(&summary, &results, &params)
                .save_to_file(&args.output)
                .with_context(|| format!("writing genomes to {}", args.output.display()))?;
            schedule.mark_sent(finished);
        }

        if schedule.should_log(summary.generation) {
            info!("{summary}");
        }

        if args.generations.is_some_and(|limit| summary.generation >= limit) {
            GenomeUpdate::from_results(&summary, &results, &params)
                .save_to_file(&args.output)
                .with_context(|| format!("writing genomes to {}", args.output.display()))?;
            info!("Stopped after {} generations", summary.generation);
            return Ok(());
        }
    }
}
