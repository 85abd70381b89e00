use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use queue_wait_sim::io::reporting;
use queue_wait_sim::logging::init_logging;
use queue_wait_sim::simulation::config::{SimulationConfig, DEFAULT_TRIALS};
use queue_wait_sim::simulation::engine::WaitSimulation;

/// Average customer wait as the number of open lines grows
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Mean number of people arriving each minute
    #[arg(long, short = 'r')]
    arrival_rate: f64,

    /// Evaluate every line count from 1 up to this value
    #[arg(long, short = 'n')]
    max_lines: usize,

    /// Simulated days per line count
    #[arg(long, short, default_value_t = DEFAULT_TRIALS)]
    trials: usize,

    /// Random seed for a reproducible run
    #[arg(long, short)]
    seed: Option<u64>,

    /// Write per-configuration results to this CSV file
    #[arg(long, short)]
    output: Option<PathBuf>,

    /// Log level used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let mut config = SimulationConfig::new(args.arrival_rate, args.max_lines).with_trials(args.trials);
    config.seed = args.seed;
    config.validate().context("invalid simulation parameters")?;

    let mut sim = WaitSimulation::new(config);
    let report = sim.run();

    print!("{}", reporting::format_transcript(&report));

    if let Some(path) = args.output {
        reporting::write_results(&path, &report.results)
            .with_context(|| format!("writing results to {}", path.display()))?;
        println!("Results written to {}", path.display());
    }

    Ok(())
}
