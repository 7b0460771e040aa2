//! ring40: compare the eight pursuit strategies on a ring with chords.
//!
//! Defaults reproduce the reference experiment: 40 nodes, 10 chords,
//! maximum degree 3, 100 trials per strategy, seed 42.
//!
//! Run with:
//!   cargo run -p ring40 --release
//!   cargo run -p ring40 --release -- --strategy particle-hmm --trials 500 --out output/ring40
//!
//! Logging goes to stderr; set `RUST_LOG=debug` for per-trial detail.

mod config;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pe_output::{CsvWriter, TrialOutputObserver};
use pe_sim::{HarnessBuilder, NoopObserver, StrategyStats};
use pe_strategy::StrategyKind;

use config::RunFile;

#[derive(Debug, Parser)]
#[command(name = "ring40", version, about = "Pursuit-evasion strategy comparison")]
struct Cli {
    /// JSON run file with `trial` and `params` blocks.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Trials per strategy.
    #[arg(long)]
    trials: Option<u32>,

    /// Master RNG seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Number of graph nodes.
    #[arg(long)]
    nodes: Option<usize>,

    /// Extra chords added to the ring.
    #[arg(long)]
    chords: Option<usize>,

    /// Tick cap per trial.
    #[arg(long, value_name = "TICKS")]
    max_ticks: Option<u64>,

    /// Strategy to run; repeat for several.  Default: all eight.
    #[arg(long = "strategy", value_name = "NAME")]
    strategies: Vec<StrategyKind>,

    /// Write `trials.csv` and `summaries.csv` into this directory.
    #[arg(long, value_name = "DIR")]
    out: Option<PathBuf>,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_table(stats: &[StrategyStats]) {
    println!("{:<18} {:>8} {:>12} {:>10}", "Strategy", "Trials", "Avg steps", "Capture %");
    println!("{}", "-".repeat(51));
    for s in stats {
        println!(
            "{:<18} {:>8} {:>12.2} {:>10.1}",
            s.strategy.name(),
            s.trials,
            s.average_steps(),
            s.capture_percent(),
        );
    }
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let RunFile { trial: mut config, params } = match &cli.config {
        Some(path) => RunFile::from_path(path)?,
        None => RunFile::default(),
    };
    if let Some(trials) = cli.trials {
        config.trials = trials;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(nodes) = cli.nodes {
        config.node_count = nodes;
    }
    if let Some(chords) = cli.chords {
        config.chord_count = chords;
    }
    if let Some(max_ticks) = cli.max_ticks {
        config.max_ticks_per_trial = max_ticks;
    }

    let kinds = if cli.strategies.is_empty() {
        StrategyKind::ALL.to_vec()
    } else {
        cli.strategies.clone()
    };

    let harness = HarnessBuilder::new(config).params(params).build()?;
    println!("=== ring40: pursuit-evasion ===");
    println!(
        "Graph: {} nodes, {} edges  |  Trials: {}  |  Seed: {}",
        harness.topology.node_count(),
        harness.topology.edge_count(),
        harness.config.trials,
        harness.config.seed,
    );
    println!();

    let t0 = Instant::now();
    let stats = match &cli.out {
        Some(dir) => {
            let mut obs = TrialOutputObserver::new(CsvWriter::new(dir)?);
            let stats = harness.run_strategies(&kinds, &mut obs)?;
            obs.finish()?;
            info!(dir = %dir.display(), "wrote trials.csv and summaries.csv");
            stats
        }
        None => harness.run_strategies(&kinds, &mut NoopObserver)?,
    };
    let elapsed = t0.elapsed();

    print_table(&stats);
    println!();
    println!("Completed in {:.3} s", elapsed.as_secs_f64());
    Ok(())
}
