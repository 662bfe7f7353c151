//! CLI for running the call-site benchmarks.
//!
//! Usage:
//!   morphism-bench                      # Run all algorithms
//!   morphism-bench --list               # List available algorithms
//!   morphism-bench call_site_morphism   # Run specific algorithm
//!   morphism-bench --verify             # Correctness checks only

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use morphism_bench::registry::{build_registry, AlgorithmRunner};
use morphism_bench::tui;
use morphism_bench::utils::runner::{export_csv_file, RunOptions};
use morphism_bench::utils::timer::{PinStrategy, TimingConfig};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Pin {
    /// Pin once for the whole measurement
    Global,
    /// Pin around every sample
    PerExecution,
    /// Never pin
    Off,
}

impl From<Pin> for PinStrategy {
    fn from(pin: Pin) -> Self {
        match pin {
            Pin::Global => PinStrategy::Global,
            Pin::PerExecution => PinStrategy::PerExecution,
            Pin::Off => PinStrategy::Off,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "morphism-bench")]
#[command(version, about = "Benchmark monomorphic, bimorphic and trimorphic call sites")]
struct Cli {
    /// Name of a specific algorithm to run (omit for all)
    algorithm: Option<String>,

    /// List all available algorithms
    #[arg(short, long)]
    list: bool,

    /// Only run the correctness checks
    #[arg(long)]
    verify: bool,

    /// Comma-separated invocations per sample
    #[arg(long, value_delimiter = ',', default_value = "1000,10000,100000")]
    sizes: Vec<usize>,

    /// Samples per variant
    #[arg(long, visible_alias = "iter", default_value_t = 30)]
    runs: usize,

    /// Warmup samples per variant
    #[arg(long, default_value_t = 10)]
    warmup: usize,

    /// Seed for the sample schedule (default: random)
    #[arg(long, env = "MORPHISM_BENCH_SEED")]
    seed: Option<u64>,

    /// CPU pinning strategy
    #[arg(long, value_enum, default_value_t = Pin::PerExecution)]
    pin: Pin,

    /// Export raw results to a CSV file
    #[arg(long, value_name = "PATH")]
    csv: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let registry = build_registry();

    if cli.list {
        tui::print_available_algorithms(&registry);
        return Ok(());
    }

    let algorithms: Vec<&dyn AlgorithmRunner> = match &cli.algorithm {
        Some(name) => vec![registry
            .find(name)
            .with_context(|| format!("available: {:?}", registry.list_names()))?],
        None => registry.all().iter().map(|a| a.as_ref()).collect(),
    };

    if cli.verify {
        for algo in &algorithms {
            algo.verify()?;
            println!("  {} passed verification", algo.name());
        }
        return Ok(());
    }

    let options = RunOptions {
        sizes: cli.sizes,
        timing: TimingConfig {
            runs_per_variant: cli.runs,
            warmup_iterations: cli.warmup,
            pin_strategy: cli.pin.into(),
            seed: cli.seed,
        },
    };

    tui::print_header();
    let reports = morphism_bench::run_benchmarks(&algorithms, &options)?;

    if let Some(path) = &cli.csv {
        export_csv_file(path, &reports).with_context(|| format!("exporting CSV to {}", path))?;
        info!(path = %path, "raw data exported");
    }

    tui::print_reports(&registry, &reports);
    println!("Note: Speedup is relative to the first variant (simple111).");
    Ok(())
}
