//! Drives registered algorithms: verification, measurement per size, and
//! CSV export of the results.

use std::io::Write;

use tracing::{debug, info};

use super::bench::unit_name;
use super::cpu_affinity::online_cpus;
use super::timer::{measure_variants, TimingConfig, VariantResult};
use crate::error::{Error, Result};
use crate::registry::AlgorithmRunner;

/// What to run and how to time it.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Invocations per sample; one result table per entry
    pub sizes: Vec<usize>,
    pub timing: TimingConfig,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 10_000, 100_000],
            timing: TimingConfig::default(),
        }
    }
}

impl RunOptions {
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::InvalidOptions("no sizes given".to_string()));
        }
        if self.sizes.contains(&0) {
            return Err(Error::InvalidOptions("sizes must be positive".to_string()));
        }
        if self.timing.runs_per_variant == 0 {
            return Err(Error::InvalidOptions("runs must be positive".to_string()));
        }
        Ok(())
    }
}

/// Results of one algorithm at one size
#[derive(Clone, Debug)]
pub struct SizeReport {
    pub size: usize,
    pub results: Vec<VariantResult>,
}

/// Results of one algorithm across all sizes
#[derive(Clone, Debug)]
pub struct AlgorithmReport {
    pub algorithm: &'static str,
    pub sizes: Vec<SizeReport>,
}

/// Verify, then benchmark, each algorithm at every configured size.
///
/// A failed verification aborts the run before anything is timed.
pub fn run_benchmarks(
    algorithms: &[&dyn AlgorithmRunner],
    options: &RunOptions,
) -> Result<Vec<AlgorithmReport>> {
    options.validate()?;
    debug!(cpus = online_cpus(), ?options, "starting run");

    for algo in algorithms {
        algo.verify()?;
        info!(algorithm = algo.name(), "verification passed");
    }

    let reports = algorithms
        .iter()
        .map(|algo| {
            let sizes = options
                .sizes
                .iter()
                .map(|&size| {
                    info!(algorithm = algo.name(), size, "measuring");
                    let closures = algo.get_variant_closures(size);
                    SizeReport {
                        size,
                        results: measure_variants(closures, size, &options.timing),
                    }
                })
                .collect();
            AlgorithmReport {
                algorithm: algo.name(),
                sizes,
            }
        })
        .collect();

    Ok(reports)
}

/// Write one CSV row per (algorithm, size, variant)
pub fn export_csv<W: Write>(mut out: W, reports: &[AlgorithmReport]) -> Result<()> {
    writeln!(
        out,
        "algorithm,variant,compiler,invocations,ops_per_invocation,samples,avg_per_op,median_per_op,unit,final_value"
    )?;

    for report in reports {
        for size in &report.sizes {
            for r in &size.results {
                let compiler = if r.name.starts_with("c-") {
                    crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
                } else {
                    ""
                };
                writeln!(
                    out,
                    "{},{},{},{},{},{},{:.4},{:.4},{},{}",
                    report.algorithm,
                    r.name,
                    compiler,
                    r.invocations,
                    r.operations,
                    r.samples,
                    r.avg_per_op,
                    r.median_per_op,
                    unit_name(),
                    r.result_sample.map(|v| v.to_string()).unwrap_or_default()
                )?;
            }
        }
    }

    Ok(())
}

/// Export to a file at `path`
pub fn export_csv_file(path: &str, reports: &[AlgorithmReport]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    export_csv(std::io::BufWriter::new(file), reports)
}
