//! Unified timing system for micro-benchmarks.
//!
//! This module provides the single timing infrastructure with:
//! - Support for both CPU cycles and wall-clock time (via features)
//! - CPU core pinning for stable measurements
//! - Seeded, shuffled variant execution to avoid ordering bias
//! - Per-operation statistics normalised by each variant's declared work

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::hint::black_box;
use tracing::{debug, warn};

use super::bench::{to_units, Measurement};
use super::cpu_affinity::PinGuard;
use crate::registry::VariantClosure;

/// CPU pinning strategy during measurements
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PinStrategy {
    /// Pin once before all measurements
    Global,
    /// Pin/unpin around each sample
    #[default]
    PerExecution,
    /// Leave scheduling to the OS
    Off,
}

/// Configuration for timing measurements
#[derive(Clone, Debug)]
pub struct TimingConfig {
    /// Number of samples to collect per variant (default: 30)
    pub runs_per_variant: usize,
    /// Number of warmup samples before measurement (default: 10)
    pub warmup_iterations: usize,
    /// CPU pinning strategy (default: PerExecution)
    pub pin_strategy: PinStrategy,
    /// Seed for the sample schedule; drawn from the thread RNG when `None`
    pub seed: Option<u64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            runs_per_variant: 30,
            warmup_iterations: 10,
            pin_strategy: PinStrategy::default(),
            seed: None,
        }
    }
}

/// Statistics for one variant, expressed per logical operation in the
/// active measurement unit (see [`super::bench::unit_name`]).
#[derive(Clone, Debug)]
pub struct VariantResult {
    pub name: String,
    pub description: String,
    /// Invocations performed by each sample
    pub invocations: usize,
    /// Logical operations per invocation
    pub operations: u32,
    /// Number of samples measured
    pub samples: usize,
    pub avg_per_op: f64,
    pub median_per_op: f64,
    pub min_per_op: f64,
    pub max_per_op: f64,
    pub std_dev_per_op: f64,
    /// Last value the variant produced (its accumulator)
    pub result_sample: Option<i64>,
}

impl VariantResult {
    /// Coefficient of variation, 0 when the average is 0.
    pub fn cv(&self) -> f64 {
        if self.avg_per_op > 0.0 {
            self.std_dev_per_op / self.avg_per_op
        } else {
            0.0
        }
    }
}

/// Measure multiple variants with shuffled execution order.
///
/// 1. Warms up all variants
/// 2. Creates a seeded, shuffled task schedule
/// 3. Measures each sample under the configured pinning strategy
/// 4. Returns per-operation results for all variants, in input order
///
/// `invocations` is the number of invocations each closure call performs.
pub fn measure_variants(
    mut variants: Vec<VariantClosure>,
    invocations: usize,
    config: &TimingConfig,
) -> Vec<VariantResult> {
    if variants.is_empty() {
        return Vec::new();
    }

    let samples = config.runs_per_variant;

    for variant in &mut variants {
        for _ in 0..config.warmup_iterations {
            black_box((variant.run)());
        }
    }

    // (variant_idx, sample_idx)
    let mut tasks: Vec<(usize, usize)> = (0..variants.len())
        .flat_map(|v| (0..samples).map(move |s| (v, s)))
        .collect();
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    tasks.shuffle(&mut StdRng::seed_from_u64(seed));
    debug!(seed, tasks = tasks.len(), "sample schedule shuffled");

    let mut measurements: Vec<Vec<Measurement>> = (0..variants.len())
        .map(|_| Vec::with_capacity(samples))
        .collect();
    let mut result_samples: Vec<Option<i64>> = vec![None; variants.len()];

    let global_pin = (config.pin_strategy == PinStrategy::Global).then(PinGuard::current);
    if let Some(pin) = &global_pin {
        if !pin.is_pinned() {
            warn!("CPU pinning unavailable; measuring unpinned");
        }
    }

    for (variant_idx, _) in tasks {
        let variant = &mut variants[variant_idx];
        let _per_exec_pin = (config.pin_strategy == PinStrategy::PerExecution).then(PinGuard::current);
        let (taken, result) = (variant.run)();

        measurements[variant_idx].push(taken);
        result_samples[variant_idx] = result;
    }
    drop(global_pin);

    variants
        .into_iter()
        .zip(measurements)
        .zip(result_samples)
        .map(|((variant, times), result_sample)| {
            let result = compute_variant_result(&variant, times, invocations, result_sample);
            debug!(
                variant = variant.name,
                avg = result.avg_per_op,
                median = result.median_per_op,
                "variant measured"
            );
            result
        })
        .collect()
}

/// Compute per-operation statistics from raw sample measurements
fn compute_variant_result(
    variant: &VariantClosure,
    measurements: Vec<Measurement>,
    invocations: usize,
    result_sample: Option<i64>,
) -> VariantResult {
    let mut result = VariantResult {
        name: variant.name.to_string(),
        description: variant.description.to_string(),
        invocations,
        operations: variant.operations,
        samples: measurements.len(),
        avg_per_op: 0.0,
        median_per_op: 0.0,
        min_per_op: 0.0,
        max_per_op: 0.0,
        std_dev_per_op: 0.0,
        result_sample,
    };
    if measurements.is_empty() {
        return result;
    }

    let ops_per_sample = (invocations.max(1) as f64) * f64::from(variant.operations.max(1));
    let mut per_op: Vec<f64> = measurements
        .iter()
        .map(|m| to_units(*m) as f64 / ops_per_sample)
        .collect();
    per_op.sort_by(f64::total_cmp);

    let n = per_op.len();
    let avg = per_op.iter().sum::<f64>() / n as f64;
    let variance = per_op.iter().map(|v| (v - avg) * (v - avg)).sum::<f64>() / (n - 1).max(1) as f64;

    result.avg_per_op = avg;
    result.median_per_op = per_op[n / 2];
    result.min_per_op = per_op[0];
    result.max_per_op = per_op[n - 1];
    result.std_dev_per_op = variance.sqrt();
    result
}
