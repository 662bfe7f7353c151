//! Text User Interface (TUI) utilities.
//!
//! Handles formatted output for the CLI.

use super::bench::{format_measurement, format_throughput, unit_name};
use super::runner::AlgorithmReport;
use crate::registry::{AlgorithmRegistry, AlgorithmRunner, BenchmarkResult};
use terminal_size::{terminal_size, Width};

/// Get the current terminal width, constrained to a reasonable range
fn get_term_width() -> usize {
    if let Some((Width(w), _)) = terminal_size() {
        (w as usize).clamp(40, 200)
    } else {
        80
    }
}

/// Sorting group: dynamic dispatch in registration order, then the static
/// baseline, then C variants.
fn variant_group(result: &BenchmarkResult) -> u8 {
    if result.name.starts_with("c-") {
        2
    } else if result.name.starts_with("static") {
        1
    } else {
        0
    }
}

/// Stable sort by group, keeping registration order inside a group
pub fn sort_variants(results: &mut [BenchmarkResult]) {
    results.sort_by_key(variant_group);
}

/// Truncate string with ellipsis if it exceeds width (character-wise)
fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        s.to_string()
    } else {
        let mut result: String = s.chars().take(width.saturating_sub(3)).collect();
        result.push_str("...");
        result
    }
}

/// Print algorithm info box
pub fn print_algo_info_box(algo: &dyn AlgorithmRunner) {
    let max_content_width = get_term_width().saturating_sub(4).max(40);

    let lines = [
        format!("Algorithm: {}", algo.name()),
        format!("Category:  {}", algo.category()),
        algo.description().to_string(),
        format!("Variants: {}", algo.available_variants().join(", ")),
    ];
    let content_width = lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(60)
        .min(max_content_width);

    let border = "─".repeat(content_width + 2);
    println!("┌{}┐", border);
    for (i, line) in lines.iter().enumerate() {
        if i == 3 {
            println!("├{}┤", border);
        }
        println!("│ {:<width$} │", truncate(line, content_width), width = content_width);
    }
    println!("└{}┘", border);
    println!();
}

/// Print results table for a single size. Times are per logical operation.
pub fn print_results_table(results: &[BenchmarkResult], size: usize) {
    let Some(baseline) = results.first() else {
        return;
    };

    let term_width = get_term_width();
    // 6 + 11*3 + 14 + 9 + 8 + 7 separators + 2 indent
    let fixed_width = 79;
    let variant_col_width = term_width.saturating_sub(fixed_width).max(15);
    let table_width = variant_col_width + fixed_width - 2;

    println!(
        "  Invocations per sample: {} ({} samples, times per operation in {})",
        size,
        baseline.samples,
        unit_name()
    );
    println!("  {}", "─".repeat(table_width));
    println!(
        "  {:<v_width$} {:>6} {:>11} {:>11} {:>11} {:>14} {:>9} {:>8}",
        "Variant",
        "Ops",
        "Average",
        "Min",
        "Max",
        "Throughput",
        "Speedup",
        "CV",
        v_width = variant_col_width
    );
    println!("  {}", "─".repeat(table_width));

    for result in results {
        let speedup = if result.avg_per_op > 0.0 {
            baseline.avg_per_op / result.avg_per_op
        } else {
            0.0
        };

        let display_name = match (result.name.starts_with("c-"), crate::utils::C_COMPILER_NAME) {
            (true, Some(c)) => format!("{} ({})", result.name, c),
            _ => result.name.clone(),
        };

        println!(
            "  {:<v_width$} {:>6} {:>11} {:>11} {:>11} {:>14} {:>8.2}x {:>7.2}%",
            truncate(&display_name, variant_col_width),
            result.operations,
            format_measurement(result.avg_per_op),
            format_measurement(result.min_per_op),
            format_measurement(result.max_per_op),
            format_throughput(result.avg_per_op),
            speedup,
            result.cv() * 100.0,
            v_width = variant_col_width
        );
    }
    println!();
}

/// Print every algorithm's info box followed by one table per size
pub fn print_reports(registry: &AlgorithmRegistry, reports: &[AlgorithmReport]) {
    for report in reports {
        if let Ok(algo) = registry.find(report.algorithm) {
            print_algo_info_box(algo);
        }
        for size in &report.sizes {
            let mut results = size.results.clone();
            sort_variants(&mut results);
            print_results_table(&results, size.size);
        }
    }
}

/// Print the application header
pub fn print_header() {
    let term_width = get_term_width().min(80);
    let title = " Call-Site Morphism Benchmarks ";
    let padding = term_width.saturating_sub(title.len() + 2) / 2;
    let right_padding = term_width.saturating_sub(padding + title.len());

    let border = "═".repeat(term_width);

    println!("╔{}╗", border);
    println!("║{}{}{}║", " ".repeat(padding), title, " ".repeat(right_padding));
    println!("╚{}╝", border);
    println!();
}

/// Print the list of available algorithms
pub fn print_available_algorithms(registry: &AlgorithmRegistry) {
    println!("Available algorithms:");
    println!();
    for algo in registry.all() {
        println!(
            "  {:<20} [{}] - {}",
            algo.name(),
            algo.category(),
            algo.description()
        );
        for variant in algo.available_variants() {
            println!("      {}", variant);
        }
    }
}
