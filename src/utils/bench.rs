//! Shared measurement primitives.
//!
//! By default (`cpu_cycles` feature), measurements use CPU cycle counters
//! for precise micro-benchmarking. Use `--features use_time` or
//! `--no-default-features` to use wall-clock time instead.

// Use CPU cycles if: cpu_cycles is enabled AND use_time is NOT enabled
// Use wall-clock time if: use_time is enabled OR cpu_cycles is disabled

/// Measurement value type - cycles (u64) or Duration depending on feature
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Measurement = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Measurement = std::time::Duration;

/// Opaque start mark returned by [`now`].
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub type Mark = u64;

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub type Mark = std::time::Instant;

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn now() -> Mark {
    crate::utils::cycles::read_cycles()
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn now() -> Mark {
    std::time::Instant::now()
}

#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
#[inline(always)]
pub fn elapsed(start: Mark) -> Measurement {
    crate::utils::cycles::read_cycles().saturating_sub(start)
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
#[inline(always)]
pub fn elapsed(start: Mark) -> Measurement {
    start.elapsed()
}

/// Raw measurement as an integer count of the active unit
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub fn to_units(m: Measurement) -> u64 {
    m
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub fn to_units(m: Measurement) -> u64 {
    m.as_nanos() as u64
}

/// Get the measurement unit name
#[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
pub const fn unit_name() -> &'static str {
    #[cfg(target_arch = "aarch64")]
    {
        "ticks"
    }
    #[cfg(not(target_arch = "aarch64"))]
    {
        "cycles"
    }
}

#[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
pub const fn unit_name() -> &'static str {
    "ns"
}

/// Time an expression, yielding `(Measurement, value)`.
#[macro_export]
macro_rules! measure {
    ($body:expr) => {{
        let start = $crate::utils::bench::now();
        let value = $body;
        let taken = $crate::utils::bench::elapsed(start);
        (taken, value)
    }};
}

/// Format a per-operation figure in the active unit
pub fn format_measurement(value: f64) -> String {
    if value >= 100.0 {
        format!("{:.0} {}", value, unit_name())
    } else {
        format!("{:.2} {}", value, unit_name())
    }
}

/// Throughput for a per-operation cost: Mops/s in time mode, ops per
/// unit in cycle mode.
pub fn format_throughput(per_op: f64) -> String {
    if per_op <= 0.0 {
        return "-".to_string();
    }
    #[cfg(any(not(feature = "cpu_cycles"), feature = "use_time"))]
    {
        format!("{:.1} Mop/s", 1e3 / per_op)
    }
    #[cfg(all(feature = "cpu_cycles", not(feature = "use_time")))]
    {
        format!("{:.3} op/{}", 1.0 / per_op, unit_name().trim_end_matches('s'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_macro_returns_value() {
        let (_, value) = crate::measure!(6 * 7);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_format_measurement() {
        let small = format_measurement(1.234);
        assert!(small.starts_with("1.23 "), "{}", small);
        let large = format_measurement(1234.6);
        assert!(large.starts_with("1235 "), "{}", large);
    }

    #[test]
    fn test_format_throughput_zero() {
        assert_eq!(format_throughput(0.0), "-");
        assert_ne!(format_throughput(2.0), "-");
    }
}
