//! Dynamic dispatch benchmarks.

pub mod call_site_morphism;
