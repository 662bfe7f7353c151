//! # Morphism-Bench
//!
//! Micro-benchmarks measuring what a dynamic call site costs as the number of
//! concrete types flowing through it grows from one to three.

pub mod dispatch;
pub mod error;
pub mod registry;
pub mod utils;

pub use error::{Error, Result};

/// Re-export tui from utils
pub use utils::tui;

/// Re-export run_benchmarks from utils::runner
pub use utils::runner::run_benchmarks;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::dispatch::call_site_morphism;
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::utils::runner::RunOptions;
    pub use crate::utils::timer::{PinStrategy, TimingConfig};
}
