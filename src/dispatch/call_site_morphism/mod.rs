//! # Call-Site Morphism
//!
//! Measures how a dynamic call site slows down as the number of concrete
//! types it dispatches to grows.
//!
//! ## Variants
//!
//! - **simple**: one loop, one call site. `111` keeps it monomorphic, `121`
//!   makes it bimorphic, `124` trimorphic.
//! - **switch**: unrolled, one call site per position. Each site sees a
//!   single type as long as only one sequence flows through it.
//! - **multi_switch**: runs `124`, `241` and `412` through the same unrolled
//!   sites, so every position turns trimorphic. Counts as three operations.
//! - **static124**: the same additions with no dynamic dispatch at all.
//!
//! Every entry point owns an accumulator that carries its result from one
//! invocation to the next.

pub mod code;
pub mod test;

use std::sync::Arc;

use crate::error::Result;
use crate::registry::{AlgorithmRunner, VariantClosure};
use code::{EntryState, Fixture};

pub struct CallSiteMorphismRunner;

impl AlgorithmRunner for CallSiteMorphismRunner {
    fn name(&self) -> &'static str {
        "call_site_morphism"
    }

    fn category(&self) -> &'static str {
        "dispatch"
    }

    fn description(&self) -> &'static str {
        "Monomorphic vs bimorphic vs trimorphic dynamic call sites"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::get_entry_points().iter().map(|e| e.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize) -> Vec<VariantClosure<'a>> {
        let fixture = Arc::new(Fixture::new());

        code::get_entry_points()
            .into_iter()
            .map(|entry| {
                let mut state = EntryState::new(entry, Arc::clone(&fixture));

                VariantClosure {
                    name: entry.name,
                    description: entry.description,
                    operations: entry.operations,
                    run: Box::new(move || {
                        // Timing inside closure - measures `size` invocations
                        let (taken, last) = crate::measure!({
                            for _ in 0..size {
                                state.invoke();
                            }
                            std::hint::black_box(state.value())
                        });
                        (taken, Some(i64::from(last)))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<()> {
        test::verify_all()
    }
}
