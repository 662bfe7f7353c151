//! Named benchmark entry points and their accumulators.

use std::hint::black_box;
use std::sync::Arc;

use super::fixture::Fixture;

/// Function signature of an entry point body: threads the accumulator
/// through one or more combinators and returns the new value.
pub type EntryFn = fn(&Fixture, i32) -> i32;

/// A named, independently timed operation.
#[derive(Clone, Copy)]
pub struct EntryPoint {
    pub name: &'static str,
    pub description: &'static str,
    /// Logical operations one invocation stands for
    pub operations: u32,
    pub body: EntryFn,
}

/// An entry point bound to the shared fixture and its own accumulator.
///
/// The accumulator starts at 0 and only changes through [`invoke`],
/// which keeps the optimiser from discarding the work.
///
/// [`invoke`]: EntryState::invoke
pub struct EntryState {
    entry: EntryPoint,
    fixture: Arc<Fixture>,
    num: i32,
}

impl EntryState {
    pub fn new(entry: EntryPoint, fixture: Arc<Fixture>) -> Self {
        Self {
            entry,
            fixture,
            num: 0,
        }
    }

    #[inline(always)]
    pub fn invoke(&mut self) {
        self.num = (self.entry.body)(black_box(&self.fixture), self.num);
    }

    pub fn value(&self) -> i32 {
        self.num
    }

    pub fn entry(&self) -> &EntryPoint {
        &self.entry
    }
}
