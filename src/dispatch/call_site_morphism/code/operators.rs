//! The operator capability and its three concrete implementations.
//!
//! The implementations differ only in a compiled-in constant, so any speed
//! difference between benchmark variants comes from how the call reaches
//! them, not from what they compute.

use std::sync::Arc;

/// Transforms one operand into another. Pure, total, constant time.
pub trait Operator: Send + Sync {
    fn apply(&self, value: i32) -> i32;
}

/// Adds 1
#[derive(Clone, Copy, Debug, Default)]
pub struct Add1;

/// Adds 2
#[derive(Clone, Copy, Debug, Default)]
pub struct Add2;

/// Adds 4
#[derive(Clone, Copy, Debug, Default)]
pub struct Add4;

impl Operator for Add1 {
    #[inline]
    fn apply(&self, value: i32) -> i32 {
        value.wrapping_add(1)
    }
}

impl Operator for Add2 {
    #[inline]
    fn apply(&self, value: i32) -> i32 {
        value.wrapping_add(2)
    }
}

impl Operator for Add4 {
    #[inline]
    fn apply(&self, value: i32) -> i32 {
        value.wrapping_add(4)
    }
}

/// Shared handle to an operator instance.
pub type OperatorRef = Arc<dyn Operator>;

/// Immutable, ordered list of shared operators.
///
/// Cloning shares the underlying slice; elements are never copied or
/// reordered after construction.
#[derive(Clone)]
pub struct OperatorSequence {
    ops: Arc<[OperatorRef]>,
}

impl OperatorSequence {
    pub fn new(ops: Vec<OperatorRef>) -> Self {
        Self { ops: ops.into() }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[OperatorRef] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

impl FromIterator<OperatorRef> for OperatorSequence {
    fn from_iter<I: IntoIterator<Item = OperatorRef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
