//! Operators, sequences and combinators built once per benchmark run.

use std::sync::Arc;

use super::combinators::{Monomorphic, Simple, Switch};
use super::operators::{Add1, Add2, Add4, OperatorRef, OperatorSequence};

/// Shared benchmark state. Every sequence holds the same three operator
/// instances; nothing here is mutated after [`Fixture::new`].
pub struct Fixture {
    pub simple111: Simple,
    pub simple121: Simple,
    pub simple124: Simple,

    pub switch111: Switch,
    pub switch121: Switch,
    pub switch124: Switch,
    pub switch241: Switch,
    pub switch412: Switch,

    pub static124: Monomorphic<Add1, Add2, Add4>,
}

impl Fixture {
    pub fn new() -> Self {
        let add1: OperatorRef = Arc::new(Add1);
        let add2: OperatorRef = Arc::new(Add2);
        let add4: OperatorRef = Arc::new(Add4);

        let seq = |ops: [&OperatorRef; 3]| -> OperatorSequence {
            ops.into_iter().cloned().collect()
        };

        let ops111 = seq([&add1, &add1, &add1]);
        let ops121 = seq([&add1, &add2, &add1]);
        let ops124 = seq([&add1, &add2, &add4]);
        let ops241 = seq([&add2, &add4, &add1]);
        let ops412 = seq([&add4, &add1, &add2]);

        Self {
            simple111: Simple::new(ops111.clone()),
            simple121: Simple::new(ops121.clone()),
            simple124: Simple::new(ops124.clone()),

            switch111: Switch::new(ops111),
            switch121: Switch::new(ops121),
            switch124: Switch::new(ops124),
            switch241: Switch::new(ops241),
            switch412: Switch::new(ops412),

            static124: Monomorphic::new(Add1, Add2, Add4),
        }
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_and_switch_share_sequences() {
        let fixture = Fixture::new();
        let simple = fixture.simple124.ops().as_slice();
        let switch = fixture.switch124.ops().as_slice();
        for (a, b) in simple.iter().zip(switch) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn test_one_instance_per_operator_type() {
        let fixture = Fixture::new();
        let add1 = &fixture.switch111.ops().as_slice()[0];
        // Add1 sits at index 2 of ops241 and index 1 of ops412.
        assert!(Arc::ptr_eq(add1, &fixture.switch241.ops().as_slice()[2]));
        assert!(Arc::ptr_eq(add1, &fixture.switch412.ops().as_slice()[1]));
    }
}
