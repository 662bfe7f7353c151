//! Combinators folding an operand through an operator sequence.
//!
//! [`Simple`] routes every element through one call site, so that site sees
//! as many concrete types as the sequence holds. [`Switch`] gives each of the
//! first three positions its own call site, which stays monomorphic as long
//! as every sequence using it puts the same type at that position.

use super::operators::{Operator, OperatorSequence};

/// Something that folds an operand through a fixed operator sequence.
pub trait Combinator {
    fn run(&self, value: i32) -> i32;
}

/// Uniform iteration: one call site for every position.
#[derive(Clone)]
pub struct Simple {
    ops: OperatorSequence,
}

impl Simple {
    pub fn new(ops: OperatorSequence) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &OperatorSequence {
        &self.ops
    }
}

impl Combinator for Simple {
    #[inline(never)]
    fn run(&self, value: i32) -> i32 {
        fold(&self.ops, value)
    }
}

/// Unrolled dispatch: positions 0, 1 and 2 each own a call site for
/// sequences of length 1 to 3; other lengths use uniform iteration.
#[derive(Clone)]
pub struct Switch {
    ops: OperatorSequence,
}

impl Switch {
    pub fn new(ops: OperatorSequence) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &OperatorSequence {
        &self.ops
    }
}

impl Combinator for Switch {
    #[inline(never)]
    fn run(&self, mut value: i32) -> i32 {
        let ops = self.ops.as_slice();
        let len = ops.len();
        if !(1..=3).contains(&len) {
            return fold(&self.ops, value);
        }

        // Applied left to right; each position's site is shared by every
        // length that reaches it.
        value = ops[0].apply(value);
        if len >= 2 {
            value = ops[1].apply(value);
        }
        if len == 3 {
            value = ops[2].apply(value);
        }
        value
    }
}

#[inline(always)]
fn fold(ops: &OperatorSequence, value: i32) -> i32 {
    ops.as_slice().iter().fold(value, |acc, op| op.apply(acc))
}

/// Three operators resolved at compile time: the static-dispatch baseline.
#[derive(Clone, Copy, Debug, Default)]
pub struct Monomorphic<A, B, C> {
    first: A,
    second: B,
    third: C,
}

impl<A: Operator, B: Operator, C: Operator> Monomorphic<A, B, C> {
    pub fn new(first: A, second: B, third: C) -> Self {
        Self { first, second, third }
    }
}

impl<A: Operator, B: Operator, C: Operator> Combinator for Monomorphic<A, B, C> {
    #[inline(never)]
    fn run(&self, value: i32) -> i32 {
        self.third.apply(self.second.apply(self.first.apply(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::super::operators::{Add1, Add2, Add4, OperatorRef};
    use super::*;
    use std::sync::Arc;

    /// `x -> x * 2 + k`: composition order changes the result.
    struct Affine(i32);

    impl Operator for Affine {
        fn apply(&self, value: i32) -> i32 {
            value.wrapping_mul(2).wrapping_add(self.0)
        }
    }

    fn affine(len: usize) -> OperatorSequence {
        (1..=len as i32)
            .map(|k| Arc::new(Affine(k)) as OperatorRef)
            .collect()
    }

    fn left_to_right(len: usize, value: i32) -> i32 {
        (1..=len as i32).fold(value, |acc, k| acc.wrapping_mul(2).wrapping_add(k))
    }

    fn seq(ops: &[OperatorRef]) -> OperatorSequence {
        OperatorSequence::new(ops.to_vec())
    }

    #[test]
    fn test_example_124() {
        let ops = seq(&[Arc::new(Add1), Arc::new(Add2), Arc::new(Add4)]);
        assert_eq!(Simple::new(ops.clone()).run(10), 17);
        assert_eq!(Switch::new(ops).run(10), 17);
    }

    #[test]
    fn test_example_412() {
        let ops = seq(&[Arc::new(Add4), Arc::new(Add1), Arc::new(Add2)]);
        assert_eq!(Simple::new(ops.clone()).run(0), 7);
        assert_eq!(Switch::new(ops).run(0), 7);
    }

    #[test]
    fn test_empty_is_identity() {
        for v in [i32::MIN, -1, 0, 1, 99, i32::MAX] {
            assert_eq!(Simple::new(OperatorSequence::empty()).run(v), v);
            assert_eq!(Switch::new(OperatorSequence::empty()).run(v), v);
        }
    }

    #[test]
    fn test_switch_order_every_boundary_length() {
        for len in 0..=5 {
            for v in [-3, 0, 1, 12345] {
                let expected = left_to_right(len, v);
                assert_eq!(Switch::new(affine(len)).run(v), expected, "switch len {} v {}", len, v);
                assert_eq!(Simple::new(affine(len)).run(v), expected, "simple len {} v {}", len, v);
            }
        }
    }

    #[test]
    fn test_switch_order_explicit() {
        // ((5*2+1)*2+2)*2+3 = 51; reversed order would give ((5*2+3)*2+2)*2+1 = 57
        assert_eq!(Switch::new(affine(3)).run(5), 51);
    }

    #[test]
    fn test_simple_matches_switch_for_additive_set() {
        let pool: [OperatorRef; 3] = [Arc::new(Add1), Arc::new(Add2), Arc::new(Add4)];
        for a in 0..3 {
            for b in 0..3 {
                for c in 0..3 {
                    let ops = seq(&[pool[a].clone(), pool[b].clone(), pool[c].clone()]);
                    let simple = Simple::new(ops.clone());
                    let switch = Switch::new(ops);
                    for v in [0, 7, i32::MAX - 3] {
                        assert_eq!(simple.run(v), switch.run(v));
                    }
                }
            }
        }
    }

    #[test]
    fn test_length_four_uses_generic_path() {
        let ops = seq(&[Arc::new(Add1), Arc::new(Add2), Arc::new(Add4), Arc::new(Add1)]);
        assert_eq!(Switch::new(ops.clone()).run(0), 8);
        assert_eq!(Simple::new(ops).run(0), 8);
    }

    #[test]
    fn test_deterministic() {
        let switch = Switch::new(affine(3));
        let first = switch.run(41);
        for _ in 0..100 {
            assert_eq!(switch.run(41), first);
        }
    }

    #[test]
    fn test_monomorphic_matches_dynamic() {
        let mono = Monomorphic::new(Add1, Add2, Add4);
        let ops = seq(&[Arc::new(Add1), Arc::new(Add2), Arc::new(Add4)]);
        let simple = Simple::new(ops);
        for v in [-10, 0, 10, i32::MAX] {
            assert_eq!(mono.run(v), simple.run(v));
        }
    }
}
