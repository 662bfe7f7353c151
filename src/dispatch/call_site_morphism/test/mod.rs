//! Verification of every entry point against a plain left-to-right fold.

use std::sync::Arc;

use rand::Rng;

use super::code::{get_entry_points, EntryPoint, EntryState, Fixture};
use crate::error::{Error, Result};

/// Deltas of the sequences an entry point runs, in call order.
fn sequences_of(name: &str) -> Option<&'static [[i32; 3]]> {
    const S111: [i32; 3] = [1, 1, 1];
    const S121: [i32; 3] = [1, 2, 1];
    const S124: [i32; 3] = [1, 2, 4];
    const S241: [i32; 3] = [2, 4, 1];
    const S412: [i32; 3] = [4, 1, 2];

    let seqs: &'static [[i32; 3]] = match name {
        "simple111" | "switch111" => &[S111],
        "simple121" | "switch121" => &[S121],
        "simple124" | "switch124" | "static124" | "c-simple124" | "c-switch124" => &[S124],
        "multi_switch" | "c-multi-switch" => &[S124, S241, S412],
        _ => return None,
    };
    Some(seqs)
}

fn reference(seqs: &[[i32; 3]], value: i32) -> i32 {
    seqs.iter()
        .flatten()
        .fold(value, |acc, delta| acc.wrapping_add(*delta))
}

fn check_entry(entry: &EntryPoint, fixture: &Fixture, inputs: &[i32]) -> Result<()> {
    let fail = |detail: String| Error::Verification {
        variant: entry.name.to_string(),
        detail,
    };

    let seqs = sequences_of(entry.name).ok_or_else(|| fail("no reference sequence".to_string()))?;
    if seqs.len() != entry.operations as usize {
        return Err(fail(format!(
            "declares {} operations but runs {} sequences",
            entry.operations,
            seqs.len()
        )));
    }

    for &value in inputs {
        let expected = reference(seqs, value);
        let actual = (entry.body)(fixture, value);
        if actual != expected {
            return Err(fail(format!(
                "input {}: expected {}, got {}",
                value, expected, actual
            )));
        }
    }
    Ok(())
}

/// Verify every entry point, including accumulator threading.
pub fn verify_all() -> Result<()> {
    let fixture = Arc::new(Fixture::new());

    let mut inputs = vec![0, 1, -1, 10, 1000, -7777, i32::MAX, i32::MAX - 3, i32::MIN];
    let mut rng = rand::rng();
    inputs.extend((0..16).map(|_| rng.random::<i32>()));

    for entry in get_entry_points() {
        check_entry(&entry, &fixture, &inputs)?;

        let seqs = sequences_of(entry.name).unwrap_or(&[]);
        let mut state = EntryState::new(entry, Arc::clone(&fixture));
        let mut expected = 0;
        for round in 1..=3 {
            state.invoke();
            expected = reference(seqs, expected);
            if state.value() != expected {
                return Err(Error::Verification {
                    variant: entry.name.to_string(),
                    detail: format!(
                        "accumulator after {} invocations: expected {}, got {}",
                        round,
                        expected,
                        state.value()
                    ),
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str) -> EntryPoint {
        get_entry_points()
            .into_iter()
            .find(|e| e.name == name)
            .unwrap_or_else(|| panic!("missing entry point {}", name))
    }

    #[test]
    fn test_all_variants() {
        verify_all().expect("All entry points should produce correct results");
    }

    #[test]
    fn test_original_entry_points_present() {
        let names: Vec<_> = get_entry_points().iter().map(|e| e.name).collect();
        for name in [
            "simple111",
            "simple121",
            "simple124",
            "switch111",
            "switch121",
            "switch124",
            "multi_switch",
        ] {
            assert!(names.contains(&name), "{} missing", name);
        }
        assert_eq!(names[0], "simple111");
    }

    #[test]
    fn test_multi_switch_from_zero() {
        let multi = entry("multi_switch");
        let fixture = Fixture::new();
        assert_eq!(multi.operations, 3);
        assert_eq!(fixture.switch124.ops().len(), 3);
        assert_eq!((multi.body)(&fixture, 0), 21);
    }

    #[test]
    fn test_multi_switch_intermediate_values() {
        use crate::dispatch::call_site_morphism::code::Combinator;

        let fixture = Fixture::new();
        let after124 = fixture.switch124.run(0);
        let after241 = fixture.switch241.run(after124);
        let after412 = fixture.switch412.run(after241);
        assert_eq!((after124, after241, after412), (7, 14, 21));
    }

    #[test]
    fn test_per_invocation_deltas() {
        let fixture = Fixture::new();
        for (name, delta) in [
            ("simple111", 3),
            ("simple121", 4),
            ("simple124", 7),
            ("switch111", 3),
            ("switch121", 4),
            ("switch124", 7),
            ("static124", 7),
        ] {
            let e = entry(name);
            assert_eq!(e.operations, 1, "{}", name);
            assert_eq!((e.body)(&fixture, 100), 100 + delta, "{}", name);
        }
    }

    #[test]
    fn test_wraps_at_max() {
        let fixture = Fixture::new();
        assert_eq!((entry("simple124").body)(&fixture, i32::MAX), i32::MIN + 6);
        assert_eq!((entry("multi_switch").body)(&fixture, i32::MAX), i32::MIN + 20);
    }

    #[test]
    fn test_reference_rejects_wrong_operation_count() {
        let mut bad = entry("multi_switch");
        bad.operations = 1;
        let err = check_entry(&bad, &Fixture::new(), &[0]).unwrap_err();
        assert!(matches!(err, Error::Verification { ref variant, .. } if variant == "multi_switch"));
    }

    #[test]
    fn test_reference_rejects_wrong_body() {
        let mut bad = entry("switch124");
        bad.body = |_, num| num;
        assert!(check_entry(&bad, &Fixture::new(), &[5]).is_err());
    }
}
