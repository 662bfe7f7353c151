//! Entry points for the call-site morphism comparison.

pub mod c_impl;
pub mod combinators;
pub mod entry;
pub mod fixture;
pub mod operators;

pub use combinators::{Combinator, Monomorphic, Simple, Switch};
pub use entry::{EntryFn, EntryPoint, EntryState};
pub use fixture::Fixture;
pub use operators::{Add1, Add2, Add4, Operator, OperatorRef, OperatorSequence};

fn simple111(f: &Fixture, num: i32) -> i32 {
    f.simple111.run(num)
}

fn simple121(f: &Fixture, num: i32) -> i32 {
    f.simple121.run(num)
}

fn simple124(f: &Fixture, num: i32) -> i32 {
    f.simple124.run(num)
}

fn switch111(f: &Fixture, num: i32) -> i32 {
    f.switch111.run(num)
}

fn switch121(f: &Fixture, num: i32) -> i32 {
    f.switch121.run(num)
}

fn switch124(f: &Fixture, num: i32) -> i32 {
    f.switch124.run(num)
}

fn multi_switch(f: &Fixture, num: i32) -> i32 {
    let num = f.switch124.run(num);
    let num = f.switch241.run(num);
    f.switch412.run(num)
}

fn static124(f: &Fixture, num: i32) -> i32 {
    f.static124.run(num)
}

/// Returns all available entry points, baseline first
pub fn get_entry_points() -> Vec<EntryPoint> {
    let mut entries = vec![
        EntryPoint {
            name: "simple111",
            description: "Single monomorphic call site",
            operations: 1,
            body: simple111,
        },
        EntryPoint {
            name: "simple121",
            description: "Single bimorphic call site",
            operations: 1,
            body: simple121,
        },
        EntryPoint {
            name: "simple124",
            description: "Single trimorphic call site",
            operations: 1,
            body: simple124,
        },
        EntryPoint {
            name: "switch111",
            description: "Three monomorphic call sites",
            operations: 1,
            body: switch111,
        },
        EntryPoint {
            name: "switch121",
            description: "Three call sites, still monomorphic",
            operations: 1,
            body: switch121,
        },
        EntryPoint {
            name: "switch124",
            description: "Three call sites, still monomorphic",
            operations: 1,
            body: switch124,
        },
        EntryPoint {
            name: "multi_switch",
            description: "Three trimorphic call sites (124, 241, 412)",
            operations: 3,
            body: multi_switch,
        },
        EntryPoint {
            name: "static124",
            description: "Add1, Add2, Add4 resolved at compile time",
            operations: 1,
            body: static124,
        },
    ];

    if c_impl::C_IMPL_AVAILABLE {
        entries.push(EntryPoint {
            name: "c-simple124",
            description: "C function pointers, single call site",
            operations: 1,
            body: |_, num| c_impl::simple124(num),
        });
        entries.push(EntryPoint {
            name: "c-switch124",
            description: "C function pointers, per-position call sites",
            operations: 1,
            body: |_, num| c_impl::switch124(num),
        });
        entries.push(EntryPoint {
            name: "c-multi-switch",
            description: "C function pointers, 124/241/412 through shared sites",
            operations: 3,
            body: |_, num| c_impl::multi_switch(num),
        });
    }

    entries
}
