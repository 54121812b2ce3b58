// Integration tests for the puzzle engine

use std::time::{Duration, Instant};

use pointerquest::engine::errors::ActionError;
use pointerquest::engine::session::QuestSession;
use pointerquest::memory::cell::{Address, CellKind};
use pointerquest::memory::grid::{MemoryGrid, GRID_CELLS};

fn addr(i: usize) -> Address {
    MemoryGrid::address_at(i)
}

fn session(level: u32) -> QuestSession {
    QuestSession::with_seed(level, 7).expect("level exists")
}

#[test]
fn addresses_are_unique_and_stable() {
    let mut s = session(1);
    let before: Vec<Address> = s.cells().iter().map(|c| c.address.clone()).collect();

    for i in 0..GRID_CELLS {
        for j in 0..GRID_CELLS {
            if i != j {
                assert_ne!(before[i], before[j]);
            }
        }
    }

    // Addresses survive arbitrary mutation.
    s.connect(&addr(8), &addr(3)).unwrap();
    let _ = s.connect(&addr(1), &addr(1));
    let after: Vec<Address> = s.cells().iter().map(|c| c.address.clone()).collect();
    assert_eq!(before, after);
}

#[test]
fn self_reference_fails_without_mutation() {
    let mut s = session(1);
    let before = s.cells()[8].clone();

    let err = s.connect(&addr(8), &addr(8)).unwrap_err();
    assert_eq!(err, ActionError::SelfReference { address: addr(8) });

    let after = &s.cells()[8];
    assert_eq!(after.kind, before.kind);
    assert_eq!(after.value, before.value);
    assert_eq!(after.points_to, before.points_to);
    assert!(after.errored);
    assert!(s.code_log().contains("Self-Reference"));
}

#[test]
fn locked_destination_fails_without_mutating_source() {
    // Level 2: index 7 holds the locked treasure, index 14 the free pointer.
    let mut s = session(2);

    let err = s.connect(&addr(14), &addr(7)).unwrap_err();
    assert_eq!(err, ActionError::AccessDenied { address: addr(7) });

    let source = &s.cells()[14];
    assert_eq!(source.kind, CellKind::Pointer);
    assert_eq!(source.points_to, None);
    assert!(s.cells()[7].errored);
    assert!(!s.is_solved());
}

#[test]
fn connect_sets_pointer_and_clears_value() {
    // Sandbox: index 0 holds the value 42. Making it a pointer must drop it.
    let mut s = session(0);
    assert_eq!(s.cells()[0].value, Some(42));

    s.connect(&addr(0), &addr(5)).unwrap();

    let source = &s.cells()[0];
    assert_eq!(source.kind, CellKind::Pointer);
    assert_eq!(source.points_to, Some(addr(5)));
    assert_eq!(source.value, None);
    assert!(source.highlighted);
}

#[test]
fn connect_into_empty_auto_initializes() {
    let mut s = session(1);

    s.connect(&addr(8), &addr(10)).unwrap();

    let destination = &s.cells()[10];
    assert_eq!(destination.kind, CellKind::Value);
    let value = destination.value.expect("auto-initialized");
    assert!((1..=99).contains(&value), "got {}", value);
    assert!(destination.highlighted);
    assert!(s.code_log().contains("auto-initialized"));
}

#[test]
fn auto_init_is_deterministic_under_a_seed() {
    let mut a = QuestSession::with_seed(1, 1234).unwrap();
    let mut b = QuestSession::with_seed(1, 1234).unwrap();

    a.connect(&addr(8), &addr(10)).unwrap();
    b.connect(&addr(8), &addr(10)).unwrap();

    assert_eq!(a.cells()[10].value, b.cells()[10].value);
}

#[test]
fn dereference_is_read_only() {
    let mut s = session(0);
    let before: Vec<_> = s
        .cells()
        .iter()
        .map(|c| (c.kind, c.value, c.points_to.clone()))
        .collect();

    // Sandbox index 5 points at index 0 (value 42).
    s.dereference(&addr(5)).unwrap();
    assert!(s.code_log().contains("42"));
    assert!(s.cells()[0].highlighted);

    let after: Vec<_> = s
        .cells()
        .iter()
        .map(|c| (c.kind, c.value, c.points_to.clone()))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn dereference_rejects_non_pointers_and_unset_pointers() {
    let mut s = session(2);

    // Index 2 is empty memory.
    let err = s.dereference(&addr(2)).unwrap_err();
    assert_eq!(err, ActionError::InvalidPointer { address: addr(2) });
    assert!(s.cells()[2].errored);

    // Index 14 is a pointer that was never aimed anywhere.
    let err = s.dereference(&addr(14)).unwrap_err();
    assert_eq!(err, ActionError::InvalidPointer { address: addr(14) });
}

#[test]
fn dereference_reports_double_indirection_without_following() {
    let mut s = session(2);

    // Aim the free pointer at the relay pointer, then dereference it.
    s.connect(&addr(14), &addr(5)).unwrap();
    s.dereference(&addr(14)).unwrap();

    assert!(s.code_log().contains("double pointer"));
    // One hop only: the treasure cell was not touched.
    assert!(!s.cells()[7].highlighted);
    assert!(s.cells()[5].highlighted);
}

#[test]
fn level_one_solves_on_pointer_to_target() {
    let mut s = session(1);
    assert!(!s.is_solved());

    // Aiming elsewhere does not solve.
    s.connect(&addr(8), &addr(10)).unwrap();
    assert!(!s.is_solved());

    // Aiming at 0x700C does.
    s.connect(&addr(8), &addr(3)).unwrap();
    assert!(s.is_solved());
    assert!(s.take_just_solved());
    assert!(s.code_log().contains("Level Clear"));
}

#[test]
fn level_two_requires_the_stepping_stone() {
    let mut s = session(2);

    assert!(s.connect(&addr(14), &addr(7)).is_err());
    assert!(!s.is_solved());

    s.connect(&addr(14), &addr(5)).unwrap();
    assert!(s.is_solved());
}

#[test]
fn level_three_chain_solves_exactly_once() {
    let mut s = session(3);

    s.connect(&addr(0), &addr(5)).unwrap();
    s.connect(&addr(5), &addr(11)).unwrap();
    assert!(!s.is_solved());
    assert!(!s.take_just_solved());

    s.connect(&addr(11), &addr(15)).unwrap();
    assert!(s.is_solved());
    assert!(s.take_just_solved());

    // Further successful connects re-evaluate the predicate but never
    // re-fire the success signal.
    s.connect(&addr(2), &addr(15)).unwrap();
    assert!(s.is_solved());
    assert!(!s.take_just_solved());
}

#[test]
fn chain_out_of_order_does_not_solve() {
    let mut s = session(3);

    s.connect(&addr(0), &addr(11)).unwrap();
    s.connect(&addr(11), &addr(5)).unwrap();
    s.connect(&addr(5), &addr(15)).unwrap();
    assert!(!s.is_solved());
}

#[test]
fn inspect_classifies_cells() {
    let mut s = session(2);

    // Empty memory: bare address.
    s.inspect(&addr(2)).unwrap();
    assert!(s.code_log().contains("0x7008"));

    // Locked cell: access denied.
    let err = s.inspect(&addr(7)).unwrap_err();
    assert_eq!(err, ActionError::AccessDenied { address: addr(7) });
    assert!(s.code_log().contains("Access Denied"));

    // Pointer to a value: composed declaration.
    s.inspect(&addr(5)).unwrap();
    assert!(s.code_log().contains("int target = 777"));

    // Unset pointer.
    s.inspect(&addr(14)).unwrap();
    assert!(s.code_log().contains("uninitialized pointer"));

    // Pointer to a pointer.
    s.connect(&addr(14), &addr(5)).unwrap();
    s.inspect(&addr(14)).unwrap();
    assert!(s.code_log().contains("double pointer"));

    // Plain value (level 1's target cell).
    let mut s = session(1);
    s.inspect(&addr(3)).unwrap();
    assert!(s.code_log().contains("int val = 100"));

    // Sandbox's pre-aimed pointer gives the composed declaration.
    let mut s = session(0);
    s.inspect(&addr(5)).unwrap();
    assert!(s.code_log().contains("int target = 42"));
}

#[test]
fn inspect_never_mutates_semantic_state() {
    let mut s = session(2);
    let before: Vec<_> = s
        .cells()
        .iter()
        .map(|c| (c.kind, c.value, c.points_to.clone(), c.locked))
        .collect();

    s.inspect(&addr(5)).unwrap();
    let _ = s.inspect(&addr(7));
    s.inspect(&addr(14)).unwrap();

    let after: Vec<_> = s
        .cells()
        .iter()
        .map(|c| (c.kind, c.value, c.points_to.clone(), c.locked))
        .collect();
    assert_eq!(before, after);
}

#[test]
fn flags_auto_clear_on_their_own_schedules() {
    let mut s = session(1);

    let _ = s.connect(&addr(8), &addr(8)); // errored flag on 8
    s.connect(&addr(8), &addr(3)).unwrap(); // highlight on 8

    assert!(s.cells()[8].errored);
    assert!(s.cells()[8].highlighted);

    // Errors clear after 0.5s, highlights only after 1.0s.
    s.tick_at(Instant::now() + Duration::from_millis(600));
    assert!(!s.cells()[8].errored);
    assert!(s.cells()[8].highlighted);

    s.tick_at(Instant::now() + Duration::from_millis(1100));
    assert!(!s.cells()[8].highlighted);
}

#[test]
fn reset_restores_the_initial_layout() {
    let mut s = session(1);
    s.connect(&addr(8), &addr(3)).unwrap();
    assert!(s.is_solved());

    s.reset_current_level();
    assert!(!s.is_solved());
    assert!(!s.take_just_solved());
    assert_eq!(s.cells()[8].kind, CellKind::Pointer);
    assert_eq!(s.cells()[8].points_to, None);
    assert_eq!(s.cells()[3].value, Some(100));
    assert!(s.code_log().starts_with("// Level 1"));
}

#[test]
fn unknown_addresses_and_levels_are_rejected() {
    let mut s = session(1);

    let foreign = Address::new("0x9999");
    assert!(matches!(
        s.connect(&addr(8), &foreign),
        Err(ActionError::UnknownAddress { .. })
    ));
    assert_eq!(s.cells()[8].kind, CellKind::Pointer);
    assert_eq!(s.cells()[8].points_to, None);

    assert_eq!(
        s.start_level(42),
        Err(ActionError::UnknownLevel { id: 42 })
    );
    // The failed switch leaves the current level running.
    assert_eq!(s.level().id, 1);
}

#[test]
fn switching_levels_rebuilds_the_grid() {
    let mut s = session(1);
    s.connect(&addr(8), &addr(3)).unwrap();

    s.start_level(3).unwrap();
    assert_eq!(s.level().id, 3);
    assert!(!s.is_solved());
    assert_eq!(s.cells()[15].value, Some(999));
    assert_eq!(s.cells()[8].kind, CellKind::Empty);
}
