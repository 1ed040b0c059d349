//! Property-based tests for session state mutations.
//!
//! Verify the mutation contracts (idempotence, independence, reset
//! completeness) under arbitrary operation sequences, not just specific
//! examples.

use callsign_core::{ConnectionStatus, SessionState};
use proptest::prelude::*;

/// A single state mutation for sequence generation.
#[derive(Debug, Clone)]
enum Op {
    Upsert(u32, String),
    RemoveEntry(u32),
    AddPresence(u32),
    RemovePresence(u32),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u32..50, "[a-zA-Z]{0,8}").prop_map(|(uid, name)| Op::Upsert(uid, name)),
        (0u32..50).prop_map(Op::RemoveEntry),
        (0u32..50).prop_map(Op::AddPresence),
        (0u32..50).prop_map(Op::RemovePresence),
    ]
}

fn apply(state: &mut SessionState, op: &Op) {
    match op {
        Op::Upsert(uid, name) => state.upsert_entry(*uid, name.clone()),
        Op::RemoveEntry(uid) => state.remove_entry(*uid),
        Op::AddPresence(uid) => state.add_presence(*uid),
        Op::RemovePresence(uid) => state.remove_presence(*uid),
    }
}

proptest! {
    /// Presence never holds duplicates, whatever the operation order.
    #[test]
    fn presence_has_no_duplicates(ops in prop::collection::vec(op_strategy(), 0..100)) {
        let mut state = SessionState::new("channel-x", 1);
        for op in &ops {
            apply(&mut state, op);

            let mut seen = state.presence().to_vec();
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), state.presence().len());
        }
    }

    /// Applying an idempotent operation twice equals applying it once.
    #[test]
    fn mutations_are_idempotent(ops in prop::collection::vec(op_strategy(), 0..50), extra in op_strategy()) {
        let mut once = SessionState::new("channel-x", 1);
        let mut twice = SessionState::new("channel-x", 1);
        for op in &ops {
            apply(&mut once, op);
            apply(&mut twice, op);
        }

        apply(&mut once, &extra);
        apply(&mut twice, &extra);
        apply(&mut twice, &extra);

        prop_assert_eq!(once.presence(), twice.presence());
        prop_assert_eq!(once.directory(), twice.directory());
    }

    /// Presence mutations never change the directory and directory
    /// mutations never change presence.
    #[test]
    fn presence_and_directory_are_independent(
        ops in prop::collection::vec(op_strategy(), 0..100)
    ) {
        let mut state = SessionState::new("channel-x", 1);
        for op in &ops {
            let directory_before = state.directory().clone();
            let presence_before = state.presence().to_vec();
            apply(&mut state, op);

            match op {
                Op::AddPresence(_) | Op::RemovePresence(_) => {
                    prop_assert_eq!(&directory_before, state.directory());
                },
                Op::Upsert(..) | Op::RemoveEntry(_) => {
                    prop_assert_eq!(&presence_before, state.presence());
                },
            }
        }
    }

    /// Reset empties both views regardless of prior contents.
    #[test]
    fn reset_is_complete(ops in prop::collection::vec(op_strategy(), 0..100)) {
        let mut state = SessionState::new("channel-x", 1);
        state.mark_connected();
        for op in &ops {
            apply(&mut state, op);
        }

        state.reset();

        prop_assert!(state.presence().is_empty());
        prop_assert!(state.directory().is_empty());
        prop_assert_eq!(state.status(), ConnectionStatus::Disconnected);
    }
}
