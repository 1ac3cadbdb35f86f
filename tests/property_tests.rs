//! Property-based tests for the engine and its history.
//!
//! These tests use proptest to verify the history invariants hold across
//! many randomly generated operation sequences.

use proptest::prelude::*;
use waypoint::builder::ConfigBuilder;
use waypoint::core::{MachineConfig, StateId, StateMachine};

const STATES: [&str; 3] = ["idle", "running", "paused"];

fn sample_config() -> MachineConfig {
    ConfigBuilder::new()
        .initial("idle")
        .transition("idle", "run", "running")
        .transition("running", "stop", "idle")
        .transition("running", "pause", "paused")
        .transition("paused", "run", "running")
        .build()
        .unwrap()
}

/// One randomly chosen operation against the machine.
#[derive(Clone, Debug)]
enum Op {
    ChangeState(usize),
    TriggerFirstEvent,
    Undo,
    Redo,
    Reset,
    ClearHistory,
}

prop_compose! {
    fn arbitrary_op()(variant in 0..6usize, state in 0..STATES.len()) -> Op {
        match variant {
            0 => Op::ChangeState(state),
            1 => Op::TriggerFirstEvent,
            2 => Op::Undo,
            3 => Op::Redo,
            4 => Op::Reset,
            _ => Op::ClearHistory,
        }
    }
}

prop_compose! {
    fn arbitrary_walk()(steps in prop::collection::vec(0..STATES.len(), 1..12)) -> Vec<StateId> {
        steps.into_iter().map(|i| StateId::from(STATES[i])).collect()
    }
}

proptest! {
    #[test]
    fn history_invariants_survive_any_operation_sequence(
        ops in prop::collection::vec(arbitrary_op(), 0..40)
    ) {
        let mut machine = StateMachine::new(sample_config()).unwrap();

        for op in ops {
            match op {
                Op::ChangeState(i) => {
                    machine.change_state(STATES[i]).unwrap();
                }
                Op::TriggerFirstEvent => {
                    let event = machine
                        .config()
                        .states[machine.state()]
                        .transitions
                        .keys()
                        .next()
                        .cloned();
                    if let Some(event) = event {
                        machine.trigger(event).unwrap();
                    }
                }
                Op::Undo => { machine.undo(); }
                Op::Redo => { machine.redo(); }
                Op::Reset => machine.reset(),
                Op::ClearHistory => machine.clear_history(),
            }

            let history = machine.history();
            prop_assert!(history.len() >= 1);
            prop_assert!(history.position() < history.len());
            prop_assert!(machine.config().contains(machine.state()));
        }
    }

    #[test]
    fn cursor_entry_matches_state_after_transitions(walk in arbitrary_walk()) {
        let mut machine = StateMachine::new(sample_config()).unwrap();

        for state in &walk {
            machine.change_state(state.clone()).unwrap();
            prop_assert_eq!(machine.history().cursor_state(), machine.state());
        }

        prop_assert_eq!(machine.history().len(), walk.len() + 1);
    }

    #[test]
    fn undo_all_then_redo_all_restores_the_walk(walk in arbitrary_walk()) {
        let mut machine = StateMachine::new(sample_config()).unwrap();
        for state in &walk {
            machine.change_state(state.clone()).unwrap();
        }
        let recorded: Vec<StateId> = machine.history().path().cloned().collect();

        for _ in 0..walk.len() {
            prop_assert!(machine.undo());
        }
        prop_assert!(!machine.undo());
        prop_assert_eq!(machine.state(), &StateId::from("idle"));

        for _ in 0..walk.len() {
            prop_assert!(machine.redo());
        }
        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.state(), walk.last().unwrap());

        // Stepping never rewrote the recorded sequence.
        let after: Vec<StateId> = machine.history().path().cloned().collect();
        prop_assert_eq!(after, recorded);
    }

    #[test]
    fn transition_after_undo_kills_redo(
        walk in arbitrary_walk(),
        undos in 1..12usize,
        next in 0..STATES.len()
    ) {
        let mut machine = StateMachine::new(sample_config()).unwrap();
        for state in &walk {
            machine.change_state(state.clone()).unwrap();
        }

        let mut stepped = 0;
        for _ in 0..undos {
            if machine.undo() {
                stepped += 1;
            }
        }
        prop_assume!(stepped > 0);

        machine.change_state(STATES[next]).unwrap();

        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.history().len(), walk.len() + 2 - stepped);
    }

    #[test]
    fn boundaries_are_idempotent(walk in arbitrary_walk()) {
        let mut machine = StateMachine::new(sample_config()).unwrap();
        for state in &walk {
            machine.change_state(state.clone()).unwrap();
        }

        while machine.undo() {}
        let floor = machine.state().clone();
        for _ in 0..3 {
            prop_assert!(!machine.undo());
            prop_assert_eq!(machine.state(), &floor);
        }

        while machine.redo() {}
        let ceiling = machine.state().clone();
        for _ in 0..3 {
            prop_assert!(!machine.redo());
            prop_assert_eq!(machine.state(), &ceiling);
        }
    }

    #[test]
    fn clear_history_keeps_state_and_disables_stepping(walk in arbitrary_walk()) {
        let mut machine = StateMachine::new(sample_config()).unwrap();
        for state in &walk {
            machine.change_state(state.clone()).unwrap();
        }
        let before = machine.state().clone();

        machine.clear_history();

        prop_assert_eq!(machine.state(), &before);
        prop_assert_eq!(machine.history().len(), 1);
        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
    }

    #[test]
    fn config_roundtrips_through_json(walk in arbitrary_walk()) {
        let config = sample_config();
        let json = serde_json::to_string(&config).unwrap();
        let back: MachineConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(&back, &config);

        // A deserialized config drives the machine identically.
        let mut original = StateMachine::new(config).unwrap();
        let mut restored = StateMachine::new(back).unwrap();
        for state in &walk {
            original.change_state(state.clone()).unwrap();
            restored.change_state(state.clone()).unwrap();
            prop_assert_eq!(original.state(), restored.state());
        }
    }
}
