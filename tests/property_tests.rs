//! Property-based tests for the state machine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use rewind::core::UndoHistory;
use rewind::{machine_config, MachineConfig, MachineError, StateMachine};

const STATES: [&str; 4] = ["idle", "loading", "ready", "failed"];
const EVENTS: [&str; 4] = ["load", "finish", "fail", "retry"];

fn workflow() -> MachineConfig {
    machine_config! {
        initial: "idle",
        states: {
            "idle" => { "load" => "loading" },
            "loading" => { "finish" => "ready", "fail" => "failed" },
            "ready" => { "load" => "loading" },
            "failed" => { "retry" => "loading" },
        }
    }
}

#[derive(Clone, Debug)]
enum Op {
    Change(&'static str),
    Trigger(&'static str),
    Undo,
    Redo,
    Reset,
    Clear,
}

prop_compose! {
    fn arbitrary_state()(index in 0..STATES.len()) -> &'static str {
        STATES[index]
    }
}

prop_compose! {
    fn arbitrary_event()(index in 0..EVENTS.len()) -> &'static str {
        EVENTS[index]
    }
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_state().prop_map(Op::Change),
        arbitrary_event().prop_map(Op::Trigger),
        Just(Op::Undo),
        Just(Op::Redo),
        Just(Op::Reset),
        Just(Op::Clear),
    ]
}

fn apply(machine: &mut StateMachine, op: &Op) {
    match op {
        Op::Change(state) => {
            let _ = machine.change_state(state);
        }
        Op::Trigger(event) => {
            let _ = machine.trigger(event);
        }
        Op::Undo => {
            machine.undo();
        }
        Op::Redo => {
            machine.redo();
        }
        Op::Reset => machine.reset(),
        Op::Clear => machine.clear_history(),
    }
}

fn snapshot(history: &UndoHistory) -> (Vec<(String, String)>, Option<usize>) {
    let entries = history
        .entries()
        .iter()
        .map(|entry| (entry.from.to_string(), entry.to.to_string()))
        .collect();
    (entries, history.cursor())
}

proptest! {
    #[test]
    fn history_sequences_stay_parallel(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new(workflow());

        for op in &ops {
            apply(&mut machine, op);
            let history = machine.history();
            prop_assert_eq!(history.origins().len(), history.destinations().len());
            prop_assert_eq!(history.origins().len(), history.len());
        }
    }

    #[test]
    fn current_state_is_always_configured(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new(workflow());

        for op in &ops {
            apply(&mut machine, op);
            prop_assert!(machine.config().has_state(machine.state().as_str()));
        }
    }

    #[test]
    fn unknown_event_changes_nothing(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        event in arbitrary_event(),
    ) {
        let mut machine = StateMachine::new(workflow());
        for op in &ops {
            apply(&mut machine, op);
        }

        if !machine.can_trigger(event) {
            let state = machine.state().clone();
            let before = snapshot(machine.history());

            let result = machine.trigger(event);
            let is_unknown_event = matches!(result, Err(MachineError::UnknownEvent { .. }));
            prop_assert!(is_unknown_event);
            prop_assert_eq!(machine.state(), &state);
            prop_assert_eq!(snapshot(machine.history()), before);
        }
    }

    #[test]
    fn unknown_state_changes_nothing(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        name in "[a-z]{1,8}",
    ) {
        prop_assume!(!STATES.contains(&name.as_str()));

        let mut machine = StateMachine::new(workflow());
        for op in &ops {
            apply(&mut machine, op);
        }

        let state = machine.state().clone();
        let before = snapshot(machine.history());

        let result = machine.change_state(&name);
        let is_unknown_state = matches!(result, Err(MachineError::UnknownState { .. }));
        prop_assert!(is_unknown_state);
        prop_assert_eq!(machine.state(), &state);
        prop_assert_eq!(snapshot(machine.history()), before);
    }

    #[test]
    fn undo_reverses_direct_changes(path in prop::collection::vec(arbitrary_state(), 1..10)) {
        let mut machine = StateMachine::new(workflow());
        let mut visited = vec![machine.state().to_string()];

        for state in &path {
            machine.change_state(state).unwrap();
            visited.push(state.to_string());
        }

        for expected in visited.iter().rev().skip(1) {
            prop_assert!(machine.undo());
            prop_assert_eq!(machine.state().as_str(), expected.as_str());
        }
        prop_assert!(!machine.can_undo());

        for expected in visited.iter().skip(1) {
            prop_assert!(machine.redo());
            prop_assert_eq!(machine.state().as_str(), expected.as_str());
        }
        prop_assert!(!machine.redo());
    }

    #[test]
    fn clear_history_always_blocks_undo(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut machine = StateMachine::new(workflow());
        for op in &ops {
            apply(&mut machine, op);
        }

        let state = machine.state().clone();
        machine.clear_history();

        prop_assert!(!machine.undo());
        prop_assert!(!machine.redo());
        prop_assert_eq!(machine.state(), &state);
    }

    #[test]
    fn get_states_matches_trigger(event in arbitrary_event(), blank in arbitrary_state()) {
        let config = workflow().with_state(blank, rewind::StateDefinition::new().on(event, ""));
        let mut machine = StateMachine::new(config);

        let mut expected: Vec<&str> = Vec::new();
        for state in STATES {
            machine.change_state(state).unwrap();
            if machine.can_trigger(event) {
                expected.push(state);
            }
        }
        let actual: Vec<&str> = machine
            .states(Some(event))
            .into_iter()
            .map(|state| state.as_str())
            .collect();

        prop_assert_eq!(actual, expected);
    }
}
