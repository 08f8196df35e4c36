//! Property-based tests for the cell and the machines.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use switchboard::{steps, toggle, toggle_group, ObservableCell, StepOptions};

/// A sequence of distinct values plus a valid initial index into it.
fn sequence_with_init() -> impl Strategy<Value = (Vec<u16>, usize)> {
    prop::collection::btree_set(any::<u16>(), 1..12).prop_flat_map(|set| {
        let states: Vec<u16> = set.into_iter().collect();
        let len = states.len();
        (Just(states), 0..len)
    })
}

#[derive(Clone, Debug)]
enum Move {
    Next,
    Prev,
    Reset,
}

fn arbitrary_move() -> impl Strategy<Value = Move> {
    prop_oneof![Just(Move::Next), Just(Move::Prev), Just(Move::Reset)]
}

proptest! {
    #[test]
    fn next_clamps_at_last_without_loop(
        (states, init) in sequence_with_init(),
        extra in 0..20usize,
    ) {
        let machine = steps(states.clone(), StepOptions::at(init)).unwrap();
        for _ in 0..states.len() + extra {
            machine.next();
        }
        prop_assert_eq!(machine.current(), *states.last().unwrap());
    }

    #[test]
    fn prev_clamps_at_first_without_loop(
        (states, init) in sequence_with_init(),
        extra in 0..20usize,
    ) {
        let machine = steps(states.clone(), StepOptions::at(init)).unwrap();
        for _ in 0..states.len() + extra {
            machine.prev();
        }
        prop_assert_eq!(machine.current(), states[0]);
    }

    #[test]
    fn looping_wraps_in_both_directions((states, _init) in sequence_with_init()) {
        let last = states.len() - 1;

        let forward = steps(states.clone(), StepOptions::at(last).looped()).unwrap();
        forward.next();
        prop_assert_eq!(forward.current(), states[0]);

        let backward = steps(states.clone(), StepOptions::at(0).looped()).unwrap();
        backward.prev();
        prop_assert_eq!(backward.current(), states[last]);
    }

    #[test]
    fn looping_full_cycle_returns_to_start(
        (states, init) in sequence_with_init(),
        forward in any::<bool>(),
    ) {
        let machine = steps(states.clone(), StepOptions::at(init).looped()).unwrap();
        for _ in 0..states.len() {
            if forward { machine.next() } else { machine.prev() }
        }
        prop_assert_eq!(machine.current(), states[init]);
    }

    #[test]
    fn reset_always_returns_to_init(
        (states, init) in sequence_with_init(),
        moves in prop::collection::vec(arbitrary_move(), 0..30),
        looping in any::<bool>(),
        stray in any::<u16>(),
    ) {
        let options = StepOptions { init, looping };
        let machine = steps(states.clone(), options).unwrap();
        for step in &moves {
            match step {
                Move::Next => machine.next(),
                Move::Prev => machine.prev(),
                Move::Reset => machine.reset(),
            }
        }
        machine.set(stray);
        machine.reset();
        prop_assert_eq!(machine.current(), states[init]);
    }

    #[test]
    fn current_stays_in_sequence(
        (states, init) in sequence_with_init(),
        moves in prop::collection::vec(arbitrary_move(), 0..30),
        looping in any::<bool>(),
    ) {
        let machine = steps(states.clone(), StepOptions { init, looping }).unwrap();
        for step in &moves {
            match step {
                Move::Next => machine.next(),
                Move::Prev => machine.prev(),
                Move::Reset => machine.reset(),
            }
            prop_assert!(machine.index().is_some());
        }
    }

    #[test]
    fn subscribe_delivers_current_value_first(value in any::<i64>(), later in any::<i64>()) {
        let cell = ObservableCell::new(value);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = cell.subscribe(move |v: &i64| sink.borrow_mut().push(*v));

        prop_assert_eq!(seen.borrow().clone(), vec![value]);
        cell.set(later);
        prop_assert_eq!(seen.borrow().clone(), vec![value, later]);
    }

    #[test]
    fn every_set_reaches_every_subscriber(
        values in prop::collection::vec(any::<u8>(), 0..20),
        subscribers in 1..5usize,
    ) {
        let cell = ObservableCell::new(0u8);
        let logs: Vec<Rc<RefCell<Vec<u8>>>> = (0..subscribers)
            .map(|_| {
                let log = Rc::new(RefCell::new(Vec::new()));
                let sink = Rc::clone(&log);
                let _ = cell.subscribe(move |v: &u8| sink.borrow_mut().push(*v));
                log
            })
            .collect();

        for value in &values {
            cell.set(*value);
        }

        let mut expected = vec![0u8];
        expected.extend(values.iter().copied());
        for log in &logs {
            prop_assert_eq!(log.borrow().clone(), expected.clone());
        }
    }

    #[test]
    fn toggle_is_an_involution(init in any::<bool>()) {
        let flag = toggle(init);
        flag.toggle();
        prop_assert_eq!(flag.current(), !init);
        flag.toggle();
        prop_assert_eq!(flag.current(), init);
    }

    #[test]
    fn group_toggle_touches_only_its_key(
        initial in prop::collection::btree_map("[a-e]", any::<bool>(), 1..5),
        pick in any::<prop::sample::Index>(),
    ) {
        let keys: Vec<String> = initial.keys().cloned().collect();
        let key = pick.get(&keys).clone();
        let group = toggle_group(initial.clone());

        group.toggle(key.clone());
        let after = group.current();

        for (k, v) in &initial {
            if *k == key {
                prop_assert_eq!(after[k], !*v);
            } else {
                prop_assert_eq!(after[k], *v);
            }
        }
        prop_assert_eq!(after.len(), initial.len());
    }

    #[test]
    fn group_from_keys_starts_all_off(keys in prop::collection::vec("[a-z]{1,4}", 0..8)) {
        let group = toggle_group(keys.clone());
        let current = group.current();

        prop_assert!(current.values().all(|on| !on));
        let expected: BTreeMap<String, bool> = keys.into_iter().map(|k| (k, false)).collect();
        prop_assert_eq!(current, expected);
    }
}
