use std::panic::{catch_unwind, AssertUnwindSafe};

use super::{given_a_test_store, reduce_test_action, MockSubscriber, TestAction};
use mockall::predicate::eq;
use mockall::Sequence;
use oxide_store::{Store, TestObserver};

#[test]
fn given_no_dispatch_when_subscribed_should_receive_initial_state() {
    let (_store, observer) = given_a_test_store(7);

    assert_eq!(observer.count(), 1);
    observer.with_states(|states| {
        assert_eq!(states[0], 7);
    });
}

#[test]
fn given_a_sequence_of_actions_should_observe_every_intermediate_state() {
    let actions = [
        TestAction::Add(3),
        TestAction::Double,
        TestAction::Add(-1),
        TestAction::Double,
        TestAction::Clear,
        TestAction::Add(4),
    ];
    let (mut store, observer) = given_a_test_store(1);

    let mut expected = vec![1];
    for action in actions {
        let previous = *expected.last().unwrap();
        expected.push(reduce_test_action(&previous, action));
        store.dispatch(action);
    }

    assert_eq!(observer.states(), expected);
    assert_eq!(observer.states(), vec![1, 4, 8, 7, 14, 0, 4]);
}

#[test]
fn given_prior_dispatches_when_subscribed_late_should_receive_current_state_first() {
    let (mut store, _early) = given_a_test_store(0);
    store.dispatch(TestAction::Add(5));
    store.dispatch(TestAction::Double);

    let late = TestObserver::new();
    store.subscribe(late.clone());

    assert_eq!(late.states(), vec![10]);

    store.dispatch(TestAction::Add(1));
    assert_eq!(late.states(), vec![10, 11]);
}

#[test]
fn given_two_observers_should_notify_in_registration_order() {
    let mut sequence = Sequence::new();
    let mut first = MockSubscriber::new();
    let mut second = MockSubscriber::new();

    first
        .expect_notify()
        .with(eq(0))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    second
        .expect_notify()
        .with(eq(0))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    first
        .expect_notify()
        .with(eq(2))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    second
        .expect_notify()
        .with(eq(2))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    first
        .expect_notify()
        .with(eq(4))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());
    second
        .expect_notify()
        .with(eq(4))
        .times(1)
        .in_sequence(&mut sequence)
        .return_const(());

    let mut store = Store::new(0, reduce_test_action);
    store.subscribe(first);
    store.subscribe(second);

    store.dispatch(TestAction::Add(2));
    store.dispatch(TestAction::Double);
}

#[test]
fn given_unrecognized_action_should_notify_with_unchanged_state() {
    let (mut store, observer) = given_a_test_store(3);

    store.dispatch(TestAction::Unrecognized(9));

    assert_eq!(*store.state(), 3);
    assert_eq!(observer.states(), vec![3, 3]);
}

#[test]
fn given_same_state_and_action_should_reduce_to_same_state() {
    for action in [
        TestAction::Add(2),
        TestAction::Double,
        TestAction::Clear,
        TestAction::Unrecognized(0),
    ] {
        let first = reduce_test_action(&21, action);
        let second = reduce_test_action(&21, action);
        assert_eq!(first, second);
    }
}

#[test]
#[should_panic(expected = "reducer failed")]
fn given_panicking_reducer_when_dispatched_should_propagate_panic() {
    let mut store = Store::new(0, |state: &i64, fail: bool| {
        if fail {
            panic!("reducer failed");
        }
        *state
    });

    store.dispatch(true);
}

#[test]
fn given_panicking_observer_should_skip_later_observers_for_that_transition() {
    let (mut store, early) = given_a_test_store(0);
    store.subscribe(|state: &i64| {
        if *state == 1 {
            panic!("observer failed");
        }
    });
    let late = TestObserver::new();
    store.subscribe(late.clone());

    let result = catch_unwind(AssertUnwindSafe(|| store.dispatch(TestAction::Add(1))));

    assert!(result.is_err());
    assert_eq!(*store.state(), 1);
    assert_eq!(early.states(), vec![0, 1]);
    assert_eq!(late.states(), vec![0]);
}
