//! The state container that owns application state and fans out changes.

use core::fmt;

use flume::Receiver;

use crate::{Dispatcher, Observer, Reducer, StoreError};

/// Handle identifying one observer registered with a [`Store`].
///
/// Returned from [`Store::subscribe`] and accepted by [`Store::unsubscribe`].
/// Ids are never reused within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Subscription<State> {
    id: SubscriptionId,
    observer: Box<dyn Observer<State>>,
}

/// Single owner of application state.
///
/// The store:
/// 1. Holds exactly one current state, created from the initial value
/// 2. Applies the [`Reducer`] to the current state and each dispatched action
/// 3. Replaces the current state with the result
/// 4. Notifies every [`Observer`] with the new state, in registration order
///
/// The reducer is fixed at construction. Observers only ever receive a
/// shared borrow of the state, so none of them can change what the others
/// see.
///
/// Actions can also be queued through a [`Dispatcher`] obtained from
/// [`Store::dispatcher`]. Queued actions are applied in FIFO order by
/// [`Store::process_queued`] and around every [`Store::dispatch`], which is
/// how an observer triggers a follow-up action: it is applied after the
/// current fan-out completes. An observer that queues an action on every
/// notification will keep the drain loop running forever.
///
/// A panicking reducer or observer unwinds through the calling `dispatch`;
/// observers later in the list are not notified for that transition.
///
/// # Example
///
/// ```rust
/// use oxide_store::{Counter, CounterAction, Store};
///
/// let mut store = Store::new(0, Counter::saturating());
///
/// store.subscribe(|count: &i64| println!("count: {count}"));
///
/// store.dispatch(CounterAction::Increment);
/// store.dispatch(CounterAction::Decrement);
/// store.dispatch(CounterAction::Decrement);
///
/// assert_eq!(*store.state(), 0);
/// ```
///
/// # Type Parameters
///
/// * `State` - The application state
/// * `Action` - The action type understood by the reducer
/// * `R` - The reducer implementation (a closure or a [`Reducer`] type)
pub struct Store<State, Action, R>
where
    R: Reducer<State, Action>,
{
    reducer: R,
    state: State,
    observers: Vec<Subscription<State>>,
    next_subscription: u64,
    queue: Receiver<Action>,
    dispatcher: Dispatcher<Action>,
}

impl<State, Action, R> Store<State, Action, R>
where
    R: Reducer<State, Action>,
{
    /// Create a store.
    ///
    /// # Arguments
    ///
    /// * `initial_state` - The state observers see until the first dispatch
    /// * `reducer` - The transition function, fixed for the store's lifetime
    pub fn new(initial_state: State, reducer: R) -> Self {
        let (sender, queue) = flume::unbounded();

        Store {
            reducer,
            state: initial_state,
            observers: Vec::new(),
            next_subscription: 0,
            queue,
            dispatcher: Dispatcher::new(sender),
        }
    }

    /// The current state.
    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of registered observers.
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// A handle that queues actions for this store.
    pub fn dispatcher(&self) -> Dispatcher<Action> {
        self.dispatcher.clone()
    }

    /// Apply an action and notify every observer with the resulting state.
    ///
    /// Actions already waiting in the dispatcher queue are applied first, and
    /// anything queued while observers run is applied afterwards, so the
    /// overall order matches the order in which actions were submitted.
    pub fn dispatch(&mut self, action: Action) {
        self.process_queued();
        self.apply(action);
        self.process_queued();
    }

    /// Register an observer.
    ///
    /// The observer is notified with the current state before this returns,
    /// then after every subsequent transition until it is unsubscribed.
    pub fn subscribe<O>(&mut self, mut observer: O) -> SubscriptionId
    where
        O: Observer<State> + 'static,
    {
        observer.notify(&self.state);

        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push(Subscription {
            id,
            observer: Box::new(observer),
        });

        tracing::debug!(%id, observers = self.observers.len(), "observer subscribed");
        id
    }

    /// Remove a previously registered observer.
    ///
    /// The remaining observers keep their relative order.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<(), StoreError> {
        let index = self
            .observers
            .iter()
            .position(|subscription| subscription.id == id)
            .ok_or(StoreError::UnknownSubscription(id))?;
        self.observers.remove(index);

        tracing::debug!(%id, observers = self.observers.len(), "observer unsubscribed");
        Ok(())
    }

    /// Apply every action waiting in the dispatcher queue.
    ///
    /// Returns the number of actions applied, including any queued by
    /// observers while the queue was being drained.
    pub fn process_queued(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.queue.try_recv() {
            self.apply(action);
            applied += 1;
        }

        if applied > 0 {
            tracing::trace!(applied, "drained queued actions");
        }
        applied
    }

    fn apply(&mut self, action: Action) {
        self.state = self.reducer.reduce(&self.state, action);

        tracing::trace!(observers = self.observers.len(), "notifying observers");
        for subscription in &mut self.observers {
            subscription.observer.notify(&self.state);
        }
    }
}
