//! Observer abstraction for reacting to state changes.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Receives every state the [`Store`](crate::Store) settles on.
///
/// Implement this to bind a rendering layer (UI toolkit, terminal, log sink)
/// to the store. [`notify`](Self::notify) is called once with the current
/// state when the observer is subscribed, then again after every dispatch.
///
/// Any `FnMut(&State)` closure is an observer.
///
/// # Example
///
/// ```rust
/// use oxide_store::Observer;
///
/// struct ConsoleObserver;
///
/// impl Observer<i32> for ConsoleObserver {
///     fn notify(&mut self, state: &i32) {
///         println!("count: {state}");
///     }
/// }
/// ```
pub trait Observer<State> {
    /// React to the latest state.
    ///
    /// The state is borrowed immutably; observers that need to keep it
    /// must clone it.
    fn notify(&mut self, state: &State);
}

impl<State, F> Observer<State> for F
where
    F: FnMut(&State),
{
    fn notify(&mut self, state: &State) {
        self(state)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Observer that records a clone of every state it is notified with.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture buffer, so subscribe one clone and keep
/// another for assertions.
///
/// # Example
///
/// ```rust
/// use oxide_store::{Store, TestObserver};
///
/// let observer = TestObserver::new();
/// let mut store = Store::new(0, |state: &i32, delta: i32| state + delta);
///
/// store.subscribe(observer.clone());
/// store.dispatch(2);
///
/// observer.with_states(|states| {
///     assert_eq!(states, &[0, 2]);
/// });
/// ```
pub struct TestObserver<State> {
    states: Arc<Mutex<Vec<State>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<State> Clone for TestObserver<State> {
    fn clone(&self) -> Self {
        Self {
            states: self.states.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<State: Clone> Observer<State> for TestObserver<State> {
    fn notify(&mut self, state: &State) {
        self.states.lock().push(state.clone());
    }
}

#[cfg(any(test, feature = "testing"))]
impl<State> Default for TestObserver<State> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<State> TestObserver<State> {
    pub fn new() -> Self {
        Self {
            states: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Number of notifications received so far.
    pub fn count(&self) -> usize {
        self.states.lock().len()
    }

    /// Access the captured states with a closure.
    pub fn with_states<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&[State]) -> R,
    {
        let states = self.states.lock();
        f(states.as_slice())
    }

    /// Copy of the captured states.
    pub fn states(&self) -> Vec<State>
    where
        State: Clone,
    {
        self.states.lock().clone()
    }
}
