//! Action dispatcher handle for wiring user input to a store.

use flume::Sender;

use crate::StoreError;

/// Queues actions for the [`Store`](crate::Store) it was obtained from.
///
/// Hand a clone to whatever owns the view layer: button targets, key
/// handlers, or observers that want to trigger a follow-up action. Queued
/// actions are applied by [`Store::process_queued`](crate::Store::process_queued),
/// and automatically at the end of every [`Store::dispatch`](crate::Store::dispatch).
///
/// `Dispatcher` wraps a channel sender, so it is cheap to clone and may be
/// sent to other threads. Actions are still only applied on the thread that
/// owns the store.
///
/// # Example
///
/// ```rust
/// use oxide_store::{Counter, CounterAction, Store};
///
/// let mut store = Store::new(0, Counter::saturating());
/// let on_increment = store.dispatcher().callback(CounterAction::Increment);
///
/// // e.g. invoked by a button press
/// on_increment();
/// on_increment();
///
/// assert_eq!(store.process_queued(), 2);
/// assert_eq!(*store.state(), 2);
/// ```
pub struct Dispatcher<Action>(Sender<Action>);

impl<Action> Clone for Dispatcher<Action> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Action> Dispatcher<Action> {
    pub(crate) fn new(sender: Sender<Action>) -> Self {
        Self(sender)
    }

    /// Queue an action.
    ///
    /// Fails with [`StoreError::Disconnected`] once the store is gone.
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        self.0.send(action).map_err(|_| StoreError::Disconnected)
    }

    /// Build a thunk that queues a clone of `action` each time it is called.
    ///
    /// Send failures are logged and dropped, since a stale callback has no
    /// caller to report them to.
    pub fn callback(&self, action: Action) -> Box<dyn Fn() + Send>
    where
        Action: Clone + Send + 'static,
    {
        let dispatcher = self.clone();
        Box::new(move || {
            if let Err(err) = dispatcher.dispatch(action.clone()) {
                tracing::warn!(%err, "dropping action from callback");
            }
        })
    }
}
