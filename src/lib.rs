//! A minimal unidirectional state container for Rust.
//!
//! A [`Store`] owns the application state. Every change goes through
//! [`Store::dispatch`], which applies a pure [`Reducer`] to the current state
//! and the action, replaces the state, and synchronously notifies each
//! [`Observer`] in registration order. The view layer sits outside the store:
//! it subscribes once to render state and turns user input into actions,
//! either directly or through a [`Dispatcher`] handle.
//!
//! ## Example
//!
//! ```rust
//! use oxide_store::Store;
//!
//! #[derive(Clone, Copy)]
//! enum Action { Increment, Decrement, Reset }
//!
//! fn reduce(count: &i32, action: Action) -> i32 {
//!     match action {
//!         Action::Increment => count + 1,
//!         Action::Decrement => (count - 1).max(0),
//!         Action::Reset => 0,
//!     }
//! }
//!
//! let mut store = Store::new(0, reduce);
//!
//! store.subscribe(|count: &i32| println!("render {count}"));
//!
//! // Direct dispatch
//! store.dispatch(Action::Increment);
//!
//! // Or hand a thunk to the view layer
//! let on_reset = store.dispatcher().callback(Action::Reset);
//! on_reset();
//! store.process_queued();
//!
//! assert_eq!(*store.state(), 0);
//! ```

// Module declarations
mod counter;
mod dispatcher;
mod error;
mod observer;
mod reducer;
mod store;

// Public re-exports
pub use counter::{Counter, CounterAction, DecrementPolicy};
pub use dispatcher::Dispatcher;
pub use error::StoreError;
pub use observer::Observer;
pub use reducer::Reducer;
pub use store::{Store, SubscriptionId};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use observer::TestObserver;
