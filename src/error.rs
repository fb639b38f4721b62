use thiserror::Error;

use crate::SubscriptionId;

/// Errors reported by [`Store`](crate::Store) and [`Dispatcher`](crate::Dispatcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("no observer registered under subscription {0}")]
    UnknownSubscription(SubscriptionId),

    #[error("store has been dropped; action discarded")]
    Disconnected,
}
