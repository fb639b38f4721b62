//! Reference counter reducer.

use crate::Reducer;

/// Actions understood by [`Counter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CounterAction {
    Increment,
    Decrement,
    Reset,
}

/// How [`CounterAction::Decrement`] behaves at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecrementPolicy {
    /// Never go below zero.
    #[default]
    Saturating,
    /// Keep counting into negative numbers.
    Unbounded,
}

/// Counter over an `i64`.
///
/// Arithmetic clamps at the `i64` bounds rather than overflowing.
///
/// # Example
///
/// ```rust
/// use oxide_store::{Counter, CounterAction, Reducer};
///
/// let counter = Counter::unbounded();
/// assert_eq!(counter.reduce(&0, CounterAction::Decrement), -1);
///
/// let counter = Counter::saturating();
/// assert_eq!(counter.reduce(&0, CounterAction::Decrement), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Counter {
    policy: DecrementPolicy,
}

impl Counter {
    pub fn new(policy: DecrementPolicy) -> Self {
        Self { policy }
    }

    pub fn saturating() -> Self {
        Self::new(DecrementPolicy::Saturating)
    }

    pub fn unbounded() -> Self {
        Self::new(DecrementPolicy::Unbounded)
    }

    pub fn policy(&self) -> DecrementPolicy {
        self.policy
    }
}

impl Reducer<i64, CounterAction> for Counter {
    fn reduce(&self, count: &i64, action: CounterAction) -> i64 {
        match action {
            CounterAction::Increment => count.saturating_add(1),
            CounterAction::Decrement => match self.policy {
                DecrementPolicy::Saturating if *count <= 0 => 0,
                _ => count.saturating_sub(1),
            },
            CounterAction::Reset => 0,
        }
    }
}
