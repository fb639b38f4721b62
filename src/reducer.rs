//! Transition function contract.

/// Pure transition from the current state and an action to the next state.
///
/// Implementations must be total: an action the reducer does not care about
/// returns the state unchanged rather than panicking. The same state and
/// action must always produce the same next state.
///
/// Closures of the shape `Fn(&State, Action) -> State` implement this trait
/// through the blanket implementation below, so most applications never name
/// it directly.
///
/// # Example
///
/// ```rust
/// use oxide_store::Reducer;
///
/// enum Action { Add(i32), Clear }
///
/// struct Accumulator;
///
/// impl Reducer<i32, Action> for Accumulator {
///     fn reduce(&self, state: &i32, action: Action) -> i32 {
///         match action {
///             Action::Add(n) => state + n,
///             Action::Clear => 0,
///         }
///     }
/// }
///
/// assert_eq!(Accumulator.reduce(&2, Action::Add(3)), 5);
/// ```
pub trait Reducer<State, Action> {
    /// Compute the next state.
    ///
    /// # Arguments
    ///
    /// * `state` - The current state
    /// * `action` - The action being applied
    fn reduce(&self, state: &State, action: Action) -> State;
}

impl<State, Action, F> Reducer<State, Action> for F
where
    F: Fn(&State, Action) -> State,
{
    fn reduce(&self, state: &State, action: Action) -> State {
        self(state, action)
    }
}
