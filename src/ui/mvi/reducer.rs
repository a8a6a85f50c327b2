use super::intent::Intent;
use super::state::UiState;

/// Applies an intent to a state.
///
/// Must be pure: the result depends only on the arguments.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
