//! Reducer for the fetch lifecycle.

use std::marker::PhantomData;

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::FetchState;

/// Reducer for fetch state transitions.
///
/// Only `Loading` reacts to intents; a late or duplicate outcome never
/// overwrites a settled state.
pub struct FetchReducer<T>(PhantomData<T>);

impl<T: Clone + PartialEq + Send + 'static> Reducer for FetchReducer<T> {
    type State = FetchState<T>;
    type Intent = FetchIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match state {
            FetchState::Loading => match intent {
                FetchIntent::Resolved(value) => FetchState::Ready(value),
                FetchIntent::Rejected { message } => FetchState::Failed { message },
            },
            settled => settled,
        }
    }
}
