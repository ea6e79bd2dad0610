//! State for the fetch lifecycle.

use crate::ui::mvi::UiState;

/// Progress of a screen's fetch.
///
/// `Ready` and `Failed` are terminal; there is no reload.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    /// Request in flight (or never answered).
    Loading,

    /// Request succeeded.
    Ready(T),

    /// Request failed. The message is kept for optional display.
    Failed { message: String },
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        FetchState::Loading
    }
}

impl<T: Clone + PartialEq + Send + 'static> UiState for FetchState<T> {}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}
