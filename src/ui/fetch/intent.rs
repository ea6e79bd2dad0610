//! Intents for the fetch lifecycle.

use crate::ui::mvi::Intent;

/// Outcome of the one request a screen issues on mount.
#[derive(Debug)]
pub enum FetchIntent<T> {
    /// The request produced a value.
    Resolved(T),

    /// The request failed; `message` is the rendered error.
    Rejected { message: String },
}

impl<T: Send + 'static> Intent for FetchIntent<T> {}
