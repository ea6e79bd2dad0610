/// Marker for events that a [`Reducer`](super::Reducer) consumes.
///
/// Intents cross from the fetch worker to the UI thread, hence `Send`.
pub trait Intent: Send + 'static {}
