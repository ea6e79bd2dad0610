/// Marker for per-screen view state.
///
/// `Default` is the state a freshly mounted screen starts in; `PartialEq`
/// lets tests compare whole states.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
