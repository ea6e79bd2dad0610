//! Screen view state and rendering.

pub mod product_details;
pub mod product_list;

pub use product_details::ProductDetailsScreen;
pub use product_list::ProductListScreen;

/// Frame-wide inputs a screen needs besides its own state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    /// Spinner animation counter.
    pub tick: usize,
    /// Render fetch errors instead of only logging them.
    pub show_errors: bool,
}
