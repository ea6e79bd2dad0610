//! Per-screen fetch lifecycle.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Lifecycle state enum (Loading → Ready | Failed)
//! - `intent.rs` - Fetch outcomes (Resolved, Rejected)
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::FetchState;
