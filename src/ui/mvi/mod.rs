//! Model-View-Intent (MVI) primitives shared by the screens.
//!
//! ```text
//! FetchRequest ──→ worker ──→ Intent ──→ Reducer ──→ State ──→ View
//!      ↑                                                        │
//!      └──────────────────── navigation ────────────────────────┘
//! ```
//!
//! - **State**: what a screen renders from
//! - **Intent**: a resolved fetch or another event addressed to one screen
//! - **Reducer**: the only place a state transition happens

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
