//! Model-View-Intent (MVI) primitives for the converter widgets.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────── key / paste ─────────┘
//! ```
//!
//! - **State**: the text buffers a widget displays
//! - **Intent**: an edit coming from the view
//! - **Reducer**: pure `(State, Intent) -> State`, the only place a widget's
//!   text changes

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
