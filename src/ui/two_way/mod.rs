//! Linked Celsius/Fahrenheit fields.
//!
//! Editing one field replaces its text and recomputes the other from it.
//! The recomputed field never feeds back into the edited one.

mod intent;
mod reducer;
mod state;

pub use intent::TwoWayIntent;
pub use reducer::TwoWayReducer;
pub use state::FieldPair;
