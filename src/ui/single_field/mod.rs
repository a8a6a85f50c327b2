//! One-directional Celsius → Fahrenheit converter.
//!
//! The same reducer backs both the self-contained widget and the variant
//! whose state is held by its container.

mod intent;
mod reducer;
mod state;

pub use intent::SingleFieldIntent;
pub use reducer::SingleFieldReducer;
pub use state::SingleFieldState;
