/// Marker trait for edits sent from a view to its reducer.
pub trait Intent: Send + 'static {}
