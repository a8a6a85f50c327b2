/// Marker trait for widget state.
///
/// States are plain values: cloned to snapshot, compared to detect changes,
/// and defaulted to the blank widget.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
