use crate::ui::mvi::UiState;

/// Text buffers of a single-field converter.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SingleFieldState {
    /// Celsius text exactly as typed.
    pub input: String,
    /// Fahrenheit text derived from `input`.
    pub output: String,
}

impl UiState for SingleFieldState {}
