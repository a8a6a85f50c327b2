use crate::conversion::Scale;
use crate::ui::mvi::UiState;

/// Celsius and Fahrenheit text buffers.
///
/// Both are free text between edits; after an edit the untouched field is
/// derived from the edited one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FieldPair {
    pub celsius: String,
    pub fahrenheit: String,
}

impl UiState for FieldPair {}

impl FieldPair {
    pub fn field(&self, scale: Scale) -> &str {
        match scale {
            Scale::Celsius => &self.celsius,
            Scale::Fahrenheit => &self.fahrenheit,
        }
    }
}
