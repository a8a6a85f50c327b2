use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum SingleFieldIntent {
    /// The Celsius field now holds this text. Replaces the old input.
    InputChanged(String),
}

impl Intent for SingleFieldIntent {}
