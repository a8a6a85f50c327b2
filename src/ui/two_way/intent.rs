use crate::conversion::Scale;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone, PartialEq)]
pub enum TwoWayIntent {
    CelsiusEdited(String),
    FahrenheitEdited(String),
}

impl TwoWayIntent {
    /// Edit of the field showing `scale`.
    pub fn edited(scale: Scale, text: String) -> Self {
        match scale {
            Scale::Celsius => TwoWayIntent::CelsiusEdited(text),
            Scale::Fahrenheit => TwoWayIntent::FahrenheitEdited(text),
        }
    }
}

impl Intent for TwoWayIntent {}
