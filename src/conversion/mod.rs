//! Celsius/Fahrenheit conversion.
//!
//! Everything here is a pure function over text or `f64`; callers own any
//! state. The typed API (`parse_temperature`, `convert`, `convert_text`)
//! reports bad input as [`ConversionError`]. The text API (`to_fahrenheit`,
//! `to_celsius`) is what display fields use: bad input becomes [`NO_VALUE`].

mod error;
mod scale;
mod text;

pub use error::ConversionError;
pub use scale::Scale;
pub use text::{format_temperature, parse_temperature, NO_VALUE};

/// `c * 9/5 + 32`, evaluated left to right.
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// `(f - 32) * 5/9`, evaluated left to right.
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// Convert `value`, given in `from`, into `from.counterpart()`.
pub fn convert(value: f64, from: Scale) -> f64 {
    match from {
        Scale::Celsius => celsius_to_fahrenheit(value),
        Scale::Fahrenheit => fahrenheit_to_celsius(value),
    }
}

/// Parse `text` as a temperature in `from` and return the converted text.
pub fn convert_text(text: &str, from: Scale) -> Result<String, ConversionError> {
    let value = parse_temperature(text)?;
    Ok(format_temperature(convert(value, from)))
}

/// Celsius text to Fahrenheit text, or [`NO_VALUE`] if the input is not a number.
pub fn to_fahrenheit(celsius_text: &str) -> String {
    convert_text(celsius_text, Scale::Celsius).unwrap_or_else(|_| NO_VALUE.to_string())
}

/// Fahrenheit text to Celsius text, or [`NO_VALUE`] if the input is not a number.
pub fn to_celsius(fahrenheit_text: &str) -> String {
    convert_text(fahrenheit_text, Scale::Fahrenheit).unwrap_or_else(|_| NO_VALUE.to_string())
}
