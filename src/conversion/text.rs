//! Text <-> number helpers shared by the conversion functions.

use super::error::ConversionError;

/// Text produced when the input cannot be read as a number.
///
/// Result fields render blank until the user has typed a valid number.
pub const NO_VALUE: &str = "";

/// Parse user-entered text as a temperature value.
///
/// Leading and trailing control characters and spaces (`<= U+0020`) are
/// ignored; other whitespace is part of the input. Special values are
/// spelled exactly `NaN` or `Infinity`, optionally signed. Everything else
/// goes through `f64::from_str`.
pub fn parse_temperature(text: &str) -> Result<f64, ConversionError> {
    let trimmed = text.trim_matches(|c: char| c <= '\u{20}');
    if trimmed.is_empty() {
        return Err(ConversionError::Empty);
    }
    let invalid = || ConversionError::Invalid {
        input: text.to_string(),
    };

    let unsigned = trimmed.strip_prefix(&['+', '-'][..]).unwrap_or(trimmed);
    if unsigned.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return match unsigned {
            "NaN" => Ok(f64::NAN),
            "Infinity" if trimmed.starts_with('-') => Ok(f64::NEG_INFINITY),
            "Infinity" => Ok(f64::INFINITY),
            _ => Err(invalid()),
        };
    }
    trimmed.parse::<f64>().map_err(|_| invalid())
}

/// Canonical text for a temperature value.
///
/// Finite values use the shortest representation that parses back to the
/// same `f64` and always keep a fractional part or exponent (`32.0`, `1e300`).
pub fn format_temperature(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else {
        format!("{value:?}")
    }
}
