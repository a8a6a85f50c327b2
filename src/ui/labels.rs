//! User-facing strings.

pub const APP_TITLE: &str = "Temperature Converter";
pub const STATEFUL_CONVERTER: &str = "Stateful converter";
pub const STATELESS_CONVERTER: &str = "Stateless converter";
pub const TWO_WAY_CONVERTER: &str = "Two-way converter";
pub const ENTER_CELSIUS: &str = "Enter Celsius";

pub fn temperature_fahrenheit(output: &str) -> String {
    format!("Temperature in Fahrenheit: {output}")
}

pub fn enter_temperature(scale_name: &str) -> String {
    format!("Enter temperature in {scale_name}")
}
