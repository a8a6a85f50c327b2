use thiserror::Error;

/// Why a piece of text could not be read as a temperature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("no temperature entered")]
    Empty,

    #[error("'{input}' is not a valid decimal number")]
    Invalid { input: String },
}
