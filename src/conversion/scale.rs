use serde::{Deserialize, Serialize};
use std::fmt;

/// A temperature unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scale {
    Celsius,
    Fahrenheit,
}

impl Scale {
    /// Human-readable name shown next to input fields.
    pub fn display_name(self) -> &'static str {
        match self {
            Scale::Celsius => "Celsius",
            Scale::Fahrenheit => "Fahrenheit",
        }
    }

    /// The scale a value in `self` converts into.
    pub fn counterpart(self) -> Scale {
        match self {
            Scale::Celsius => Scale::Fahrenheit,
            Scale::Fahrenheit => Scale::Celsius,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Scale::Celsius.to_string(), "Celsius");
        assert_eq!(Scale::Fahrenheit.to_string(), "Fahrenheit");
    }

    #[test]
    fn counterpart_is_an_involution() {
        for scale in [Scale::Celsius, Scale::Fahrenheit] {
            assert_ne!(scale.counterpart(), scale);
            assert_eq!(scale.counterpart().counterpart(), scale);
        }
    }
}
