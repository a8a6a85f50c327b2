use serde::{Deserialize, Serialize};

use crate::ui::app::FocusedField;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// Terminal front-end settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Ignore keys that cannot be part of a decimal number (default: true).
    #[serde(default = "default_numeric_keyboard")]
    pub numeric_keyboard: bool,
    /// Field focused at startup (default: "stateful").
    #[serde(default)]
    pub initial_focus: FocusedField,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_numeric_keyboard() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            numeric_keyboard: default_numeric_keyboard(),
            initial_focus: FocusedField::default(),
        }
    }
}
