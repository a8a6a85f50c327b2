use crate::ui::labels::{ENTER_CELSIUS, STATEFUL_CONVERTER};
use crate::ui::mvi::Reducer;
use crate::ui::single_field::{SingleFieldIntent, SingleFieldReducer, SingleFieldState};
use crate::ui::widgets::{converter_panel, OutputLine, TextField};
use ratatui::widgets::Paragraph;

/// Celsius → Fahrenheit converter that keeps its own text buffers.
///
/// Callers only forward edits; nothing outside can read or replace the
/// state except through [`StatefulConverter::on_value_change`].
#[derive(Debug, Default)]
pub struct StatefulConverter {
    state: SingleFieldState,
}

impl StatefulConverter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_value_change(&mut self, input: String) {
        let state = std::mem::take(&mut self.state);
        self.state = SingleFieldReducer::reduce(state, SingleFieldIntent::InputChanged(input));
    }

    pub fn input(&self) -> &str {
        &self.state.input
    }

    pub fn output(&self) -> &str {
        &self.state.output
    }

    pub fn input_field(&self, focused: bool) -> TextField<'_> {
        TextField::new(ENTER_CELSIUS, &self.state.input, focused)
    }

    pub fn widget(&self, focused: bool) -> Paragraph<'_> {
        converter_panel(
            STATEFUL_CONVERTER,
            vec![
                self.input_field(focused).line(),
                OutputLine::fahrenheit(&self.state.output).line(),
            ],
            focused,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_change_replaces_input_and_recomputes() {
        let mut converter = StatefulConverter::new();
        converter.on_value_change("10".into());
        converter.on_value_change("0".into());
        assert_eq!(converter.input(), "0");
        assert_eq!(converter.output(), "32.0");
    }
}
