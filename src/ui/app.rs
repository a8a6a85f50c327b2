use crate::config::UiConfig;
use crate::conversion::Scale;
use crate::ui::mvi::Reducer;
use crate::ui::single_field::{SingleFieldIntent, SingleFieldReducer, SingleFieldState};
use crate::ui::stateful::StatefulConverter;
use crate::ui::two_way::{FieldPair, TwoWayIntent, TwoWayReducer};
use serde::{Deserialize, Serialize};

/// Editable fields, in on-screen order.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FocusedField {
    #[default]
    Stateful,
    Stateless,
    TwoWayCelsius,
    TwoWayFahrenheit,
}

impl FocusedField {
    const ORDER: [FocusedField; 4] = [
        FocusedField::Stateful,
        FocusedField::Stateless,
        FocusedField::TwoWayCelsius,
        FocusedField::TwoWayFahrenheit,
    ];

    fn index(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    /// Scale the field's text is entered in.
    pub fn input_scale(self) -> Scale {
        self.two_way_scale().unwrap_or(Scale::Celsius)
    }

    /// Scale of a two-way field, `None` for the single-field converters.
    pub fn two_way_scale(self) -> Option<Scale> {
        match self {
            FocusedField::TwoWayCelsius => Some(Scale::Celsius),
            FocusedField::TwoWayFahrenheit => Some(Scale::Fahrenheit),
            FocusedField::Stateful | FocusedField::Stateless => None,
        }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Keys that can appear in a decimal number.
pub fn is_numeric_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E')
}

pub struct App {
    should_quit: bool,
    focus: FocusedField,
    numeric_keyboard: bool,
    stateful: StatefulConverter,
    /// Buffers of the stateless converter, held here on its behalf.
    stateless: SingleFieldState,
    two_way: FieldPair,
}

impl App {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            should_quit: false,
            focus: config.initial_focus,
            numeric_keyboard: config.numeric_keyboard,
            stateful: StatefulConverter::new(),
            stateless: SingleFieldState::default(),
            two_way: FieldPair::default(),
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> FocusedField {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn stateful(&self) -> &StatefulConverter {
        &self.stateful
    }

    pub fn stateless(&self) -> &SingleFieldState {
        &self.stateless
    }

    pub fn two_way(&self) -> &FieldPair {
        &self.two_way
    }

    /// Text of the field holding focus.
    pub fn focused_text(&self) -> &str {
        match self.focus {
            FocusedField::Stateful => self.stateful.input(),
            FocusedField::Stateless => &self.stateless.input,
            FocusedField::TwoWayCelsius => &self.two_way.celsius,
            FocusedField::TwoWayFahrenheit => &self.two_way.fahrenheit,
        }
    }

    /// Replace the focused field's text and let its owner recompute.
    pub fn set_focused_text(&mut self, text: String) {
        tracing::debug!(field = ?self.focus, text = %text, "field edited");
        match self.focus {
            FocusedField::Stateful => self.stateful.on_value_change(text),
            FocusedField::Stateless => self.on_stateless_value_changed(text),
            FocusedField::TwoWayCelsius => {
                self.dispatch_two_way(TwoWayIntent::edited(Scale::Celsius, text))
            }
            FocusedField::TwoWayFahrenheit => {
                self.dispatch_two_way(TwoWayIntent::edited(Scale::Fahrenheit, text))
            }
        }
    }

    /// Append `ch` to the focused field. Returns false if the key was ignored.
    pub fn insert_char(&mut self, ch: char) -> bool {
        if !self.accepts(ch) {
            return false;
        }
        let mut text = self.focused_text().to_string();
        text.push(ch);
        self.set_focused_text(text);
        true
    }

    /// Remove the last character of the focused field.
    pub fn delete_char(&mut self) {
        let mut text = self.focused_text().to_string();
        if text.pop().is_some() {
            self.set_focused_text(text);
        }
    }

    pub fn clear_field(&mut self) {
        if !self.focused_text().is_empty() {
            self.set_focused_text(String::new());
        }
    }

    /// Append pasted text as one edit.
    pub fn on_paste(&mut self, pasted: &str) {
        let accepted: String = pasted.chars().filter(|ch| self.accepts(*ch)).collect();
        if accepted.is_empty() {
            return;
        }
        let mut text = self.focused_text().to_string();
        text.push_str(&accepted);
        self.set_focused_text(text);
    }

    fn accepts(&self, ch: char) -> bool {
        if ch.is_control() {
            return false;
        }
        !self.numeric_keyboard || is_numeric_char(ch)
    }

    fn on_stateless_value_changed(&mut self, input: String) {
        dispatch_mvi!(
            self,
            stateless,
            SingleFieldReducer,
            SingleFieldIntent::InputChanged(input)
        );
    }

    pub fn dispatch_two_way(&mut self, intent: TwoWayIntent) {
        dispatch_mvi!(self, two_way, TwoWayReducer, intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_app() -> App {
        App::new(&UiConfig::default())
    }

    #[test]
    fn focus_cycles_through_all_fields() {
        let mut app = make_app();
        assert_eq!(app.focus(), FocusedField::Stateful);
        app.focus_next();
        app.focus_next();
        app.focus_next();
        assert_eq!(app.focus(), FocusedField::TwoWayFahrenheit);
        app.focus_next();
        assert_eq!(app.focus(), FocusedField::Stateful);
        app.focus_prev();
        assert_eq!(app.focus(), FocusedField::TwoWayFahrenheit);
    }

    #[test]
    fn numeric_keyboard_drops_letters() {
        let mut app = make_app();
        assert!(!app.insert_char('x'));
        assert!(app.insert_char('5'));
        assert_eq!(app.stateful().input(), "5");
    }

    #[test]
    fn free_keyboard_accepts_letters() {
        let config = UiConfig {
            numeric_keyboard: false,
            ..UiConfig::default()
        };
        let mut app = App::new(&config);
        assert!(app.insert_char('x'));
        assert_eq!(app.stateful().input(), "x");
        assert_eq!(app.stateful().output(), "");
    }

    #[test]
    fn edits_only_touch_the_focused_converter() {
        let mut app = make_app();
        app.insert_char('1');
        app.focus_next();
        app.insert_char('2');
        assert_eq!(app.stateful().input(), "1");
        assert_eq!(app.stateless().input, "2");
        assert_eq!(app.two_way(), &FieldPair::default());
    }

    #[test]
    fn two_way_edits_follow_the_focused_scale() {
        let mut app = make_app();
        app.focus_next();
        app.focus_next();
        app.set_focused_text("100".into());
        assert_eq!(app.two_way().fahrenheit, "212.0");
        app.focus_next();
        app.set_focused_text("32".into());
        assert_eq!(app.two_way().celsius, "0.0");
        assert_eq!(app.two_way().fahrenheit, "32");
    }

    #[test]
    fn input_scale_per_field() {
        assert_eq!(FocusedField::Stateful.input_scale(), Scale::Celsius);
        assert_eq!(FocusedField::Stateless.input_scale(), Scale::Celsius);
        assert_eq!(FocusedField::TwoWayCelsius.input_scale(), Scale::Celsius);
        assert_eq!(FocusedField::TwoWayFahrenheit.input_scale(), Scale::Fahrenheit);
    }

    #[test]
    fn delete_on_empty_field_is_noop() {
        let mut app = make_app();
        app.delete_char();
        assert_eq!(app.focused_text(), "");
        assert_eq!(app.stateful().output(), "");
    }
}
