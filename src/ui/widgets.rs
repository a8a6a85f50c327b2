//! Building blocks shared by the three converter panels.

use crate::conversion::Scale;
use crate::ui::labels::{
    enter_temperature, temperature_fahrenheit, ENTER_CELSIUS, STATELESS_CONVERTER,
    TWO_WAY_CONVERTER,
};
use crate::ui::single_field::SingleFieldState;
use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, FOCUSED_BORDER, GLOBAL_BORDER, HEADER_TEXT, LABEL_TEXT};
use crate::ui::two_way::FieldPair;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const LABEL_SEPARATOR: &str = ": ";

/// A labeled, single-line text entry.
pub struct TextField<'a> {
    label: String,
    value: &'a str,
    focused: bool,
}

impl<'a> TextField<'a> {
    pub fn new(label: impl Into<String>, value: &'a str, focused: bool) -> Self {
        Self {
            label: label.into(),
            value,
            focused,
        }
    }

    pub fn line(&self) -> Line<'a> {
        let label_style = Style::default().fg(LABEL_TEXT);
        let mut value_style = Style::default().fg(HEADER_TEXT);
        if self.focused {
            value_style = value_style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
        }
        Line::from(vec![
            Span::styled(format!("{}{}", self.label, LABEL_SEPARATOR), label_style),
            Span::styled(self.value, value_style),
        ])
    }

    /// Column just past the last character, relative to the line start.
    pub fn cursor_column(&self) -> u16 {
        let width = self.label.chars().count()
            + LABEL_SEPARATOR.chars().count()
            + self.value.chars().count();
        u16::try_from(width).unwrap_or(u16::MAX)
    }
}

/// The read-only "Temperature in Fahrenheit" line.
pub struct OutputLine<'a> {
    output: &'a str,
}

impl<'a> OutputLine<'a> {
    pub fn fahrenheit(output: &'a str) -> Self {
        Self { output }
    }

    pub fn line(&self) -> Line<'a> {
        Line::from(Span::styled(
            temperature_fahrenheit(self.output),
            Style::default().fg(ACCENT),
        ))
    }
}

/// Bordered panel holding one converter.
pub fn converter_panel<'a>(title: &'a str, lines: Vec<Line<'a>>, focused: bool) -> Paragraph<'a> {
    let border = if focused { FOCUSED_BORDER } else { GLOBAL_BORDER };
    Paragraph::new(lines).block(
        Block::default()
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    )
}

/// Converter view that owns nothing: it renders the buffers handed to it.
///
/// Edits go back to whoever owns the [`SingleFieldState`].
pub struct StatelessTemperatureInput<'a> {
    input: &'a str,
    output: &'a str,
}

impl<'a> StatelessTemperatureInput<'a> {
    pub fn new(input: &'a str, output: &'a str) -> Self {
        Self { input, output }
    }

    pub fn from_state(state: &'a SingleFieldState) -> Self {
        Self::new(&state.input, &state.output)
    }

    pub fn input_field(&self, focused: bool) -> TextField<'a> {
        TextField::new(ENTER_CELSIUS, self.input, focused)
    }

    pub fn widget(&self, focused: bool) -> Paragraph<'a> {
        converter_panel(
            STATELESS_CONVERTER,
            vec![
                self.input_field(focused).line(),
                OutputLine::fahrenheit(self.output).line(),
            ],
            focused,
        )
    }
}

/// Entry field labeled with its scale, used by the two-way converter.
pub struct GeneralTemperatureInput<'a> {
    scale: Scale,
    input: &'a str,
}

impl<'a> GeneralTemperatureInput<'a> {
    pub fn new(scale: Scale, input: &'a str) -> Self {
        Self { scale, input }
    }

    pub fn field(&self, focused: bool) -> TextField<'a> {
        TextField::new(
            enter_temperature(self.scale.display_name()),
            self.input,
            focused,
        )
    }
}

/// Two linked fields, Celsius above Fahrenheit.
pub struct TwoWayConverterView<'a> {
    pair: &'a FieldPair,
}

impl<'a> TwoWayConverterView<'a> {
    pub fn new(pair: &'a FieldPair) -> Self {
        Self { pair }
    }

    pub fn input(&self, scale: Scale) -> GeneralTemperatureInput<'a> {
        GeneralTemperatureInput::new(scale, self.pair.field(scale))
    }

    /// `focused` names the field holding focus, if it is one of ours.
    pub fn widget(&self, focused: Option<Scale>) -> Paragraph<'a> {
        let lines = [Scale::Celsius, Scale::Fahrenheit]
            .into_iter()
            .map(|scale| self.input(scale).field(focused == Some(scale)).line())
            .collect();
        converter_panel(TWO_WAY_CONVERTER, lines, focused.is_some())
    }
}
