use crate::conversion::{parse_temperature, ConversionError, Scale};
use crate::ui::app::App;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT, LABEL_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const KEY_HINTS: &str = "Tab/↑↓: Field │ Ctrl+U: Clear │ Esc: Quit";

/// Whether the focused field's text currently reads as a number.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputStatus {
    Empty,
    Number,
    NotANumber,
}

impl InputStatus {
    pub fn of(text: &str) -> Self {
        match parse_temperature(text) {
            Ok(_) => InputStatus::Number,
            Err(ConversionError::Empty) => InputStatus::Empty,
            Err(ConversionError::Invalid { .. }) => InputStatus::NotANumber,
        }
    }

    fn label(self) -> &'static str {
        match self {
            InputStatus::Empty => "waiting for input",
            InputStatus::Number => "ok",
            InputStatus::NotANumber => "not a number",
        }
    }

    fn color(self) -> Color {
        match self {
            InputStatus::Empty => LABEL_TEXT,
            InputStatus::Number => STATUS_OK,
            InputStatus::NotANumber => STATUS_ERROR,
        }
    }
}

/// Bottom bar: focused field's scale and parse state, key hints, version.
pub struct Footer {
    scale: Scale,
    status: InputStatus,
}

impl Footer {
    pub fn new(scale: Scale, status: InputStatus) -> Self {
        Self { scale, status }
    }

    pub fn for_app(app: &App) -> Self {
        Self::new(app.focus().input_scale(), InputStatus::of(app.focused_text()))
    }

    pub fn status_text(&self) -> String {
        format!("{}: {}", self.scale, self.status.label())
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let hint_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);
        let line = Line::from(vec![
            Span::styled(
                format!(" {}", self.status_text()),
                Style::default().fg(self.status.color()),
            ),
            Span::styled("  │  ", Style::default().fg(GLOBAL_BORDER)),
            Span::styled(KEY_HINTS, hint_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER))
                .title_bottom(Line::styled(format!(" v{VERSION} "), hint_style).right_aligned()),
        )
    }
}
