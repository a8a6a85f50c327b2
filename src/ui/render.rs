use crate::ui::app::{App, FocusedField};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, panel_rects};
use crate::ui::widgets::{StatelessTemperatureInput, TextField, TwoWayConverterView};
use ratatui::layout::{Position, Rect};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(), header);
    frame.render_widget(Clear, body);

    let [stateful_area, stateless_area, two_way_area] = panel_rects(body);
    let focus = app.focus();

    let stateful_focused = focus == FocusedField::Stateful;
    frame.render_widget(app.stateful().widget(stateful_focused), stateful_area);

    let stateless = StatelessTemperatureInput::from_state(app.stateless());
    let stateless_focused = focus == FocusedField::Stateless;
    frame.render_widget(stateless.widget(stateless_focused), stateless_area);

    let two_way = TwoWayConverterView::new(app.two_way());
    frame.render_widget(two_way.widget(focus.two_way_scale()), two_way_area);

    frame.render_widget(Footer::for_app(app).widget(), footer);

    let (panel, row, field) = match focus {
        FocusedField::Stateful => (stateful_area, 0, app.stateful().input_field(true)),
        FocusedField::Stateless => (stateless_area, 0, stateless.input_field(true)),
        FocusedField::TwoWayCelsius | FocusedField::TwoWayFahrenheit => {
            let Some(scale) = focus.two_way_scale() else {
                return;
            };
            let row = if focus == FocusedField::TwoWayCelsius { 0 } else { 1 };
            (two_way_area, row, two_way.input(scale).field(true))
        }
    };
    if let Some(position) = cursor_position(panel, row, &field) {
        frame.set_cursor_position(position);
    }
}

/// Cursor cell after the focused field's text, clamped inside the panel.
fn cursor_position(panel: Rect, row: u16, field: &TextField<'_>) -> Option<Position> {
    if panel.width < 3 || panel.height < 3 + row {
        return None;
    }
    let inner_width = panel.width - 2;
    let x = panel.x + 1 + field.cursor_column().min(inner_width - 1);
    let y = panel.y + 1 + row;
    Some(Position::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::labels::ENTER_CELSIUS;

    #[test]
    fn cursor_sits_after_text() {
        let field = TextField::new(ENTER_CELSIUS, "12", true);
        let position = cursor_position(Rect::new(0, 3, 80, 4), 0, &field);
        assert_eq!(position, Some(Position::new(1 + 17, 4)));
    }

    #[test]
    fn cursor_is_clamped_to_narrow_panels() {
        let field = TextField::new(ENTER_CELSIUS, "12", true);
        let position = cursor_position(Rect::new(0, 0, 10, 4), 1, &field);
        assert_eq!(position, Some(Position::new(8, 2)));
    }

    #[test]
    fn no_cursor_when_panel_collapsed() {
        let field = TextField::new(ENTER_CELSIUS, "", true);
        assert_eq!(cursor_position(Rect::new(0, 0, 80, 2), 0, &field), None);
    }
}
