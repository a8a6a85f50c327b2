use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Two borders plus two content lines.
pub const PANEL_HEIGHT: u16 = 4;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Stateful, stateless and two-way panels, top to bottom.
pub fn panel_rects(body: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Length(PANEL_HEIGHT),
            Constraint::Min(0),
        ])
        .split(body);
    [chunks[0], chunks[1], chunks[2]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_split_full_height() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, body, footer) = layout_regions(area);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 3);
        assert_eq!(body.y, 3);
        assert_eq!(body.height, 18);
    }

    #[test]
    fn panels_stack_vertically() {
        let panels = panel_rects(Rect::new(0, 3, 80, 18));
        assert_eq!(panels[0].y, 3);
        assert_eq!(panels[1].y, 3 + PANEL_HEIGHT);
        assert_eq!(panels[2].y, 3 + 2 * PANEL_HEIGHT);
        assert!(panels.iter().all(|rect| rect.height == PANEL_HEIGHT));
    }
}
