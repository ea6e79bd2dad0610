use ratatui::layout::Rect;

/// Split the frame into header, body and footer.
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

/// Rows `[y, y + height)` of `area`, clipped to it.
pub fn rows(area: Rect, offset: u16, height: u16) -> Rect {
    let y = area.y.saturating_add(offset.min(area.height));
    let available = area.height.saturating_sub(offset);
    Rect {
        x: area.x,
        y,
        width: area.width,
        height: height.min(available),
    }
}

/// The single row in the vertical middle of `area`.
pub fn middle_row(area: Rect) -> Rect {
    rows(area, area.height / 2, 1)
}
