use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::layout::middle_row;
use crate::ui::theme::{ACCENT, HEADER_TEXT};

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(tick: usize) -> &'static str {
    FRAMES[tick % FRAMES.len()]
}

/// Activity indicator centered in its area.
pub struct Spinner {
    tick: usize,
    label: &'static str,
}

impl Spinner {
    pub fn new(tick: usize) -> Self {
        Self {
            tick,
            label: "Loading…",
        }
    }

    pub fn line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(spinner_frame(self.tick), Style::default().fg(ACCENT)),
            Span::raw(" "),
            Span::styled(self.label, Style::default().fg(HEADER_TEXT)),
        ])
    }
}

impl Widget for Spinner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.line())
            .alignment(Alignment::Center)
            .render(middle_row(area), buf);
    }
}
