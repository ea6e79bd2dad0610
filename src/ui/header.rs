use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Navigation bar: back affordance, screen title, optional summary.
pub struct Header<'a> {
    title: &'a str,
    can_go_back: bool,
    summary: Option<String>,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, can_go_back: bool, summary: Option<String>) -> Self {
        Self {
            title,
            can_go_back,
            summary,
        }
    }

    pub fn line(&self) -> Line<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let mut spans = vec![Span::styled("  ", text_style)];
        if self.can_go_back {
            spans.push(Span::styled("‹ Back", Style::default().fg(ACCENT)));
            spans.push(Span::styled("  │  ", separator_style));
        }
        spans.push(Span::styled(
            self.title,
            text_style.add_modifier(Modifier::BOLD),
        ));
        if let Some(summary) = &self.summary {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(summary.clone(), text_style));
        }
        Line::from(spans)
    }

    pub fn widget(&self) -> Paragraph<'a> {
        Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_header_has_no_back() {
        let line = Header::new("Product Page", false, None).line().to_string();
        assert_eq!(line.trim(), "Product Page");
    }

    #[test]
    fn pushed_header_shows_back_and_summary() {
        let line = Header::new("Product Details", true, Some("x".to_string()))
            .line()
            .to_string();
        assert!(line.contains("‹ Back"));
        assert!(line.ends_with("Product Details  │  x"));
    }
}
