use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::catalog::CatalogItem;
use crate::ui::theme::{
    CARD_BORDER, CARD_HIGHLIGHT, DESCRIPTION_TEXT, HEADER_TEXT, IMAGE_REF, PRICE_TEXT,
};

/// Stateless product card: image reference, name, price, description.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard<'a> {
    name: &'a str,
    price: String,
    description: &'a str,
    image_url: &'a str,
}

impl<'a> ProductCard<'a> {
    /// Rows a card occupies, borders included.
    pub const HEIGHT: u16 = 7;

    pub fn new(name: &'a str, price: String, description: &'a str, image_url: &'a str) -> Self {
        Self {
            name,
            price,
            description,
            image_url,
        }
    }

    pub fn from_item(item: &'a CatalogItem) -> Self {
        Self::new(
            &item.title,
            item.price.to_string(),
            &item.description,
            &item.thumbnail,
        )
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(vec![
                Span::styled("[image] ", Style::default().fg(PRICE_TEXT)),
                Span::styled(self.image_url, Style::default().fg(IMAGE_REF)),
            ]),
            Line::from(Span::styled(
                self.name,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.price.clone(),
                Style::default().fg(PRICE_TEXT),
            )),
            Line::from(Span::styled(
                self.description,
                Style::default().fg(DESCRIPTION_TEXT),
            )),
        ]
    }

    pub fn widget(&self, highlighted: bool) -> Paragraph<'a> {
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(CARD_BORDER));
        if highlighted {
            block = block
                .border_style(Style::default().fg(HEADER_TEXT))
                .style(Style::default().bg(CARD_HIGHLIGHT));
        }
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: true })
            .block(block)
    }
}
