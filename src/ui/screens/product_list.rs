use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::catalog::{CatalogItem, ProductPage};
use crate::ui::components::{ProductCard, Spinner};
use crate::ui::fetch::{FetchIntent, FetchReducer, FetchState};
use crate::ui::layout::rows;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::{Route, ScreenId, Transition};
use crate::ui::screens::RenderContext;
use crate::ui::theme::STATUS_ERROR;

/// Product collection screen: one card per item, in response order.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListScreen {
    id: ScreenId,
    products: FetchState<ProductPage>,
    selected: usize,
}

impl ProductListScreen {
    pub fn new(id: ScreenId) -> Self {
        Self {
            id,
            products: FetchState::default(),
            selected: 0,
        }
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    pub fn state(&self) -> &FetchState<ProductPage> {
        &self.products
    }

    pub fn dispatch(&mut self, intent: FetchIntent<ProductPage>) {
        self.products =
            FetchReducer::<ProductPage>::reduce(std::mem::take(&mut self.products), intent);
    }

    /// Loaded items; empty until the fetch resolves.
    pub fn items(&self) -> &[CatalogItem] {
        self.products
            .value()
            .map(|page| page.products.as_slice())
            .unwrap_or(&[])
    }

    pub fn cards(&self) -> Vec<ProductCard<'_>> {
        self.items().iter().map(ProductCard::from_item).collect()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_item(&self) -> Option<&CatalogItem> {
        self.items().get(self.selected)
    }

    /// Move the selection, wrapping at both ends.
    pub fn move_selection(&mut self, direction: i32) {
        let len = self.items().len();
        if len == 0 {
            self.selected = 0;
            return;
        }

        let current = self.selected.min(len - 1);
        self.selected = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items().len().saturating_sub(1);
    }

    /// Transition for activating the selected card.
    pub fn activate(&self) -> Option<Transition> {
        self.selected_item().map(|product| {
            Transition::Push(Route::ProductDetails {
                product: product.clone(),
            })
        })
    }

    /// "N of M products" once loaded.
    pub fn summary(&self) -> Option<String> {
        let page = self.products.value()?;
        let shown = page.products.len();
        Some(match page.total {
            Some(total) => format!("{} of {} products", shown, total),
            None => format!("{} products", shown),
        })
    }
}

/// Index of the first card drawn so that `selected` stays visible.
pub fn first_visible(selected: usize, visible: usize) -> usize {
    if visible == 0 {
        return selected;
    }
    selected.saturating_sub(visible - 1)
}

pub fn render(frame: &mut Frame<'_>, area: Rect, screen: &ProductListScreen, ctx: &RenderContext) {
    match screen.state() {
        FetchState::Ready(_) => render_cards(frame, area, screen),
        FetchState::Loading => frame.render_widget(Spinner::new(ctx.tick), area),
        FetchState::Failed { message } => {
            // Errors are only logged unless display is enabled.
            frame.render_widget(Spinner::new(ctx.tick), area);
            if ctx.show_errors {
                let line = Line::styled(message.clone(), Style::default().fg(STATUS_ERROR));
                frame.render_widget(Paragraph::new(line), rows(area, 0, 1));
            }
        }
    }
}

fn render_cards(frame: &mut Frame<'_>, area: Rect, screen: &ProductListScreen) {
    let cards = screen.cards();
    if cards.is_empty() {
        frame.render_widget(Paragraph::new("No products."), rows(area, 0, 1));
        return;
    }

    let visible = (area.height / ProductCard::HEIGHT).max(1) as usize;
    let first = first_visible(screen.selected(), visible);
    for (slot, (index, card)) in cards.iter().enumerate().skip(first).take(visible).enumerate() {
        let card_area = rows(area, slot as u16 * ProductCard::HEIGHT, ProductCard::HEIGHT);
        if card_area.height == 0 {
            break;
        }
        frame.render_widget(card.widget(index == screen.selected()), card_area);
    }
}
