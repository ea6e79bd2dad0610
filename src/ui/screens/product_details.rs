use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{CatalogItem, ProductDetail};
use crate::ui::components::Spinner;
use crate::ui::fetch::{FetchIntent, FetchReducer, FetchState};
use crate::ui::layout::rows;
use crate::ui::mvi::Reducer;
use crate::ui::navigation::ScreenId;
use crate::ui::screens::RenderContext;
use crate::ui::theme::{DESCRIPTION_TEXT, HEADER_TEXT, IMAGE_REF, PRICE_TEXT, STATUS_ERROR};

pub const NO_DATA: &str = "No product data available";
pub const IMAGES_HEADER: &str = "Images:";
pub const IMAGE_PREFIX: &str = "[image] ";

/// Detail screen for one product.
///
/// Holds the list item it was opened with; that partial record is shown
/// while the full product is fetched by id.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetailsScreen {
    id: ScreenId,
    product: CatalogItem,
    detail: FetchState<ProductDetail>,
    scroll: u16,
}

impl ProductDetailsScreen {
    pub fn new(id: ScreenId, product: CatalogItem) -> Self {
        Self {
            id,
            product,
            detail: FetchState::default(),
            scroll: 0,
        }
    }

    pub fn id(&self) -> ScreenId {
        self.id
    }

    /// The navigation input.
    pub fn product(&self) -> &CatalogItem {
        &self.product
    }

    pub fn state(&self) -> &FetchState<ProductDetail> {
        &self.detail
    }

    pub fn dispatch(&mut self, intent: FetchIntent<ProductDetail>) {
        self.detail =
            FetchReducer::<ProductDetail>::reduce(std::mem::take(&mut self.detail), intent);
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Scroll by `delta` rows, clamped so `viewport` stays filled.
    ///
    /// Without a known viewport only the lower bound is enforced; rendering
    /// clamps the offset against the real area.
    pub fn scroll_by(&mut self, delta: i32, viewport: Option<Rect>) {
        let max = match (self.detail.value(), viewport) {
            (Some(detail), Some(viewport)) => max_scroll(detail, viewport),
            (Some(_), None) => u16::MAX,
            (None, _) => 0,
        };
        let next = if delta.is_negative() {
            self.scroll.saturating_sub(delta.unsigned_abs().min(u16::MAX as u32) as u16)
        } else {
            self.scroll.saturating_add(delta.min(u16::MAX as i32) as u16)
        };
        self.scroll = next.min(max);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }
}

fn label(name: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", name), Style::default().fg(PRICE_TEXT)),
        Span::styled(value, Style::default().fg(HEADER_TEXT)),
    ])
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))
}

pub fn image_line(url: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(IMAGE_PREFIX, Style::default().fg(PRICE_TEXT)),
        Span::styled(url.to_string(), Style::default().fg(IMAGE_REF)),
    ])
}

/// Every field of `detail` as labelled lines, in display order.
pub fn detail_lines(detail: &ProductDetail) -> Vec<Line<'static>> {
    let mut lines = vec![
        image_line(&detail.thumbnail),
        Line::from(""),
        Line::from(Span::styled(
            detail.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        label("Price", format!("${:.2}", detail.price)),
        Line::from(Span::styled(
            detail.description.clone(),
            Style::default().fg(DESCRIPTION_TEXT),
        )),
        label("Category", detail.category.clone()),
        label("Brand", detail.brand.clone()),
        label("SKU", detail.sku.clone()),
        label("Weight", format!("{}g", detail.weight)),
        label(
            "Dimensions",
            format!(
                "{} x {} x {} cm",
                detail.dimensions.width, detail.dimensions.height, detail.dimensions.depth
            ),
        ),
        label("Warranty", detail.warranty_information.clone()),
        label("Shipping Information", detail.shipping_information.clone()),
        label("Availability", detail.availability_status.clone()),
        label("Return Policy", detail.return_policy.clone()),
        label(
            "Minimum Order Quantity",
            detail.minimum_order_quantity.to_string(),
        ),
        label("Discount", format!("{}%", detail.discount_percentage)),
        label("Rating", detail.rating.to_string()),
        label("Stock", detail.stock.to_string()),
        label("Tags", detail.tags.join(", ")),
        Line::from(""),
        section("Reviews:"),
    ];

    for review in &detail.reviews {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}/5 ", review.rating),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled(
                format!("{} <{}>", review.reviewer_name, review.reviewer_email),
                Style::default().fg(HEADER_TEXT),
            ),
            Span::styled(format!("  {}", review.date), Style::default().fg(PRICE_TEXT)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", review.comment),
            Style::default().fg(DESCRIPTION_TEXT),
        )));
    }

    lines.push(Line::from(""));
    lines.push(section("Meta:"));
    lines.push(label("Created", detail.meta.created_at.clone()));
    lines.push(label("Updated", detail.meta.updated_at.clone()));
    lines.push(label("Barcode", detail.meta.barcode.clone()));
    lines.push(label("QR Code", detail.meta.qr_code.clone()));

    lines.push(Line::from(""));
    lines.push(section(IMAGES_HEADER));
    lines.extend(detail.images.iter().map(|url| image_line(url)));
    lines
}

fn detail_paragraph(detail: &ProductDetail) -> Paragraph<'static> {
    Paragraph::new(detail_lines(detail)).wrap(Wrap { trim: false })
}

/// Largest offset that still shows the last wrapped row at the bottom of `viewport`.
pub fn max_scroll(detail: &ProductDetail, viewport: Rect) -> u16 {
    if viewport.width == 0 {
        return 0;
    }
    let rows = detail_paragraph(detail).line_count(viewport.width);
    rows.saturating_sub(viewport.height as usize)
        .min(u16::MAX as usize) as u16
}

/// Lines shown while the full record is loading.
fn placeholder_lines(product: &CatalogItem) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            product.price.to_string(),
            Style::default().fg(PRICE_TEXT),
        )),
        Line::from(Span::styled(
            product.description.clone(),
            Style::default().fg(DESCRIPTION_TEXT),
        )),
    ]
}

pub fn render(
    frame: &mut Frame<'_>,
    area: Rect,
    screen: &ProductDetailsScreen,
    ctx: &RenderContext,
) {
    match screen.state() {
        FetchState::Ready(detail) => {
            let scroll = screen.scroll().min(max_scroll(detail, area));
            frame.render_widget(detail_paragraph(detail).scroll((scroll, 0)), area);
        }
        FetchState::Loading => {
            let placeholder = placeholder_lines(screen.product());
            let height = placeholder.len() as u16;
            frame.render_widget(
                Paragraph::new(placeholder).wrap(Wrap { trim: true }),
                rows(area, 0, height),
            );
            frame.render_widget(
                Spinner::new(ctx.tick),
                rows(area, height, area.height.saturating_sub(height)),
            );
        }
        FetchState::Failed { message } => {
            let mut lines = vec![Line::from(Span::styled(
                NO_DATA,
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ))];
            if ctx.show_errors {
                lines.push(Line::from(Span::styled(
                    message.clone(),
                    Style::default().fg(STATUS_ERROR),
                )));
            }
            frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
        }
    }
}
