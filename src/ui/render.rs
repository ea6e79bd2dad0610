use crate::ui::app::App;
use crate::ui::footer::{Footer, DETAILS_HINTS, LIST_HINTS};
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::navigation::Screen;
use crate::ui::screens::{product_details, product_list};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let screen = app.current_screen();
    let ctx = app.render_context();

    let summary = match screen {
        Screen::ProductList(list) => list.summary(),
        Screen::ProductDetails(_) => None,
    };
    let header_widget = Header::new(screen.title(), app.navigator().can_go_back(), summary);
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    let hints = match screen {
        Screen::ProductList(list) => {
            product_list::render(frame, body, list, &ctx);
            LIST_HINTS
        }
        Screen::ProductDetails(details) => {
            product_details::render(frame, body, details, &ctx);
            DETAILS_HINTS
        }
    };

    frame.render_widget(Footer::new(hints).widget(footer), footer);
}
