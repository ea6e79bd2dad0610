use ratatui::layout::Rect;
use tokio::sync::mpsc::error::TrySendError;
use tracing::{debug, error, warn};

use crate::catalog::CatalogError;
use crate::config::UiConfig;
use crate::ui::fetch::FetchIntent;
use crate::ui::fetcher::{FetchOutcome, FetchRequest, FetchSender};
use crate::ui::layout::layout_regions;
use crate::ui::navigation::{Navigator, Route, Screen, Transition};
use crate::ui::screens::RenderContext;

pub struct App {
    should_quit: bool,
    size: Option<(u16, u16)>,
    tick: usize,
    show_errors: bool,
    navigator: Navigator,
    fetch_sender: FetchSender,
}

impl App {
    /// Mount the product list and request its data.
    pub fn new(config: &UiConfig, fetch_sender: FetchSender) -> Self {
        let (navigator, request) = Navigator::new(Route::ProductList);
        let mut app = Self {
            should_quit: false,
            size: None,
            tick: 0,
            show_errors: config.show_errors,
            navigator,
            fetch_sender,
        };
        app.send_request(request);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn size(&self) -> Option<(u16, u16)> {
        self.size
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn current_screen(&self) -> &Screen {
        self.navigator.current()
    }

    pub fn render_context(&self) -> RenderContext {
        RenderContext {
            tick: self.tick,
            show_errors: self.show_errors,
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.size = Some((cols, rows));
    }

    // ========================================================================
    // List screen
    // ========================================================================

    pub fn move_selection(&mut self, direction: i32) {
        if let Screen::ProductList(list) = self.navigator.current_mut() {
            list.move_selection(direction);
        }
    }

    pub fn select_first(&mut self) {
        if let Screen::ProductList(list) = self.navigator.current_mut() {
            list.select_first();
        }
    }

    pub fn select_last(&mut self) {
        if let Screen::ProductList(list) = self.navigator.current_mut() {
            list.select_last();
        }
    }

    /// Open the detail screen for the selected card.
    ///
    /// Returns false when nothing is selectable (list not loaded yet).
    pub fn open_selected(&mut self) -> bool {
        let transition = match self.navigator.current() {
            Screen::ProductList(list) => list.activate(),
            Screen::ProductDetails(_) => None,
        };
        match transition {
            Some(transition) => {
                self.navigate(transition);
                true
            }
            None => false,
        }
    }

    // ========================================================================
    // Detail screen
    // ========================================================================

    pub fn scroll_details(&mut self, delta: i32) {
        let viewport = self.body_area();
        if let Screen::ProductDetails(details) = self.navigator.current_mut() {
            details.scroll_by(delta, viewport);
        }
    }

    pub fn scroll_details_to_top(&mut self) {
        if let Screen::ProductDetails(details) = self.navigator.current_mut() {
            details.scroll_to_top();
        }
    }

    /// Pop the current screen. Returns false on the root screen.
    pub fn go_back(&mut self) -> bool {
        if !self.navigator.can_go_back() {
            return false;
        }
        self.navigate(Transition::Pop);
        true
    }

    // ========================================================================
    // Fetch results
    // ========================================================================

    /// Route a finished fetch to the screen that asked for it.
    ///
    /// Results for screens that were unmounted in the meantime are dropped.
    pub fn on_fetch(&mut self, outcome: FetchOutcome) {
        let screen_id = outcome.screen();
        match outcome {
            FetchOutcome::Products { screen, result } => {
                let intent = into_intent(result);
                match self.navigator.screen_mut(screen) {
                    Some(Screen::ProductList(list)) => list.dispatch(intent),
                    _ => debug!(screen = screen_id.value(), "dropping product list result"),
                }
            }
            FetchOutcome::Product { screen, id, result } => {
                let intent = into_intent(result);
                match self.navigator.screen_mut(screen) {
                    Some(Screen::ProductDetails(details)) => details.dispatch(intent),
                    _ => debug!(screen = screen_id.value(), id, "dropping product result"),
                }
            }
        }
    }

    /// Body region of the last known terminal size.
    fn body_area(&self) -> Option<Rect> {
        self.size
            .map(|(cols, rows)| layout_regions(Rect::new(0, 0, cols, rows)).1)
    }

    fn navigate(&mut self, transition: Transition) {
        if let Some(request) = self.navigator.apply(transition) {
            self.send_request(request);
        }
    }

    fn send_request(&mut self, request: FetchRequest) {
        let screen = request.screen();
        let reason = match self.fetch_sender.try_send(request) {
            Ok(()) => return,
            Err(TrySendError::Full(_)) => "fetch queue full",
            Err(TrySendError::Closed(_)) => "fetch worker stopped",
        };
        warn!(screen = screen.value(), reason, "fetch request not sent");
        let message = reason.to_string();
        match self.navigator.screen_mut(screen) {
            Some(Screen::ProductList(list)) => list.dispatch(FetchIntent::Rejected { message }),
            Some(Screen::ProductDetails(details)) => {
                details.dispatch(FetchIntent::Rejected { message })
            }
            None => {}
        }
    }
}

fn into_intent<T>(result: Result<T, CatalogError>) -> FetchIntent<T> {
    match result {
        Ok(value) => FetchIntent::Resolved(value),
        Err(err) => {
            error!(kind = ?err.kind(), error = %err, "Error fetching data");
            let message = format!("{}: {}", err.user_message(), err);
            FetchIntent::Rejected { message }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogItem, Price, ProductPage};
    use crate::ui::fetch::FetchState;
    use crate::ui::fetcher::{fetch_channel, FetchReceiver};

    fn make_app() -> (App, FetchReceiver) {
        let (tx, rx) = fetch_channel();
        (App::new(&UiConfig::default(), tx), rx)
    }

    fn page() -> ProductPage {
        ProductPage {
            products: vec![CatalogItem {
                id: 11,
                title: "Perfume".to_string(),
                price: Price::Text("13.00".to_string()),
                description: "Floral.".to_string(),
                thumbnail: "thumb".to_string(),
            }],
            total: None,
        }
    }

    #[test]
    fn startup_requests_product_list() {
        let (app, mut rx) = make_app();
        let request = rx.try_recv().unwrap();
        assert_eq!(
            request,
            FetchRequest::Products {
                screen: app.current_screen().id()
            }
        );
    }

    #[test]
    fn go_back_on_root_is_refused() {
        let (mut app, _rx) = make_app();
        assert!(!app.go_back());
        assert!(!app.should_quit());
    }

    #[test]
    fn open_selected_before_load_does_nothing() {
        let (mut app, mut rx) = make_app();
        rx.try_recv().unwrap();
        assert!(!app.open_selected());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn closed_worker_marks_screen_failed() {
        let (tx, rx) = fetch_channel();
        drop(rx);
        let app = App::new(&UiConfig::default(), tx);
        match app.current_screen() {
            Screen::ProductList(list) => assert!(matches!(list.state(), FetchState::Failed { .. })),
            Screen::ProductDetails(_) => panic!("expected list screen"),
        }
    }

    #[test]
    fn resize_is_recorded() {
        let (mut app, _rx) = make_app();
        assert_eq!(app.size(), None);
        app.on_resize(120, 40);
        assert_eq!(app.size(), Some((120, 40)));
    }

    #[test]
    fn tick_wraps() {
        let (mut app, _rx) = make_app();
        app.tick = usize::MAX;
        app.on_tick();
        assert_eq!(app.render_context().tick, 0);
    }

    #[test]
    fn loaded_list_opens_details() {
        let (mut app, mut rx) = make_app();
        let screen = rx.try_recv().unwrap().screen();
        app.on_fetch(FetchOutcome::Products {
            screen,
            result: Ok(page()),
        });
        assert!(app.open_selected());
        match rx.try_recv().unwrap() {
            FetchRequest::Product { id, .. } => assert_eq!(id, 11),
            other => panic!("unexpected request: {other:?}"),
        }
    }
}
