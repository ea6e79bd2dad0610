use tracing::debug;

use crate::ui::fetcher::FetchRequest;
use crate::ui::navigation::route::{Route, ScreenId, Transition};
use crate::ui::screens::{ProductDetailsScreen, ProductListScreen};

/// A mounted screen and its view state.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    ProductList(ProductListScreen),
    ProductDetails(ProductDetailsScreen),
}

impl Screen {
    pub fn id(&self) -> ScreenId {
        match self {
            Screen::ProductList(screen) => screen.id(),
            Screen::ProductDetails(screen) => screen.id(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Screen::ProductList(_) => Route::PRODUCT_LIST_TITLE,
            Screen::ProductDetails(_) => Route::PRODUCT_DETAILS_TITLE,
        }
    }
}

/// Stack of mounted screens. The root screen is never popped.
#[derive(Debug)]
pub struct Navigator {
    root: Screen,
    pushed: Vec<Screen>,
    next_id: u64,
}

impl Navigator {
    /// Mount `initial` as the root screen.
    ///
    /// Returns the navigator and the fetch the root screen needs.
    pub fn new(initial: Route) -> (Self, FetchRequest) {
        let (root, request) = mount(initial, ScreenId::new(0));
        let navigator = Self {
            root,
            pushed: Vec::new(),
            next_id: 1,
        };
        (navigator, request)
    }

    /// Apply a transition. Returns the fetch for a newly mounted screen.
    pub fn apply(&mut self, transition: Transition) -> Option<FetchRequest> {
        match transition {
            Transition::Push(route) => {
                let id = ScreenId::new(self.next_id);
                self.next_id += 1;
                let (screen, request) = mount(route, id);
                debug!(screen = id.value(), title = screen.title(), "mounted");
                self.pushed.push(screen);
                Some(request)
            }
            Transition::Pop => {
                if let Some(screen) = self.pushed.pop() {
                    debug!(screen = screen.id().value(), title = screen.title(), "unmounted");
                }
                None
            }
        }
    }

    pub fn current(&self) -> &Screen {
        self.pushed.last().unwrap_or(&self.root)
    }

    pub fn current_mut(&mut self) -> &mut Screen {
        self.pushed.last_mut().unwrap_or(&mut self.root)
    }

    /// Look up a mounted screen. `None` once it has been popped.
    pub fn screen_mut(&mut self, id: ScreenId) -> Option<&mut Screen> {
        std::iter::once(&mut self.root)
            .chain(self.pushed.iter_mut())
            .find(|screen| screen.id() == id)
    }

    /// Number of mounted screens, root included.
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }

    pub fn can_go_back(&self) -> bool {
        !self.pushed.is_empty()
    }
}

fn mount(route: Route, id: ScreenId) -> (Screen, FetchRequest) {
    match route {
        Route::ProductList => (
            Screen::ProductList(ProductListScreen::new(id)),
            FetchRequest::Products { screen: id },
        ),
        Route::ProductDetails { product } => {
            let request = FetchRequest::Product {
                screen: id,
                id: product.id,
            };
            (
                Screen::ProductDetails(ProductDetailsScreen::new(id, product)),
                request,
            )
        }
    }
}
