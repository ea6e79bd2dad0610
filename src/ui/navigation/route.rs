use crate::catalog::CatalogItem;

/// Identity of one mounted screen instance.
///
/// A screen that is popped and pushed again gets a new id, so results
/// addressed to the old instance can be told apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(u64);

impl ScreenId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

/// Named screens and their required input.
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    /// Product collection. No input.
    ProductList,
    /// One product. Receives the list item that was activated.
    ProductDetails { product: CatalogItem },
}

impl Route {
    pub const PRODUCT_LIST_TITLE: &'static str = "Product Page";
    pub const PRODUCT_DETAILS_TITLE: &'static str = "Product Details";

    pub fn title(&self) -> &'static str {
        match self {
            Route::ProductList => Self::PRODUCT_LIST_TITLE,
            Route::ProductDetails { .. } => Self::PRODUCT_DETAILS_TITLE,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Push(Route),
    Pop,
}
