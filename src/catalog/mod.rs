//! Read-only client for the remote product catalog.
//!
//! Two endpoints are consumed:
//!
//! ```text
//! GET {base}/products        → ProductPage { products: [CatalogItem] }
//! GET {base}/products/{id}   → ProductDetail
//! ```
//!
//! Records are owned by the remote API; this module only decodes them.

mod client;
mod error;
mod model;

pub use client::CatalogClient;
pub use error::{CatalogError, ErrorKind};
pub use model::{CatalogItem, Dimensions, Price, ProductDetail, ProductMeta, ProductPage, Review};
