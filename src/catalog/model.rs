use serde::Deserialize;
use std::fmt;

/// Price as it appears in list responses: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Amount(amount) => write!(f, "{}", amount),
            Price::Text(text) => f.write_str(text),
        }
    }
}

/// Abbreviated product record used by the list screen.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CatalogItem {
    pub id: u64,
    pub title: String,
    pub price: Price,
    pub description: String,
    pub thumbnail: String,
}

/// Envelope returned by the collection endpoint.
///
/// Only the first page is ever requested; `total` feeds the header counter.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductPage {
    pub products: Vec<CatalogItem>,
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating: f64,
    pub comment: String,
    pub date: String,
    pub reviewer_name: String,
    pub reviewer_email: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    pub created_at: String,
    pub updated_at: String,
    pub barcode: String,
    pub qr_code: String,
}

/// Full product record fetched per item.
///
/// Every field is required: a response missing any of them is rejected
/// instead of rendering a blank value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub thumbnail: String,
    pub category: String,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u64,
    pub tags: Vec<String>,
    pub brand: String,
    pub sku: String,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub warranty_information: String,
    pub shipping_information: String,
    pub availability_status: String,
    pub reviews: Vec<Review>,
    pub return_policy: String,
    pub minimum_order_quantity: u64,
    pub meta: ProductMeta,
    pub images: Vec<String>,
}
