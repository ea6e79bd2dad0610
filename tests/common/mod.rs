//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_catalog;

use catalog_browser::catalog::{CatalogItem, Price, ProductDetail, ProductPage};
use catalog_browser::config::UiConfig;
use catalog_browser::ui::app::App;
use catalog_browser::ui::fetcher::{fetch_channel, FetchReceiver, FetchRequest};
use catalog_browser::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use serde_json::{json, Value};

/// A list response in dummyjson's shape.
pub fn products_json(ids: &[u64]) -> Value {
    let products: Vec<Value> = ids
        .iter()
        .map(|id| {
            json!({
                "id": id,
                "title": format!("Product {id}"),
                "price": *id as f64 * 10.0 + 0.5,
                "description": format!("Description of product {id}"),
                "thumbnail": format!("https://cdn.example/{id}/thumbnail.png"),
                "category": "misc",
            })
        })
        .collect();
    json!({
        "products": products,
        "total": 194,
        "skip": 0,
        "limit": ids.len(),
    })
}

/// A complete product document.
pub fn detail_json(id: u64) -> Value {
    json!({
        "id": id,
        "title": "Essence Mascara Lash Princess",
        "description": "A popular mascara.",
        "category": "beauty",
        "price": 9.99,
        "discountPercentage": 7.17,
        "rating": 4.94,
        "stock": 5,
        "tags": ["beauty", "mascara"],
        "brand": "Essence",
        "sku": "RCH45Q1A",
        "weight": 2,
        "dimensions": { "width": 23.17, "height": 14.43, "depth": 28.01 },
        "warrantyInformation": "1 month warranty",
        "shippingInformation": "Ships in 1 month",
        "availabilityStatus": "Low Stock",
        "reviews": [
            {
                "rating": 2,
                "comment": "Very unhappy with my purchase!",
                "date": "2024-05-23T08:56:21.618Z",
                "reviewerName": "John Doe",
                "reviewerEmail": "john.doe@x.dummyjson.com"
            },
            {
                "rating": 5,
                "comment": "Very satisfied!",
                "date": "2024-05-23T08:56:21.618Z",
                "reviewerName": "Scarlett Wright",
                "reviewerEmail": "scarlett.wright@x.dummyjson.com"
            }
        ],
        "returnPolicy": "30 days return policy",
        "minimumOrderQuantity": 24,
        "meta": {
            "createdAt": "2024-05-23T08:56:21.618Z",
            "updatedAt": "2024-05-23T08:56:21.618Z",
            "barcode": "9164035109868",
            "qrCode": "https://assets.dummyjson.com/public/qr-code.png"
        },
        "images": [
            "https://cdn.example/1/1.png",
            "https://cdn.example/1/2.png"
        ],
        "thumbnail": "https://cdn.example/1/thumbnail.png"
    })
}

pub fn page(ids: &[u64]) -> ProductPage {
    serde_json::from_value(products_json(ids)).expect("valid page")
}

pub fn detail(id: u64) -> ProductDetail {
    serde_json::from_value(detail_json(id)).expect("valid detail")
}

pub fn item(id: u64) -> CatalogItem {
    CatalogItem {
        id,
        title: format!("Product {id}"),
        price: Price::Amount(id as f64),
        description: format!("Description of product {id}"),
        thumbnail: format!("https://cdn.example/{id}/thumbnail.png"),
    }
}

/// App with its fetch queue. The startup request is still queued.
pub fn make_app(show_errors: bool) -> (App, FetchReceiver) {
    let (tx, rx) = fetch_channel();
    let config = UiConfig {
        show_errors,
        ..UiConfig::default()
    };
    (App::new(&config, tx), rx)
}

/// Pop the next queued request, failing if there is none.
pub fn next_request(rx: &mut FetchReceiver) -> FetchRequest {
    rx.try_recv().expect("a fetch request should be queued")
}

/// Draw one frame and return the screen as text rows.
pub fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("test terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    buffer
        .content
        .chunks(buffer.area.width as usize)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect()
}

pub fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}
