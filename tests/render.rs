mod common;

use catalog_browser::catalog::CatalogError;
use catalog_browser::ui::app::App;
use catalog_browser::ui::fetcher::FetchOutcome;
use catalog_browser::ui::navigation::ScreenId;
use common::{detail, detail_json, make_app, next_request, page, render_rows, screen_contains};

/// App showing the detail screen for product 1, still loading.
fn open_details(show_errors: bool) -> (App, ScreenId) {
    let (mut app, mut rx) = make_app(show_errors);
    let screen = next_request(&mut rx).screen();
    app.on_fetch(FetchOutcome::Products {
        screen,
        result: Ok(page(&[1, 2, 3])),
    });
    assert!(app.open_selected());
    let details = next_request(&mut rx).screen();
    (app, details)
}

#[test]
fn list_shows_header_and_cards() {
    let (mut app, mut rx) = make_app(false);
    let screen = next_request(&mut rx).screen();
    app.on_fetch(FetchOutcome::Products {
        screen,
        result: Ok(page(&[1, 2])),
    });

    let rows = render_rows(&app, 80, 24);

    assert!(screen_contains(&rows, "Product Page"));
    assert!(screen_contains(&rows, "2 of 194 products"));
    assert!(screen_contains(&rows, "Product 1"));
    assert!(screen_contains(&rows, "10.5"));
    assert!(screen_contains(&rows, "[image] https://cdn.example/1/thumbnail.png"));
    assert!(!screen_contains(&rows, "‹ Back"));
}

#[test]
fn loading_list_shows_spinner() {
    let (app, _rx) = make_app(false);
    let rows = render_rows(&app, 80, 24);
    assert!(screen_contains(&rows, "Loading…"));
}

#[test]
fn detail_fields_render_verbatim() {
    let (mut app, details) = open_details(false);
    app.on_fetch(FetchOutcome::Product {
        screen: details,
        id: 1,
        result: Ok(detail(1)),
    });

    let rows = render_rows(&app, 100, 60);

    for expected in [
        "‹ Back",
        "Product Details",
        "Essence Mascara Lash Princess",
        "Price: $9.99",
        "A popular mascara.",
        "Category: beauty",
        "Brand: Essence",
        "SKU: RCH45Q1A",
        "Weight: 2g",
        "Dimensions: 23.17 x 14.43 x 28.01 cm",
        "Warranty: 1 month warranty",
        "Shipping Information: Ships in 1 month",
        "Availability: Low Stock",
        "Return Policy: 30 days return policy",
        "Minimum Order Quantity: 24",
        "Discount: 7.17%",
        "Rating: 4.94",
        "Stock: 5",
        "Tags: beauty, mascara",
        "John Doe <john.doe@x.dummyjson.com>",
        "Very unhappy with my purchase!",
        "Barcode: 9164035109868",
        "[image] https://cdn.example/1/2.png",
    ] {
        assert!(screen_contains(&rows, expected), "missing {expected:?}");
    }
}

#[test]
fn empty_reviews_and_images_render_headers_only() {
    let mut body = detail_json(1);
    body["reviews"] = serde_json::json!([]);
    body["images"] = serde_json::json!([]);
    let bare = serde_json::from_value(body).unwrap();

    let (mut app, details) = open_details(false);
    app.on_fetch(FetchOutcome::Product {
        screen: details,
        id: 1,
        result: Ok(bare),
    });

    let rows = render_rows(&app, 100, 60);
    let header = rows
        .iter()
        .position(|row| row.trim() == "Images:")
        .expect("images header");
    assert!(rows[header + 1..].iter().all(|row| !row.contains("[image]")));
    assert!(screen_contains(&rows, "Reviews:"));
}

#[test]
fn failed_detail_shows_placeholder() {
    let (mut app, details) = open_details(false);
    app.on_fetch(FetchOutcome::Product {
        screen: details,
        id: 1,
        result: Err(CatalogError::Decode {
            url: "http://mock/products/1".to_string(),
            status: 404,
            source: serde_json::from_str::<u32>("{}").unwrap_err(),
        }),
    });

    let rows = render_rows(&app, 80, 24);
    assert!(screen_contains(&rows, "No product data available"));
    assert!(!screen_contains(&rows, "HTTP 404"));
}

#[test]
fn failed_detail_shows_error_when_enabled() {
    let (mut app, details) = open_details(true);
    app.on_fetch(FetchOutcome::Product {
        screen: details,
        id: 1,
        result: Err(CatalogError::Decode {
            url: "http://mock/products/1".to_string(),
            status: 404,
            source: serde_json::from_str::<u32>("{}").unwrap_err(),
        }),
    });

    let rows = render_rows(&app, 200, 24);
    let placeholder = rows
        .iter()
        .position(|row| row.contains("No product data available"))
        .expect("placeholder row");
    let message = rows
        .iter()
        .position(|row| row.contains("The catalog sent an unexpected response"))
        .expect("error row");
    assert!(placeholder < message);
    assert!(rows[message].contains("HTTP 404"));
}

#[test]
fn scrolling_to_the_end_reaches_last_image_on_narrow_terminal() {
    let (mut app, details) = open_details(false);
    app.on_fetch(FetchOutcome::Product {
        screen: details,
        id: 1,
        result: Ok(detail(1)),
    });
    app.on_resize(30, 16);

    app.scroll_details(10_000);
    let rows = render_rows(&app, 30, 16);
    assert!(screen_contains(&rows, "https://cdn.example/1/2.png"));
    assert!(screen_contains(&rows, "Images:"));

    // The offset stops at the end, so one step up scrolls immediately.
    app.scroll_details(-1);
    let rows = render_rows(&app, 30, 16);
    assert!(!screen_contains(&rows, "https://cdn.example/1/2.png"));
}

#[test]
fn unknown_size_still_renders_the_end() {
    let (mut app, details) = open_details(false);
    app.on_fetch(FetchOutcome::Product {
        screen: details,
        id: 1,
        result: Ok(detail(1)),
    });

    app.scroll_details(10_000);
    let rows = render_rows(&app, 30, 16);
    assert!(screen_contains(&rows, "https://cdn.example/1/2.png"));
}

#[test]
fn loading_detail_shows_list_item() {
    let (app, _details) = open_details(false);
    let rows = render_rows(&app, 80, 24);
    assert!(screen_contains(&rows, "Product 1"));
    assert!(screen_contains(&rows, "Loading…"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let (mut app, details) = open_details(true);
    app.on_fetch(FetchOutcome::Product {
        screen: details,
        id: 1,
        result: Ok(detail(1)),
    });
    for (width, height) in [(1, 1), (10, 3), (20, 7)] {
        render_rows(&app, width, height);
    }
}
