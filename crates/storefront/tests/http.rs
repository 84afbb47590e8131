//! End-to-end tests for the storefront router.
//!
//! Each test builds a fresh app over an in-memory SQLite catalog and
//! drives it with `tower::ServiceExt::oneshot`, exercising the same
//! routing, extraction, and template rendering the binary uses.

#![allow(clippy::unwrap_used)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use http_body_util::BodyExt;
use sqlx::sqlite::SqlitePoolOptions;
use tower::ServiceExt;

use greenshelf_storefront::config::StorefrontConfig;
use greenshelf_storefront::routes;
use greenshelf_storefront::state::AppState;

/// A fresh app with two seeded books and an empty basket, plus the pool
/// backing it for tests that manipulate the catalog directly.
///
/// Book ids are assigned in insertion order: 1 = "The Overstory" ($12.99,
/// impact 1), 2 = "Walden" ($8.50, impact 3).
async fn app_with_pool() -> (Router, sqlx::SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::migrate!("./migrations").run(&pool).await.unwrap();

    for (title, price, impact) in [("The Overstory", 12.99, 1), ("Walden", 8.50, 3)] {
        sqlx::query(
            "INSERT INTO books (title, description, price, cover, environmental_impact)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(title)
        .bind("A book about trees.")
        .bind(price)
        .bind("/static/covers/placeholder.svg")
        .bind(impact)
        .execute(&pool)
        .await
        .unwrap();
    }

    let config = StorefrontConfig {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
    };

    let router = routes::routes().with_state(AppState::new(config, pool.clone()));
    (router, pool)
}

/// A fresh app where the test does not need the backing pool.
async fn app() -> Router {
    app_with_pool().await.0
}

async fn get(app: &Router, uri: &str) -> Response<Body> {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn post_form(app: &Router, uri: &str, body: &str) -> Response<Body> {
    app.clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn catalog_lists_all_books() {
    let app = app().await;
    let response = get(&app, "/").await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert!(html.contains("The Overstory"));
    assert!(html.contains("Walden"));
    assert!(html.contains("$12.99"));
}

#[tokio::test]
async fn catalog_sorts_by_price_descending() {
    let app = app().await;
    let html = body_text(get(&app, "/?sort_by=price_high_to_low").await).await;

    let overstory = html.find("The Overstory").unwrap();
    let walden = html.find("Walden").unwrap();
    assert!(overstory < walden, "most expensive book should come first");
}

#[tokio::test]
async fn catalog_ignores_unknown_sort_key() {
    let app = app().await;
    let response = get(&app, "/?sort_by=bogus").await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_book_is_404() {
    let app = app().await;
    assert_eq!(get(&app, "/book/999").await.status(), StatusCode::NOT_FOUND);

    let response = post_form(&app, "/book/999", "quantity=1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn basket_flow_add_total_remove() {
    let app = app().await;

    // Put 2 copies of book 1 in the basket.
    let response = post_form(&app, "/book/1", "quantity=2").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("Added to basket"));

    // The basket shows the line and the rounded total.
    let html = body_text(get(&app, "/basket").await).await;
    assert!(html.contains("The Overstory"));
    assert!(html.contains("$25.98"));

    // A second submission overwrites rather than accumulates.
    post_form(&app, "/book/1", "quantity=1").await;
    let html = body_text(get(&app, "/basket").await).await;
    assert!(html.contains("$12.99"));
    assert!(!html.contains("$25.98"));

    // Removing redirects back to the basket, which is now empty.
    let response = get(&app, "/remove/1").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/basket");

    let html = body_text(get(&app, "/basket").await).await;
    assert!(html.contains("Your basket is empty"));

    // Removing again is an idempotent no-op.
    let response = get(&app, "/remove/1").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn basket_skips_entries_whose_book_no_longer_resolves() {
    let (app, pool) = app_with_pool().await;

    post_form(&app, "/book/1", "quantity=1").await;
    post_form(&app, "/book/2", "quantity=3").await;

    // The catalog loses Walden while its basket entry remains.
    sqlx::query("DELETE FROM books WHERE id = ?")
        .bind(2_i64)
        .execute(&pool)
        .await
        .unwrap();

    // The dangling entry is skipped, not an error: the page renders with
    // only the surviving book, and the total covers just that line.
    let response = get(&app, "/basket").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("The Overstory"));
    assert!(!html.contains("Walden"));
    assert!(html.contains("$12.99"));
    assert!(!html.contains("$38.49"), "skipped entry must not count toward the total");
}

#[tokio::test]
async fn invalid_quantity_rerenders_form_without_touching_basket() {
    let app = app().await;

    let response = post_form(&app, "/book/1", "quantity=lots").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("whole number"));

    let response = post_form(&app, "/book/1", "quantity=999").await;
    let html = body_text(response).await;
    assert!(html.contains("between 0 and 100"));

    let html = body_text(get(&app, "/basket").await).await;
    assert!(html.contains("Your basket is empty"));
}

#[tokio::test]
async fn checkout_accepts_valid_card_and_redirects() {
    let app = app().await;
    let response = post_form(
        &app,
        "/checkout",
        "card_number=4111+1111-1111+1111&cardholder_name=A+Reader&month=04&year=2028&cvv=123",
    )
    .await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/success");

    let response = get(&app, "/success").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("Thank you"));
}

#[tokio::test]
async fn checkout_rejects_bad_card_with_error_flag() {
    let app = app().await;
    let response = post_form(
        &app,
        "/checkout",
        "card_number=123&cardholder_name=A+Reader&month=04&year=2028&cvv=123",
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("could not be validated"));
}

#[tokio::test]
async fn blank_checkout_submission_shows_no_error() {
    let app = app().await;
    let response = post_form(&app, "/checkout", "").await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(!html.contains("could not be validated"));
}
