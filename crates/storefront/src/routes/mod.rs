//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                  - Catalog listing (?sort_by=<key>)
//! GET  /health            - Health check (in main.rs)
//!
//! # Books
//! GET  /book/{id}         - Single book view with quantity form
//! POST /book/{id}         - Put a quantity of the book in the basket
//!
//! # Basket
//! GET  /basket            - Basket contents and total
//! GET  /remove/{id}       - Remove entry, redirect to /basket
//! POST /remove/{id}       - Same as GET (both verbs are accepted)
//!
//! # Checkout
//! GET  /checkout          - Checkout form
//! POST /checkout          - Validate card fields; redirect to /success
//! GET  /success           - Terminal confirmation page
//! ```

pub mod basket;
pub mod books;
pub mod catalog;
pub mod checkout;

use axum::{
    Router,
    routing::{get, post},
};
use rust_decimal::Decimal;

use crate::state::AppState;

/// Format a decimal amount as a display price string.
fn format_price(amount: Decimal) -> String {
    format!("${amount:.2}")
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog listing
        .route("/", get(catalog::index))
        // Single book view and quantity submission
        .route("/book/{id}", get(books::show).post(books::add))
        // Basket
        .route("/basket", get(basket::show))
        .route("/remove/{id}", get(basket::remove).post(basket::remove))
        // Checkout
        .route("/checkout", get(checkout::form).post(checkout::submit))
        .route("/success", get(checkout::success))
}
