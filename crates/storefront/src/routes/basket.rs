//! Basket route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::instrument;

use greenshelf_core::{Book, BookId, total};

use crate::db::BookRepository;
use crate::error::Result;
use crate::filters;
use crate::routes::format_price;
use crate::state::AppState;

/// Basket line display data.
#[derive(Clone)]
pub struct BasketItemView {
    pub book_id: i64,
    pub title: String,
    pub cover: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_price: String,
}

impl BasketItemView {
    fn new(book: &Book, quantity: u32) -> Self {
        Self {
            book_id: book.id.as_i64(),
            title: book.title.clone(),
            cover: book.cover.clone(),
            quantity,
            unit_price: format_price(book.price),
            line_price: format_price(book.price * rust_decimal::Decimal::from(quantity)),
        }
    }
}

/// Basket page template.
#[derive(Template, WebTemplate)]
#[template(path = "basket/show.html")]
pub struct BasketTemplate {
    pub items: Vec<BasketItemView>,
    /// Formatted total, absent when the basket is empty or sums to zero.
    pub total: Option<String>,
}

/// Display the basket contents and total.
///
/// Entries whose book no longer resolves in the catalog are skipped, not
/// errors. The total is absent (not zero) when the rounded sum is 0.00.
pub async fn show(State(state): State<AppState>) -> Result<BasketTemplate> {
    // Snapshot under the lock; the guard must not be held across awaits.
    let mut entries: Vec<(BookId, u32)> = state.basket().entries().collect();
    entries.sort_by_key(|(id, _)| *id);

    let repo = BookRepository::new(state.pool());
    let mut items = Vec::with_capacity(entries.len());
    let mut lines = Vec::with_capacity(entries.len());

    for (book_id, quantity) in entries {
        if let Some(book) = repo.get(book_id).await? {
            items.push(BasketItemView::new(&book, quantity));
            lines.push((book.price, quantity));
        }
    }

    Ok(BasketTemplate {
        items,
        total: total(lines).map(format_price),
    })
}

/// Remove a basket entry and redirect back to the basket.
///
/// Idempotent: removing an absent entry is a no-op. Accepted on both GET
/// and POST, as the upstream surface did.
#[instrument(skip(state), fields(book_id = id))]
pub async fn remove(State(state): State<AppState>, Path(id): Path<i64>) -> Redirect {
    state.basket().remove(BookId::new(id));
    Redirect::to("/basket")
}
