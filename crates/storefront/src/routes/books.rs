//! Single-book route handlers: the detail view and its quantity form.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::instrument;

use greenshelf_core::{Book, BookId, parse_quantity};

use crate::db::BookRepository;
use crate::error::{AppError, Result};
use crate::filters;
use crate::routes::format_price;
use crate::state::AppState;

/// Book display data for the detail and confirmation views.
#[derive(Clone)]
pub struct BookDetailView {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub cover: String,
    pub environmental_impact: i64,
}

impl From<&Book> for BookDetailView {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.as_i64(),
            title: book.title.clone(),
            description: book.description.clone(),
            price: format_price(book.price),
            cover: book.cover.clone(),
            environmental_impact: book.environmental_impact,
        }
    }
}

/// Quantity form data.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    #[serde(default)]
    pub quantity: String,
}

/// Single book page template.
#[derive(Template, WebTemplate)]
#[template(path = "books/show.html")]
pub struct BookShowTemplate {
    pub book: BookDetailView,
    pub quantity_error: Option<String>,
}

/// Confirmation template after a quantity is put in the basket.
#[derive(Template, WebTemplate)]
#[template(path = "books/added.html")]
pub struct BookAddedTemplate {
    pub book: BookDetailView,
    pub quantity: u32,
}

/// Fetch a book or produce an explicit not-found error.
///
/// The upstream implementation rendered an absent book straight into the
/// view; here an unknown id is a 404 at the HTTP boundary.
async fn fetch_book(state: &AppState, id: i64) -> Result<Book> {
    BookRepository::new(state.pool())
        .get(BookId::new(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("book {id}")))
}

/// Display the single book page with its quantity form.
pub async fn show(State(state): State<AppState>, Path(id): Path<i64>) -> Result<BookShowTemplate> {
    let book = fetch_book(&state, id).await?;

    Ok(BookShowTemplate {
        book: BookDetailView::from(&book),
        quantity_error: None,
    })
}

/// Handle a quantity submission for a book.
///
/// A valid quantity inserts or overwrites the basket entry and renders a
/// confirmation view; an invalid one re-renders the book page with the
/// error. Either way the request never fails outright.
#[instrument(skip(state, form), fields(book_id = id))]
pub async fn add(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<QuantityForm>,
) -> Result<Response> {
    let book = fetch_book(&state, id).await?;

    match parse_quantity(&form.quantity) {
        Ok(quantity) => {
            state.basket().set_quantity(book.id, quantity);
            tracing::info!(quantity, "basket entry set");

            Ok(BookAddedTemplate {
                book: BookDetailView::from(&book),
                quantity,
            }
            .into_response())
        }
        Err(err) => Ok(BookShowTemplate {
            book: BookDetailView::from(&book),
            quantity_error: Some(err.to_string()),
        }
        .into_response()),
    }
}
