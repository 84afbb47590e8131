//! Catalog listing route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use serde::Deserialize;

use greenshelf_core::{Book, SortOrder};

use crate::db::BookRepository;
use crate::error::Result;
use crate::filters;
use crate::routes::format_price;
use crate::state::AppState;

/// Book display data for the catalog grid.
#[derive(Clone)]
pub struct BookCardView {
    pub id: i64,
    pub title: String,
    pub price: String,
    pub cover: String,
    pub environmental_impact: i64,
}

impl From<&Book> for BookCardView {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.as_i64(),
            title: book.title.clone(),
            price: format_price(book.price),
            cover: book.cover.clone(),
            environmental_impact: book.environmental_impact,
        }
    }
}

/// Catalog listing query parameters.
#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    pub sort_by: Option<String>,
}

/// Catalog listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogTemplate {
    pub books: Vec<BookCardView>,
}

/// Display the catalog listing, ordered per `sort_by`.
///
/// Unrecognized or absent sort keys fall back to the natural (id) order.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<CatalogTemplate> {
    let order = SortOrder::parse(query.sort_by.as_deref());
    let books = BookRepository::new(state.pool()).list(order).await?;

    Ok(CatalogTemplate {
        books: books.iter().map(BookCardView::from).collect(),
    })
}
