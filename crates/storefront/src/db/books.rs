//! Book repository for catalog queries.
//!
//! The catalog is read-only from the storefront's point of view: books are
//! seeded by the CLI and never written here. Queries use the runtime sqlx
//! API with `FromRow` rows so the crate builds without a live database.

use rust_decimal::Decimal;
use sqlx::SqlitePool;

use greenshelf_core::{Book, BookId, SortOrder};

use super::RepositoryError;

const SELECT_BOOKS: &str = "SELECT id, title, description, price, cover, environmental_impact FROM books";

/// Raw `books` row before conversion into the domain type.
#[derive(Debug, sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    description: String,
    price: f64,
    cover: String,
    environmental_impact: i64,
}

impl BookRow {
    /// Convert a stored row into the domain `Book`.
    ///
    /// Fails with `DataCorruption` if the stored price is not a finite
    /// number (nothing legitimate writes NaN, but REAL admits it).
    fn into_book(self) -> Result<Book, RepositoryError> {
        let price = Decimal::from_f64_retain(self.price).ok_or_else(|| {
            RepositoryError::DataCorruption(format!(
                "book {} has unrepresentable price {}",
                self.id, self.price
            ))
        })?;

        Ok(Book {
            id: BookId::new(self.id),
            title: self.title,
            description: self.description,
            price: price.round_dp(2),
            cover: self.cover,
            environmental_impact: self.environmental_impact,
        })
    }
}

/// Repository for catalog database operations.
pub struct BookRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookRepository<'a> {
    /// Create a new book repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all books in the requested order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if a stored price is invalid.
    pub async fn list(&self, order: SortOrder) -> Result<Vec<Book>, RepositoryError> {
        // Reversed tiebreakers keep descending orders the exact reverse of
        // their ascending counterparts.
        let order_by = match order {
            SortOrder::Natural => "ORDER BY id",
            SortOrder::Title => "ORDER BY title",
            SortOrder::PriceLowToHigh => "ORDER BY price, id",
            SortOrder::PriceHighToLow => "ORDER BY price DESC, id DESC",
            SortOrder::ImpactLowToHigh => "ORDER BY environmental_impact, id",
            SortOrder::ImpactHighToLow => "ORDER BY environmental_impact DESC, id DESC",
        };
        let sql = format!("{SELECT_BOOKS} {order_by}");

        let rows: Vec<BookRow> = sqlx::query_as(&sql).fetch_all(self.pool).await?;

        rows.into_iter().map(BookRow::into_book).collect()
    }

    /// Get a single book by id, or `None` if the id does not resolve.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails, or
    /// `RepositoryError::DataCorruption` if the stored price is invalid.
    pub async fn get(&self, id: BookId) -> Result<Option<Book>, RepositoryError> {
        let row: Option<BookRow> = sqlx::query_as(&format!("{SELECT_BOOKS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        row.map(BookRow::into_book).transpose()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    /// In-memory database with the schema applied and a small fixture
    /// catalog. One connection only: each `sqlite::memory:` connection is
    /// its own database.
    async fn fixture_pool() -> SqlitePool {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        sqlx::migrate!("./migrations").run(&pool).await.unwrap();

        let books = [
            ("Walden", 8.50, 3),
            ("The Overstory", 12.99, 1),
            ("Silent Spring", 10.00, 2),
        ];
        for (title, price, impact) in books {
            sqlx::query(
                "INSERT INTO books (title, description, price, cover, environmental_impact)
                 VALUES (?, ?, ?, ?, ?)",
            )
            .bind(title)
            .bind("")
            .bind(price)
            .bind("/static/covers/placeholder.svg")
            .bind(impact)
            .execute(&pool)
            .await
            .unwrap();
        }

        pool
    }

    fn titles(books: &[Book]) -> Vec<&str> {
        books.iter().map(|b| b.title.as_str()).collect()
    }

    #[tokio::test]
    async fn list_natural_is_insertion_order() {
        let pool = fixture_pool().await;
        let books = BookRepository::new(&pool).list(SortOrder::Natural).await.unwrap();
        assert_eq!(titles(&books), ["Walden", "The Overstory", "Silent Spring"]);
    }

    #[tokio::test]
    async fn list_by_title() {
        let pool = fixture_pool().await;
        let books = BookRepository::new(&pool).list(SortOrder::Title).await.unwrap();
        assert_eq!(titles(&books), ["Silent Spring", "The Overstory", "Walden"]);
    }

    #[tokio::test]
    async fn price_orders_are_reverses_of_each_other() {
        let pool = fixture_pool().await;
        let repo = BookRepository::new(&pool);
        let ascending = repo.list(SortOrder::PriceLowToHigh).await.unwrap();
        let mut descending = repo.list(SortOrder::PriceHighToLow).await.unwrap();
        descending.reverse();
        assert_eq!(ascending, descending);
        assert_eq!(titles(&ascending), ["Walden", "Silent Spring", "The Overstory"]);
    }

    #[tokio::test]
    async fn impact_orders_sort_by_score() {
        let pool = fixture_pool().await;
        let repo = BookRepository::new(&pool);
        let greenest_first = repo.list(SortOrder::ImpactLowToHigh).await.unwrap();
        assert_eq!(
            titles(&greenest_first),
            ["The Overstory", "Silent Spring", "Walden"]
        );
        let mut reversed = repo.list(SortOrder::ImpactHighToLow).await.unwrap();
        reversed.reverse();
        assert_eq!(greenest_first, reversed);
    }

    #[tokio::test]
    async fn get_returns_book_with_two_decimal_price() {
        let pool = fixture_pool().await;
        let repo = BookRepository::new(&pool);
        let book = repo.get(BookId::new(2)).await.unwrap().unwrap();
        assert_eq!(book.title, "The Overstory");
        assert_eq!(book.price.to_string(), "12.99");
    }

    #[tokio::test]
    async fn get_missing_id_is_none() {
        let pool = fixture_pool().await;
        let repo = BookRepository::new(&pool);
        assert!(repo.get(BookId::new(999)).await.unwrap().is_none());
    }
}
