//! Catalog seeding command.
//!
//! Inserts the sample catalog. Idempotent: titles are unique, and
//! re-seeding skips books that already exist (`ON CONFLICT ... DO
//! NOTHING`), so running it twice is safe.

use tracing::info;

use greenshelf_storefront::config::StorefrontConfig;
use greenshelf_storefront::db;

/// Sample catalog: (title, description, price, impact score).
///
/// Covers all point at the bundled placeholder; drop real cover images
/// into `crates/storefront/static/covers/` and update rows to use them.
const SEED_BOOKS: &[(&str, &str, f64, i64)] = &[
    (
        "The Overstory",
        "Nine strangers are summoned by trees to save the continent's last acres of virgin forest.",
        12.99,
        1,
    ),
    (
        "Walden",
        "Thoreau's account of two years living simply in the woods by Walden Pond.",
        8.50,
        2,
    ),
    (
        "Silent Spring",
        "The book that documented the cost of pesticides and launched the environmental movement.",
        10.00,
        2,
    ),
    (
        "Braiding Sweetgrass",
        "Indigenous wisdom, scientific knowledge, and the teachings of plants.",
        14.25,
        1,
    ),
    (
        "The Hidden Life of Trees",
        "What trees feel, how they communicate, and why forests are social networks.",
        11.75,
        3,
    ),
    (
        "Desert Solitaire",
        "A season in the wilderness of the canyonlands, argued with wit and fury.",
        9.99,
        4,
    ),
    (
        "The Sixth Extinction",
        "An unnatural history of the die-off happening on our watch.",
        13.50,
        5,
    ),
    (
        "Entangled Life",
        "How fungi make our worlds, change our minds, and shape our futures.",
        12.00,
        2,
    ),
];

/// Seed the catalog with the sample books.
///
/// # Arguments
///
/// * `clear` - If true, delete all existing books first.
///
/// # Errors
///
/// Returns an error if configuration is invalid or a database operation
/// fails.
pub async fn run(clear: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;
    let pool = db::create_pool(&config.database_url).await?;

    if clear {
        let deleted = sqlx::query("DELETE FROM books").execute(&pool).await?;
        info!("Cleared {} existing books", deleted.rows_affected());
    }

    let mut inserted = 0u64;
    let mut skipped = 0u64;

    for (title, description, price, impact) in SEED_BOOKS {
        let result = sqlx::query(
            "INSERT INTO books (title, description, price, cover, environmental_impact)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(title) DO NOTHING",
        )
        .bind(title)
        .bind(description)
        .bind(price)
        .bind("/static/covers/placeholder.svg")
        .bind(impact)
        .execute(&pool)
        .await?;

        if result.rows_affected() > 0 {
            inserted += 1;
        } else {
            skipped += 1;
        }
    }

    info!("Seeding complete!");
    info!("  Books inserted: {inserted}");
    info!("  Books skipped (already exist): {skipped}");

    Ok(())
}
