//! Database migration command.
//!
//! Applies the embedded migrations from `crates/storefront/migrations/`.
//! The storefront does not migrate on startup; this command is the
//! explicit path to a usable schema.

use tracing::info;

use greenshelf_storefront::config::StorefrontConfig;
use greenshelf_storefront::db;

/// Run the storefront database migrations.
///
/// # Errors
///
/// Returns an error if configuration is invalid, the database cannot be
/// opened, or a migration fails.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = StorefrontConfig::from_env()?;

    info!(url = %config.database_url, "Connecting to database");
    let pool = db::create_pool(&config.database_url).await?;

    info!("Running migrations");
    sqlx::migrate!("../storefront/migrations").run(&pool).await?;

    info!("Migrations complete");
    Ok(())
}
