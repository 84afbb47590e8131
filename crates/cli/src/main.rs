//! Greenshelf CLI - Database migrations and catalog management.
//!
//! # Usage
//!
//! ```bash
//! # Create the database schema
//! greenshelf-cli migrate
//!
//! # Populate the catalog with the sample books
//! greenshelf-cli seed
//!
//! # Wipe and repopulate the catalog
//! greenshelf-cli seed --clear
//! ```
//!
//! The database location comes from `GREENSHELF_DATABASE_URL` (falling
//! back to `DATABASE_URL`, then to `sqlite://greenshelf.db`), the same
//! resolution the storefront uses.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "greenshelf-cli")]
#[command(author, version, about = "Greenshelf CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the catalog with sample books
    Seed {
        /// Clear existing books before seeding
        #[arg(long)]
        clear: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { clear } => commands::seed::run(clear).await?,
    }
    Ok(())
}
