//! Greenshelf Core - Shared domain library.
//!
//! This crate provides the domain types and logic used across all
//! Greenshelf components:
//! - `storefront` - Public-facing bookstore site
//! - `cli` - Command-line tools for migrations and catalog seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP. This keeps it lightweight and fully testable without a
//! running server or database.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs
//! - [`catalog`] - The `Book` record and catalog sort orders
//! - [`basket`] - The in-memory shopping basket and its totaling rules
//! - [`card`] - The checkout payment-card validator

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod basket;
pub mod card;
pub mod catalog;
pub mod types;

pub use basket::{Basket, MAX_QUANTITY, QuantityError, parse_quantity, total};
pub use card::{CardFields, CardOutcome, validate};
pub use catalog::{Book, SortOrder};
pub use types::BookId;
