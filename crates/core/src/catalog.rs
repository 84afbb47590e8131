//! The catalog: `Book` records and the fixed set of listing sort orders.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::BookId;

/// A purchasable book from the catalog.
///
/// Books are created by catalog seeding and immutable thereafter; they are
/// never deleted while the store is running.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Stable primary key.
    pub id: BookId,
    /// Title, unique across the catalog.
    pub title: String,
    /// Free-text description shown on the single-book page.
    pub description: String,
    /// Non-negative price in the store currency.
    pub price: Decimal,
    /// Path to the cover image, served under `/static`.
    pub cover: String,
    /// Environmental impact score (lower is greener).
    pub environmental_impact: i64,
}

/// Sort order for the catalog listing.
///
/// Parsed from the `sort_by` query parameter; anything unrecognized (or an
/// absent parameter) falls back to [`SortOrder::Natural`], the store's
/// insertion/id order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Insertion (id) order.
    #[default]
    Natural,
    /// Alphabetical by title (`sort_by=name`).
    Title,
    /// Cheapest first (`sort_by=price_low_to_high`).
    PriceLowToHigh,
    /// Most expensive first (`sort_by=price_high_to_low`).
    PriceHighToLow,
    /// Greenest first (`sort_by=environmental_impact_low_to_high`).
    ImpactLowToHigh,
    /// Least green first (`sort_by=environmental_impact_high_to_low`).
    ImpactHighToLow,
}

impl SortOrder {
    /// Parse a `sort_by` query value.
    ///
    /// Unrecognized or absent keys map to [`SortOrder::Natural`] rather
    /// than an error; an unknown sort is not a client mistake worth 400ing
    /// over.
    #[must_use]
    pub fn parse(key: Option<&str>) -> Self {
        match key {
            Some("name") => Self::Title,
            Some("price_low_to_high") => Self::PriceLowToHigh,
            Some("price_high_to_low") => Self::PriceHighToLow,
            Some("environmental_impact_low_to_high") => Self::ImpactLowToHigh,
            Some("environmental_impact_high_to_low") => Self::ImpactHighToLow,
            _ => Self::Natural,
        }
    }

    /// The query-string key for this order, used to build sort links.
    #[must_use]
    pub const fn as_query_key(self) -> Option<&'static str> {
        match self {
            Self::Natural => None,
            Self::Title => Some("name"),
            Self::PriceLowToHigh => Some("price_low_to_high"),
            Self::PriceHighToLow => Some("price_high_to_low"),
            Self::ImpactLowToHigh => Some("environmental_impact_low_to_high"),
            Self::ImpactHighToLow => Some("environmental_impact_high_to_low"),
        }
    }
}
