//! The in-memory shopping basket.
//!
//! The basket is a mapping from book id to requested quantity. It lives for
//! the lifetime of the process and is never persisted; the storefront owns
//! one instance behind a mutex and injects it into handlers.
//!
//! The basket itself does not validate book ids. An entry whose book no
//! longer resolves in the catalog is tolerated and simply skipped when the
//! total is computed.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::types::BookId;

/// Largest quantity a single basket entry may hold.
pub const MAX_QUANTITY: u32 = 100;

/// Reasons a submitted quantity string is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    /// The field was empty or missing.
    #[error("quantity is required")]
    Empty,
    /// The field was not a base-10 integer.
    #[error("quantity must be a whole number")]
    NotAnInteger,
    /// The value was outside `0..=MAX_QUANTITY`.
    #[error("quantity must be between 0 and {MAX_QUANTITY}")]
    OutOfRange,
}

/// Parse a raw quantity form field into a valid quantity.
///
/// Accepts integers in `0..=`[`MAX_QUANTITY`]. The bound is numeric: the
/// upstream form validated the *length of the string* instead of the value,
/// which admitted quantities like 999; that is treated here as a validator
/// bug rather than behavior to keep (see DESIGN.md).
///
/// # Errors
///
/// Returns a [`QuantityError`] describing the first failed check. Never
/// panics, whatever the input.
pub fn parse_quantity(raw: &str) -> Result<u32, QuantityError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(QuantityError::Empty);
    }
    let quantity = trimmed
        .parse::<u32>()
        .map_err(|_| QuantityError::NotAnInteger)?;
    if quantity > MAX_QUANTITY {
        return Err(QuantityError::OutOfRange);
    }
    Ok(quantity)
}

/// A process-wide shopping basket: book id -> requested quantity.
///
/// Map semantics: at most one entry per book; a later submission overwrites
/// the earlier one rather than accumulating.
#[derive(Debug, Clone, Default)]
pub struct Basket {
    entries: HashMap<BookId, u32>,
}

impl Basket {
    /// Create an empty basket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite the entry for `book`.
    pub fn set_quantity(&mut self, book: BookId, quantity: u32) {
        self.entries.insert(book, quantity);
    }

    /// Remove the entry for `book` if present. Idempotent: removing an
    /// absent entry is a no-op, not an error.
    pub fn remove(&mut self, book: BookId) {
        self.entries.remove(&book);
    }

    /// The stored quantity for `book`, if any.
    #[must_use]
    pub fn quantity(&self, book: BookId) -> Option<u32> {
        self.entries.get(&book).copied()
    }

    /// Iterate over `(book id, quantity)` entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (BookId, u32)> + '_ {
        self.entries.iter().map(|(id, qty)| (*id, *qty))
    }

    /// Number of distinct books in the basket.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the basket has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compute the basket total from `(price, quantity)` lines.
///
/// Returns Σ(price × quantity) rounded to two decimal places, or `None`
/// when the rounded sum is exactly zero. The absence (rather than a zero)
/// lets the view layer distinguish "nothing to charge" from a real price.
/// Order-independent over the input lines.
#[must_use]
pub fn total<I>(lines: I) -> Option<Decimal>
where
    I: IntoIterator<Item = (Decimal, u32)>,
{
    let sum: Decimal = lines
        .into_iter()
        .map(|(price, quantity)| price * Decimal::from(quantity))
        .sum();
    let rounded = sum.round_dp(2);
    if rounded.is_zero() { None } else { Some(rounded) }
}
