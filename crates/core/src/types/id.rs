//! Newtype IDs for type-safe entity references.

use serde::{Deserialize, Serialize};

/// A type-safe identifier for a [`Book`](crate::catalog::Book).
///
/// Wraps the `i64` primary key of the `books` table so book ids cannot be
/// confused with other integers. With the `sqlite` feature enabled the
/// wrapper maps transparently onto an `INTEGER` column.
///
/// # Example
///
/// ```
/// use greenshelf_core::BookId;
///
/// let id = BookId::new(7);
/// assert_eq!(id.as_i64(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
#[cfg_attr(feature = "sqlite", derive(sqlx::Type))]
#[cfg_attr(feature = "sqlite", sqlx(transparent))]
pub struct BookId(i64);

impl BookId {
    /// Create a new ID from an i64 value.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for BookId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BookId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<BookId> for i64 {
    fn from(id: BookId) -> Self {
        id.0
    }
}
