//! Book types for catalog entries.
//!
//! This module provides the catalog-entry entity and its identifier newtype.
//! Availability is the single piece of inventory state: a book is available
//! until an open checkout references it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::loan::ValidationError;

/// A unique identifier for a catalog entry.
///
/// Wraps the `SQLite` rowid assigned when the book is added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(i64);

impl BookId {
    /// Creates a book id from a raw database rowid.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A book in the catalog.
///
/// The `available` flag is mutated only by circulation operations: checkout
/// clears it, return sets it. Reservations never touch it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    available: bool,
}

impl Book {
    /// Assembles a book from stored fields.
    #[must_use]
    pub const fn new(id: BookId, title: String, author: String, available: bool) -> Self {
        Self {
            id,
            title,
            author,
            available,
        }
    }

    /// Returns the book id.
    #[must_use]
    pub const fn id(&self) -> BookId {
        self.id
    }

    /// Returns the book's title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the book's author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns whether the book is available for checkout.
    #[must_use]
    pub const fn available(&self) -> bool {
        self.available
    }
}

/// A catalog addition request, validated before insertion.
///
/// New books always start out available.
///
/// # Examples
///
/// ```
/// use biblio::NewBook;
///
/// let book = NewBook::new("Dune", "Frank Herbert");
/// assert!(book.is_ok());
///
/// let invalid = NewBook::new("  ", "Frank Herbert");
/// assert!(invalid.is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    /// The book's title.
    pub title: String,
    /// The book's author.
    pub author: String,
}

impl NewBook {
    /// Creates a validated catalog addition request.
    ///
    /// Title and author are trimmed of surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns an error if the title or author is empty after trimming.
    pub fn new(title: &str, author: &str) -> Result<Self, ValidationError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ValidationError {
                field: "title".into(),
                message: "title must be non-empty after trimming whitespace".into(),
            });
        }

        let author = author.trim();
        if author.is_empty() {
            return Err(ValidationError {
                field: "author".into(),
                message: "author must be non-empty after trimming whitespace".into(),
            });
        }

        Ok(Self {
            title: title.to_string(),
            author: author.to_string(),
        })
    }
}
