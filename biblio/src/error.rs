//! Error types for the biblio library.
//!
//! This module provides a comprehensive error hierarchy for all operations
//! in the biblio library, using `thiserror` for ergonomic error handling.

use chrono::NaiveDate;
use thiserror::Error;

use crate::book::BookId;
use crate::loan::TransactionId;

/// Result type alias for operations that may fail with a biblio error.
///
/// # Examples
///
/// ```
/// use biblio::{Error, Result};
///
/// fn example_operation() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the biblio library.
///
/// This enum encompasses all possible error conditions that can occur
/// during circulation operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A due date extension was requested after the loan became overdue.
    #[error("transaction {transaction} is already overdue (due {due_date})")]
    AlreadyOverdue {
        /// The transaction that could not be extended.
        transaction: TransactionId,
        /// The due date that has already passed.
        due_date: NaiveDate,
    },

    /// The requested book is not available for checkout.
    #[error("book {book} is not available")]
    BookUnavailable {
        /// The book that is currently checked out.
        book: BookId,
    },

    /// A reservation conflict occurred.
    #[error("reservation conflict: {details}")]
    ReservationConflict {
        /// Details about the conflict.
        details: String,
    },

    /// Invalid input was provided for a field.
    #[error("invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },
}

impl From<crate::loan::ValidationError> for Error {
    fn from(err: crate::loan::ValidationError) -> Self {
        Self::InvalidInput {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates a missing resource.
    ///
    /// # Examples
    ///
    /// ```
    /// use biblio::Error;
    ///
    /// let err = Error::NotFound { resource: "transaction 7".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error indicates lock contention on the database file.
    ///
    /// True when the underlying `SQLite` error is "busy" or "locked",
    /// which happens when another writer held the lock past the busy
    /// timeout.
    #[must_use]
    pub fn is_lock_contention(&self) -> bool {
        match self {
            Self::Database(rusqlite::Error::SqliteFailure(sqlite_err, _)) => matches!(
                sqlite_err.code,
                rusqlite::ErrorCode::DatabaseBusy | rusqlite::ErrorCode::DatabaseLocked
            ),
            _ => false,
        }
    }

    /// Check if error indicates an overdue loan.
    ///
    /// # Examples
    ///
    /// ```
    /// use biblio::{Error, TransactionId};
    /// use chrono::NaiveDate;
    ///
    /// let err = Error::AlreadyOverdue {
    ///     transaction: TransactionId::new(7),
    ///     due_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    /// };
    /// assert!(err.is_already_overdue());
    /// ```
    #[must_use]
    pub fn is_already_overdue(&self) -> bool {
        matches!(self, Self::AlreadyOverdue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = Error::NotFound {
            resource: "transaction 42".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("not found"));
        assert!(display.contains("transaction 42"));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_already_overdue_error() {
        let err = Error::AlreadyOverdue {
            transaction: TransactionId::new(3),
            due_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        };
        let display = format!("{err}");
        assert!(display.contains("already overdue"));
        assert!(display.contains("2024-01-15"));
        assert!(err.is_already_overdue());
    }

    #[test]
    fn test_book_unavailable_error() {
        let err = Error::BookUnavailable {
            book: BookId::new(9),
        };
        let display = format!("{err}");
        assert!(display.contains("not available"));
        assert!(display.contains('9'));
    }

    #[test]
    fn test_reservation_conflict_error() {
        let err = Error::ReservationConflict {
            details: "book already reserved by this user".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("reservation conflict"));
        assert!(display.contains("already reserved"));
    }

    #[test]
    fn test_invalid_input_error() {
        let err = Error::InvalidInput {
            field: "title".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid input"));
        assert!(display.contains("title"));
        assert!(display.contains("must be non-empty"));
    }

    #[test]
    fn test_database_corruption_error() {
        let err = Error::DatabaseCorruption {
            details: "invalid schema version".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("corruption"));
        assert!(display.contains("invalid schema version"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        let display = format!("{err}");
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_validation_error_conversion() {
        let validation = crate::loan::ValidationError {
            field: "name".to_string(),
            message: "must be non-empty".to_string(),
        };
        let err: Error = validation.into();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Err(Error::NotFound {
                resource: "test".to_string(),
            })
        }

        assert!(returns_result().is_err());
    }
}
