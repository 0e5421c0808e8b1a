//! Loan types for circulation records.
//!
//! This module provides the circulation record entity. A loan is either a
//! reservation (no dates) or a checkout (with checkout and due dates); the
//! distinction is a tagged enum so a reservation carrying a due date is
//! unrepresentable.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::book::BookId;
use crate::user::UserId;

/// A unique identifier for a circulation record.
///
/// Wraps the `SQLite` rowid assigned when the loan is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(i64);

impl TransactionId {
    /// Creates a transaction id from a raw database rowid.
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

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The kind of a circulation record.
///
/// # Examples
///
/// ```
/// use biblio::LoanKind;
/// use chrono::NaiveDate;
///
/// let reservation = LoanKind::Reservation;
/// assert!(reservation.due_date().is_none());
///
/// let checkout = LoanKind::Checkout {
///     checkout_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     due_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
/// };
/// assert!(checkout.due_date().is_some());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum LoanKind {
    /// A hold on a book. Carries no dates and does not affect availability.
    Reservation,
    /// A physical checkout with a lending window.
    Checkout {
        /// The date the book was issued.
        checkout_date: NaiveDate,
        /// The date the book is due back.
        due_date: NaiveDate,
    },
}

impl LoanKind {
    /// Returns the checkout date, if this is a checkout.
    #[must_use]
    pub const fn checkout_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Reservation => None,
            Self::Checkout { checkout_date, .. } => Some(*checkout_date),
        }
    }

    /// Returns the due date, if this is a checkout.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Reservation => None,
            Self::Checkout { due_date, .. } => Some(*due_date),
        }
    }

    /// Returns true if this is a reservation.
    #[must_use]
    pub const fn is_reservation(&self) -> bool {
        matches!(self, Self::Reservation)
    }
}

/// A circulation record linking a user to a book.
///
/// # Examples
///
/// ```
/// use biblio::{BookId, Loan, LoanKind, TransactionId, UserId};
///
/// let loan = Loan::new(
///     TransactionId::new(1),
///     UserId::new(2),
///     BookId::new(3),
///     LoanKind::Reservation,
///     false,
///     0,
///     false,
/// );
/// assert!(loan.is_reservation());
/// assert!(!loan.returned());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    id: TransactionId,
    user_id: UserId,
    book_id: BookId,
    kind: LoanKind,
    returned: bool,
    fine: i64,
    damaged: bool,
}

impl Loan {
    /// Assembles a loan from stored fields.
    #[must_use]
    pub const fn new(
        id: TransactionId,
        user_id: UserId,
        book_id: BookId,
        kind: LoanKind,
        returned: bool,
        fine: i64,
        damaged: bool,
    ) -> Self {
        Self {
            id,
            user_id,
            book_id,
            kind,
            returned,
            fine,
            damaged,
        }
    }

    /// Returns the transaction id.
    #[must_use]
    pub const fn id(&self) -> TransactionId {
        self.id
    }

    /// Returns the borrowing user's id.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the borrowed book's id.
    #[must_use]
    pub const fn book_id(&self) -> BookId {
        self.book_id
    }

    /// Returns the loan kind.
    #[must_use]
    pub const fn kind(&self) -> &LoanKind {
        &self.kind
    }

    /// Returns whether the loan has been closed by a return.
    #[must_use]
    pub const fn returned(&self) -> bool {
        self.returned
    }

    /// Returns the fine assessed at return, in whole currency units.
    #[must_use]
    pub const fn fine(&self) -> i64 {
        self.fine
    }

    /// Returns whether the book came back damaged.
    #[must_use]
    pub const fn damaged(&self) -> bool {
        self.damaged
    }

    /// Returns true if this loan is a reservation.
    #[must_use]
    pub const fn is_reservation(&self) -> bool {
        self.kind.is_reservation()
    }

    /// Returns the due date, if this loan is a checkout.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.kind.due_date()
    }

    /// Returns the checkout date, if this loan is a checkout.
    #[must_use]
    pub const fn checkout_date(&self) -> Option<NaiveDate> {
        self.kind.checkout_date()
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_transaction_id_value() {
        let id = TransactionId::new(11);
        assert_eq!(id.value(), 11);
        assert_eq!(format!("{id}"), "11");
    }

    #[test]
    fn test_loan_kind_reservation_has_no_dates() {
        let kind = LoanKind::Reservation;
        assert!(kind.is_reservation());
        assert_eq!(kind.checkout_date(), None);
        assert_eq!(kind.due_date(), None);
    }

    #[test]
    fn test_loan_kind_checkout_dates() {
        let kind = LoanKind::Checkout {
            checkout_date: date(2024, 1, 1),
            due_date: date(2024, 1, 15),
        };
        assert!(!kind.is_reservation());
        assert_eq!(kind.checkout_date(), Some(date(2024, 1, 1)));
        assert_eq!(kind.due_date(), Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_loan_accessors() {
        let loan = Loan::new(
            TransactionId::new(1),
            UserId::new(2),
            BookId::new(3),
            LoanKind::Checkout {
                checkout_date: date(2024, 1, 1),
                due_date: date(2024, 1, 15),
            },
            false,
            0,
            false,
        );
        assert_eq!(loan.id(), TransactionId::new(1));
        assert_eq!(loan.user_id(), UserId::new(2));
        assert_eq!(loan.book_id(), BookId::new(3));
        assert!(!loan.returned());
        assert_eq!(loan.fine(), 0);
        assert!(!loan.damaged());
        assert!(!loan.is_reservation());
        assert_eq!(loan.due_date(), Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_loan_serde() {
        let loan = Loan::new(
            TransactionId::new(1),
            UserId::new(2),
            BookId::new(3),
            LoanKind::Reservation,
            false,
            0,
            false,
        );
        let json = serde_json::to_string(&loan).unwrap();
        let deserialized: Loan = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, loan);
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError {
            field: "title".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("title"));
        assert!(display.contains("must be non-empty"));
    }
}
