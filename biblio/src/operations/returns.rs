//! Return operation.
//!
//! Returning a book closes the checkout, assesses any late and damage
//! fees, and makes the book available again.

use chrono::NaiveDate;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::loan::TransactionId;
use crate::policy::CirculationPolicy;

/// Options for a return operation.
#[derive(Debug, Clone, Copy)]
pub struct ReturnOptions {
    /// The checkout being closed.
    pub transaction: TransactionId,

    /// The date the book is handed back.
    pub return_date: NaiveDate,

    /// Whether the book came back damaged.
    pub damaged: bool,
}

impl ReturnOptions {
    /// Creates return options for the given transaction and date.
    ///
    /// The damaged flag defaults to false.
    ///
    /// # Examples
    ///
    /// ```
    /// use biblio::operations::ReturnOptions;
    /// use biblio::TransactionId;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
    /// let options = ReturnOptions::new(TransactionId::new(1), today).with_damaged(true);
    /// assert!(options.damaged);
    /// ```
    #[must_use]
    pub const fn new(transaction: TransactionId, return_date: NaiveDate) -> Self {
        Self {
            transaction,
            return_date,
            damaged: false,
        }
    }

    /// Sets the damaged flag.
    #[must_use]
    pub const fn with_damaged(mut self, damaged: bool) -> Self {
        self.damaged = damaged;
        self
    }
}

/// The result of a successful return operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnOutcome {
    /// The checkout that was closed.
    pub transaction: TransactionId,

    /// The fine assessed, in whole currency units.
    pub fine: i64,

    /// Whether the book was recorded as damaged.
    pub damaged: bool,
}

/// Processes the return of a checked out book.
///
/// The fine is the per-day late fee for each whole day past the due date,
/// plus the flat damage fee when the book comes back damaged. An on-time,
/// undamaged return carries no fine. The book becomes available again.
///
/// Only open checkouts can be returned: a reservation, an already returned
/// loan, or an unknown transaction id is reported as not found.
///
/// # Errors
///
/// Returns an error if:
/// - No open checkout exists for the transaction id
/// - A database error occurs
pub fn return_book(
    db: &mut Database,
    options: &ReturnOptions,
    policy: &CirculationPolicy,
) -> Result<ReturnOutcome> {
    let tx = db.begin_transaction()?;

    let loan = Database::get_open_checkout(&tx, options.transaction)?.ok_or_else(|| {
        Error::NotFound {
            resource: format!("transaction {}", options.transaction),
        }
    })?;

    let due_date = loan.due_date().ok_or_else(|| Error::DatabaseCorruption {
        details: format!("checkout {} has no due date", loan.id()),
    })?;

    let fine = policy.late_fine(due_date, options.return_date, options.damaged);

    Database::mark_returned(&tx, options.transaction, fine, options.damaged)?;
    Database::set_book_available(&tx, loan.book_id(), true)?;

    tx.commit()?;

    Ok(ReturnOutcome {
        transaction: options.transaction,
        fine,
        damaged: options.damaged,
    })
}
