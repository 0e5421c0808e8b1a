//! Checkout operation.
//!
//! Issuing a book opens a loan with a lending window computed from the
//! policy and marks the book unavailable until it comes back.

use chrono::NaiveDate;

use crate::book::BookId;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::loan::{LoanKind, TransactionId};
use crate::policy::CirculationPolicy;
use crate::user::UserId;

use super::{require_book, require_user};

/// Options for a checkout operation.
#[derive(Debug, Clone, Copy)]
pub struct CheckoutOptions {
    /// The borrowing user.
    pub user: UserId,

    /// The book to issue.
    pub book: BookId,

    /// The date the checkout takes effect.
    pub checkout_date: NaiveDate,
}

impl CheckoutOptions {
    /// Creates checkout options for the given user, book, and date.
    ///
    /// # Examples
    ///
    /// ```
    /// use biblio::operations::CheckoutOptions;
    /// use biblio::{BookId, UserId};
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let options = CheckoutOptions::new(UserId::new(1), BookId::new(2), today);
    /// assert_eq!(options.checkout_date, today);
    /// ```
    #[must_use]
    pub const fn new(user: UserId, book: BookId, checkout_date: NaiveDate) -> Self {
        Self {
            user,
            book,
            checkout_date,
        }
    }
}

/// The result of a successful checkout operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutOutcome {
    /// The id of the newly created checkout record.
    pub transaction: TransactionId,

    /// The date the book is due back.
    pub due_date: NaiveDate,
}

/// Checks a book out to a user.
///
/// The due date is the checkout date plus the policy's loan period. When
/// the policy enforces availability, checking out a book that is already
/// out is rejected; either way a successful checkout marks the book
/// unavailable until it is returned.
///
/// # Errors
///
/// Returns an error if:
/// - The user or book does not exist
/// - The policy enforces availability and the book is already out
/// - A database error occurs
pub fn checkout(
    db: &mut Database,
    options: &CheckoutOptions,
    policy: &CirculationPolicy,
) -> Result<CheckoutOutcome> {
    let tx = db.begin_transaction()?;

    require_user(&tx, options.user)?;
    let book = require_book(&tx, options.book)?;

    if policy.enforce_availability && !book.available() {
        return Err(Error::BookUnavailable { book: book.id() });
    }

    let due_date = policy.due_date(options.checkout_date);
    let kind = LoanKind::Checkout {
        checkout_date: options.checkout_date,
        due_date,
    };

    let transaction = Database::insert_loan(&tx, options.user, options.book, &kind)?;
    Database::set_book_available(&tx, options.book, false)?;

    tx.commit()?;

    Ok(CheckoutOutcome {
        transaction,
        due_date,
    })
}
