//! Due date extension operation.
//!
//! An extension pushes the due date of an open checkout forward by the
//! policy's extension length. Extensions must be requested while the loan
//! is still current: once the due date has passed, the request is refused
//! and the borrower has to return the book and settle the fine.

use chrono::NaiveDate;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::loan::TransactionId;
use crate::policy::CirculationPolicy;

/// Options for an extension operation.
#[derive(Debug, Clone, Copy)]
pub struct ExtendOptions {
    /// The checkout to extend.
    pub transaction: TransactionId,

    /// The date the extension is requested.
    pub request_date: NaiveDate,
}

impl ExtendOptions {
    /// Creates extension options for the given transaction and date.
    ///
    /// # Examples
    ///
    /// ```
    /// use biblio::operations::ExtendOptions;
    /// use biblio::TransactionId;
    /// use chrono::NaiveDate;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// let options = ExtendOptions::new(TransactionId::new(1), today);
    /// assert_eq!(options.request_date, today);
    /// ```
    #[must_use]
    pub const fn new(transaction: TransactionId, request_date: NaiveDate) -> Self {
        Self {
            transaction,
            request_date,
        }
    }
}

/// The result of a successful extension operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtendOutcome {
    /// The checkout that was extended.
    pub transaction: TransactionId,

    /// The due date after the extension.
    pub new_due_date: NaiveDate,
}

/// Extends the due date of an open checkout.
///
/// The extension adds the policy's extension length to the current due
/// date. A request made on the due date itself still succeeds; a request
/// made any later is refused as already overdue.
///
/// Only open checkouts can be extended: a reservation, a returned loan, or
/// an unknown transaction id is reported as not found.
///
/// # Errors
///
/// Returns an error if:
/// - No open checkout exists for the transaction id
/// - The loan is already overdue on the request date
/// - A database error occurs
pub fn extend_due_date(
    db: &mut Database,
    options: &ExtendOptions,
    policy: &CirculationPolicy,
) -> Result<ExtendOutcome> {
    let tx = db.begin_transaction()?;

    let loan = Database::get_open_checkout(&tx, options.transaction)?.ok_or_else(|| {
        Error::NotFound {
            resource: format!("transaction {}", options.transaction),
        }
    })?;

    let due_date = loan.due_date().ok_or_else(|| Error::DatabaseCorruption {
        details: format!("checkout {} has no due date", loan.id()),
    })?;

    if options.request_date > due_date {
        return Err(Error::AlreadyOverdue {
            transaction: options.transaction,
            due_date,
        });
    }

    let new_due_date = policy.extended_due_date(due_date);
    Database::update_due_date(&tx, options.transaction, new_due_date)?;

    tx.commit()?;

    Ok(ExtendOutcome {
        transaction: options.transaction,
        new_due_date,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_book, create_test_database, create_test_user};
    use crate::operations::{
        checkout, reserve, return_book, CheckoutOptions, ReserveOptions, ReturnOptions,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn checked_out_book(db: &mut Database) -> TransactionId {
        let user = create_test_user(db, "Ada");
        let book = create_test_book(db, "Dune");
        let policy = CirculationPolicy::default();
        checkout(db, &CheckoutOptions::new(user, book, date(2024, 1, 1)), &policy)
            .unwrap()
            .transaction
    }

    #[test]
    fn test_extend_before_due_date() {
        let mut db = create_test_database();
        let id = checked_out_book(&mut db);
        let policy = CirculationPolicy::default();

        // Due 2024-01-15, requested on 2024-01-10
        let outcome =
            extend_due_date(&mut db, &ExtendOptions::new(id, date(2024, 1, 10)), &policy).unwrap();
        assert_eq!(outcome.new_due_date, date(2024, 1, 22));

        let loan = Database::get_loan(db.connection(), id).unwrap().unwrap();
        assert_eq!(loan.due_date(), Some(date(2024, 1, 22)));
    }

    #[test]
    fn test_extend_on_due_date_succeeds() {
        let mut db = create_test_database();
        let id = checked_out_book(&mut db);
        let policy = CirculationPolicy::default();

        let outcome =
            extend_due_date(&mut db, &ExtendOptions::new(id, date(2024, 1, 15)), &policy).unwrap();
        assert_eq!(outcome.new_due_date, date(2024, 1, 22));
    }

    #[test]
    fn test_extend_after_due_date_rejected() {
        let mut db = create_test_database();
        let id = checked_out_book(&mut db);
        let policy = CirculationPolicy::default();

        let result =
            extend_due_date(&mut db, &ExtendOptions::new(id, date(2024, 1, 16)), &policy);
        match result.unwrap_err() {
            Error::AlreadyOverdue {
                transaction,
                due_date,
            } => {
                assert_eq!(transaction, id);
                assert_eq!(due_date, date(2024, 1, 15));
            }
            other => panic!("expected AlreadyOverdue, got {other:?}"),
        }

        // The due date is unchanged
        let loan = Database::get_loan(db.connection(), id).unwrap().unwrap();
        assert_eq!(loan.due_date(), Some(date(2024, 1, 15)));
    }

    #[test]
    fn test_extend_twice_compounds() {
        let mut db = create_test_database();
        let id = checked_out_book(&mut db);
        let policy = CirculationPolicy::default();

        extend_due_date(&mut db, &ExtendOptions::new(id, date(2024, 1, 10)), &policy).unwrap();
        // The first extension moved the due date to 2024-01-22, so a request
        // on 2024-01-20 is still current
        let outcome =
            extend_due_date(&mut db, &ExtendOptions::new(id, date(2024, 1, 20)), &policy).unwrap();
        assert_eq!(outcome.new_due_date, date(2024, 1, 29));
    }

    #[test]
    fn test_extend_unknown_transaction_not_found() {
        let mut db = create_test_database();
        let policy = CirculationPolicy::default();

        let result = extend_due_date(
            &mut db,
            &ExtendOptions::new(TransactionId::new(999), date(2024, 1, 10)),
            &policy,
        );
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_extend_returned_loan_not_found() {
        let mut db = create_test_database();
        let id = checked_out_book(&mut db);
        let policy = CirculationPolicy::default();

        return_book(&mut db, &ReturnOptions::new(id, date(2024, 1, 10)), &policy).unwrap();

        let result =
            extend_due_date(&mut db, &ExtendOptions::new(id, date(2024, 1, 11)), &policy);
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_extend_reservation_not_found() {
        let mut db = create_test_database();
        let user = create_test_user(&mut db, "Ada");
        let book = create_test_book(&mut db, "Dune");
        let policy = CirculationPolicy::default();

        let outcome = reserve(&mut db, &ReserveOptions::new(user, book), &policy).unwrap();

        let result = extend_due_date(
            &mut db,
            &ExtendOptions::new(outcome.transaction, date(2024, 1, 10)),
            &policy,
        );
        assert!(result.unwrap_err().is_not_found());
    }

    #[test]
    fn test_extend_respects_custom_extension_length() {
        let mut db = create_test_database();
        let id = checked_out_book(&mut db);
        let policy = CirculationPolicy::new().with_extension_days(30);

        let outcome =
            extend_due_date(&mut db, &ExtendOptions::new(id, date(2024, 1, 10)), &policy).unwrap();
        assert_eq!(outcome.new_due_date, date(2024, 2, 14));
    }
}
