//! Reserve operation.
//!
//! A reservation is a hold: it records interest in a book without issuing
//! it. Reservations carry no dates and never change a book's availability,
//! so an unavailable book can still be reserved.

use crate::book::BookId;
use crate::database::Database;
use crate::error::{Error, Result};
use crate::loan::{LoanKind, TransactionId};
use crate::policy::CirculationPolicy;
use crate::user::UserId;

use super::{require_book, require_user};

/// Options for a reserve operation.
#[derive(Debug, Clone, Copy)]
pub struct ReserveOptions {
    /// The reserving user.
    pub user: UserId,

    /// The book to place a hold on.
    pub book: BookId,
}

impl ReserveOptions {
    /// Creates reserve options for the given user and book.
    ///
    /// # Examples
    ///
    /// ```
    /// use biblio::operations::ReserveOptions;
    /// use biblio::{BookId, UserId};
    ///
    /// let options = ReserveOptions::new(UserId::new(1), BookId::new(2));
    /// assert_eq!(options.user, UserId::new(1));
    /// ```
    #[must_use]
    pub const fn new(user: UserId, book: BookId) -> Self {
        Self { user, book }
    }
}

/// The result of a successful reserve operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveOutcome {
    /// The id of the newly created reservation record.
    pub transaction: TransactionId,
}

/// Places a reservation for a book on behalf of a user.
///
/// Both the user and the book must exist. When the policy disallows
/// duplicate reservations, a second open hold by the same user on the same
/// book is rejected; by default duplicates are permitted.
///
/// # Errors
///
/// Returns an error if:
/// - The user or book does not exist
/// - The policy forbids duplicates and the user already holds one
/// - A database error occurs
pub fn reserve(
    db: &mut Database,
    options: &ReserveOptions,
    policy: &CirculationPolicy,
) -> Result<ReserveOutcome> {
    let tx = db.begin_transaction()?;

    require_user(&tx, options.user)?;
    require_book(&tx, options.book)?;

    if !policy.allow_duplicate_reservations
        && Database::open_reservation_exists(&tx, options.user, options.book)?
    {
        return Err(Error::ReservationConflict {
            details: format!(
                "user {} already holds a reservation for book {}",
                options.user, options.book
            ),
        });
    }

    let transaction =
        Database::insert_loan(&tx, options.user, options.book, &LoanKind::Reservation)?;

    tx.commit()?;

    Ok(ReserveOutcome { transaction })
}
