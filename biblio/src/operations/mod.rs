//! Circulation operations.
//!
//! This module implements the lifecycle operations of the circulation
//! system: reserving, checking out, returning, and extending loans, plus
//! the overdue and inventory reports.
//!
//! Each mutating operation runs its read-check-write sequence inside a
//! single IMMEDIATE transaction, so concurrent callers cannot observe or
//! produce half-applied state.
//!
//! # Examples
//!
//! ```no_run
//! use biblio::operations::{checkout, CheckoutOptions};
//! use biblio::{BookId, CirculationPolicy, Database, DatabaseConfig, UserId};
//! use chrono::NaiveDate;
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/biblio.db")).unwrap();
//! let policy = CirculationPolicy::default();
//! let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!
//! let options = CheckoutOptions::new(UserId::new(1), BookId::new(1), today);
//! let outcome = checkout(&mut db, &options, &policy).unwrap();
//! println!("due back {}", outcome.due_date);
//! ```

pub mod checkout;
pub mod extend;
pub mod reports;
pub mod reserve;
pub mod returns;

pub use checkout::{checkout, CheckoutOptions, CheckoutOutcome};
pub use extend::{extend_due_date, ExtendOptions, ExtendOutcome};
pub use reports::{inventory_report, overdue_report};
pub use reserve::{reserve, ReserveOptions, ReserveOutcome};
pub use returns::{return_book, ReturnOptions, ReturnOutcome};

use rusqlite::Connection;

use crate::book::{Book, BookId};
use crate::database::Database;
use crate::error::{Error, Result};
use crate::user::{User, UserId};

/// Looks up a user, mapping absence to [`Error::NotFound`].
fn require_user(conn: &Connection, id: UserId) -> Result<User> {
    Database::get_user(conn, id)?.ok_or_else(|| Error::NotFound {
        resource: format!("user {id}"),
    })
}

/// Looks up a book, mapping absence to [`Error::NotFound`].
fn require_book(conn: &Connection, id: BookId) -> Result<Book> {
    Database::get_book(conn, id)?.ok_or_else(|| Error::NotFound {
        resource: format!("book {id}"),
    })
}
