//! Overdue and inventory reports.
//!
//! Reports are read-only queries and run on a plain connection without a
//! write transaction.

use chrono::NaiveDate;
use rusqlite::Connection;

use crate::book::Book;
use crate::database::Database;
use crate::error::Result;
use crate::loan::Loan;

/// Lists open checkouts whose due date has passed as of `date`.
///
/// A loan due exactly on `date` is still current and is not listed.
/// Reservations and returned loans never appear. Results are in the order
/// the loans were created.
///
/// # Errors
///
/// Returns an error if the query fails.
///
/// # Examples
///
/// ```no_run
/// use biblio::database::{Database, DatabaseConfig};
/// use biblio::operations::overdue_report;
/// use chrono::NaiveDate;
///
/// let db = Database::open(DatabaseConfig::new("/tmp/biblio.db")).unwrap();
/// let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
/// for loan in overdue_report(db.connection(), today).unwrap() {
///     println!("{} is overdue", loan.id());
/// }
/// ```
pub fn overdue_report(conn: &Connection, date: NaiveDate) -> Result<Vec<Loan>> {
    Database::list_overdue(conn, date)
}

/// Lists the whole catalog with availability, in the order books were added.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn inventory_report(conn: &Connection) -> Result<Vec<Book>> {
    Database::list_all_books(conn)
}
