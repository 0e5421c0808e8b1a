//! Database CRUD operations for users, books, and loans.
//!
//! This module implements the record store: create, read, and update
//! operations for registered users, catalog entries, and circulation
//! records.
//!
//! Most functions are associated functions taking a `&Connection` so they
//! can run against either a plain connection or a `rusqlite::Transaction`
//! (which derefs to one). Registration inserts that stand alone get
//! `&mut self` wrappers that open their own IMMEDIATE transaction.

use chrono::NaiveDate;
use rusqlite::{params, Connection};

use crate::book::{Book, BookId, NewBook};
use crate::error::Result;
use crate::loan::{Loan, LoanKind, TransactionId};
use crate::user::{MembershipStatus, NewUser, User, UserId};

use super::connection::Database;
use super::schema::{INSERT_BOOK, INSERT_LOAN, INSERT_USER};

/// Storage format for calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Converts a `NaiveDate` to its ISO-8601 text form for database storage.
pub(super) fn date_to_sql(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses an ISO-8601 date string from the database.
pub(super) fn sql_to_date(value: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Helper function to deserialize a user from a database row.
///
/// Expects row fields in this order: id, name, contact, `membership_status`
fn row_to_user(row: &rusqlite::Row<'_>) -> rusqlite::Result<User> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let contact: String = row.get(2)?;
    let status_text: String = row.get(3)?;

    let status = MembershipStatus::parse(&status_text)
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

    Ok(User::new(UserId::new(id), name, contact, status))
}

/// Helper function to deserialize a book from a database row.
///
/// Expects row fields in this order: id, title, author, available
fn row_to_book(row: &rusqlite::Row<'_>) -> rusqlite::Result<Book> {
    let id: i64 = row.get(0)?;
    let title: String = row.get(1)?;
    let author: String = row.get(2)?;
    let available: bool = row.get(3)?;

    Ok(Book::new(BookId::new(id), title, author, available))
}

/// Helper function to deserialize a loan from a database row.
///
/// Expects row fields in this order: id, `user_id`, `book_id`,
/// `checkout_date`, `due_date`, returned, fine, damaged, reservation
fn row_to_loan(row: &rusqlite::Row<'_>) -> rusqlite::Result<Loan> {
    let id: i64 = row.get(0)?;
    let user_id: i64 = row.get(1)?;
    let book_id: i64 = row.get(2)?;
    let checkout_date: Option<String> = row.get(3)?;
    let due_date: Option<String> = row.get(4)?;
    let returned: bool = row.get(5)?;
    let fine: i64 = row.get(6)?;
    let damaged: bool = row.get(7)?;
    let reservation: bool = row.get(8)?;

    let kind = if reservation {
        LoanKind::Reservation
    } else {
        let checkout_text = checkout_date.ok_or(rusqlite::Error::InvalidColumnType(
            3,
            "checkout_date".into(),
            rusqlite::types::Type::Null,
        ))?;
        let due_text = due_date.ok_or(rusqlite::Error::InvalidColumnType(
            4,
            "due_date".into(),
            rusqlite::types::Type::Null,
        ))?;
        LoanKind::Checkout {
            checkout_date: sql_to_date(&checkout_text)?,
            due_date: sql_to_date(&due_text)?,
        }
    };

    Ok(Loan::new(
        TransactionId::new(id),
        UserId::new(user_id),
        BookId::new(book_id),
        kind,
        returned,
        fine,
        damaged,
    ))
}

// SQL statements for CRUD operations
const SELECT_USER: &str = r"
    SELECT id, name, contact, membership_status
    FROM users
    WHERE id = ?
";

const SELECT_BOOK: &str = r"
    SELECT id, title, author, available
    FROM books
    WHERE id = ?
";

const LIST_ALL_BOOKS: &str = r"
    SELECT id, title, author, available
    FROM books
    ORDER BY id
";

const LIST_AVAILABLE_BOOKS: &str = r"
    SELECT id, title, author, available
    FROM books
    WHERE available = 1
    ORDER BY id
";

const UPDATE_BOOK_AVAILABLE: &str = r"
    UPDATE books
    SET available = ?
    WHERE id = ?
";

const SELECT_LOAN: &str = r"
    SELECT id, user_id, book_id, checkout_date, due_date, returned, fine, damaged, reservation
    FROM transactions
    WHERE id = ?
";

const SELECT_OPEN_CHECKOUT: &str = r"
    SELECT id, user_id, book_id, checkout_date, due_date, returned, fine, damaged, reservation
    FROM transactions
    WHERE id = ? AND returned = 0 AND reservation = 0
";

const UPDATE_MARK_RETURNED: &str = r"
    UPDATE transactions
    SET returned = 1, fine = ?, damaged = ?
    WHERE id = ? AND returned = 0
";

const UPDATE_DUE_DATE: &str = r"
    UPDATE transactions
    SET due_date = ?
    WHERE id = ? AND returned = 0 AND reservation = 0
";

const LIST_OVERDUE: &str = r"
    SELECT id, user_id, book_id, checkout_date, due_date, returned, fine, damaged, reservation
    FROM transactions
    WHERE returned = 0 AND reservation = 0 AND due_date < ?
    ORDER BY id
";

const CHECK_OPEN_RESERVATION: &str = r"
    SELECT COUNT(*) FROM transactions
    WHERE user_id = ? AND book_id = ? AND reservation = 1 AND returned = 0
";

impl Database {
    /// Registers a user in its own IMMEDIATE transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or insert fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use biblio::database::{Database, DatabaseConfig};
    /// use biblio::{MembershipStatus, NewUser};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/biblio.db")).unwrap();
    /// let user = NewUser::new("Ada", "ada@example.org", MembershipStatus::Active).unwrap();
    /// let id = db.insert_user(&user).unwrap();
    /// ```
    pub fn insert_user(&mut self, user: &NewUser) -> Result<UserId> {
        let tx = self.begin_transaction()?;
        let id = Self::insert_user_simple(&tx, user)?;
        tx.commit()?;
        Ok(id)
    }

    /// Registers a user using an existing connection or transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_user_simple(conn: &Connection, user: &NewUser) -> Result<UserId> {
        conn.execute(
            INSERT_USER,
            params![user.name, user.contact, user.membership_status.as_str()],
        )?;
        Ok(UserId::new(conn.last_insert_rowid()))
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user))` if the user exists
    /// - `Ok(None)` if the user doesn't exist
    pub fn get_user(conn: &Connection, id: UserId) -> Result<Option<User>> {
        let mut stmt = conn.prepare(SELECT_USER)?;

        match stmt.query_row(params![id.value()], row_to_user) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Adds a book to the catalog in its own IMMEDIATE transaction.
    ///
    /// New books start out available.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction or insert fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use biblio::database::{Database, DatabaseConfig};
    /// use biblio::NewBook;
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/biblio.db")).unwrap();
    /// let book = NewBook::new("Dune", "Frank Herbert").unwrap();
    /// let id = db.insert_book(&book).unwrap();
    /// ```
    pub fn insert_book(&mut self, book: &NewBook) -> Result<BookId> {
        let tx = self.begin_transaction()?;
        let id = Self::insert_book_simple(&tx, book)?;
        tx.commit()?;
        Ok(id)
    }

    /// Adds a book using an existing connection or transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_book_simple(conn: &Connection, book: &NewBook) -> Result<BookId> {
        conn.execute(INSERT_BOOK, params![book.title, book.author])?;
        Ok(BookId::new(conn.last_insert_rowid()))
    }

    /// Retrieves a book by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(book))` if the book exists
    /// - `Ok(None)` if the book doesn't exist
    pub fn get_book(conn: &Connection, id: BookId) -> Result<Option<Book>> {
        let mut stmt = conn.prepare(SELECT_BOOK)?;

        match stmt.query_row(params![id.value()], row_to_book) {
            Ok(book) => Ok(Some(book)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists every book in the catalog, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_all_books(conn: &Connection) -> Result<Vec<Book>> {
        let mut stmt = conn.prepare(LIST_ALL_BOOKS)?;

        let books = stmt
            .query_map([], row_to_book)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(books)
    }

    /// Lists books currently available for checkout, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_available_books(conn: &Connection) -> Result<Vec<Book>> {
        let mut stmt = conn.prepare(LIST_AVAILABLE_BOOKS)?;

        let books = stmt
            .query_map([], row_to_book)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(books)
    }

    /// Sets a book's availability flag.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the book was found and updated
    /// - `Ok(false)` if the book was not found
    pub fn set_book_available(conn: &Connection, id: BookId, available: bool) -> Result<bool> {
        let rows_affected = conn.execute(UPDATE_BOOK_AVAILABLE, params![available, id.value()])?;
        Ok(rows_affected > 0)
    }

    /// Creates a loan row for the given user and book.
    ///
    /// Reservations are stored with NULL date columns; checkouts carry both
    /// dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn insert_loan(
        conn: &Connection,
        user: UserId,
        book: BookId,
        kind: &LoanKind,
    ) -> Result<TransactionId> {
        let checkout_date = kind.checkout_date().map(date_to_sql);
        let due_date = kind.due_date().map(date_to_sql);

        conn.execute(
            INSERT_LOAN,
            params![
                user.value(),
                book.value(),
                checkout_date,
                due_date,
                kind.is_reservation(),
            ],
        )?;

        Ok(TransactionId::new(conn.last_insert_rowid()))
    }

    /// Retrieves a loan by transaction id.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    ///
    /// # Returns
    ///
    /// - `Ok(Some(loan))` if the loan exists
    /// - `Ok(None)` if the loan doesn't exist
    pub fn get_loan(conn: &Connection, id: TransactionId) -> Result<Option<Loan>> {
        let mut stmt = conn.prepare(SELECT_LOAN)?;

        match stmt.query_row(params![id.value()], row_to_loan) {
            Ok(loan) => Ok(Some(loan)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Retrieves a loan that is still out on checkout.
    ///
    /// Reservations and already returned loans do not match; return and
    /// extension operations treat both the same as a missing row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails (other than "not found").
    pub fn get_open_checkout(conn: &Connection, id: TransactionId) -> Result<Option<Loan>> {
        let mut stmt = conn.prepare(SELECT_OPEN_CHECKOUT)?;

        match stmt.query_row(params![id.value()], row_to_loan) {
            Ok(loan) => Ok(Some(loan)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Finalizes a loan with its fine and damage flag.
    ///
    /// Only open loans are updated; closing an already returned loan is a
    /// no-op reported through the return value.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the loan was open and is now closed
    /// - `Ok(false)` if no open loan matched
    pub fn mark_returned(
        conn: &Connection,
        id: TransactionId,
        fine: i64,
        damaged: bool,
    ) -> Result<bool> {
        let rows_affected =
            conn.execute(UPDATE_MARK_RETURNED, params![fine, damaged, id.value()])?;
        Ok(rows_affected > 0)
    }

    /// Replaces the due date of an open checkout.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if an open checkout was updated
    /// - `Ok(false)` if no open checkout matched
    pub fn update_due_date(
        conn: &Connection,
        id: TransactionId,
        due_date: NaiveDate,
    ) -> Result<bool> {
        let rows_affected =
            conn.execute(UPDATE_DUE_DATE, params![date_to_sql(due_date), id.value()])?;
        Ok(rows_affected > 0)
    }

    /// Lists open checkouts whose due date is strictly before `date`.
    ///
    /// A loan due exactly on `date` is not yet overdue. Results are in
    /// insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_overdue(conn: &Connection, date: NaiveDate) -> Result<Vec<Loan>> {
        let mut stmt = conn.prepare(LIST_OVERDUE)?;

        let loans = stmt
            .query_map(params![date_to_sql(date)], row_to_loan)?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(loans)
    }

    /// Checks whether the user already holds an open reservation for the book.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn open_reservation_exists(
        conn: &Connection,
        user: UserId,
        book: BookId,
    ) -> Result<bool> {
        let count: i32 = conn.query_row(
            CHECK_OPEN_RESERVATION,
            params![user.value(), book.value()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }
}
