//! Database schema definitions and SQL constants.
//!
//! This module contains all SQL table definitions, indices, and constants
//! related to the database schema for the biblio circulation system.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
///
/// The metadata table stores key-value pairs for database configuration
/// and versioning information.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the users table.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        contact TEXT NOT NULL,
        membership_status TEXT NOT NULL
    )";

/// SQL statement to create the books table.
///
/// The `available` flag tracks checkout state: 1 until an open checkout
/// references the book, then 0 until it is returned.
pub const CREATE_BOOKS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        available INTEGER NOT NULL DEFAULT 1
    )";

/// SQL statement to create the transactions table.
///
/// A row is either a reservation (`reservation` = 1, both date columns
/// NULL) or a checkout (`reservation` = 0, both dates set). Dates are
/// stored as ISO-8601 text, the fine as whole currency units.
pub const CREATE_TRANSACTIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(id),
        book_id INTEGER NOT NULL REFERENCES books(id),
        checkout_date TEXT,
        due_date TEXT,
        returned INTEGER NOT NULL DEFAULT 0,
        fine INTEGER NOT NULL DEFAULT 0,
        damaged INTEGER NOT NULL DEFAULT 0,
        reservation INTEGER NOT NULL DEFAULT 0
    )";

/// SQL statement to create an index on the transactions book column.
///
/// This index speeds up open-checkout lookups for a given book.
pub const CREATE_TRANSACTIONS_BOOK_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_transactions_book ON transactions(book_id)";

/// SQL statement to create an index on the `due_date` column.
///
/// This index speeds up overdue report queries.
pub const CREATE_TRANSACTIONS_DUE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_transactions_due ON transactions(due_date)";

/// SQL statement to create an index on the books availability column.
pub const CREATE_BOOKS_AVAILABLE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_books_available ON books(available)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// SQL statement to insert a user.
pub const INSERT_USER: &str = r"
    INSERT INTO users (name, contact, membership_status)
    VALUES (?, ?, ?)
";

/// SQL statement to insert a book.
pub const INSERT_BOOK: &str = r"
    INSERT INTO books (title, author, available)
    VALUES (?, ?, 1)
";

/// SQL statement to insert a loan row.
///
/// Used for both reservations and checkouts.
pub const INSERT_LOAN: &str = r"
    INSERT INTO transactions
    (user_id, book_id, checkout_date, due_date, returned, fine, damaged, reservation)
    VALUES (?, ?, ?, ?, 0, 0, 0, ?)
";
