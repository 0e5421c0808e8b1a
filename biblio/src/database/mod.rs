//! Database layer for persistent storage of circulation records.
//!
//! This module provides a `SQLite`-based storage layer for users, books, and
//! loans, including connection management, schema versioning, and CRUD
//! operations.
//!
//! # Examples
//!
//! ```no_run
//! use biblio::database::{Database, DatabaseConfig};
//! use biblio::NewBook;
//!
//! // Open a database
//! let config = DatabaseConfig::new("/tmp/biblio.db");
//! let mut db = Database::open(config).unwrap();
//!
//! // Add a book to the catalog
//! let book = NewBook::new("Dune", "Frank Herbert").unwrap();
//! let id = db.insert_book(&book).unwrap();
//!
//! // List the catalog
//! let all = Database::list_all_books(db.connection()).unwrap();
//! for book in all {
//!     println!("{:?}", book);
//! }
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;

#[cfg(test)]
pub(crate) mod test_util;

// Re-export public API
pub use config::{default_data_dir, resolve_database_path, DatabaseConfig};
pub use connection::Database;

// Re-export migration functions for advanced use cases
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
