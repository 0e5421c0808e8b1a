//! Shared helpers for database tests.

use tempfile::tempdir;

use crate::book::{BookId, NewBook};
use crate::user::{MembershipStatus, NewUser, UserId};

use super::config::DatabaseConfig;
use super::connection::Database;

/// Creates a database in a temporary directory for testing.
///
/// The temporary directory is leaked for the lifetime of the test process
/// so the database file stays valid while the returned handle is in use.
pub(crate) fn create_test_database() -> Database {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).expect("failed to open test database");
    std::mem::forget(dir);
    db
}

/// Registers a user with placeholder contact details.
pub(crate) fn create_test_user(db: &mut Database, name: &str) -> UserId {
    let user = NewUser::new(
        name,
        &format!("{}@example.org", name.to_lowercase()),
        MembershipStatus::Active,
    )
    .expect("invalid test user");
    db.insert_user(&user).expect("failed to insert test user")
}

/// Adds a book with a placeholder author.
pub(crate) fn create_test_book(db: &mut Database, title: &str) -> BookId {
    let book = NewBook::new(title, "Test Author").expect("invalid test book");
    db.insert_book(&book).expect("failed to insert test book")
}
