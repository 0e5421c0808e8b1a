//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: initialize the data directory and database
//! - `add_user`: register a library user
//! - `add_book`: add a book to the catalog
//! - `list_books`: list catalog entries
//! - `reserve`: place a hold on a book
//! - `checkout`: check a book out to a user
//! - `returns`: process a book return
//! - `extend`: extend the due date of a checkout
//! - `overdue_report`: list overdue checkouts
//! - `inventory_report`: list the catalog with availability

pub mod add_book;
pub mod add_user;
pub mod checkout;
pub mod extend;
pub mod init;
pub mod inventory_report;
pub mod list_books;
pub mod overdue_report;
pub mod reserve;
pub mod returns;

pub use add_book::AddBookCommand;
pub use add_user::AddUserCommand;
pub use checkout::CheckoutCommand;
pub use extend::ExtendCommand;
pub use init::InitCommand;
pub use inventory_report::InventoryReportCommand;
pub use list_books::ListBooksCommand;
pub use overdue_report::OverdueReportCommand;
pub use reserve::ReserveCommand;
pub use returns::ReturnCommand;
