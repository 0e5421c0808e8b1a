#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # biblio
//!
//! A library for managing book circulation in a lending library.
//!
//! This library provides core types and functionality for registering users
//! and books, reserving and checking out books, processing returns with late
//! and damage fees, extending due dates, and producing overdue and inventory
//! reports. All records are persisted in a `SQLite` database.
//!
//! ## Core Types
//!
//! - [`User`] and [`Book`]: registered members and catalog entries
//! - [`Loan`] and [`LoanKind`]: circulation records (reservations and checkouts)
//! - [`CirculationPolicy`]: loan periods and fee schedule
//! - [`Error`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use biblio::CirculationPolicy;
//! use chrono::NaiveDate;
//!
//! let policy = CirculationPolicy::default();
//! let checkout = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let due = policy.due_date(checkout);
//! assert_eq!(due, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
//! ```

pub mod book;
pub mod config;
pub mod database;
pub mod error;
pub mod loan;
pub mod logging;
pub mod operations;
pub mod policy;
pub mod user;

// Re-export key types at crate root for convenience
pub use book::{Book, BookId, NewBook};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use loan::{Loan, LoanKind, TransactionId, ValidationError};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    checkout, extend_due_date, reserve, return_book, CheckoutOptions, CheckoutOutcome,
    ExtendOptions, ExtendOutcome, ReserveOptions, ReserveOutcome, ReturnOptions, ReturnOutcome,
};
pub use policy::CirculationPolicy;
pub use user::{MembershipStatus, NewUser, User, UserId};
