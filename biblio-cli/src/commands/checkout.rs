//! Checkout command implementation.
//!
//! This module implements the `checkout` command, which issues a book to a
//! user and computes the due date from the configured loan period.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, resolve_date, GlobalOptions};
use biblio::operations::{checkout, CheckoutOptions};
use biblio::{BookId, UserId};
use clap::Args;
use serde_json::json;

/// Check a book out to a user.
#[derive(Args)]
pub struct CheckoutCommand {
    /// Id of the borrowing user
    #[arg(long, value_name = "ID")]
    pub user_id: i64,

    /// Id of the book to check out
    #[arg(long, value_name = "ID")]
    pub book_id: i64,

    /// Checkout date as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}

impl CheckoutCommand {
    /// Execute the checkout command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let checkout_date = resolve_date(self.date)?;

        let config = load_configuration(global)?;
        let policy = config.policy();
        let mut db = open_database(global, &config)?;

        let options = CheckoutOptions::new(
            UserId::new(self.user_id),
            BookId::new(self.book_id),
            checkout_date,
        );
        let outcome = checkout(&mut db, &options, &policy).map_err(CliError::from)?;

        print_json(&json!({
            "message": "Book checked out successfully",
            "transaction_id": outcome.transaction.value(),
            "due_date": outcome.due_date.format("%Y-%m-%d").to_string(),
        }))
    }
}
