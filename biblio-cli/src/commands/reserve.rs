//! Reserve command implementation.
//!
//! This module implements the `reserve` command, which places a hold on a
//! book for a user without issuing it.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, GlobalOptions};
use biblio::operations::{reserve, ReserveOptions};
use biblio::{BookId, UserId};
use clap::Args;
use serde_json::json;

/// Place a hold on a book.
#[derive(Args)]
pub struct ReserveCommand {
    /// Id of the reserving user
    #[arg(long, value_name = "ID")]
    pub user_id: i64,

    /// Id of the book to reserve
    #[arg(long, value_name = "ID")]
    pub book_id: i64,
}

impl ReserveCommand {
    /// Execute the reserve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let policy = config.policy();
        let mut db = open_database(global, &config)?;

        let options = ReserveOptions::new(UserId::new(self.user_id), BookId::new(self.book_id));
        let outcome = reserve(&mut db, &options, &policy).map_err(CliError::from)?;

        print_json(&json!({
            "message": "Book reserved successfully",
            "transaction_id": outcome.transaction.value(),
        }))
    }
}
