//! Return command implementation.
//!
//! This module implements the `return` command, which closes an open
//! checkout, assesses late and damage fees, and restores availability.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, resolve_date, GlobalOptions};
use biblio::operations::{return_book, ReturnOptions};
use biblio::TransactionId;
use clap::Args;
use serde_json::json;

/// Process a book return.
#[derive(Args)]
pub struct ReturnCommand {
    /// Id of the checkout transaction
    #[arg(long, value_name = "ID")]
    pub transaction_id: i64,

    /// Return date as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,

    /// Record the book as returned damaged
    #[arg(long)]
    pub damaged: bool,
}

impl ReturnCommand {
    /// Execute the return command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let return_date = resolve_date(self.date)?;

        let config = load_configuration(global)?;
        let policy = config.policy();
        let mut db = open_database(global, &config)?;

        let options = ReturnOptions::new(TransactionId::new(self.transaction_id), return_date)
            .with_damaged(self.damaged);
        let outcome = return_book(&mut db, &options, &policy).map_err(CliError::from)?;

        print_json(&json!({
            "message": "Book returned successfully",
            "fine": outcome.fine,
        }))
    }
}
