//! Extend command implementation.
//!
//! This module implements the `extend` command, which pushes the due date
//! of an open checkout forward, provided the loan is not yet overdue.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, resolve_date, GlobalOptions};
use biblio::operations::{extend_due_date, ExtendOptions};
use biblio::TransactionId;
use clap::Args;
use serde_json::json;

/// Extend the due date of a checkout.
#[derive(Args)]
pub struct ExtendCommand {
    /// Id of the checkout transaction
    #[arg(long, value_name = "ID")]
    pub transaction_id: i64,

    /// Request date as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}

impl ExtendCommand {
    /// Execute the extend command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let request_date = resolve_date(self.date)?;

        let config = load_configuration(global)?;
        let policy = config.policy();
        let mut db = open_database(global, &config)?;

        let options = ExtendOptions::new(TransactionId::new(self.transaction_id), request_date);
        let outcome = extend_due_date(&mut db, &options, &policy).map_err(CliError::from)?;

        print_json(&json!({
            "message": "Due date extended successfully",
            "new_due_date": outcome.new_due_date.format("%Y-%m-%d").to_string(),
        }))
    }
}
