//! Overdue-report command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, resolve_date, GlobalOptions};
use biblio::operations::overdue_report;
use clap::Args;
use serde_json::json;

/// List overdue checkouts.
#[derive(Args)]
pub struct OverdueReportCommand {
    /// Reference date as YYYY-MM-DD (default: today)
    #[arg(long, value_name = "DATE")]
    pub date: Option<String>,
}

impl OverdueReportCommand {
    /// Execute the overdue-report command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let date = resolve_date(self.date)?;

        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let loans = overdue_report(db.connection(), date).map_err(CliError::from)?;

        let listing: Vec<_> = loans
            .iter()
            .map(|loan| {
                json!({
                    "transaction_id": loan.id().value(),
                    "user_id": loan.user_id().value(),
                    "book_id": loan.book_id().value(),
                    "due_date": loan
                        .due_date()
                        .map(|d| d.format("%Y-%m-%d").to_string()),
                })
            })
            .collect();

        print_json(&json!(listing))
    }
}
