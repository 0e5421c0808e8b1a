//! Inventory-report command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, GlobalOptions};
use biblio::operations::inventory_report;
use clap::Args;
use serde_json::json;

/// List the catalog with availability.
#[derive(Args)]
pub struct InventoryReportCommand {}

impl InventoryReportCommand {
    /// Execute the inventory-report command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let books = inventory_report(db.connection()).map_err(CliError::from)?;

        let listing: Vec<_> = books
            .iter()
            .map(|book| {
                json!({
                    "id": book.id().value(),
                    "title": book.title(),
                    "author": book.author(),
                    "available": book.available(),
                })
            })
            .collect();

        print_json(&json!(listing))
    }
}
