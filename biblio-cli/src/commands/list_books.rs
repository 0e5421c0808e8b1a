//! List-books command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, GlobalOptions};
use biblio::Database;
use clap::Args;
use serde_json::json;

/// List books in the catalog.
#[derive(Args)]
pub struct ListBooksCommand {
    /// Include books that are currently checked out
    #[arg(long)]
    pub all: bool,
}

impl ListBooksCommand {
    /// Execute the list-books command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let db = open_database(global, &config)?;

        let books = if self.all {
            Database::list_all_books(db.connection())
        } else {
            Database::list_available_books(db.connection())
        }
        .map_err(CliError::from)?;

        let listing: Vec<_> = books
            .iter()
            .map(|book| {
                json!({
                    "id": book.id().value(),
                    "title": book.title(),
                    "author": book.author(),
                })
            })
            .collect();

        print_json(&json!(listing))
    }
}
