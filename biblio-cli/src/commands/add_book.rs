//! Add-book command implementation.

use crate::error::CliError;
use crate::utils::{load_configuration, open_database, print_json, GlobalOptions};
use biblio::NewBook;
use clap::Args;
use serde_json::json;

/// Add a book to the catalog.
#[derive(Args)]
pub struct AddBookCommand {
    /// The book's title
    #[arg(long, value_name = "TITLE")]
    pub title: String,

    /// The book's author
    #[arg(long, value_name = "AUTHOR")]
    pub author: String,
}

impl AddBookCommand {
    /// Execute the add-book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let book = NewBook::new(&self.title, &self.author)
            .map_err(|e| CliError::InvalidArguments(e.to_string()))?;

        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let id = db.insert_book(&book).map_err(CliError::from)?;

        print_json(&json!({
            "message": "Book added successfully",
            "book_id": id.value(),
        }))
    }
}
