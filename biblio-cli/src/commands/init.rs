//! Init command implementation.
//!
//! This module implements the `init` command, which creates the data
//! directory and initializes the database schema.

use crate::error::CliError;
use crate::utils::{load_configuration, resolve_data_dir, GlobalOptions};
use biblio::{Database, DatabaseConfig};
use clap::Args;

/// Initialize the biblio data directory and database.
#[derive(Args)]
pub struct InitCommand {}

impl InitCommand {
    /// Execute the init command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let data_dir = resolve_data_dir(global);
        std::fs::create_dir_all(&data_dir)?;

        let config = load_configuration(global)?;

        let mut db_config = DatabaseConfig::new(data_dir.join("biblio.db"));
        if let Some(timeout_seconds) = global.busy_timeout {
            db_config = db_config
                .with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
        } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
            db_config =
                db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
        }

        // Opening creates the file and initializes the schema
        let mut db = Database::open(db_config).map_err(CliError::from)?;
        db.verify_integrity().map_err(CliError::from)?;

        if !global.quiet {
            eprintln!("Initialized biblio data directory at {}", data_dir.display());
        }

        Ok(())
    }
}
