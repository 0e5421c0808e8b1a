//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, database management, and date parsing.

use crate::error::CliError;
use biblio::{Config, ConfigBuilder, Database, DatabaseConfig};
use chrono::NaiveDate;
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the default busy timeout (in seconds).
    pub busy_timeout: Option<u32>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. The configuration file in the data directory
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let config_file = resolve_data_dir(global).join("config.yaml");

    ConfigBuilder::new()
        .with_config_file(config_file)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Resolve the data directory path.
///
/// Priority: --data-dir option > default `~/.biblio`.
pub fn resolve_data_dir(global: &GlobalOptions) -> PathBuf {
    if let Some(ref data_dir) = global.data_dir {
        return data_dir.clone();
    }

    home::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".biblio")
}

/// Resolve the database path from global options.
fn resolve_database_path(global: &GlobalOptions) -> PathBuf {
    resolve_data_dir(global).join("biblio.db")
}

/// Open database with configuration.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_database_path(global);

    if !db_path.exists() && global.disable_autoinit {
        return Err(CliError::NoDataDirectory);
    }

    let mut db_config = DatabaseConfig::new(db_path);

    // Set busy timeout if specified
    if let Some(timeout_seconds) = global.busy_timeout {
        db_config =
            db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds.into()));
    } else if let Some(timeout_seconds) = config.maximum_lock_wait_seconds {
        db_config = db_config.with_busy_timeout(std::time::Duration::from_secs(timeout_seconds));
    }

    Database::open(db_config).map_err(CliError::from)
}

/// Parse an ISO-8601 date argument, defaulting to today's local date.
pub fn resolve_date(date: Option<String>) -> Result<NaiveDate, CliError> {
    match date {
        Some(text) => NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|_| {
            CliError::InvalidArguments(format!("invalid date '{text}', expected YYYY-MM-DD"))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Print a value as a single line of JSON on stdout.
pub fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string(value)
        .map_err(|e| CliError::InvalidArguments(format!("cannot serialize output: {e}")))?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn global_with_data_dir(dir: &str) -> GlobalOptions {
        GlobalOptions {
            verbose: false,
            quiet: false,
            data_dir: Some(PathBuf::from(dir)),
            busy_timeout: None,
            disable_autoinit: false,
        }
    }

    #[test]
    fn test_resolve_data_dir_prefers_option() {
        let global = global_with_data_dir("/custom/data");
        assert_eq!(resolve_data_dir(&global), PathBuf::from("/custom/data"));
    }

    #[test]
    fn test_resolve_date_explicit() {
        let date = resolve_date(Some("2024-01-15".to_string())).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }

    #[test]
    fn test_resolve_date_rejects_garbage() {
        assert!(resolve_date(Some("15/01/2024".to_string())).is_err());
        assert!(resolve_date(Some("not-a-date".to_string())).is_err());
    }

    #[test]
    fn test_resolve_date_defaults_to_today() {
        let date = resolve_date(None).unwrap();
        assert_eq!(date, chrono::Local::now().date_naive());
    }
}
