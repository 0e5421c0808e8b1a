//! Configuration system for biblio.
//!
//! Configuration is merged from multiple sources with the following
//! precedence (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`BIBLIO_*`)
//! 3. A YAML configuration file (`config.yaml` in the data directory)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use biblio::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new().build().unwrap();
//! let policy = config.policy();
//! assert_eq!(policy.loan_period_days, 14);
//! ```

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::policy::CirculationPolicy;

/// Top-level configuration for biblio.
///
/// All fields are optional; `None` means "use the built-in default".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Override for the data directory location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    /// Maximum seconds to wait for a database lock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Number of days a checkout lasts before the book is due.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loan_period_days: Option<u64>,

    /// Number of days added by a due date extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension_days: Option<u64>,

    /// Fee per full day late, in whole currency units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub late_fee_per_day: Option<i64>,

    /// Flat fee added when a book is returned damaged.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub damage_fee: Option<i64>,

    /// Whether checkout of an unavailable book is rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enforce_availability: Option<bool>,

    /// Whether a user may hold multiple open reservations for one book.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_duplicate_reservations: Option<bool>,
}

impl Config {
    /// Builds the effective circulation policy from this configuration.
    ///
    /// Unset fields fall back to the policy defaults.
    #[must_use]
    pub fn policy(&self) -> CirculationPolicy {
        let mut policy = CirculationPolicy::default();
        if let Some(days) = self.loan_period_days {
            policy = policy.with_loan_period_days(days);
        }
        if let Some(days) = self.extension_days {
            policy = policy.with_extension_days(days);
        }
        if let Some(fee) = self.late_fee_per_day {
            policy = policy.with_late_fee_per_day(fee);
        }
        if let Some(fee) = self.damage_fee {
            policy = policy.with_damage_fee(fee);
        }
        if let Some(enforce) = self.enforce_availability {
            policy = policy.with_enforce_availability(enforce);
        }
        if let Some(allow) = self.allow_duplicate_reservations {
            policy = policy.with_allow_duplicate_reservations(allow);
        }
        policy
    }

    /// Merges another configuration on top of this one.
    ///
    /// Fields set in `overlay` take precedence.
    fn merge(mut self, overlay: Self) -> Self {
        if overlay.data_dir.is_some() {
            self.data_dir = overlay.data_dir;
        }
        if overlay.maximum_lock_wait_seconds.is_some() {
            self.maximum_lock_wait_seconds = overlay.maximum_lock_wait_seconds;
        }
        if overlay.loan_period_days.is_some() {
            self.loan_period_days = overlay.loan_period_days;
        }
        if overlay.extension_days.is_some() {
            self.extension_days = overlay.extension_days;
        }
        if overlay.late_fee_per_day.is_some() {
            self.late_fee_per_day = overlay.late_fee_per_day;
        }
        if overlay.damage_fee.is_some() {
            self.damage_fee = overlay.damage_fee;
        }
        if overlay.enforce_availability.is_some() {
            self.enforce_availability = overlay.enforce_availability;
        }
        if overlay.allow_duplicate_reservations.is_some() {
            self.allow_duplicate_reservations = overlay.allow_duplicate_reservations;
        }
        self
    }
}

/// Builder for assembling a [`Config`] from files, environment, and code.
///
/// # Examples
///
/// ```
/// use biblio::config::{Config, ConfigBuilder};
///
/// let custom = Config {
///     loan_period_days: Some(21),
///     ..Default::default()
/// };
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(custom)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.loan_period_days, Some(21));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a new builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit configuration file to load.
    ///
    /// Without this, no file is read unless one exists at the default
    /// location supplied by the caller.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Skips loading configuration files.
    #[must_use]
    pub const fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Skips reading `BIBLIO_*` environment variables.
    #[must_use]
    pub const fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Applies programmatic overrides on top of everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Builds the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be read or parsed,
    /// or if an environment variable holds an unparseable value.
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();

        if !self.skip_files {
            if let Some(path) = &self.config_file {
                if path.exists() {
                    let contents = std::fs::read_to_string(path)?;
                    let file_config: Config = serde_yaml::from_str(&contents)?;
                    config = config.merge(file_config);
                }
            }
        }

        if !self.skip_env {
            config = config.merge(Self::from_environment()?);
        }

        if let Some(overrides) = self.overrides {
            config = config.merge(overrides);
        }

        Ok(config)
    }

    /// Reads configuration overrides from `BIBLIO_*` environment variables.
    fn from_environment() -> Result<Config> {
        Ok(Config {
            data_dir: env::var("BIBLIO_DATA_DIR").ok().map(PathBuf::from),
            maximum_lock_wait_seconds: parse_env("BIBLIO_MAX_LOCK_WAIT")?,
            loan_period_days: parse_env("BIBLIO_LOAN_PERIOD_DAYS")?,
            extension_days: parse_env("BIBLIO_EXTENSION_DAYS")?,
            late_fee_per_day: parse_env("BIBLIO_LATE_FEE_PER_DAY")?,
            damage_fee: parse_env("BIBLIO_DAMAGE_FEE")?,
            enforce_availability: parse_env("BIBLIO_ENFORCE_AVAILABILITY")?,
            allow_duplicate_reservations: parse_env("BIBLIO_ALLOW_DUPLICATE_RESERVATIONS")?,
        })
    }
}

/// Parses an optional environment variable into a typed value.
fn parse_env<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(value) => value.parse::<T>().map(Some).map_err(|_| Error::InvalidInput {
            field: name.to_string(),
            message: format!("cannot parse value '{value}'"),
        }),
        Err(_) => Ok(None),
    }
}
