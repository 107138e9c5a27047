//! Configuration for the console front-end.
//!
//! The library itself reads no environment; only the `phonebook` binary calls
//! [`Config::from_env`]. A `.env` file in the working directory is honoured.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the console front-end.
#[derive(Debug, Clone)]
pub struct Config {
    /// Contacts file path (default: "contacts.txt")
    pub file_path: PathBuf,

    /// Log level (default: "warn")
    pub log_level: String,

    /// Load the contacts file on startup (default: true)
    pub autoload: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `PHONEBOOK_FILE`: Contacts file path (default: "contacts.txt")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `PHONEBOOK_AUTOLOAD`: `true` or `false` (default: true)
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let file_path = match env::var("PHONEBOOK_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "PHONEBOOK_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.file_path,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        let autoload = Self::parse_env_bool("PHONEBOOK_AUTOLOAD", defaults.autoload)?;

        Ok(Config {
            file_path,
            log_level,
            autoload,
        })
    }

    /// Parse an environment variable as bool with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(true),
                "false" | "0" | "no" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file_path: PathBuf::from("contacts.txt"),
            log_level: "warn".to_string(),
            autoload: true,
        }
    }
}
