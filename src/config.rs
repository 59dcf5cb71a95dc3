//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before any service
//! is constructed.
//!
//! ## Variables
//!
//! - `LINKSTASH_DATA_DIR` - Directory holding the two JSON blobs
//!   (default: `./data`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Runtime configuration for the CLI and any embedding process.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables, applying defaults for
    /// everything that is unset.
    pub fn from_env() -> Result<Self> {
        let data_dir = env::var("LINKSTASH_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./data"));
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let config = Self {
            data_dir,
            log_level,
            log_format,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `log_format` is not `text` or `json`, or the data
    /// directory is empty.
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.data_dir.as_os_str().is_empty() {
            anyhow::bail!("LINKSTASH_DATA_DIR must not be empty");
        }

        Ok(())
    }
}
