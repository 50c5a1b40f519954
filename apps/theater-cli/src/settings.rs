//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --plays data/plays.json --format html                              │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     THEATER_PLAYS_PATH=/srv/plays.json                                 │
//! │     THEATER_LOCALE=de-DE                                               │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     ./theater.toml (or the file named by THEATER_CONFIG)               │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     data/plays.json, data/invoices.json, text, en-US                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # theater.toml
//! plays_path = "data/plays.json"
//! invoices_path = "data/invoices.json"
//! format = "text"     # text | html | json
//! locale = "en-US"    # en-US | de-DE
//! log_filter = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use theater_render::{Locale, LocaleCurrency, OutputFormat};

const DEFAULT_CONFIG_FILE: &str = "theater";

/// Resolved CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementConfig {
    /// Path to the play catalog (JSON map keyed by play id).
    pub plays_path: PathBuf,

    /// Path to the invoices (JSON list).
    pub invoices_path: PathBuf,

    /// Output format name (`text`, `html` or `json`).
    pub format: String,

    /// Locale name (`en-US` or `de-DE`).
    pub locale: String,

    /// Fallback tracing filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for StatementConfig {
    fn default() -> Self {
        StatementConfig {
            plays_path: PathBuf::from("data/plays.json"),
            invoices_path: PathBuf::from("data/invoices.json"),
            format: OutputFormat::Text.to_string(),
            locale: Locale::EnUs.to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl StatementConfig {
    /// Loads defaults, the config file and `THEATER_*` environment variables.
    ///
    /// The config file is `./theater.toml` unless `THEATER_CONFIG` names
    /// another one. A missing file is not an error.
    pub fn load() -> Result<Self, ConfigError> {
        let file = std::env::var("THEATER_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());
        Self::load_from(&file)
    }

    /// Like [`StatementConfig::load`] with an explicit config file name.
    pub fn load_from(file: &str) -> Result<Self, ConfigError> {
        let defaults = StatementConfig::default();

        let settings = ::config::Config::builder()
            .set_default("plays_path", defaults.plays_path.to_string_lossy().into_owned())?
            .set_default("invoices_path", defaults.invoices_path.to_string_lossy().into_owned())?
            .set_default("format", defaults.format)?
            .set_default("locale", defaults.locale)?
            .set_default("log_filter", defaults.log_filter)?
            .add_source(::config::File::with_name(file).required(false))
            .add_source(::config::Environment::with_prefix("THEATER"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Applies command-line flags on top of the loaded values.
    ///
    /// ## Flags
    /// - `--plays PATH`
    /// - `--invoices PATH`
    /// - `--format text|html|json`
    /// - `--locale en-US|de-DE`
    pub fn apply_args(&mut self, args: &[String]) -> Result<(), ConfigError> {
        let mut iter = args.iter();

        while let Some(flag) = iter.next() {
            let mut value = || {
                iter.next()
                    .cloned()
                    .ok_or_else(|| ConfigError::MissingValue(flag.clone()))
            };

            match flag.as_str() {
                "--plays" | "-p" => self.plays_path = PathBuf::from(value()?),
                "--invoices" | "-i" => self.invoices_path = PathBuf::from(value()?),
                "--format" | "-f" => self.format = value()?,
                "--locale" | "-l" => self.locale = value()?,
                other => return Err(ConfigError::UnknownFlag(other.to_string())),
            }
        }

        Ok(())
    }

    /// Parses the configured output format.
    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        self.format.parse().map_err(|e: theater_render::RenderError| {
            ConfigError::InvalidValue {
                key: "format".to_string(),
                reason: e.to_string(),
            }
        })
    }

    /// Parses the configured locale into its currency format.
    pub fn currency(&self) -> Result<LocaleCurrency, ConfigError> {
        self.locale
            .parse::<Locale>()
            .map(|locale| locale.currency())
            .map_err(|e| ConfigError::InvalidValue {
                key: "locale".to_string(),
                reason: e.to_string(),
            })
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    #[error("Missing value for flag {0}")]
    MissingValue(String),

    #[error("Unknown flag: {0}")]
    UnknownFlag(String),
}
