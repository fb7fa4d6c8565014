//! Application configuration management.

use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Currency code used when a command does not name one.
    pub default_currency: String,
    /// Logging configuration.
    pub log: LogConfig,
    /// Extra currencies registered on top of the built-in table.
    pub currencies: Vec<CurrencyConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            log: LogConfig::default(),
            currencies: Vec::new(),
        }
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "centum=info".to_string()
}

/// A custom currency declared in configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrencyConfig {
    /// ISO-style code.
    pub code: String,
    /// Display symbol.
    #[serde(default)]
    pub grapheme: String,
    /// Display template.
    #[serde(default = "default_template")]
    pub template: String,
    /// Decimal separator.
    #[serde(default = "default_decimal")]
    pub decimal: String,
    /// Thousands separator.
    #[serde(default = "default_thousand")]
    pub thousand: String,
    /// Minor-unit digits.
    #[serde(default = "default_fraction")]
    pub fraction: u32,
}

fn default_template() -> String {
    "1 $".to_string()
}

fn default_decimal() -> String {
    ".".to_string()
}

fn default_thousand() -> String {
    ",".to_string()
}

fn default_fraction() -> u32 {
    2
}

impl From<&CurrencyConfig> for Currency {
    fn from(cfg: &CurrencyConfig) -> Self {
        Currency::new(
            &cfg.code,
            &cfg.grapheme,
            &cfg.template,
            &cfg.decimal,
            &cfg.thousand,
            cfg.fraction,
        )
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CENTUM").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid TOML or has the wrong shape.
    pub fn from_toml(source: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Descriptors for every configured custom currency.
    #[must_use]
    pub fn custom_currencies(&self) -> Vec<Currency> {
        self.currencies.iter().map(Currency::from).collect()
    }
}
