//! Business settings loading from config.toml
//!
//! The defaults match the assessment form: labor at 20 currency units per
//! hour and a 20 % margin threshold for the profitable verdict. A missing
//! config.toml simply yields the defaults; a present but malformed file is an
//! error.

use crate::errors::{Error, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    /// Labor pricing
    #[serde(default)]
    pub labor: LaborSettings,
    /// Profitability verdict tuning
    #[serde(default)]
    pub profitability: ProfitabilitySettings,
    /// HTTP listen address
    #[serde(default)]
    pub server: ServerSettings,
}

/// Labor pricing settings
#[derive(Debug, Clone, Deserialize)]
pub struct LaborSettings {
    /// Default hourly labor rate, used when an assessment does not override it
    #[serde(default = "default_hourly_rate")]
    pub hourly_rate: Decimal,
}

/// Profitability verdict settings
#[derive(Debug, Clone, Deserialize)]
pub struct ProfitabilitySettings {
    /// Minimum margin percentage for a profitable verdict
    #[serde(default = "default_margin_threshold")]
    pub margin_threshold: Decimal,
}

/// HTTP server settings
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    /// Interface to bind
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to bind
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_hourly_rate() -> Decimal {
    Decimal::from(20)
}

fn default_margin_threshold() -> Decimal {
    Decimal::from(20)
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for LaborSettings {
    fn default() -> Self {
        Self {
            hourly_rate: default_hourly_rate(),
        }
    }
}

impl Default for ProfitabilitySettings {
    fn default() -> Self {
        Self {
            margin_threshold: default_margin_threshold(),
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<Settings> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads settings from the default location (./config.toml), falling back to
/// built-in defaults when the file does not exist.
pub fn load_default_settings() -> Result<Settings> {
    let path = Path::new("config.toml");
    if path.exists() {
        load_settings(path)
    } else {
        Ok(Settings::default())
    }
}
