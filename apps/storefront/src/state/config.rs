//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`COMBINADO_*`)
//! 2. Config file (`storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Config File Location
//! - `COMBINADO_CONFIG` if set
//! - otherwise the platform config directory, e.g.
//!   `~/.config/combinado/storefront.toml` on Linux
//!
//! A missing file is not an error; defaults are used.
//!
//! ## Configuration File Format
//! ```toml
//! storeName = "Combinado"
//! storeAddress = "Av. Ejemplo 123, Lima"
//! contact = "51933701280"
//! chatBase = "https://wa.me/"
//! currencySymbol = "S/"
//! language = "es"
//! clearCartAfterDispatch = false
//! menuPath = "/etc/combinado/menu.toml"
//! ```
//!
//! ## Thread Safety
//! Configuration is read-only after initialization.

use std::path::{Path, PathBuf};

use combinado_core::validation::validate_contact;
use combinado_core::{
    Language, Money, StoreInfo, SummaryTemplate, ValidationError, DEFAULT_CHAT_BASE,
    DEFAULT_CONTACT, DEFAULT_CURRENCY_SYMBOL, DEFAULT_STORE_ADDRESS, DEFAULT_STORE_NAME,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "storefront.toml";

// =============================================================================
// Config Error
// =============================================================================

/// Problems loading configuration or the menu file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ValidationError),

    #[error("Invalid value for {var}: {reason}")]
    InvalidEnv { var: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// Config State
// =============================================================================

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigState {
    /// Store name (summary title)
    pub store_name: String,

    /// Store address (last line of the summary)
    pub store_address: String,

    /// WhatsApp number orders are sent to, digits only
    pub contact: String,

    /// Chat deep-link service
    pub chat_base: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Summary and message language
    pub language: Language,

    /// Empty the cart once an order has been dispatched
    pub clear_cart_after_dispatch: bool,

    /// Menu file replacing the built-in menu
    pub menu_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// Returns the Combinado store defaults.
    fn default() -> Self {
        ConfigState {
            store_name: DEFAULT_STORE_NAME.to_string(),
            store_address: DEFAULT_STORE_ADDRESS.to_string(),
            contact: DEFAULT_CONTACT.to_string(),
            chat_base: DEFAULT_CHAT_BASE.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            language: Language::Es,
            clear_cart_after_dispatch: false,
            menu_path: None,
        }
    }
}

impl ConfigState {
    /// Loads configuration from the config file (if any) and the environment.
    pub fn load() -> ConfigResult<Self> {
        let mut config = match config_file_path() {
            Some(path) if path.exists() => ConfigState::from_file(&path)?,
            Some(path) => {
                debug!(?path, "No config file, using defaults");
                ConfigState::default()
            }
            None => ConfigState::default(),
        };

        config.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML config file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = ConfigState::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        info!(?path, "Loaded config file");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Applies `COMBINADO_*` overrides.
    ///
    /// ## Environment Variables
    /// - `COMBINADO_STORE_NAME`: Override store name
    /// - `COMBINADO_STORE_ADDRESS`: Override store address
    /// - `COMBINADO_CONTACT`: Override WhatsApp number
    /// - `COMBINADO_LANGUAGE`: `es` or `en`
    /// - `COMBINADO_MENU`: Path to a menu file
    pub fn apply_env<F>(&mut self, var: F) -> ConfigResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = var("COMBINADO_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(address) = var("COMBINADO_STORE_ADDRESS") {
            self.store_address = address;
        }

        if let Some(contact) = var("COMBINADO_CONTACT") {
            self.contact = contact;
        }

        if let Some(language) = var("COMBINADO_LANGUAGE") {
            self.language = language
                .parse()
                .map_err(|reason| ConfigError::InvalidEnv {
                    var: "COMBINADO_LANGUAGE",
                    reason,
                })?;
        }

        if let Some(menu) = var("COMBINADO_MENU") {
            self.menu_path = Some(PathBuf::from(menu));
        }

        Ok(())
    }

    /// Checks values that would otherwise only fail at order time.
    pub fn validate(&self) -> ConfigResult<()> {
        validate_contact(&self.contact)?;

        if self.store_name.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "storeName".to_string(),
            }
            .into());
        }

        Ok(())
    }

    pub fn store_info(&self) -> StoreInfo {
        StoreInfo {
            name: self.store_name.clone(),
            address: self.store_address.clone(),
            contact: self.contact.clone(),
        }
    }

    pub fn summary_template(&self) -> SummaryTemplate {
        SummaryTemplate::new(self.language, self.currency_symbol.clone())
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use combinado_core::Money;
    /// use combinado_storefront::state::ConfigState;
    ///
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(Money::from_soles(21)), "S/ 21");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        format!("{} {}", self.currency_symbol, amount)
    }
}

/// Resolves the config file location.
fn config_file_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("COMBINADO_CONFIG") {
        return Some(PathBuf::from(path));
    }

    ProjectDirs::from("pe", "combinado", "combinado")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}
