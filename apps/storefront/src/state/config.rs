//! # Configuration State
//!
//! Stores shell configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use serde::{Deserialize, Serialize};
use storefront_core::validation::validate_currency_code;
use storefront_core::Route;

/// Shell configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Store name (displayed in the header)
    pub store_name: String,

    /// Currency selected when the session starts (ISO 4217)
    pub currency_code: String,

    /// Currencies offered by the header selector, in display order
    pub currencies: Vec<String>,

    /// Route rendered before the first navigation
    pub start_path: String,
}

impl ConfigState {
    /// Loads configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable source.
    ///
    /// Unset variables fall back to [`ConfigState::default`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ConfigState::default();

        let config = ConfigState {
            store_name: lookup("STOREFRONT_STORE_NAME").unwrap_or(defaults.store_name),

            currency_code: lookup("STOREFRONT_CURRENCY")
                .map(|code| code.trim().to_string())
                .unwrap_or(defaults.currency_code),

            currencies: match lookup("STOREFRONT_CURRENCIES") {
                Some(list) => list
                    .split(',')
                    .map(str::trim)
                    .filter(|code| !code.is_empty())
                    .map(str::to_string)
                    .collect(),
                None => defaults.currencies,
            },

            start_path: lookup("STOREFRONT_START_PATH").unwrap_or(defaults.start_path),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.currencies.is_empty() {
            return Err(ConfigError::InvalidValue("STOREFRONT_CURRENCIES".to_string()));
        }

        for code in &self.currencies {
            validate_currency_code(code)
                .map_err(|_| ConfigError::InvalidValue("STOREFRONT_CURRENCIES".to_string()))?;
        }

        validate_currency_code(&self.currency_code)
            .map_err(|_| ConfigError::InvalidValue("STOREFRONT_CURRENCY".to_string()))?;

        if !self.currencies.contains(&self.currency_code) {
            return Err(ConfigError::UnsupportedCurrency(self.currency_code.clone()));
        }

        Route::parse(&self.start_path)
            .map_err(|_| ConfigError::InvalidValue("STOREFRONT_START_PATH".to_string()))?;

        Ok(())
    }
}

impl Default for ConfigState {
    fn default() -> Self {
        ConfigState {
            store_name: "Storefront".to_string(),
            currency_code: "USD".to_string(),
            currencies: ["USD", "EUR", "GBP", "JPY", "RUB"]
                .iter()
                .map(|c| c.to_string())
                .collect(),
            start_path: "/".to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Currency {0} is not in STOREFRONT_CURRENCIES")]
    UnsupportedCurrency(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ConfigState, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ConfigState::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.store_name, "Storefront");
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.currencies.len(), 5);
        assert_eq!(config.start_path, "/");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("STOREFRONT_STORE_NAME", "Scandi"),
            ("STOREFRONT_CURRENCY", "EUR"),
            ("STOREFRONT_CURRENCIES", "EUR, SEK"),
            ("STOREFRONT_START_PATH", "/category/all"),
        ])
        .unwrap();

        assert_eq!(config.store_name, "Scandi");
        assert_eq!(config.currency_code, "EUR");
        assert_eq!(config.currencies, vec!["EUR".to_string(), "SEK".to_string()]);
        assert_eq!(config.start_path, "/category/all");
    }

    #[test]
    fn test_rejects_currency_not_offered() {
        let err = load(&[("STOREFRONT_CURRENCY", "CHF")]).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedCurrency(code) if code == "CHF"));
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            load(&[("STOREFRONT_CURRENCY", "usd")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("STOREFRONT_CURRENCIES", " , ")]),
            Err(ConfigError::InvalidValue(_))
        ));
        assert!(matches!(
            load(&[("STOREFRONT_START_PATH", "/checkout")]),
            Err(ConfigError::InvalidValue(_))
        ));
    }
}
