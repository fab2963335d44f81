//! # Currency State
//!
//! The display currency chosen in the header selector.
//!
//! Prices are not computed here. Pages receive the code and format their
//! own price lists with it.

use storefront_core::validation::validate_currency_code;

use crate::error::ApiError;
use crate::state::ConfigState;

#[derive(Debug, Clone)]
pub struct CurrencyState {
    selected: String,
    available: Vec<String>,
}

impl CurrencyState {
    /// Starts on the configured currency.
    pub fn from_config(config: &ConfigState) -> Self {
        CurrencyState {
            selected: config.currency_code.clone(),
            available: config.currencies.clone(),
        }
    }

    pub fn selected(&self) -> &str {
        &self.selected
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    /// Switches currency.
    ///
    /// ## Errors
    /// - Malformed code: `VALIDATION_ERROR`
    /// - Code not offered by the selector: `NOT_FOUND`
    pub fn select(&mut self, code: &str) -> Result<&str, ApiError> {
        validate_currency_code(code)?;

        if !self.available.iter().any(|c| c == code) {
            return Err(ApiError::not_found("Currency", code));
        }

        self.selected = code.to_string();
        Ok(&self.selected)
    }
}
