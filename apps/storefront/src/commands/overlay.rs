//! # Overlay Commands
//!
//! Header popups (mini-cart, currency selector) and the overlay behind them.

use storefront_core::OverlayFlags;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CurrencyState, OverlayState};

pub fn toggle_mini_cart(overlay: &mut OverlayState) -> OverlayFlags {
    debug!("toggle_mini_cart command");
    overlay.toggle_mini_cart()
}

pub fn toggle_currencies(overlay: &mut OverlayState) -> OverlayFlags {
    debug!("toggle_currencies command");
    overlay.toggle_currencies()
}

/// Click on the overlay: closes both popups.
pub fn dismiss_overlay(overlay: &mut OverlayState) -> OverlayFlags {
    debug!("dismiss_overlay command");
    overlay.dismiss()
}

/// Picks a currency from the selector, which then closes.
///
/// On error the selector stays open and the currency is unchanged.
pub fn select_currency(
    currency: &mut CurrencyState,
    overlay: &mut OverlayState,
    code: &str,
) -> Result<(), ApiError> {
    debug!(code = %code, "select_currency command");

    currency.select(code)?;
    overlay.close_currencies();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;

    #[test]
    fn test_select_currency_closes_selector() {
        let mut currency = CurrencyState::from_config(&ConfigState::default());
        let mut overlay = OverlayState::new();
        toggle_currencies(&mut overlay);

        select_currency(&mut currency, &mut overlay, "GBP").unwrap();

        assert_eq!(currency.selected(), "GBP");
        assert!(!overlay.flags().currencies_active);
    }

    #[test]
    fn test_failed_selection_keeps_selector_open() {
        let mut currency = CurrencyState::from_config(&ConfigState::default());
        let mut overlay = OverlayState::new();
        toggle_currencies(&mut overlay);

        assert!(select_currency(&mut currency, &mut overlay, "XYZ").is_err());

        assert_eq!(currency.selected(), "USD");
        assert!(overlay.flags().currencies_active);
    }
}
