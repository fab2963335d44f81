//! # Overlay State
//!
//! Owns the mini-cart and currency-selector visibility flags.
//!
//! Only one popup is open at a time: opening one closes the other.
//! The overlay class itself is computed by `storefront_core::OverlayFlags`.

use storefront_core::OverlayFlags;

/// Header popup visibility.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayState {
    flags: OverlayFlags,
}

impl OverlayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flags(&self) -> OverlayFlags {
        self.flags
    }

    /// Opens or closes the mini-cart. Opening closes the currency selector.
    pub fn toggle_mini_cart(&mut self) -> OverlayFlags {
        let open = !self.flags.mini_cart_active;
        self.flags = OverlayFlags {
            mini_cart_active: open,
            currencies_active: self.flags.currencies_active && !open,
        };
        self.flags
    }

    /// Opens or closes the currency selector. Opening closes the mini-cart.
    pub fn toggle_currencies(&mut self) -> OverlayFlags {
        let open = !self.flags.currencies_active;
        self.flags = OverlayFlags {
            mini_cart_active: self.flags.mini_cart_active && !open,
            currencies_active: open,
        };
        self.flags
    }

    pub fn close_currencies(&mut self) {
        self.flags.currencies_active = false;
    }

    /// Overlay click: both popups closed.
    pub fn dismiss(&mut self) -> OverlayFlags {
        self.flags = self.flags.dismissed();
        self.flags
    }
}
