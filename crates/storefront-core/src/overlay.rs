//! # Overlay
//!
//! The dimming layer drawn behind the mini-cart and the currency selector.
//!
//! Both visibility flags live outside the cart (the header toggles them).
//! The core only reads them to decide the overlay class.
//!
//! ```text
//! mini_cart  currencies   class
//! ─────────  ──────────   ─────────────────────────────────
//!   true        any       "overlay active"
//!   false       true      "overlay overlay--hidden active"
//!   false       false     "overlay"
//! ```
//!
//! The currency selector gets an invisible overlay: it still catches the
//! outside click that closes the dropdown, but does not dim the page.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Visibility of the two header popups.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OverlayFlags {
    pub mini_cart_active: bool,
    pub currencies_active: bool,
}

impl OverlayFlags {
    /// CSS class for the overlay element.
    pub const fn class(self) -> &'static str {
        if self.mini_cart_active {
            "overlay active"
        } else if self.currencies_active {
            "overlay overlay--hidden active"
        } else {
            "overlay"
        }
    }

    /// True when the overlay intercepts clicks.
    pub const fn is_active(self) -> bool {
        self.mini_cart_active || self.currencies_active
    }

    /// Flags after a click on the overlay: both popups closed.
    pub const fn dismissed(self) -> Self {
        OverlayFlags {
            mini_cart_active: false,
            currencies_active: false,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
