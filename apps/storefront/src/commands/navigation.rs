//! # Navigation Commands
//!
//! Route changes and the header's category selection.

use storefront_core::{CartStore, Route};
use tracing::debug;

use crate::state::NavigationState;

/// Navigates to a path. Unmatched paths render no page.
pub fn navigate(nav: &mut NavigationState, path: &str) -> Option<Route> {
    debug!(path = %path, "navigate command");

    nav.navigate(path).cloned()
}

/// Sets the active category (header navigation link).
pub fn set_category(cart: &mut CartStore, category: String) {
    debug!(category = %category, "set_category command");

    cart.set_category(category);
}
