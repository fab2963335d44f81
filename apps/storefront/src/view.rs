//! # Shell View
//!
//! What the shell hands down after every command: header props, the overlay
//! class and the routed page with exactly the props that page receives.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ Header  (category, cart, currency, store)     │
//! ├───────────────────────────────────────────────┤
//! │ Overlay (class from popup flags)              │
//! ├───────────────────────────────────────────────┤
//! │ Page    (route + bindings, or none)           │
//! └───────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_core::{LineItem, OverlayFlags, PageBindings, Route};

use crate::state::ShellState;

/// Full render snapshot of the shell.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShellView {
    pub header: HeaderView,
    pub overlay: OverlayFlags,
    pub overlay_class: &'static str,
    /// Path as last navigated to, matched or not.
    pub path: String,
    /// `None` when the current path matches no page.
    pub page: Option<PageView>,
}

/// Props of the header, rendered on every route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderView {
    pub store_name: String,
    pub category: String,
    pub cart_items: Vec<LineItem>,
    pub item_count: usize,
    pub total_quantity: u64,
    pub currency: String,
    pub currencies: Vec<String>,
}

/// Props of the routed page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub route: Route,
    pub path: String,
    pub bindings: PageBindings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_items: Option<Vec<LineItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl ShellView {
    pub fn compose(state: &ShellState) -> Self {
        let cart = &state.cart;
        let flags = state.overlay.flags();

        let header = HeaderView {
            store_name: state.config.store_name.clone(),
            category: cart.category().to_string(),
            cart_items: cart.items().to_vec(),
            item_count: cart.item_count(),
            total_quantity: cart.total_quantity(),
            currency: state.currency.selected().to_string(),
            currencies: state.currency.available().to_vec(),
        };

        let page = state.navigation.route().map(|route| {
            let bindings = route.page().bindings();
            PageView {
                route: route.clone(),
                path: route.path(),
                bindings,
                cart_items: bindings.cart_items.then(|| cart.items().to_vec()),
                currency: bindings
                    .currency
                    .then(|| state.currency.selected().to_string()),
            }
        });

        ShellView {
            header,
            overlay: flags,
            overlay_class: flags.class(),
            path: state.navigation.path().to_string(),
            page,
        }
    }
}
