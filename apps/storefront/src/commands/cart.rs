//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐  add_to_cart  ┌──────────┐  remove_from_cart (last unit)  │
//! │  │  Empty   │──────────────►│ In Cart  │───────────────────────┐        │
//! │  │  Cart    │               │          │                       │        │
//! │  └──────────┘               └──────────┘                       │        │
//! │       ▲                      │  ▲    │ change_option           │        │
//! │       │                      │  └────┘ add / remove (qty > 1)  │        │
//! │       │     clear_cart       │                                 │        │
//! │       └──────────────────────┴─────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::validation::validate_product;
use storefront_core::{CartItems, CartStore, LineItem, Product, SelectedOption};
use tracing::debug;

use crate::error::ApiError;

/// Adds one unit of a product configuration.
///
/// ## Behavior
/// - Same product with equal options already in cart: quantity increases
/// - Otherwise: appended as a new row
///
/// ## Arguments
/// * `product` - Product as the page knows it
/// * `selected_options` - Explicit choice; falls back to the product's default
pub fn add_to_cart(
    cart: &mut CartStore,
    product: Product,
    selected_options: Option<Vec<SelectedOption>>,
) -> Result<CartItems, ApiError> {
    debug!(product_id = %product.id, explicit_options = selected_options.is_some(), "add_to_cart command");

    validate_product(&product)?;
    Ok(cart.add_item(&product, selected_options))
}

/// Removes one unit from a row; the row disappears at zero.
pub fn remove_from_cart(cart: &mut CartStore, unique_id: u64) -> Result<CartItems, ApiError> {
    debug!(unique_id, "remove_from_cart command");

    Ok(cart.remove_item(unique_id)?)
}

/// Changes one option (size, colour, ...) on a row in the cart page.
pub fn change_option(
    cart: &mut CartStore,
    unique_id: u64,
    option_id: &str,
    value: &str,
) -> Result<CartItems, ApiError> {
    debug!(unique_id, option_id = %option_id, value = %value, "change_option command");

    Ok(cart.set_selected_option(unique_id, option_id, value)?)
}

/// Replaces the whole cart (the header's cart setter).
pub fn replace_cart(cart: &mut CartStore, items: Vec<LineItem>) -> Result<CartItems, ApiError> {
    debug!(rows = items.len(), "replace_cart command");

    Ok(cart.replace_items(items)?)
}

/// Clears all rows from the cart.
pub fn clear_cart(cart: &mut CartStore) -> CartItems {
    debug!("clear_cart command");

    cart.clear()
}
