//! # Domain Types
//!
//! Core domain types shared by the cart, the pages and the shell.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   add_item    ┌─────────────────────┐              │
//! │  │    Product      │ ────────────► │      LineItem       │              │
//! │  │  ─────────────  │               │  ─────────────────  │              │
//! │  │  id             │               │  unique_id          │              │
//! │  │  name, brand    │  (snapshot)   │  product_id         │              │
//! │  │  selected_opts? │               │  name, brand        │              │
//! │  └─────────────────┘               │  quantity (>= 1)    │              │
//! │                                    │  selected_options   │              │
//! │  ┌─────────────────┐               └─────────────────────┘              │
//! │  │ SelectedOption  │                                                    │
//! │  │  option_id      │  e.g. { "Size", "M" }, { "Color", "#1D1F22" }      │
//! │  │  value          │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration Identity
//! Two rows describe the same configured product when their product ids match
//! and their option sequences are equal element by element, in order.
//! `[Size=M, Color=Red]` and `[Color=Red, Size=M]` are different rows.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use ts_rs::TS;

/// Keys a line item owns itself; never copied over from catalog data.
const LINE_ITEM_KEYS: [&str; 6] = [
    "uniqueId",
    "productId",
    "name",
    "brand",
    "quantity",
    "selectedOptions",
];

// =============================================================================
// Selected Option
// =============================================================================

/// One variant choice attached to a product or a cart row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOption {
    /// Attribute identifier ("Size", "Color", "Capacity").
    pub option_id: String,

    /// Chosen value for the attribute.
    pub value: String,
}

impl SelectedOption {
    pub fn new(option_id: impl Into<String>, value: impl Into<String>) -> Self {
        SelectedOption {
            option_id: option_id.into(),
            value: value.into(),
        }
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product as handed to the cart by a page.
///
/// Only the fields the cart needs are modelled. Everything else the catalog
/// sends (prices, gallery, attributes) is kept untouched in `extra` and
/// travels with the cart row. Pages may pass a product that already carries a
/// default option selection (the product page does, once the shopper picked a
/// size).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier.
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Brand shown above the name on cart rows.
    #[serde(default)]
    pub brand: Option<String>,

    /// Default selection used when `add_item` gets no explicit options.
    #[serde(default)]
    pub selected_options: Option<Vec<SelectedOption>>,

    /// Remaining catalog fields, passed through as-is.
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Creates a product with no brand and no default options.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Product {
            id: id.into(),
            name: name.into(),
            brand: None,
            selected_options: None,
            extra: Map::new(),
        }
    }

    /// Builder-style setter for the default option selection.
    pub fn with_options(mut self, options: Vec<SelectedOption>) -> Self {
        self.selected_options = Some(options);
        self
    }

    /// Builder-style setter for one pass-through catalog field.
    pub fn with_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Builder-style setter for the brand.
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }
}

// =============================================================================
// Line Item
// =============================================================================

/// One row in the cart.
///
/// ## Snapshot Pattern
/// `name`, `brand` and the catalog fields in `extra` are copied from the
/// product when the row is created, so the cart keeps rendering the same
/// data even if the catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Cart-local sequence number. Unique within one cart.
    #[ts(type = "number")]
    pub unique_id: u64,

    /// Catalog identifier of the underlying product.
    pub product_id: String,

    /// Product name at time of adding (frozen).
    #[serde(default)]
    pub name: String,

    /// Brand at time of adding (frozen).
    #[serde(default)]
    pub brand: Option<String>,

    /// Always >= 1 while the row is in the cart.
    pub quantity: u32,

    /// Ordered option selection.
    #[serde(default)]
    pub selected_options: Vec<SelectedOption>,

    /// Catalog fields frozen at time of adding (prices, gallery, attributes).
    #[serde(flatten)]
    #[ts(skip)]
    pub extra: Map<String, Value>,
}

impl LineItem {
    /// Creates a fresh row (quantity 1) for a product configuration.
    pub fn from_product(product: &Product, unique_id: u64, options: Vec<SelectedOption>) -> Self {
        LineItem {
            unique_id,
            product_id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            quantity: 1,
            selected_options: options,
            extra: product
                .extra
                .iter()
                .filter(|(key, _)| !LINE_ITEM_KEYS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        }
    }

    /// Returns true when this row holds exactly the given configuration.
    pub fn is_configuration(&self, product_id: &str, options: &[SelectedOption]) -> bool {
        self.product_id == product_id && self.selected_options.as_slice() == options
    }

    /// Returns the value selected for `option_id`, if any.
    pub fn option(&self, option_id: &str) -> Option<&str> {
        self.selected_options
            .iter()
            .find(|o| o.option_id == option_id)
            .map(|o| o.value.as_str())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
