//! # storefront-core: Pure Cart Logic for the Storefront Shell
//!
//! This crate is the **heart** of the storefront shell. It contains the cart
//! rules, route matching and overlay rules as pure code with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Storefront Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Pages & Header (web)                         │   │
//! │  │    Home ──► Category ──► Product ──► Cart      Mini-cart        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON commands                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Storefront Shell (apps/storefront)           │   │
//! │  │    add_to_cart, remove_from_cart, navigate, dismiss_overlay    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │  routing  │  │  overlay  │  │   │
//! │  │   │  Product  │  │ CartStore │  │   Route   │  │   Flags   │  │   │
//! │  │   │ LineItem  │  │           │  │   Page    │  │   class   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO LOGGING SUBSCRIBERS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Product, LineItem, SelectedOption
//! - [`cart`] - CartStore and its mutations
//! - [`routing`] - Path to page matching
//! - [`overlay`] - Overlay class from the popup flags
//! - [`validation`] - Checks on data entering the cart
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::{CartStore, Product, SelectedOption};
//!
//! let mut cart = CartStore::new();
//! let jacket = Product::new("jacket", "Winter Jacket");
//!
//! cart.add_item(&jacket, Some(vec![SelectedOption::new("Size", "M")]));
//! let items = cart.add_item(&jacket, Some(vec![SelectedOption::new("Size", "M")]));
//!
//! assert_eq!(items.len(), 1);
//! assert_eq!(items[0].quantity, 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod overlay;
pub mod routing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartItems, CartStore};
pub use error::{CoreError, CoreResult, RouteError, ValidationError};
pub use overlay::OverlayFlags;
pub use routing::{Page, PageBindings, Route};
pub use types::*;
