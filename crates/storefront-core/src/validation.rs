//! # Validation Module
//!
//! Input validation for data entering the cart from outside the core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Pages                                                         │
//! │  └── Only offer buttons for rows that are on screen                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Shell command (Rust)                                          │
//! │  ├── Type validation (deserialization)                                  │
//! │  └── THIS MODULE: product ids, replacement carts, currency codes        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: CartStore                                                     │
//! │  └── Unknown unique id → LineItemNotFound                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_currency_code, validate_product};
//! use storefront_core::Product;
//!
//! validate_product(&Product::new("jacket", "Jacket")).unwrap();
//! validate_currency_code("EUR").unwrap();
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::{LineItem, Product};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a product handed to `add_item`.
///
/// ## Rules
/// - `id` must not be empty or whitespace
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    if product.id.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "product id".to_string(),
        });
    }

    Ok(())
}

/// Validates a whole replacement cart.
///
/// ## Rules
/// - Every row has a product id
/// - Every row has quantity >= 1 (zero-quantity rows are never kept)
/// - No two rows share a unique id
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_line_items;
/// use storefront_core::{LineItem, Product};
///
/// let product = Product::new("A", "Alpha");
/// let rows = vec![
///     LineItem::from_product(&product, 0, Vec::new()),
///     LineItem::from_product(&product, 0, Vec::new()),
/// ];
/// assert!(validate_line_items(&rows).is_err());
/// ```
pub fn validate_line_items(items: &[LineItem]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(items.len());

    for item in items {
        if item.product_id.trim().is_empty() {
            return Err(ValidationError::Required {
                field: "productId".to_string(),
            });
        }

        if item.quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }

        if !seen.insert(item.unique_id) {
            return Err(ValidationError::Duplicate {
                field: "uniqueId".to_string(),
                value: item.unique_id.to_string(),
            });
        }
    }

    Ok(())
}

/// Validates an ISO 4217 currency code.
///
/// ## Rules
/// - Exactly three ASCII uppercase letters
pub fn validate_currency_code(code: &str) -> ValidationResult<()> {
    if code.is_empty() {
        return Err(ValidationError::Required {
            field: "currency".to_string(),
        });
    }

    if code.len() > 3 {
        return Err(ValidationError::TooLong {
            field: "currency".to_string(),
            max: 3,
        });
    }

    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::InvalidFormat {
            field: "currency".to_string(),
            reason: "must be three uppercase letters".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn row(unique_id: u64, quantity: u32) -> LineItem {
        let mut item = LineItem::from_product(&Product::new("A", "Alpha"), unique_id, Vec::new());
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&Product::new("A", "Alpha")).is_ok());
        assert!(validate_product(&Product::new("", "Nameless")).is_err());
        assert!(validate_product(&Product::new("   ", "Blank")).is_err());
    }

    #[test]
    fn test_validate_line_items() {
        assert!(validate_line_items(&[]).is_ok());
        assert!(validate_line_items(&[row(0, 1), row(5, 3)]).is_ok());

        assert!(matches!(
            validate_line_items(&[row(0, 0)]),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_line_items(&[row(2, 1), row(2, 4)]),
            Err(ValidationError::Duplicate { .. })
        ));
    }

    #[test]
    fn test_validate_currency_code() {
        assert!(validate_currency_code("USD").is_ok());
        assert!(validate_currency_code("JPY").is_ok());

        assert!(validate_currency_code("").is_err());
        assert!(validate_currency_code("usd").is_err());
        assert!(validate_currency_code("US").is_err());
        assert!(validate_currency_code("USDT").is_err());
    }
}
