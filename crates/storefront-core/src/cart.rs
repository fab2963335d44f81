//! # Cart Store
//!
//! Owns the cart rows and the selected category.
//!
//! ## Immutable Replace
//! Every mutation builds a fresh row sequence and swaps it in. The previous
//! `Arc<[LineItem]>` handed out to a page is never modified, so a page can
//! detect change with [`Arc::ptr_eq`] instead of diffing rows.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Page Action            Operation               Row Sequence Change     │
//! │  ───────────            ─────────               ───────────────────     │
//! │                                                                         │
//! │  "Add to cart" ───────► add_item() ───────────► qty+1 or push row      │
//! │                                                                         │
//! │  "-" on a row ────────► remove_item() ────────► qty-1 or drop row      │
//! │                                                                         │
//! │  Swatch click ────────► set_selected_option() ► upsert one option      │
//! │                                                                         │
//! │  Header nav click ────► set_category() ───────► (rows untouched)       │
//! │                                                                         │
//! │  Header "clear" ──────► replace_items()/clear() ► whole sequence       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use storefront_core::{CartStore, Product};
//!
//! let mut cart = CartStore::new();
//! let before = cart.snapshot();
//! let after = cart.add_item(&Product::new("A", "Alpha"), None);
//!
//! assert!(!Arc::ptr_eq(&before, &after));
//! assert_eq!(after[0].unique_id, 0);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::{CoreError, CoreResult};
use crate::types::{LineItem, Product, SelectedOption};
use crate::validation::validate_line_items;

/// Shared, never-mutated row sequence handed to consumers.
pub type CartItems = Arc<[LineItem]>;

/// The shopping cart plus the active category filter.
///
/// ## Invariants
/// - `unique_id` values are unique within the sequence
/// - Every row has `quantity >= 1`; a row reaching 0 is dropped
/// - Rows keep insertion order
#[derive(Debug, Clone)]
pub struct CartStore {
    items: CartItems,
    category: String,
}

impl CartStore {
    /// Creates an empty cart with no category selected.
    pub fn new() -> Self {
        CartStore {
            items: Arc::from(Vec::<LineItem>::new()),
            category: String::new(),
        }
    }

    /// Current rows in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// A shared handle on the current rows, for change detection.
    pub fn snapshot(&self) -> CartItems {
        Arc::clone(&self.items)
    }

    /// The active category filter ("" when none was chosen yet).
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Looks up a row by unique id.
    pub fn find(&self, unique_id: u64) -> Option<&LineItem> {
        self.items.iter().find(|i| i.unique_id == unique_id)
    }

    /// Adds one unit of a product configuration.
    ///
    /// ## Behavior
    /// - Options resolve to `selected_options`, else the product's default
    ///   selection, else none
    /// - Same product id and equal option sequence already in cart: that
    ///   row's quantity goes up by one, in place
    /// - Otherwise: a new row is appended with quantity 1
    pub fn add_item(
        &mut self,
        product: &Product,
        selected_options: Option<Vec<SelectedOption>>,
    ) -> CartItems {
        let options = selected_options
            .or_else(|| product.selected_options.clone())
            .unwrap_or_default();

        let mut next = self.items.to_vec();
        match next
            .iter()
            .position(|i| i.is_configuration(&product.id, &options))
        {
            Some(index) => {
                let item = &mut next[index];
                item.quantity = item.quantity.saturating_add(1);
            }
            None => next.push(LineItem::from_product(product, self.next_unique_id(), options)),
        }

        self.commit(next)
    }

    /// Removes one unit from a row.
    ///
    /// ## Behavior
    /// - Quantity 1: the row is dropped, the rest keep their order
    /// - Quantity > 1: the row stays in place with quantity - 1
    /// - Unknown id: `LineItemNotFound`, cart untouched
    pub fn remove_item(&mut self, unique_id: u64) -> CoreResult<CartItems> {
        let index = self.position(unique_id)?;

        let mut next = self.items.to_vec();
        if next[index].quantity <= 1 {
            next.remove(index);
        } else {
            next[index].quantity -= 1;
        }

        Ok(self.commit(next))
    }

    /// Sets one option on a row, replacing any earlier value for that option.
    ///
    /// The updated pair moves to the end of the row's option list. Rows are
    /// never merged here, even if the row now matches another row's
    /// configuration.
    pub fn set_selected_option(
        &mut self,
        unique_id: u64,
        option_id: &str,
        value: &str,
    ) -> CoreResult<CartItems> {
        let index = self.position(unique_id)?;

        let mut next = self.items.to_vec();
        let options = &mut next[index].selected_options;
        options.retain(|o| o.option_id != option_id);
        options.push(SelectedOption::new(option_id, value));

        Ok(self.commit(next))
    }

    /// Replaces the active category. No validation.
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    /// Replaces every row at once.
    ///
    /// The sequence is validated first; on error the cart is left untouched.
    pub fn replace_items(&mut self, items: Vec<LineItem>) -> CoreResult<CartItems> {
        validate_line_items(&items)?;
        Ok(self.commit(items))
    }

    /// Empties the cart. The category is kept.
    pub fn clear(&mut self) -> CartItems {
        self.commit(Vec::new())
    }

    /// Number of rows.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of all row quantities (header badge).
    pub fn total_quantity(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// One past the highest id in the cart, or the lowest free id once the
    /// highest is `u64::MAX` (only reachable through `replace_items`).
    fn next_unique_id(&self) -> u64 {
        let Some(max) = self.items.iter().map(|i| i.unique_id).max() else {
            return 0;
        };
        if let Some(next) = max.checked_add(1) {
            return next;
        }

        let used: HashSet<u64> = self.items.iter().map(|i| i.unique_id).collect();
        let mut id = 0;
        while used.contains(&id) {
            id += 1;
        }
        id
    }

    fn position(&self, unique_id: u64) -> CoreResult<usize> {
        self.items
            .iter()
            .position(|i| i.unique_id == unique_id)
            .ok_or(CoreError::LineItemNotFound(unique_id))
    }

    fn commit(&mut self, next: Vec<LineItem>) -> CartItems {
        self.items = Arc::from(next);
        Arc::clone(&self.items)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str) -> Product {
        Product::new(id, format!("Product {}", id))
    }

    fn size(value: &str) -> SelectedOption {
        SelectedOption::new("Size", value)
    }

    fn color(value: &str) -> SelectedOption {
        SelectedOption::new("Color", value)
    }

    #[test]
    fn test_add_to_empty_cart_starts_at_zero() {
        let mut cart = CartStore::new();
        let items = cart.add_item(&test_product("A"), None);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].unique_id, 0);
        assert_eq!(items[0].product_id, "A");
        assert_eq!(items[0].quantity, 1);
        assert!(items[0].selected_options.is_empty());
    }

    #[test]
    fn test_add_same_configuration_increases_quantity() {
        let mut cart = CartStore::new();
        cart.add_item(&test_product("A"), Some(vec![size("M")]));
        cart.add_item(&test_product("B"), None);
        let items = cart.add_item(&test_product("A"), Some(vec![size("M")]));

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].product_id, "A");
        assert_eq!(items[0].quantity, 2);
        assert_eq!(items[0].unique_id, 0);
        assert_eq!(items[1].quantity, 1);
    }

    #[test]
    fn test_add_different_options_creates_new_row() {
        let mut cart = CartStore::new();
        cart.add_item(&test_product("A"), Some(vec![size("M")]));
        let items = cart.add_item(&test_product("A"), Some(vec![size("L")]));

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].unique_id, 1);
        assert_eq!(items[1].selected_options, vec![size("L")]);
    }

    #[test]
    fn test_add_option_order_matters() {
        let mut cart = CartStore::new();
        cart.add_item(&test_product("A"), Some(vec![size("M"), color("Red")]));
        let items = cart.add_item(&test_product("A"), Some(vec![color("Red"), size("M")]));

        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_add_uses_product_default_options() {
        let mut cart = CartStore::new();
        let product = test_product("A").with_options(vec![size("S")]);

        cart.add_item(&product, None);
        let items = cart.add_item(&test_product("A"), Some(vec![size("S")]));

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_explicit_options_override_product_default() {
        let mut cart = CartStore::new();
        let product = test_product("A").with_options(vec![size("S")]);

        let items = cart.add_item(&product, Some(vec![size("XL")]));

        assert_eq!(items[0].selected_options, vec![size("XL")]);
    }

    #[test]
    fn test_new_unique_id_is_max_plus_one() {
        let mut cart = CartStore::new();
        let product = test_product("A");
        let mut rows = vec![
            LineItem::from_product(&product, 7, vec![size("S")]),
            LineItem::from_product(&product, 3, vec![size("M")]),
        ];
        rows[1].quantity = 2;
        cart.replace_items(rows).unwrap();

        let items = cart.add_item(&test_product("B"), None);

        assert_eq!(items.len(), 3);
        assert_eq!(items[2].unique_id, 8);
    }

    #[test]
    fn test_new_unique_id_after_max_id_row() {
        let mut cart = CartStore::new();
        let product = test_product("A");
        cart.replace_items(vec![
            LineItem::from_product(&product, u64::MAX, Vec::new()),
            LineItem::from_product(&product, 0, vec![size("S")]),
        ])
        .unwrap();

        let items = cart.add_item(&test_product("B"), None);
        assert_eq!(items[2].unique_id, 1);

        let items = cart.add_item(&test_product("C"), None);
        assert_eq!(items[3].unique_id, 2);

        let ids: HashSet<u64> = items.iter().map(|i| i.unique_id).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_remove_last_unit_drops_row() {
        let mut cart = CartStore::new();
        cart.add_item(&test_product("A"), None);
        cart.add_item(&test_product("B"), None);
        cart.add_item(&test_product("C"), None);

        let items = cart.remove_item(1).unwrap();

        let ids: Vec<u64> = items.iter().map(|i| i.unique_id).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn test_remove_decrements_quantity_in_place() {
        let mut cart = CartStore::new();
        cart.add_item(&test_product("A"), None);
        cart.add_item(&test_product("A"), None);
        cart.add_item(&test_product("A"), None);
        cart.add_item(&test_product("B"), None);

        let items = cart.remove_item(0).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].unique_id, 0);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_remove_unknown_id_fails_and_keeps_cart() {
        let mut cart = CartStore::new();
        cart.add_item(&test_product("A"), None);
        let before = cart.snapshot();

        let err = cart.remove_item(42).unwrap_err();

        assert!(matches!(err, CoreError::LineItemNotFound(42)));
        assert!(Arc::ptr_eq(&before, &cart.snapshot()));
    }

    #[test]
    fn test_set_selected_option_replaces_existing_pair() {
        let mut cart = CartStore::new();
        cart.add_item(&test_product("A"), Some(vec![size("M"), color("Red")]));
        cart.add_item(&test_product("B"), Some(vec![size("M")]));

        let items = cart.set_selected_option(0, "Size", "L").unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].selected_options, vec![color("Red"), size("L")]);
        assert_eq!(items[1].selected_options, vec![size("M")]);
    }

    #[test]
    fn test_set_selected_option_appends_new_pair() {
        let mut cart = CartStore::new();
        cart.add_item(&test_product("A"), Some(vec![size("M")]));

        let items = cart.set_selected_option(0, "Color", "Blue").unwrap();

        assert_eq!(items[0].selected_options, vec![size("M"), color("Blue")]);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_set_selected_option_does_not_merge_rows() {
        let mut cart = CartStore::new();
        cart.add_item(&test_product("A"), Some(vec![size("M")]));
        cart.add_item(&test_product("A"), Some(vec![size("L")]));

        let items = cart.set_selected_option(1, "Size", "M").unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].selected_options, items[1].selected_options);
    }

    #[test]
    fn test_set_selected_option_unknown_id() {
        let mut cart = CartStore::new();
        let err = cart.set_selected_option(0, "Size", "M").unwrap_err();
        assert!(matches!(err, CoreError::LineItemNotFound(0)));
    }

    #[test]
    fn test_set_category_is_idempotent() {
        let mut cart = CartStore::new();
        assert_eq!(cart.category(), "");

        cart.set_category("tech");
        let once = cart.category().to_string();
        cart.set_category("tech");

        assert_eq!(cart.category(), once);
        assert_eq!(cart.category(), "tech");
    }

    #[test]
    fn test_every_mutation_swaps_the_sequence() {
        let mut cart = CartStore::new();
        let a = cart.add_item(&test_product("A"), None);
        let b = cart.add_item(&test_product("A"), None);

        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(a[0].quantity, 1);
        assert_eq!(b[0].quantity, 2);
    }

    #[test]
    fn test_replace_items_rejects_invalid_rows() {
        let mut cart = CartStore::new();
        cart.add_item(&test_product("A"), None);
        let before = cart.snapshot();

        let mut zero = LineItem::from_product(&test_product("B"), 5, Vec::new());
        zero.quantity = 0;

        assert!(cart.replace_items(vec![zero]).is_err());
        assert!(Arc::ptr_eq(&before, &cart.snapshot()));
    }

    #[test]
    fn test_clear_keeps_category() {
        let mut cart = CartStore::new();
        cart.set_category("clothes");
        cart.add_item(&test_product("A"), None);

        let items = cart.clear();

        assert!(items.is_empty());
        assert!(cart.is_empty());
        assert_eq!(cart.category(), "clothes");
    }

    #[test]
    fn test_counts() {
        let mut cart = CartStore::new();
        cart.add_item(&test_product("A"), None);
        cart.add_item(&test_product("A"), None);
        cart.add_item(&test_product("B"), None);

        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_eq!(cart.find(1).map(|i| i.product_id.as_str()), Some("B"));
        assert!(cart.find(9).is_none());
    }

    #[test]
    fn test_end_to_end_scenario() {
        let mut cart = CartStore::new();

        let items = cart.add_item(&test_product("A"), None);
        assert_eq!(items.len(), 1);
        assert_eq!((items[0].unique_id, items[0].quantity), (0, 1));

        let items = cart.add_item(&test_product("A"), None);
        assert_eq!(items.len(), 1);
        assert_eq!((items[0].unique_id, items[0].quantity), (0, 2));

        let items = cart.add_item(&test_product("B"), None);
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].unique_id, 1);
        assert_eq!(items[1].product_id, "B");
        assert_eq!(items[1].quantity, 1);

        let items = cart.remove_item(0).unwrap();
        assert_eq!(items[0].quantity, 1);

        let items = cart.remove_item(0).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].unique_id, 1);
        assert_eq!(items[0].product_id, "B");
    }
}
