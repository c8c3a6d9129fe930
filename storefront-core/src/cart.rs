use rust_decimal::Decimal;

use crate::models::{CartItem, Product};

/// Line items the current session intends to purchase.
///
/// Products are stored by value: each line item holds a copy of the product
/// taken when it was added, so later catalog edits never change what is
/// already in the cart. The cart itself is session-scoped and has no storage
/// dependency; callers that want persistence serialize `items()` themselves
/// and restore through [`ShoppingCart::from_items`].
///
/// Invariants: at most one line item per product id, and every stored
/// quantity is at least 1.
#[derive(Debug, Default)]
pub struct ShoppingCart {
    items: Vec<CartItem>,
}

impl ShoppingCart {
    /// Creates an empty cart
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a cart from previously serialized line items.
    ///
    /// Items are re-added one by one, so duplicate product ids merge and
    /// zero quantities drop out; the cart invariants hold regardless of what
    /// the caller persisted.
    pub fn from_items(items: Vec<CartItem>) -> Self {
        let mut cart = Self::new();
        for item in items {
            cart.add_item(&item.product, item.quantity);
        }
        cart
    }

    /// Adds `quantity` units of the product. If a line item for this product
    /// id already exists its quantity is incremented; otherwise a new line
    /// item is inserted with a snapshot of the product's current fields.
    ///
    /// A quantity of 0 merges as +0 into an existing item and inserts
    /// nothing new, keeping the quantity >= 1 invariant.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            item.quantity = item.quantity.saturating_add(quantity);
            return;
        }

        if quantity == 0 {
            return;
        }

        self.items.push(CartItem {
            product: product.clone(),
            quantity,
        });
    }

    /// Removes the line item for the given product id; no-op when absent
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|i| i.product.id != product_id);
    }

    /// Sets the quantity of an existing line item.
    ///
    /// A `new_quantity` of 0 is rejected as a no-op rather than removing the
    /// item; removal is an explicit `remove_item` call. Unknown product ids
    /// are also a no-op.
    pub fn update_quantity(&mut self, product_id: &str, new_quantity: u32) {
        if new_quantity < 1 {
            return;
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product_id) {
            item.quantity = new_quantity;
        }
    }

    /// Empties the cart
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total units across all line items (not distinct products)
    pub fn count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Sum of price x quantity over all line items, using each item's
    /// snapshot price
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .fold(Decimal::ZERO, |acc, i| {
                acc + i.product.price * Decimal::from(i.quantity)
            })
    }

    /// The current line items in insertion order
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Number of distinct line items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the cart holds no line items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductDraft;

    fn product(id: &str, price: &str) -> Product {
        ProductDraft {
            name: id.to_string(),
            category: "Safety Railings".into(),
            price: price.parse().unwrap(),
            ..Default::default()
        }
        .into_product(id.to_string())
    }

    #[test]
    fn test_repeat_adds_merge_into_one_line_item() {
        let mut cart = ShoppingCart::new();
        let guardrail = product("guardrail", "10.00");

        cart.add_item(&guardrail, 1);
        cart.add_item(&guardrail, 2);
        cart.add_item(&guardrail, 4);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 7);
    }

    #[test]
    fn test_count_sums_units_across_products() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("a", "1.00"), 2);
        cart.add_item(&product("b", "1.00"), 3);

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.count(), 5);
    }

    #[test]
    fn test_total_uses_snapshot_prices() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("a", "10"), 2);
        cart.add_item(&product("b", "5"), 3);

        assert_eq!(cart.total(), Decimal::from(35));
    }

    #[test]
    fn test_total_is_exact_for_decimal_prices() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("a", "1299.99"), 3);

        assert_eq!(cart.total(), "3899.97".parse::<Decimal>().unwrap());
    }

    #[test]
    fn test_catalog_style_edits_do_not_reach_existing_items() {
        let mut cart = ShoppingCart::new();
        let mut guardrail = product("guardrail", "10.00");
        cart.add_item(&guardrail, 1);

        // Mutating the caller's product after the add changes nothing
        guardrail.price = "99.00".parse().unwrap();
        guardrail.name = "Renamed".into();

        assert_eq!(cart.total(), "10.00".parse::<Decimal>().unwrap());
        assert_eq!(cart.items()[0].product.name, "guardrail");
    }

    #[test]
    fn test_remove_then_re_add_is_a_fresh_insert() {
        let mut cart = ShoppingCart::new();
        let guardrail = product("guardrail", "10.00");

        cart.add_item(&guardrail, 5);
        cart.remove_item("guardrail");
        cart.add_item(&guardrail, 2);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn test_remove_missing_id_is_a_no_op() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("guardrail", "10.00"), 1);

        cart.remove_item("no-such-product");
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_update_quantity_replaces_value() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("guardrail", "10.00"), 1);

        cart.update_quantity("guardrail", 4);
        assert_eq!(cart.count(), 4);
    }

    #[test]
    fn test_update_quantity_zero_is_rejected_not_auto_remove() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("guardrail", "10.00"), 3);

        cart.update_quantity("guardrail", 0);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 3);
    }

    #[test]
    fn test_update_quantity_missing_id_is_a_no_op() {
        let mut cart = ShoppingCart::new();
        cart.update_quantity("no-such-product", 5);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_zero_quantity_inserts_nothing() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("guardrail", "10.00"), 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_resets_count_and_total() {
        let mut cart = ShoppingCart::new();
        cart.add_item(&product("a", "10.00"), 2);
        cart.add_item(&product("b", "5.00"), 3);

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_from_items_merges_duplicates_and_drops_zeros() {
        let guardrail = product("guardrail", "10.00");
        let handrail = product("handrail", "5.00");

        let cart = ShoppingCart::from_items(vec![
            CartItem {
                product: guardrail.clone(),
                quantity: 2,
            },
            CartItem {
                product: handrail,
                quantity: 0,
            },
            CartItem {
                product: guardrail,
                quantity: 3,
            },
        ]);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.count(), 5);
    }
}
