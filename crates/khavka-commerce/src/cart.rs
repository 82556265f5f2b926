//! Shopping cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Carries a snapshot of the product's display fields taken at add time, so
/// the drawer can render without reaching back into the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Product being purchased.
    pub product_id: ProductId,
    /// Product name (denormalized for display).
    pub name: String,
    /// Unit price at add time.
    pub price: Money,
    /// Product image (denormalized for display).
    pub image_url: String,
    /// Quantity, always >= 1 while the line exists.
    pub quantity: i64,
}

impl CartLine {
    fn new(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            price: product.price,
            image_url: product.image_url.clone(),
            quantity,
        }
    }

    /// Line subtotal (unit price × quantity).
    pub fn subtotal(&self) -> Money {
        self.price * self.quantity
    }
}

/// The shopping cart.
///
/// Holds at most one line per product id; lines keep the order in which
/// products were first added.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// Merges into the existing line when the product is already present,
    /// otherwise appends a new line with a snapshot of the product's display
    /// fields. A quantity below 1 is clamped to 1; the operation always
    /// succeeds.
    pub fn add(&mut self, product: &Product, quantity: i64) {
        let quantity = quantity.max(1);
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine::new(product, quantity));
        }
    }

    /// Remove a line entirely. Silent no-op when absent.
    pub fn remove(&mut self, product_id: ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        self.lines.len() < len_before
    }

    /// Set a line's quantity.
    ///
    /// A quantity of zero or less removes the line; setting a quantity on an
    /// absent line is a no-op. Returns whether anything changed.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Empty the cart (invoked on order submission).
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total item count (sum of quantities) for the badge.
    pub fn total_item_count(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of price × quantity over all lines.
    pub fn total_price(&self) -> Money {
        let subtotals: Vec<Money> = self.lines.iter().map(|l| l.subtotal()).collect();
        Money::sum(subtotals.iter(), Currency::UAH)
    }

    /// Number of distinct lines.
    pub fn unique_line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.lines.iter().any(|l| l.product_id == product_id)
    }

    /// Get a line by product id.
    pub fn get(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::menu;

    fn product(id: u32) -> &'static Product {
        menu::find(ProductId::new(id)).unwrap()
    }

    #[test]
    fn test_add_creates_line_with_snapshot() {
        let mut cart = Cart::new();
        cart.add(product(1), 1);

        let line = cart.get(ProductId::new(1)).unwrap();
        assert_eq!(line.name, product(1).name);
        assert_eq!(line.price, product(1).price);
        assert_eq!(line.quantity, 1);
    }

    #[test]
    fn test_add_same_product_merges_lines() {
        let mut cart = Cart::new();
        cart.add(product(1), 1);
        cart.add(product(1), 1);

        assert_eq!(cart.unique_line_count(), 1);
        assert_eq!(cart.get(ProductId::new(1)).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_merge_accumulates_quantity() {
        // add id=1 qty 1, then qty 2 -> one line, quantity 3
        let mut cart = Cart::new();
        cart.add(product(1), 1);
        cart.add(product(1), 2);

        assert_eq!(cart.unique_line_count(), 1);
        assert_eq!(cart.total_item_count(), 3);
        assert_eq!(cart.total_price(), product(1).price * 3);
    }

    #[test]
    fn test_add_clamps_nonpositive_quantity() {
        let mut cart = Cart::new();
        cart.add(product(2), 0);
        assert_eq!(cart.get(ProductId::new(2)).unwrap().quantity, 1);

        cart.add(product(3), -4);
        assert_eq!(cart.get(ProductId::new(3)).unwrap().quantity, 1);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        let mut cart = Cart::new();
        cart.add(product(1), 3);

        assert!(cart.update_quantity(ProductId::new(1), 0));
        assert!(cart.is_empty());

        cart.add(product(1), 3);
        assert!(cart.update_quantity(ProductId::new(1), -5));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_value() {
        let mut cart = Cart::new();
        cart.add(product(1), 1);
        assert!(cart.update_quantity(ProductId::new(1), 7));
        assert_eq!(cart.total_item_count(), 7);
    }

    #[test]
    fn test_update_quantity_absent_line_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.update_quantity(ProductId::new(9), 3));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_absent_line_is_noop() {
        let mut cart = Cart::new();
        cart.add(product(1), 1);
        assert!(!cart.remove(ProductId::new(2)));
        assert_eq!(cart.unique_line_count(), 1);
    }

    #[test]
    fn test_total_item_count_invariant() {
        let mut cart = Cart::new();
        cart.add(product(1), 2);
        cart.add(product(6), 1);
        cart.add(product(1), 1);
        cart.update_quantity(ProductId::new(6), 4);
        cart.remove(ProductId::new(1));

        let expected: i64 = cart.lines().iter().map(|l| l.quantity).sum();
        assert_eq!(cart.total_item_count(), expected);
        assert_eq!(cart.total_item_count(), 4);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(product(1), 2);
        cart.add(product(11), 1);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_item_count(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_total_price_mixed_lines() {
        let mut cart = Cart::new();
        cart.add(product(11), 2); // 65.00 * 2
        cart.add(product(21), 1); // 20.00

        assert_eq!(cart.total_price().amount_minor, 2 * 6500 + 2000);
    }
}
