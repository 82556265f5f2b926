//! Wishlist: the set of favourited products.

use crate::ids::ProductId;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The set of favourited product ids.
///
/// Plain set semantics: no duplicates, no ordering. The favourites view of
/// the catalog takes the wishlist as a parameter, so this type stays
/// independent of the cart and catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Wishlist {
    ids: HashSet<ProductId>,
}

impl Wishlist {
    /// Create an empty wishlist.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a product's membership. Returns the new membership state.
    pub fn toggle(&mut self, product_id: ProductId) -> bool {
        if self.ids.remove(&product_id) {
            false
        } else {
            self.ids.insert(product_id);
            true
        }
    }

    /// Check membership.
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.ids.contains(&product_id)
    }

    /// Number of favourited products (for the navigation badge).
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    /// Check if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut wishlist = Wishlist::new();
        let id = ProductId::new(3);

        assert!(wishlist.toggle(id));
        assert!(wishlist.contains(id));
        assert_eq!(wishlist.count(), 1);

        assert!(!wishlist.toggle(id));
        assert!(!wishlist.contains(id));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_membership() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId::new(7));

        for id in [ProductId::new(7), ProductId::new(12)] {
            let before = wishlist.contains(id);
            wishlist.toggle(id);
            wishlist.toggle(id);
            assert_eq!(wishlist.contains(id), before);
        }
    }

    #[test]
    fn test_no_duplicates() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId::new(5));
        wishlist.toggle(ProductId::new(5));
        wishlist.toggle(ProductId::new(5));
        assert_eq!(wishlist.count(), 1);
    }
}
