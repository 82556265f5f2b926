//! Storefront domain types and logic for Shvydka Khavka.
//!
//! This crate holds everything about the store that is independent of how
//! it is rendered:
//!
//! - **Catalog**: the fixed menu of products and their categories
//! - **Search**: category + text filtering over the catalog
//! - **Cart**: quantity-adjusted line items with snapshot pricing
//! - **Wishlist**: the set of favourited products
//! - **Selection**: active category view and the product shown in detail
//! - **Checkout**: order form state and field-level validation
//!
//! All state is session-local and in-memory; every operation is a total
//! state transition. The only user-visible failures are the checkout form's
//! field errors.
//!
//! # Example
//!
//! ```
//! use khavka_commerce::prelude::*;
//!
//! let menu = menu::products();
//! let mut cart = Cart::new();
//! cart.add(&menu[0], 2);
//! assert_eq!(cart.total_item_count(), 2);
//!
//! let filter = CatalogFilter::new(CategoryView::All, "шаурма");
//! let hits = filter.apply(menu, &Wishlist::new());
//! assert!(!hits.is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;
pub mod selection;
pub mod wishlist;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{menu, Category, CategoryView, Product};

    // Cart
    pub use crate::cart::{Cart, CartLine};

    // Wishlist & selection
    pub use crate::selection::Selection;
    pub use crate::wishlist::Wishlist;

    // Search
    pub use crate::search::CatalogFilter;

    // Checkout
    pub use crate::checkout::{
        validate, CheckoutForm, DeliveryTime, FormField, PaymentMethod,
    };
}
