//! Product types.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A product on the menu.
///
/// Products are created once at catalog load and never mutated or removed
/// during a session; everything downstream holds them by reference or by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Menu category.
    pub category: Category,
    /// Unit price.
    pub price: Money,
    /// Image URL or path.
    pub image_url: String,
    /// Full description shown on the card and in the detail modal.
    pub description: String,
    /// Customer rating, 0.0–5.0.
    pub rating: f64,
    /// Ingredient list.
    pub ingredients: Vec<String>,
    /// Approximate calorie count.
    pub calories: u32,
}

impl Product {
    /// Build a product record for the fixture catalog.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: Category,
        price: Money,
        image_url: impl Into<String>,
        description: impl Into<String>,
        rating: f64,
        ingredients: &[&str],
        calories: u32,
    ) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category,
            price,
            image_url: image_url.into(),
            description: description.into(),
            rating,
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            calories,
        }
    }

    /// Price formatted for display (e.g., "155.00 грн").
    pub fn price_display(&self) -> String {
        format!("{} грн", self.price.display_amount())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_product_creation() {
        let product = Product::new(
            1,
            "Класична шаурма з куркою",
            Category::Shawarma,
            Money::uah(15500),
            "/images/shawarma.png",
            "Лаваш, куряче філе, свіжі овочі.",
            4.8,
            &["Лаваш", "Куряче філе"],
            450,
        );
        assert_eq!(product.id.get(), 1);
        assert_eq!(product.price.currency, Currency::UAH);
        assert_eq!(product.ingredients.len(), 2);
        assert_eq!(product.price_display(), "155.00 грн");
    }

    #[test]
    fn test_product_serde() {
        let product = Product::new(
            2,
            "Лимонад",
            Category::Drinks,
            Money::uah(6500),
            "/images/lemonade.png",
            "Освіжаючий.",
            4.9,
            &["Вода", "Лимон"],
            150,
        );
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
    }
}
