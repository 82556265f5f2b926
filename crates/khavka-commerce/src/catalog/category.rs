//! Category types for the menu.
//!
//! The menu has a small, fixed category set, so categories are a closed
//! enum rather than free-form strings. The navigation additionally offers
//! two synthetic views — the whole menu and the favourites list — modelled
//! separately as [`CategoryView`].

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A product category on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Shawarma,
    Burgers,
    Drinks,
    Desserts,
    Sauces,
}

impl Category {
    /// All categories, in navigation order.
    pub const ALL: [Category; 5] = [
        Category::Shawarma,
        Category::Burgers,
        Category::Drinks,
        Category::Desserts,
        Category::Sauces,
    ];

    /// Get the URL-friendly slug.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Shawarma => "shawarma",
            Category::Burgers => "burgers",
            Category::Drinks => "drinks",
            Category::Desserts => "desserts",
            Category::Sauces => "sauces",
        }
    }

    /// Get the display name shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Shawarma => "Шаурма",
            Category::Burgers => "Бургери",
            Category::Drinks => "Напої",
            Category::Desserts => "Десерти",
            Category::Sauces => "Соуси",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shawarma" => Ok(Category::Shawarma),
            "burgers" => Ok(Category::Burgers),
            "drinks" => Ok(Category::Drinks),
            "desserts" => Ok(Category::Desserts),
            "sauces" => Ok(Category::Sauces),
            _ => Err(CommerceError::UnknownCategory(s.to_string())),
        }
    }
}

/// What the catalog view is currently scoped to.
///
/// `All` and `Favorites` are synthetic: the former passes every product,
/// the latter passes the wishlist's members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryView {
    #[default]
    All,
    Favorites,
    Category(Category),
}

impl CategoryView {
    /// Navigation label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryView::All => "Головна",
            CategoryView::Favorites => "Обране",
            CategoryView::Category(c) => c.label(),
        }
    }

    /// Heading shown above the product grid.
    pub fn heading(&self) -> &'static str {
        match self {
            CategoryView::All => "Наше Меню",
            other => other.label(),
        }
    }

    /// Whether this is the whole-menu view.
    pub fn is_all(&self) -> bool {
        matches!(self, CategoryView::All)
    }

    /// Whether this is the favourites view.
    pub fn is_favorites(&self) -> bool {
        matches!(self, CategoryView::Favorites)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_slug_roundtrip() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_category_unknown_slug() {
        let err = "pizza".parse::<Category>().unwrap_err();
        assert_eq!(err, CommerceError::UnknownCategory("pizza".to_string()));
    }

    #[test]
    fn test_view_headings() {
        assert_eq!(CategoryView::All.heading(), "Наше Меню");
        assert_eq!(CategoryView::Favorites.heading(), "Обране");
        assert_eq!(
            CategoryView::Category(Category::Drinks).heading(),
            "Напої"
        );
    }
}
