//! Catalog filtering: category view + text query.

use crate::catalog::{CategoryView, Product};
use crate::wishlist::Wishlist;
use serde::{Deserialize, Serialize};

/// A filter over the catalog.
///
/// Both parts compose by logical AND and the result preserves catalog
/// order. The favourites view depends on the wishlist, which is passed in
/// at match time rather than captured here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CatalogFilter {
    /// The active category view.
    pub view: CategoryView,
    /// Free-text query; empty or whitespace matches everything.
    pub query: String,
}

impl CatalogFilter {
    /// Create a filter.
    pub fn new(view: CategoryView, query: impl Into<String>) -> Self {
        Self {
            view,
            query: query.into(),
        }
    }

    /// Check a single product against the filter.
    pub fn matches(&self, product: &Product, wishlist: &Wishlist) -> bool {
        self.matches_view(product, wishlist) && self.matches_query(product)
    }

    /// Apply the filter over a product slice, preserving order.
    pub fn apply<'a>(&self, products: &'a [Product], wishlist: &Wishlist) -> Vec<&'a Product> {
        products
            .iter()
            .filter(|p| self.matches(p, wishlist))
            .collect()
    }

    fn matches_view(&self, product: &Product, wishlist: &Wishlist) -> bool {
        match self.view {
            CategoryView::All => true,
            CategoryView::Favorites => wishlist.contains(product.id),
            CategoryView::Category(c) => product.category == c,
        }
    }

    fn matches_query(&self, product: &Product) -> bool {
        let query = self.query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        if product.name.to_lowercase().contains(&query)
            || product.description.to_lowercase().contains(&query)
        {
            return true;
        }
        // On the whole-menu view the query may also hit the category label.
        self.view.is_all() && product.category.label().to_lowercase().contains(&query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{menu, Category};
    use crate::ids::ProductId;

    #[test]
    fn test_all_view_empty_query_matches_everything() {
        let filter = CatalogFilter::default();
        let hits = filter.apply(menu::products(), &Wishlist::new());
        assert_eq!(hits.len(), menu::products().len());
    }

    #[test]
    fn test_whitespace_query_matches_everything() {
        let filter = CatalogFilter::new(CategoryView::All, "   ");
        let hits = filter.apply(menu::products(), &Wishlist::new());
        assert_eq!(hits.len(), menu::products().len());
    }

    #[test]
    fn test_category_view_exact_match() {
        let filter = CatalogFilter::new(CategoryView::Category(Category::Sauces), "");
        let hits = filter.apply(menu::products(), &Wishlist::new());
        assert_eq!(hits.len(), 5);
        assert!(hits.iter().all(|p| p.category == Category::Sauces));
    }

    #[test]
    fn test_favorites_view_uses_wishlist_in_catalog_order() {
        let mut wishlist = Wishlist::new();
        wishlist.toggle(ProductId::new(7));
        wishlist.toggle(ProductId::new(3));

        let filter = CatalogFilter::new(CategoryView::Favorites, "");
        let hits = filter.apply(menu::products(), &wishlist);

        let ids: Vec<u32> = hits.iter().map(|p| p.id.get()).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn test_query_is_case_insensitive_over_name_and_description() {
        let filter = CatalogFilter::new(CategoryView::All, "ШАУРМА");
        let hits = filter.apply(menu::products(), &Wishlist::new());
        assert!(hits.iter().any(|p| p.id.get() == 1));

        // "бриош" appears only in descriptions/ingredient text.
        let filter = CatalogFilter::new(CategoryView::All, "бриош");
        let hits = filter.apply(menu::products(), &Wishlist::new());
        assert!(!hits.is_empty());
    }

    #[test]
    fn test_query_matches_category_label_only_on_all_view() {
        // "соуси" is the Sauces category label; no sauce product carries the
        // plural form in its name or description.
        let on_all = CatalogFilter::new(CategoryView::All, "соуси");
        assert!(!on_all.apply(menu::products(), &Wishlist::new()).is_empty());

        let on_category =
            CatalogFilter::new(CategoryView::Category(Category::Sauces), "соуси");
        assert!(on_category
            .apply(menu::products(), &Wishlist::new())
            .is_empty());
    }

    #[test]
    fn test_view_and_query_compose() {
        let filter = CatalogFilter::new(CategoryView::Category(Category::Drinks), "кава");
        let hits = filter.apply(menu::products(), &Wishlist::new());
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Холодна кава");
    }
}
