//! Selection state: the active catalog view and the product shown in detail.

use crate::catalog::CategoryView;
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// What the user is currently looking at.
///
/// The detail product is held by id only — a weak reference into the
/// immutable catalog. At most one product is shown in detail at a time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Selection {
    view: CategoryView,
    detail: Option<ProductId>,
}

impl Selection {
    /// Fresh selection: whole menu, no detail.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active catalog view.
    pub fn view(&self) -> CategoryView {
        self.view
    }

    /// Switch the active catalog view.
    pub fn select_view(&mut self, view: CategoryView) {
        self.view = view;
    }

    /// The product currently shown in detail, if any.
    pub fn detail(&self) -> Option<ProductId> {
        self.detail
    }

    /// Show a product in detail, replacing any current one.
    pub fn show_detail(&mut self, product_id: ProductId) {
        self.detail = Some(product_id);
    }

    /// Dismiss the detail product.
    pub fn clear_detail(&mut self) {
        self.detail = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    #[test]
    fn test_default_view_is_all() {
        let selection = Selection::new();
        assert_eq!(selection.view(), CategoryView::All);
        assert!(selection.detail().is_none());
    }

    #[test]
    fn test_select_view() {
        let mut selection = Selection::new();
        selection.select_view(CategoryView::Category(Category::Burgers));
        assert_eq!(
            selection.view(),
            CategoryView::Category(Category::Burgers)
        );
    }

    #[test]
    fn test_show_detail_replaces() {
        let mut selection = Selection::new();
        selection.show_detail(ProductId::new(1));
        selection.show_detail(ProductId::new(2));
        assert_eq!(selection.detail(), Some(ProductId::new(2)));

        selection.clear_detail();
        assert!(selection.detail().is_none());
    }
}
