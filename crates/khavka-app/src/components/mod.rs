//! View layer. Each overlay surface gets its own module; everything
//! reads [`crate::state::AppState`] from context.

mod cart_drawer;
mod chat_widget;
mod checkout_modal;
pub(crate) mod icons;
mod menu_grid;
mod navigation;
mod product_card;
mod product_modal;

pub use cart_drawer::CartDrawer;
pub use chat_widget::ChatWidget;
pub use checkout_modal::CheckoutModal;
pub use menu_grid::MenuGrid;
pub use navigation::Navigation;
pub use product_modal::ProductModal;
