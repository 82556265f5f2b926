//! Product catalog: the fixed menu and its category structure.

mod category;
pub mod menu;
mod product;

pub use category::{Category, CategoryView};
pub use product::Product;
