//! Browser storefront for the Shvydka Khavka fast-food menu.
//!
//! The crate is split along a simple line: [`overlay`], [`chat`] and the
//! domain types from `khavka-commerce` are plain Rust with unit tests,
//! while [`state`], [`app`] and [`components`] bind them to the reactive
//! runtime and the DOM.

pub mod app;
pub mod chat;
pub mod components;
pub mod overlay;
pub mod state;
