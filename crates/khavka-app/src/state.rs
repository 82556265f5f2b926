//! Application state: one composition root shared through context.

use crate::overlay::{OverlayHandle, DRAWER_CLOSE_DELAY, MODAL_CLOSE_DELAY};
use khavka_commerce::prelude::*;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::logging::log;
use leptos::prelude::*;
use std::time::Duration;

/// Keystrokes settle for this long before the catalog filter reruns.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Everything the storefront shares across components. `Copy`, handed
/// out via context from the root component.
#[derive(Clone, Copy)]
pub struct AppState {
    pub cart: RwSignal<Cart>,
    pub wishlist: RwSignal<Wishlist>,
    pub selection: RwSignal<Selection>,
    /// Raw search box contents, updated on every keystroke.
    pub search_input: RwSignal<String>,
    /// Debounced query the catalog filter actually sees.
    pub search_query: RwSignal<String>,
    pub cart_drawer: OverlayHandle,
    pub nav_drawer: OverlayHandle,
    pub product_modal: OverlayHandle,
    pub checkout_modal: OverlayHandle,
    debounce: StoredValue<Option<TimeoutHandle>, LocalStorage>,
}

impl AppState {
    /// Must be called within a reactive owner; the root component builds
    /// one and provides it as context.
    pub fn new() -> Self {
        let selection = RwSignal::new(Selection::new());
        // The detail product stays rendered while the modal plays its
        // exit animation; the selection is dropped only at Closed.
        let product_modal = OverlayHandle::with_on_closed(
            MODAL_CLOSE_DELAY,
            Callback::new(move |()| selection.update(|s| s.clear_detail())),
        );
        Self {
            cart: RwSignal::new(Cart::new()),
            wishlist: RwSignal::new(Wishlist::new()),
            selection,
            search_input: RwSignal::new(String::new()),
            search_query: RwSignal::new(String::new()),
            cart_drawer: OverlayHandle::new(DRAWER_CLOSE_DELAY),
            nav_drawer: OverlayHandle::new(DRAWER_CLOSE_DELAY),
            product_modal,
            checkout_modal: OverlayHandle::new(MODAL_CLOSE_DELAY),
            debounce: StoredValue::new_local(None),
        }
    }

    pub fn expect() -> Self {
        expect_context::<AppState>()
    }

    // --- catalog ---

    /// The menu under the active view and debounced query, in menu order.
    pub fn filtered_products(&self) -> Vec<&'static Product> {
        let filter = CatalogFilter::new(
            self.selection.with(|s| s.view()),
            self.search_query.get(),
        );
        self.wishlist.with(|w| filter.apply(menu::products(), w))
    }

    pub fn current_view(&self) -> CategoryView {
        self.selection.with(|s| s.view())
    }

    pub fn select_view(&self, view: CategoryView) {
        self.selection.update(|s| s.select_view(view));
        // Picking a destination dismisses the mobile nav drawer.
        self.nav_drawer.close();
    }

    // --- cart ---

    pub fn add_to_cart(&self, product: &Product, quantity: i64) {
        self.cart.update(|c| c.add(product, quantity));
    }

    pub fn remove_from_cart(&self, id: ProductId) {
        self.cart.update(|c| {
            c.remove(id);
        });
    }

    pub fn update_quantity(&self, id: ProductId, quantity: i64) {
        self.cart.update(|c| {
            c.update_quantity(id, quantity);
        });
    }

    pub fn toggle_wishlist(&self, id: ProductId) {
        self.wishlist.update(|w| {
            w.toggle(id);
        });
    }

    // --- product detail ---

    pub fn show_detail(&self, id: ProductId) {
        self.selection.update(|s| s.show_detail(id));
        self.product_modal.open();
    }

    pub fn detail_product(&self) -> Option<&'static Product> {
        self.selection.with(|s| s.detail()).and_then(menu::find)
    }

    // --- checkout ---

    /// Hands the cart drawer off to the checkout modal in one step; the
    /// drawer's exit animation is skipped so the two never overlap.
    pub fn proceed_to_checkout(&self) {
        self.cart_drawer.force_close();
        self.checkout_modal.open();
    }

    /// Order "submission": the session is the backend, so this just logs
    /// and empties the cart.
    pub fn submit_order(&self, form: &CheckoutForm) {
        log!(
            "order placed: {} items, {} — delivery to {}",
            self.cart.with_untracked(|c| c.total_item_count()),
            self.cart.with_untracked(|c| c.total_price()),
            form.address
        );
        self.cart.update(|c| c.clear());
    }

    // --- search ---

    pub fn set_search_input(&self, value: String) {
        self.search_input.set(value.clone());
        self.cancel_debounce();
        let query = self.search_query;
        let scheduled = set_timeout_with_handle(move || query.set(value), SEARCH_DEBOUNCE);
        if let Ok(handle) = scheduled {
            self.debounce.set_value(Some(handle));
        }
    }

    /// Clears both the box and the applied query immediately, without
    /// waiting out the debounce window.
    pub fn clear_search(&self) {
        self.cancel_debounce();
        self.search_input.set(String::new());
        self.search_query.set(String::new());
    }

    fn cancel_debounce(&self) {
        let pending = self.debounce.try_update_value(|t| t.take()).flatten();
        if let Some(pending) = pending {
            pending.clear();
        }
    }
}
