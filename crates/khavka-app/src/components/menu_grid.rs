//! Product grid for the active view and search query.

use crate::state::AppState;
use khavka_commerce::prelude::*;
use leptos::prelude::*;

use super::product_card::ProductCard;

#[component]
pub fn MenuGrid() -> impl IntoView {
    let state = AppState::expect();
    let heading = move || state.current_view().heading();
    let products = move || state.filtered_products();

    view! {
        <section class="flex-1 p-4 md:p-8">
            <h2 class="mb-6 text-3xl font-bold text-gray-800">{heading}</h2>
            {move || {
                let products = products();
                if products.is_empty() {
                    view! {
                        <p class="py-16 text-center text-lg text-gray-500">
                            {empty_message(state.current_view())}
                        </p>
                    }
                        .into_any()
                } else {
                    view! {
                        <div class="grid grid-cols-1 gap-6 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
                            {products
                                .into_iter()
                                .map(|product| view! { <ProductCard product=product /> })
                                .collect::<Vec<_>>()}
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

fn empty_message(view: CategoryView) -> &'static str {
    if view.is_favorites() {
        "Ви ще нічого не додали до обраного."
    } else {
        "Нічого не знайдено. Спробуйте інший запит."
    }
}
