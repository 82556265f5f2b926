//! Product detail modal with a local quantity stepper.

use crate::state::AppState;
use khavka_commerce::prelude::*;
use leptos::prelude::*;

use super::icons::{HeartIcon, MinusIcon, PlusIcon, StarIcon, XIcon};

#[component]
pub fn ProductModal() -> impl IntoView {
    let state = AppState::expect();
    let modal = state.product_modal;

    move || {
        if !modal.is_visible() {
            return None;
        }
        // The selection outlives the exit animation, so a visible modal
        // always has a product behind it.
        state
            .detail_product()
            .map(|product| view! { <ProductModalBody product=product /> })
    }
}

#[component]
fn ProductModalBody(product: &'static Product) -> impl IntoView {
    let state = AppState::expect();
    let modal = state.product_modal;
    let id = product.id;
    // Resets each time the modal is opened; it unmounts at Closed.
    let quantity = RwSignal::new(1_i64);
    let in_wishlist = Signal::derive(move || state.wishlist.with(|w| w.contains(id)));
    let closing = move || modal.is_closing();

    let add_and_close = move |_| {
        state.add_to_cart(product, quantity.get_untracked());
        modal.close();
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center p-4">
            <div
                class=move || {
                    if closing() {
                        "absolute inset-0 bg-black/50 backdrop-exit"
                    } else {
                        "absolute inset-0 bg-black/50 backdrop-enter"
                    }
                }
                on:click=move |_| modal.close()
            ></div>
            <div class=move || {
                if closing() {
                    "relative max-h-full w-full max-w-2xl overflow-y-auto rounded-2xl bg-white modal-exit"
                } else {
                    "relative max-h-full w-full max-w-2xl overflow-y-auto rounded-2xl bg-white modal-enter"
                }
            }>
                <button
                    class="absolute right-4 top-4 z-10 rounded-full bg-white/80 p-2 text-gray-600 hover:bg-white"
                    aria-label="Закрити"
                    on:click=move |_| modal.close()
                >
                    <XIcon class="h-6 w-6" />
                </button>
                <img
                    src=product.image_url.clone()
                    alt=product.name.clone()
                    class="h-64 w-full rounded-t-2xl object-cover"
                />
                <div class="flex flex-col gap-4 p-6">
                    <div class="flex items-start justify-between gap-4">
                        <h2 class="text-2xl font-bold text-gray-900">{product.name.clone()}</h2>
                        <button
                            class="rounded-full p-2 text-red-500 hover:bg-red-50"
                            aria-label="Додати до обраного"
                            on:click=move |_| state.toggle_wishlist(id)
                        >
                            <HeartIcon class="h-6 w-6" filled=in_wishlist />
                        </button>
                    </div>
                    <div class="flex items-center gap-2">
                        <StarIcon class="h-5 w-5 text-yellow-400" />
                        <span class="font-semibold">{format!("{:.1}", product.rating)}</span>
                        <span class="text-sm text-gray-500">
                            {format!("{} ккал", product.calories)}
                        </span>
                    </div>
                    <p class="text-gray-600">{product.description.clone()}</p>
                    <div>
                        <h3 class="mb-2 font-semibold text-gray-800">"Складники:"</h3>
                        <ul class="flex flex-wrap gap-2">
                            {product
                                .ingredients
                                .iter()
                                .map(|ingredient| {
                                    view! {
                                        <li class="rounded-full bg-orange-50 px-3 py-1 text-sm text-orange-700">
                                            {ingredient.clone()}
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                    <div class="flex items-center justify-between border-t pt-4">
                        <div class="flex items-center gap-3">
                            <button
                                class="rounded-full bg-gray-100 p-2 hover:bg-gray-200"
                                aria-label="Менше"
                                on:click=move |_| quantity.update(|q| *q = (*q - 1).max(1))
                            >
                                <MinusIcon class="h-5 w-5" />
                            </button>
                            <span class="w-8 text-center text-lg font-semibold">{quantity}</span>
                            <button
                                class="rounded-full bg-gray-100 p-2 hover:bg-gray-200"
                                aria-label="Більше"
                                on:click=move |_| quantity.update(|q| *q += 1)
                            >
                                <PlusIcon class="h-5 w-5" />
                            </button>
                        </div>
                        <button
                            class="rounded-full bg-orange-500 px-6 py-3 font-semibold text-white hover:bg-orange-600"
                            on:click=add_and_close
                        >
                            {move || {
                                let total = product.price * quantity.get();
                                format!("Додати за {total}")
                            }}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
