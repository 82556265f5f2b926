//! Sliding cart drawer with quantity controls and the checkout hand-off.

use crate::state::AppState;
use khavka_commerce::prelude::*;
use leptos::prelude::*;

use super::icons::{MinusIcon, PlusIcon, TrashIcon, XIcon};

#[component]
pub fn CartDrawer() -> impl IntoView {
    let state = AppState::expect();
    let drawer = state.cart_drawer;

    move || {
        drawer.is_visible().then(|| {
            let closing = drawer.is_closing();
            view! {
                <div class="fixed inset-0 z-40">
                    <div
                        class=if closing {
                            "absolute inset-0 bg-black/50 backdrop-exit"
                        } else {
                            "absolute inset-0 bg-black/50 backdrop-enter"
                        }
                        on:click=move |_| drawer.close()
                    ></div>
                    <aside class=if closing {
                        "absolute right-0 top-0 flex h-full w-full max-w-md flex-col bg-white shadow-2xl drawer-exit"
                    } else {
                        "absolute right-0 top-0 flex h-full w-full max-w-md flex-col bg-white shadow-2xl drawer-enter"
                    }>
                        <header class="flex items-center justify-between border-b p-4">
                            <h2 class="text-xl font-bold text-gray-800">"Ваш кошик"</h2>
                            <button
                                class="rounded-full p-2 text-gray-500 hover:bg-gray-100"
                                aria-label="Закрити кошик"
                                on:click=move |_| drawer.close()
                            >
                                <XIcon class="h-6 w-6" />
                            </button>
                        </header>
                        <CartBody />
                    </aside>
                </div>
            }
        })
    }
}

#[component]
fn CartBody() -> impl IntoView {
    let state = AppState::expect();
    let is_empty = move || state.cart.with(|c| c.is_empty());

    move || {
        if is_empty() {
            view! {
                <p class="flex-1 p-8 text-center text-gray-500">"Ваш кошик порожній."</p>
            }
                .into_any()
        } else {
            view! {
                <div class="flex-1 overflow-y-auto p-4">
                    {move || {
                        state
                            .cart
                            .with(|c| c.lines().to_vec())
                            .into_iter()
                            .map(|line| view! { <CartLineRow line=line /> })
                            .collect::<Vec<_>>()
                    }}
                </div>
                <footer class="border-t p-4">
                    <div class="mb-4 flex items-center justify-between text-lg">
                        <span class="text-gray-600">"Разом:"</span>
                        <span class="font-bold text-gray-900">
                            {move || state.cart.with(|c| c.total_price().to_string())}
                        </span>
                    </div>
                    <button
                        class="w-full rounded-full bg-orange-500 py-3 font-semibold text-white hover:bg-orange-600"
                        on:click=move |_| state.proceed_to_checkout()
                    >
                        "Оформити замовлення"
                    </button>
                </footer>
            }
                .into_any()
        }
    }
}

#[component]
fn CartLineRow(line: CartLine) -> impl IntoView {
    let state = AppState::expect();
    let id = line.product_id;
    let quantity = line.quantity;

    view! {
        <div class="mb-3 flex items-center gap-3 rounded-xl border p-3">
            <img src=line.image_url.clone() alt=line.name.clone() class="h-16 w-16 rounded-lg object-cover" />
            <div class="flex-1">
                <p class="font-semibold text-gray-800">{line.name.clone()}</p>
                <p class="text-sm text-orange-600">{line.price.to_string()}</p>
            </div>
            <div class="flex items-center gap-2">
                <button
                    class="rounded-full bg-gray-100 p-1.5 hover:bg-gray-200"
                    aria-label="Менше"
                    on:click=move |_| state.update_quantity(id, quantity - 1)
                >
                    <MinusIcon class="h-4 w-4" />
                </button>
                <span class="w-6 text-center font-semibold">{quantity}</span>
                <button
                    class="rounded-full bg-gray-100 p-1.5 hover:bg-gray-200"
                    aria-label="Більше"
                    on:click=move |_| state.update_quantity(id, quantity + 1)
                >
                    <PlusIcon class="h-4 w-4" />
                </button>
            </div>
            <button
                class="p-1.5 text-red-500 hover:text-red-600"
                aria-label="Прибрати з кошика"
                on:click=move |_| state.remove_from_cart(id)
            >
                <TrashIcon class="h-5 w-5" />
            </button>
        </div>
    }
}
