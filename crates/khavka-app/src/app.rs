//! Root component: layout shell, header, and overlay mounting points.

use crate::state::AppState;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};

use crate::components::{
    CartDrawer, ChatWidget, CheckoutModal, MenuGrid, Navigation, ProductModal,
};
use crate::components::icons::{CartIcon, MenuIcon, SearchIcon, XIcon};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let state = AppState::new();
    provide_context(state);

    view! {
        <Title text="ШВИДКА ХАВКА — доставка їжі" />
        <div class="min-h-screen bg-gray-100">
            <Header />
            <div class="mx-auto flex max-w-7xl">
                <aside class="sticky top-16 hidden h-[calc(100vh-4rem)] w-64 shrink-0 overflow-y-auto bg-white shadow-sm md:block">
                    <Navigation />
                </aside>
                <MenuGrid />
            </div>
            <NavDrawer />
            <CartDrawer />
            <ProductModal />
            <CheckoutModal />
            <ChatWidget />
        </div>
    }
}

#[component]
fn Header() -> impl IntoView {
    let state = AppState::expect();
    let cart_count = move || state.cart.with(|c| c.total_item_count());
    let has_query = move || !state.search_input.with(|q| q.is_empty());

    view! {
        <header class="sticky top-0 z-20 bg-white shadow">
            <div class="mx-auto flex h-16 max-w-7xl items-center gap-3 px-4">
                <button
                    class="rounded-lg p-2 text-gray-600 hover:bg-gray-100 md:hidden"
                    aria-label="Відкрити меню"
                    on:click=move |_| state.nav_drawer.toggle()
                >
                    <MenuIcon class="h-6 w-6" />
                </button>
                <h1 class="text-xl font-extrabold tracking-tight text-orange-600">
                    "ШВИДКА ХАВКА"
                </h1>
                <div class="relative ml-auto w-full max-w-xs sm:max-w-sm">
                    <SearchIcon class="pointer-events-none absolute left-3 top-2.5 h-5 w-5 text-gray-400" />
                    <input
                        type="text"
                        class="w-full rounded-full border bg-gray-50 py-2 pl-10 pr-9 text-sm"
                        placeholder="Пошук страв..."
                        prop:value=state.search_input
                        on:input=move |ev| state.set_search_input(event_target_value(&ev))
                    />
                    {move || {
                        has_query()
                            .then(|| {
                                view! {
                                    <button
                                        class="absolute right-2 top-2 rounded-full p-1 text-gray-400 hover:text-gray-600"
                                        aria-label="Очистити пошук"
                                        on:click=move |_| state.clear_search()
                                    >
                                        <XIcon class="h-4 w-4" />
                                    </button>
                                }
                            })
                    }}
                </div>
                <button
                    class="relative rounded-full bg-orange-500 p-2.5 text-white hover:bg-orange-600"
                    aria-label="Кошик"
                    on:click=move |_| state.cart_drawer.toggle()
                >
                    <CartIcon class="h-5 w-5" />
                    {move || {
                        let count = cart_count();
                        (count > 0)
                            .then(|| {
                                view! {
                                    <span class="absolute -right-1 -top-1 flex h-5 min-w-5 items-center justify-center rounded-full bg-red-500 px-1 text-xs font-bold">
                                        {count}
                                    </span>
                                }
                            })
                    }}
                </button>
            </div>
        </header>
    }
}

/// Mobile-only navigation drawer; slides in from the left.
#[component]
fn NavDrawer() -> impl IntoView {
    let state = AppState::expect();
    let drawer = state.nav_drawer;

    move || {
        drawer.is_visible().then(|| {
            let closing = drawer.is_closing();
            view! {
                <div class="fixed inset-0 z-40 md:hidden">
                    <div
                        class=if closing {
                            "absolute inset-0 bg-black/50 backdrop-exit"
                        } else {
                            "absolute inset-0 bg-black/50 backdrop-enter"
                        }
                        on:click=move |_| drawer.close()
                    ></div>
                    <aside class=if closing {
                        "absolute left-0 top-0 h-full w-72 overflow-y-auto bg-white shadow-2xl nav-drawer-exit"
                    } else {
                        "absolute left-0 top-0 h-full w-72 overflow-y-auto bg-white shadow-2xl nav-drawer-enter"
                    }>
                        <div class="flex items-center justify-between border-b p-4">
                            <span class="font-bold text-orange-600">"ШВИДКА ХАВКА"</span>
                            <button
                                class="rounded-full p-2 text-gray-500 hover:bg-gray-100"
                                aria-label="Закрити меню"
                                on:click=move |_| drawer.close()
                            >
                                <XIcon class="h-5 w-5" />
                            </button>
                        </div>
                        <Navigation />
                    </aside>
                </div>
            }
        })
    }
}
