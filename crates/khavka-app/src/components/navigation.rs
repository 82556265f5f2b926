//! Category navigation list, shared by the desktop sidebar and the
//! mobile drawer.

use crate::state::AppState;
use khavka_commerce::prelude::*;
use leptos::prelude::*;

fn glyph(view: CategoryView) -> &'static str {
    match view {
        CategoryView::All => "🏠",
        CategoryView::Favorites => "❤️",
        CategoryView::Category(Category::Shawarma) => "🌯",
        CategoryView::Category(Category::Burgers) => "🍔",
        CategoryView::Category(Category::Drinks) => "🥤",
        CategoryView::Category(Category::Desserts) => "🍰",
        CategoryView::Category(Category::Sauces) => "🥫",
    }
}

#[component]
pub fn Navigation() -> impl IntoView {
    let views: Vec<CategoryView> = [CategoryView::All, CategoryView::Favorites]
        .into_iter()
        .chain(Category::ALL.iter().copied().map(CategoryView::Category))
        .collect();

    view! {
        <nav class="flex flex-col gap-1 p-4">
            {views
                .into_iter()
                .map(|view| view! { <NavLink view=view /> })
                .collect::<Vec<_>>()}
        </nav>
    }
}

#[component]
fn NavLink(view: CategoryView) -> impl IntoView {
    let state = AppState::expect();
    let active = move || state.current_view() == view;
    let favorites_count = move || state.wishlist.with(|w| w.count());

    view! {
        <button
            class=move || {
                if active() {
                    "nav-link flex items-center gap-3 rounded-lg px-4 py-3 text-left font-semibold \
                     bg-orange-500 text-white"
                } else {
                    "nav-link flex items-center gap-3 rounded-lg px-4 py-3 text-left \
                     text-gray-700 hover:bg-orange-100"
                }
            }
            on:click=move |_| state.select_view(view)
        >
            <span class="text-xl">{glyph(view)}</span>
            <span class="flex-1">{view.label()}</span>
            {(view == CategoryView::Favorites)
                .then(|| {
                    view! {
                        <span class="rounded-full bg-red-500 px-2 py-0.5 text-xs text-white">
                            {favorites_count}
                        </span>
                    }
                })}
        </button>
    }
}
