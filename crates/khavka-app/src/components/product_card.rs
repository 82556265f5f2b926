//! A single menu card: image, rating, price, wishlist and cart actions.
//! The active search query is marked up inside the name and description.

use crate::state::AppState;
use khavka_commerce::prelude::*;
use leptos::prelude::*;

use super::icons::{CartIcon, HeartIcon, StarIcon};

fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Split `text` into `(segment, is_hit)` runs for a case-insensitive
/// query. No query gives the whole text as one unmarked run.
fn highlight_segments(text: &str, query: &str) -> Vec<(String, bool)> {
    let query: Vec<char> = query.trim().chars().map(fold).collect();
    if query.is_empty() {
        return vec![(text.to_string(), false)];
    }

    let chars: Vec<char> = text.chars().collect();
    let folded: Vec<char> = chars.iter().copied().map(fold).collect();
    let mut segments = Vec::new();
    let mut plain = String::new();
    let mut i = 0;
    while i < chars.len() {
        if i + query.len() <= chars.len() && folded[i..i + query.len()] == query[..] {
            if !plain.is_empty() {
                segments.push((std::mem::take(&mut plain), false));
            }
            segments.push((chars[i..i + query.len()].iter().collect(), true));
            i += query.len();
        } else {
            plain.push(chars[i]);
            i += 1;
        }
    }
    if !plain.is_empty() {
        segments.push((plain, false));
    }
    segments
}

/// Text with the applied search query wrapped in `<mark>`.
#[component]
fn HighlightedText(text: String, #[prop(into)] query: Signal<String>) -> impl IntoView {
    move || {
        query
            .with(|q| highlight_segments(&text, q))
            .into_iter()
            .map(|(segment, hit)| {
                if hit {
                    view! { <mark class="rounded-sm bg-orange-200">{segment}</mark> }.into_any()
                } else {
                    view! { <span>{segment}</span> }.into_any()
                }
            })
            .collect::<Vec<_>>()
    }
}

#[component]
pub fn ProductCard(product: &'static Product) -> impl IntoView {
    let state = AppState::expect();
    let id = product.id;
    let in_wishlist = Signal::derive(move || state.wishlist.with(|w| w.contains(id)));
    let in_cart = move || state.cart.with(|c| c.contains(id));

    view! {
        <article class="product-card flex flex-col overflow-hidden rounded-2xl bg-white shadow-md transition hover:shadow-xl">
            <div class="relative">
                <img
                    src=product.image_url.clone()
                    alt=product.name.clone()
                    class="h-48 w-full cursor-pointer object-cover"
                    on:click=move |_| state.show_detail(id)
                />
                <button
                    class="absolute right-3 top-3 rounded-full bg-white/80 p-2 text-red-500 hover:bg-white"
                    aria-label="Додати до обраного"
                    on:click=move |_| state.toggle_wishlist(id)
                >
                    <HeartIcon class="h-5 w-5" filled=in_wishlist />
                </button>
            </div>
            <div class="flex flex-1 flex-col gap-2 p-4">
                <h3
                    class="cursor-pointer text-lg font-semibold text-gray-800 hover:text-orange-500"
                    on:click=move |_| state.show_detail(id)
                >
                    <HighlightedText text=product.name.clone() query=state.search_query />
                </h3>
                <p class="line-clamp-2 text-sm text-gray-500">
                    <HighlightedText text=product.description.clone() query=state.search_query />
                </p>
                <div class="flex items-center gap-1 text-yellow-400">
                    <StarIcon class="h-4 w-4" />
                    <span class="text-sm text-gray-600">{format!("{:.1}", product.rating)}</span>
                </div>
                <div class="mt-auto flex items-center justify-between pt-2">
                    <span class="text-xl font-bold text-orange-600">{product.price_display()}</span>
                    <button
                        class="flex items-center gap-2 rounded-full bg-orange-500 px-4 py-2 text-sm font-semibold text-white hover:bg-orange-600 disabled:bg-gray-300"
                        disabled=in_cart
                        on:click=move |_| state.add_to_cart(product, 1)
                    >
                        <CartIcon class="h-4 w-4" />
                        {move || if in_cart() { "У кошику" } else { "До кошика" }}
                    </button>
                </div>
            </div>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::highlight_segments;

    #[test]
    fn test_empty_query_is_one_plain_run() {
        assert_eq!(
            highlight_segments("Шаурма Класична", "  "),
            vec![("Шаурма Класична".to_string(), false)]
        );
    }

    #[test]
    fn test_match_is_case_insensitive_and_keeps_original_casing() {
        let segments = highlight_segments("Шаурма Класична", "шаурма");
        assert_eq!(
            segments,
            vec![
                ("Шаурма".to_string(), true),
                (" Класична".to_string(), false),
            ]
        );
    }

    #[test]
    fn test_every_occurrence_is_marked() {
        let segments = highlight_segments("кола та кола", "кола");
        assert_eq!(
            segments,
            vec![
                ("кола".to_string(), true),
                (" та ".to_string(), false),
                ("кола".to_string(), true),
            ]
        );
    }

    #[test]
    fn test_no_match_is_one_plain_run() {
        assert_eq!(
            highlight_segments("Чізбургер", "шаурма"),
            vec![("Чізбургер".to_string(), false)]
        );
    }
}
