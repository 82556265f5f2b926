//! Inline SVG icons, stroke style, sized by the caller's class.

use leptos::prelude::*;

macro_rules! stroke_icon {
    ($(#[$meta:meta])* $name:ident, $d:expr) => {
        $(#[$meta])*
        #[component]
        pub fn $name(#[prop(optional, into)] class: &'static str) -> impl IntoView {
            view! {
                <svg
                    class=class
                    xmlns="http://www.w3.org/2000/svg"
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke="currentColor"
                    stroke-width="2"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" d=$d />
                </svg>
            }
        }
    };
}

stroke_icon!(MenuIcon, "M4 6h16M4 12h16M4 18h16");
stroke_icon!(XIcon, "M6 18L18 6M6 6l12 12");
stroke_icon!(SearchIcon, "M21 21l-4.35-4.35M17 10.5a6.5 6.5 0 11-13 0 6.5 6.5 0 0113 0z");
stroke_icon!(
    CartIcon,
    "M3 3h2l.4 2M7 13h10l4-8H5.4M7 13L5.4 5M7 13l-2 5h14m-9 3a1 1 0 11-2 0m9 0a1 1 0 11-2 0"
);
stroke_icon!(PlusIcon, "M12 4v16m8-8H4");
stroke_icon!(MinusIcon, "M20 12H4");
stroke_icon!(
    TrashIcon,
    "M19 7l-.9 12.1A2 2 0 0116.1 21H7.9a2 2 0 01-2-1.9L5 7m5 4v6m4-6v6M9 7V4h6v3M4 7h16"
);
stroke_icon!(SendIcon, "M12 19l9 2-9-18-9 18 9-2zm0 0v-8");

/// Heart outline; pass `filled=true` for the wishlist-active state.
#[component]
pub fn HeartIcon(
    #[prop(optional, into)] class: &'static str,
    #[prop(into)] filled: Signal<bool>,
) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            fill=move || if filled.get() { "currentColor" } else { "none" }
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M4.3 6.3a4.5 4.5 0 000 6.4L12 20.4l7.7-7.7a4.5 4.5 0 00-6.4-6.4L12 7.6l-1.3-1.3a4.5 4.5 0 00-6.4 0z"
            />
        </svg>
    }
}

/// Filled star for ratings.
#[component]
pub fn StarIcon(#[prop(optional, into)] class: &'static str) -> impl IntoView {
    view! {
        <svg class=class xmlns="http://www.w3.org/2000/svg" fill="currentColor" viewBox="0 0 20 20">
            <path d="M9.05 2.93c.3-.92 1.6-.92 1.9 0l1.07 3.29a1 1 0 00.95.69h3.46c.97 0 1.37 1.24.59 1.81l-2.8 2.03a1 1 0 00-.36 1.12l1.07 3.29c.3.92-.76 1.69-1.54 1.12l-2.8-2.03a1 1 0 00-1.18 0l-2.8 2.03c-.78.57-1.84-.2-1.54-1.12l1.07-3.29a1 1 0 00-.36-1.12L2.98 8.72c-.78-.57-.38-1.81.59-1.81h3.46a1 1 0 00.95-.69l1.07-3.29z" />
        </svg>
    }
}

/// Speech-bubble launcher for the chat widget.
#[component]
pub fn ChatIcon(#[prop(optional, into)] class: &'static str) -> impl IntoView {
    view! {
        <svg
            class=class
            xmlns="http://www.w3.org/2000/svg"
            fill="none"
            viewBox="0 0 24 24"
            stroke="currentColor"
            stroke-width="2"
        >
            <path
                stroke-linecap="round"
                stroke-linejoin="round"
                d="M8 12h.01M12 12h.01M16 12h.01M21 12c0 4.4-4 8-9 8a9.9 9.9 0 01-4-.8L3 20l1.3-3.9A7.4 7.4 0 013 12c0-4.4 4-8 9-8s9 3.6 9 8z"
            />
        </svg>
    }
}
