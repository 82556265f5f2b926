//! Floating chat launcher and panel.

use crate::chat::{clock_label, ChatLog, ChatRole, ReplyService};
use crate::overlay::{OverlayHandle, CHAT_CLOSE_DELAY};
use leptos::leptos_dom::helpers::set_timeout;
use leptos::prelude::*;

use super::icons::{ChatIcon, SendIcon, XIcon};

#[component]
pub fn ChatWidget() -> impl IntoView {
    let panel = OverlayHandle::new(CHAT_CLOSE_DELAY);
    // The log survives closing and reopening the panel.
    let log = RwSignal::new(ChatLog::new(clock_label()));

    view! {
        <div class="fixed bottom-4 right-4 z-30 flex flex-col items-end gap-3">
            {move || {
                panel
                    .is_visible()
                    .then(|| view! { <ChatPanel panel=panel log=log /> })
            }}
            <button
                class="rounded-full bg-orange-500 p-4 text-white shadow-lg hover:bg-orange-600"
                aria-label="Чат підтримки"
                on:click=move |_| panel.toggle()
            >
                {move || {
                    if panel.is_open() {
                        view! { <XIcon class="h-6 w-6" /> }.into_any()
                    } else {
                        view! { <ChatIcon class="h-6 w-6" /> }.into_any()
                    }
                }}
            </button>
        </div>
    }
}

#[component]
fn ChatPanel(panel: OverlayHandle, log: RwSignal<ChatLog>) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let waiting = move || log.with(|l| l.is_awaiting_reply());

    let send = move || {
        let text = draft.get_untracked();
        let sent = log.try_update(|l| l.send(&text, clock_label())).unwrap_or(false);
        if !sent {
            return;
        }
        draft.set(String::new());
        set_timeout(
            move || {
                // The panel may have been torn down before the reply lands.
                let _ = log.try_update(|l| l.receive(ReplyService::reply_to(&text), clock_label()));
            },
            ReplyService::LATENCY,
        );
    };

    view! {
        <div class=move || {
            if panel.is_closing() {
                "flex h-96 w-80 flex-col overflow-hidden rounded-2xl bg-white shadow-2xl chat-exit"
            } else {
                "flex h-96 w-80 flex-col overflow-hidden rounded-2xl bg-white shadow-2xl chat-enter"
            }
        }>
            <header class="bg-orange-500 p-3 text-white">
                <p class="font-semibold">"Підтримка ШВИДКА ХАВКА"</p>
                <p class="text-xs text-orange-100">"Зазвичай відповідаємо за хвилину"</p>
            </header>
            <div class="flex-1 space-y-2 overflow-y-auto bg-gray-50 p-3">
                {move || {
                    log.with(|l| l.messages().to_vec())
                        .into_iter()
                        .map(|message| {
                            let mine = message.role == ChatRole::Visitor;
                            view! {
                                <div class=if mine { "flex justify-end" } else { "flex justify-start" }>
                                    <div class=if mine {
                                        "max-w-[80%] rounded-2xl rounded-br-sm bg-orange-500 px-3 py-2 text-sm text-white"
                                    } else {
                                        "max-w-[80%] rounded-2xl rounded-bl-sm bg-white px-3 py-2 text-sm text-gray-800 shadow"
                                    }>
                                        <p>{message.text}</p>
                                        <p class=if mine {
                                            "mt-1 text-right text-[10px] text-orange-100"
                                        } else {
                                            "mt-1 text-right text-[10px] text-gray-400"
                                        }>{message.timestamp}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                {move || {
                    waiting()
                        .then(|| {
                            view! {
                                <p class="text-xs italic text-gray-400">
                                    "Оператор друкує..."
                                </p>
                            }
                        })
                }}
            </div>
            <form
                class="flex items-center gap-2 border-t p-2"
                on:submit=move |ev| {
                    ev.prevent_default();
                    send();
                }
            >
                <input
                    type="text"
                    class="flex-1 rounded-full border px-3 py-2 text-sm"
                    placeholder="Ваше повідомлення..."
                    prop:value=draft
                    disabled=waiting
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="rounded-full bg-orange-500 p-2 text-white hover:bg-orange-600 disabled:bg-gray-300"
                    aria-label="Надіслати"
                    disabled=waiting
                >
                    <SendIcon class="h-5 w-5" />
                </button>
            </form>
        </div>
    }
}
