//! Checkout modal: delivery form, validation feedback, order confirmation.

use crate::state::AppState;
use khavka_commerce::prelude::*;
use leptos::prelude::*;

use super::icons::XIcon;

#[component]
pub fn CheckoutModal() -> impl IntoView {
    let state = AppState::expect();
    let modal = state.checkout_modal;

    move || {
        modal
            .is_visible()
            .then(|| view! { <CheckoutModalBody /> })
    }
}

#[component]
fn CheckoutModalBody() -> impl IntoView {
    let state = AppState::expect();
    let modal = state.checkout_modal;
    // Local to the mounted modal; unmounting at Closed resets the form.
    let form = RwSignal::new(CheckoutForm::new());
    let submitted = RwSignal::new(false);
    let closing = move || modal.is_closing();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let valid = form.try_update(|f| f.run_validation()).unwrap_or(false);
        if valid {
            form.with_untracked(|f| state.submit_order(f));
            submitted.set(true);
        }
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
                    "relative max-h-full w-full max-w-lg overflow-y-auto rounded-2xl bg-white p-6 modal-exit"
                } else {
                    "relative max-h-full w-full max-w-lg overflow-y-auto rounded-2xl bg-white p-6 modal-enter"
                }
            }>
                <button
                    class="absolute right-4 top-4 rounded-full p-2 text-gray-500 hover:bg-gray-100"
                    aria-label="Закрити"
                    on:click=move |_| modal.close()
                >
                    <XIcon class="h-6 w-6" />
                </button>
                {move || {
                    if submitted.get() {
                        view! {
                            <div class="flex flex-col items-center gap-4 py-8 text-center">
                                <span class="text-5xl">"✅"</span>
                                <h2 class="text-2xl font-bold text-gray-900">
                                    "Замовлення прийнято!"
                                </h2>
                                <p class="text-gray-600">
                                    "Дякуємо! Ми вже готуємо вашу хавку."
                                </p>
                                <button
                                    class="mt-2 rounded-full bg-orange-500 px-6 py-2 font-semibold text-white hover:bg-orange-600"
                                    on:click=move |_| modal.close()
                                >
                                    "Повернутися до меню"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! { <CheckoutFields form=form on_submit=on_submit /> }.into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn CheckoutFields<F>(form: RwSignal<CheckoutForm>, on_submit: F) -> impl IntoView
where
    F: Fn(leptos::ev::SubmitEvent) + Copy + 'static,
{
    view! {
        <form class="flex flex-col gap-4" on:submit=on_submit>
            <h2 class="text-2xl font-bold text-gray-900">"Оформлення замовлення"</h2>

            <TextField
                form=form
                field=FormField::Name
                label="Ім'я"
                placeholder="Ваше ім'я"
            />
            <TextField
                form=form
                field=FormField::Phone
                label="Телефон"
                placeholder="+380xxxxxxxxx"
            />
            <TextField
                form=form
                field=FormField::Address
                label="Адреса доставки"
                placeholder="Вулиця, будинок, квартира"
            />

            <div>
                <label class="mb-1 block text-sm font-medium text-gray-700">
                    "Спосіб оплати"
                </label>
                <select
                    class="w-full rounded-lg border px-3 py-2"
                    on:change=move |ev| {
                        form.update(|f| f.set(FormField::PaymentMethod, event_target_value(&ev)))
                    }
                >
                    <option value="" selected disabled>
                        "Оберіть спосіб оплати"
                    </option>
                    {PaymentMethod::ALL
                        .iter()
                        .map(|method| {
                            view! { <option value=method.as_str()>{method.label()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <FieldError form=form field=FormField::PaymentMethod />
            </div>

            <div>
                <label class="mb-1 block text-sm font-medium text-gray-700">
                    "Час доставки"
                </label>
                <select
                    class="w-full rounded-lg border px-3 py-2"
                    on:change=move |ev| {
                        form.update(|f| f.set(FormField::DeliveryTime, event_target_value(&ev)))
                    }
                >
                    <option value="" selected disabled>
                        "Оберіть час доставки"
                    </option>
                    {DeliveryTime::ALL
                        .iter()
                        .map(|time| {
                            view! { <option value=time.as_str()>{time.label()}</option> }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <FieldError form=form field=FormField::DeliveryTime />
            </div>

            <div>
                <label class="mb-1 block text-sm font-medium text-gray-700">
                    "Коментар до замовлення"
                </label>
                <textarea
                    class="w-full rounded-lg border px-3 py-2"
                    rows=3
                    placeholder="Необов'язково"
                    prop:value=move || form.with(|f| f.comments.clone())
                    on:input=move |ev| {
                        form.update(|f| f.set(FormField::Comments, event_target_value(&ev)))
                    }
                ></textarea>
            </div>

            <button
                type="submit"
                class="rounded-full bg-orange-500 py-3 font-semibold text-white hover:bg-orange-600"
            >
                "Підтвердити замовлення"
            </button>
        </form>
    }
}

#[component]
fn TextField(
    form: RwSignal<CheckoutForm>,
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let value = move || form.with(|f| f.value(field).to_string());

    view! {
        <div>
            <label class="mb-1 block text-sm font-medium text-gray-700">{label}</label>
            <input
                type="text"
                class="w-full rounded-lg border px-3 py-2"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
            <FieldError form=form field=field />
        </div>
    }
}

#[component]
fn FieldError(form: RwSignal<CheckoutForm>, field: FormField) -> impl IntoView {
    move || {
        form.with(|f| f.error(field).map(str::to_string))
            .map(|message| view! { <p class="mt-1 text-sm text-red-500">{message}</p> })
    }
}
