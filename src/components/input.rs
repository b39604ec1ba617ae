//! Labeled text input bound to a signal.

use leptos::prelude::*;

/// Labeled form input. `input_type` is reactive so callers can flip a
/// password field between masked and plaintext.
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(into, default = Signal::from("text"))] input_type: Signal<&'static str>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <fieldset class="fieldset">
            <label class="fieldset-label">{label}</label>
            <input
                class="input input-bordered w-full"
                type=move || input_type.get()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </fieldset>
    }
}
