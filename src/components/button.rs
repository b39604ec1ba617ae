//! Primary action button with a loading state.

use leptos::prelude::*;

/// Primary submit button — disabled with a spinner while a request is
/// in flight.
#[component]
pub fn SubmitButton(
    label: &'static str,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            class="btn btn-primary w-full mt-4"
            type="button"
            disabled=move || loading.get()
            on:click=move |_| on_click.run(())
        >
            {move || if loading.get() {
                view! { <span class="loading loading-spinner loading-sm"></span> }.into_any()
            } else {
                label.into_any()
            }}
        </button>
    }
}
