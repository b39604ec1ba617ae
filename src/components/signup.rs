//! Sign-up sub-form, rendered in place of the login form.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::button::SubmitButton;
use crate::components::input::TextField;
use crate::{AuthState, DASHBOARD_ROUTE};

/// Registration form. `on_back` returns the user to the sign-in view;
/// failures surface on the shared inline error line via `set_error`.
#[component]
pub fn SignupBlock(
    on_back: Callback<()>,
    set_error: WriteSignal<Option<String>>,
) -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let navigate = use_navigate();

    let auth_submit = auth.clone();
    let do_signup = move |_: ()| {
        set_loading.set(true);
        set_error.set(None);
        let auth = auth_submit.clone();
        let navigate = navigate.clone();
        let (name, email, password) = (
            name.get_untracked(),
            email.get_untracked(),
            password.get_untracked(),
        );
        leptos::task::spawn_local(async move {
            match api::signup(&name, &email, &password).await {
                Ok(resp) => {
                    auth.login(resp.token);
                    navigate(DASHBOARD_ROUTE, Default::default());
                }
                Err(e) => {
                    log::warn!("signup failed: {e}");
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <h1 class="text-2xl font-bold text-center">"Create account"</h1>
        <p class="text-center text-sm text-base-content/60 mb-4">"Join Meridian"</p>

        <TextField
            label="Name"
            placeholder="Ada Lovelace"
            value=name
            on_input=Callback::new(move |v: String| {
                set_error.set(None);
                set_name.set(v);
            })
        />
        <TextField
            label="Email"
            placeholder="email@example.com"
            value=email
            on_input=Callback::new(move |v: String| {
                set_error.set(None);
                set_email.set(v);
            })
        />
        <TextField
            label="Password"
            input_type="password"
            placeholder="••••••••"
            value=password
            on_input=Callback::new(move |v: String| {
                set_error.set(None);
                set_password.set(v);
            })
        />

        <SubmitButton label="SIGN UP" loading=loading on_click=Callback::new(do_signup) />

        <div class="flex gap-1 text-xs mt-4">
            <span class="text-base-content/60">"Already have an account?"</span>
            <button class="link link-primary text-xs" on:click=move |_| on_back.run(())>
                "Sign in"
            </button>
        </div>
    }
}
