//! Sign-in page component.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::components::button::SubmitButton;
use crate::components::input::TextField;
use crate::components::signup::SignupBlock;
use crate::{AuthState, DASHBOARD_ROUTE};

/// Which form field a keystroke targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

/// Transient sign-in form state. Lives only while the screen is
/// mounted; nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    /// Replace one field, leaving the other untouched.
    pub fn edit(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

fn password_input_type(show: bool) -> &'static str {
    if show {
        "text"
    } else {
        "password"
    }
}

/// Icon for the visibility toggle — always the complement of the
/// current masked state.
fn visibility_icon(show: bool) -> &'static str {
    if show {
        "🙈"
    } else {
        "👁"
    }
}

/// Sign-in page — email/password form with a sign-up switch.
///
/// No client-side credential validation happens here: the form is
/// submitted as-is and the server owns validation.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let (form, set_form) = signal(LoginForm::default());
    let (error, set_error) = signal(Option::<String>::None);
    let (loading, set_loading) = signal(false);
    let (show_password, set_show_password) = signal(false);
    let (is_sign_up, set_is_sign_up) = signal(false);

    let navigate = use_navigate();

    // Any edit wipes a stale error before touching the field.
    let on_edit = move |field: Field| {
        Callback::new(move |value: String| {
            set_error.set(None);
            set_form.update(|f| f.edit(field, value));
        })
    };

    let auth_submit = auth.clone();
    let do_login = move |_: ()| {
        set_loading.set(true);
        set_error.set(None);
        let auth = auth_submit.clone();
        let navigate = navigate.clone();
        let creds = form.get_untracked();
        leptos::task::spawn_local(async move {
            match api::login(&creds.email, &creds.password).await {
                Ok(resp) => {
                    auth.login(resp.token);
                    navigate(DASHBOARD_ROUTE, Default::default());
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    let login_form = move || {
        view! {
            <h1 class="text-2xl font-bold text-center">"Sign in"</h1>
            <p class="text-center text-sm text-base-content/60 mb-4">"Welcome back to Meridian"</p>

            <TextField
                label="Email"
                placeholder="email@example.com"
                value=Signal::derive(move || form.get().email)
                on_input=on_edit(Field::Email)
            />
            <div class="relative">
                <TextField
                    label="Password"
                    input_type=Signal::derive(move || password_input_type(show_password.get()))
                    placeholder="••••••••"
                    value=Signal::derive(move || form.get().password)
                    on_input=on_edit(Field::Password)
                />
                <button
                    type="button"
                    class="btn btn-ghost btn-xs absolute right-2 top-8"
                    on:click=move |_| set_show_password.update(|v| *v = !*v)
                >
                    {move || visibility_icon(show_password.get())}
                </button>
            </div>

            <SubmitButton label="SIGN IN" loading=loading on_click=Callback::new(do_login.clone()) />

            <div class="flex gap-1 text-xs mt-4">
                <span class="text-base-content/60">"Don't have an account?"</span>
                <button
                    class="link link-primary text-xs"
                    on:click=move |_| {
                        set_error.set(None);
                        set_is_sign_up.set(true);
                    }
                >
                    "Sign up"
                </button>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="flex items-center justify-center min-h-screen bg-base-100">
            <div class="card bg-base-200 border border-base-300 w-full max-w-sm">
                <div class="card-body">
                    {move || {
                        if is_sign_up.get() {
                            view! {
                                <SignupBlock
                                    on_back=Callback::new(move |_: ()| set_is_sign_up.set(false))
                                    set_error=set_error
                                />
                            }
                            .into_any()
                        } else {
                            login_form()
                        }
                    }}
                    {move || error.get().map(|e| view! {
                        <p class="text-error text-xs">{e}</p>
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_email_preserves_password() {
        let mut form = LoginForm {
            email: String::new(),
            password: "12".into(),
        };
        form.edit(Field::Email, "a@b.com".into());
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.password, "12");
    }

    #[test]
    fn edit_password_preserves_email() {
        let mut form = LoginForm {
            email: "a@b.com".into(),
            password: String::new(),
        };
        form.edit(Field::Password, "hunter2".into());
        assert_eq!(form.email, "a@b.com");
        assert_eq!(form.password, "hunter2");
    }

    #[test]
    fn edits_accumulate() {
        let mut form = LoginForm::default();
        form.edit(Field::Email, "a".into());
        form.edit(Field::Email, "a@b.com".into());
        form.edit(Field::Password, "pw".into());
        assert_eq!(
            form,
            LoginForm {
                email: "a@b.com".into(),
                password: "pw".into(),
            }
        );
    }

    #[test]
    fn double_visibility_toggle_is_identity() {
        let mut show = false;
        assert_eq!(password_input_type(show), "password");
        show = !show;
        assert_eq!(password_input_type(show), "text");
        show = !show;
        assert_eq!(password_input_type(show), "password");
    }

    #[test]
    fn icon_complements_masked_state() {
        // Masked input shows the "reveal" icon and vice versa.
        assert_ne!(visibility_icon(false), visibility_icon(true));
        assert_eq!(visibility_icon(false), "👁");
        assert_eq!(visibility_icon(true), "🙈");
    }
}
