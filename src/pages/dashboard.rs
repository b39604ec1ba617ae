//! Dashboard landing page.

use leptos::prelude::*;

use crate::AuthState;
use crate::api;
use crate::types::UserProfile;

/// Post-login landing page — greets the signed-in user.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<AuthState>();
    let (profile, set_profile) = signal(Option::<UserProfile>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let auth_load = auth.clone();
    Effect::new(move || {
        if let Some(token) = auth_load.token.get() {
            leptos::task::spawn_local(async move {
                match api::me(&token).await {
                    Ok(p) => set_profile.set(Some(p)),
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    });

    view! {
        <div class="max-w-3xl mx-auto p-8">
            <div class="flex justify-between items-center mb-6">
                <div>
                    <h2 class="text-2xl font-semibold">"Dashboard"</h2>
                    <p class="text-sm text-base-content/60 mt-1">
                        {move || match profile.get() {
                            Some(p) => format!("Signed in as {}", p.name.unwrap_or(p.email)),
                            None => "Loading profile…".to_string(),
                        }}
                    </p>
                </div>
                <button class="btn btn-ghost btn-sm" on:click=move |_| auth.logout()>
                    "Logout"
                </button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert-error text-sm mb-4">{e}</div>
            })}
        </div>
    }
}
