//! Meridian Dashboard — Leptos CSR WASM application.
//!
//! Single-page app: unauthenticated visitors get the sign-in screen,
//! everyone else the dashboard. Talks to the Meridian REST API with
//! JSON bodies and Bearer token auth.

pub mod api;
pub mod components;
pub mod pages;
pub mod types;

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use pages::dashboard::DashboardPage;
use pages::login::LoginPage;

const TOKEN_KEY: &str = "meridian_token";

/// Route identifier for the post-login landing page.
pub const DASHBOARD_ROUTE: &str = "/dashboard";

// ── Auth State ──────────────────────────────────────────────────────

/// Global authentication state, provided via Leptos context.
#[derive(Clone)]
pub struct AuthState {
    pub token: ReadSignal<Option<String>>,
    set_token: WriteSignal<Option<String>>,
}

impl AuthState {
    fn new() -> Self {
        let stored: Option<String> = LocalStorage::get(TOKEN_KEY).ok();
        let (token, set_token) = signal(stored);
        Self { token, set_token }
    }

    /// Persist a freshly issued token and publish it to the app.
    pub fn login(&self, token: String) {
        let _ = LocalStorage::set(TOKEN_KEY, &token);
        self.set_token.set(Some(token));
    }

    pub fn logout(&self) {
        LocalStorage::delete(TOKEN_KEY);
        self.set_token.set(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.get_untracked().is_some()
    }
}

// ── App Root ────────────────────────────────────────────────────────

/// Leptos application root.
#[component]
pub fn App() -> impl IntoView {
    let auth = AuthState::new();
    provide_context(auth.clone());

    view! {
        <Router>
            {move || {
                if auth.token.get().is_none() {
                    view! { <LoginPage /> }.into_any()
                } else {
                    view! { <AppShell /> }.into_any()
                }
            }}
        </Router>
    }
}

#[component]
fn AppShell() -> impl IntoView {
    view! {
        <main class="min-h-screen bg-base-100">
            <Routes fallback=|| view! { <DashboardPage /> }>
                <Route path=path!("/") view=DashboardPage />
                <Route path=path!("/dashboard") view=DashboardPage />
            </Routes>
        </main>
    }
}

// ── WASM entry point ────────────────────────────────────────────────

/// Called by trunk to mount the app.
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    log::info!("Meridian Dashboard starting");
    leptos::mount::mount_to_body(App);
}
