//! Login page for email + password sign-in.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::session_gate::BRANCH_SELECT_PATH;

/// Trim credentials and require both fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    // Already signed in: skip straight to branch selection.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && state.user.is_some() {
            navigate(BRANCH_SELECT_PATH, NavigateOptions::default());
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::sign_in(&email_value, &password_value).await {
                Ok(user) => {
                    password.set(String::new());
                    info.set(String::new());
                    auth.set(AuthState { user: Some(user), loading: false });
                }
                Err(e) => info.set(format!("Sign in failed: {e}")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (email_value, password_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Stockdesk"</h1>
                <p class="login-card__subtitle">"Sign in to manage your branches"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
