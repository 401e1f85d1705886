//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Routes that need a user but not a branch (the branch picker) apply the same
//! unauthenticated redirect as the full session gate.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::util::session_gate::LOGIN_PATH;

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if auth.get().should_redirect_unauth() {
            navigate(LOGIN_PATH, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
