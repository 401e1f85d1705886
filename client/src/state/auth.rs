//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state tracking the current user and loading status.
///
/// Provided to the component tree as `RwSignal<AuthState>`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    /// State before the session lookup has finished.
    pub fn pending() -> Self {
        Self { user: None, loading: true }
    }

    /// Whether an unauthenticated route guard should send the user to `/login`.
    pub fn should_redirect_unauth(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}
