use super::*;

fn user() -> User {
    User { id: "u1".to_owned(), email: "amina@stockdesk.ug".to_owned(), name: Some("Amina".to_owned()) }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
    assert!(!state.loading);
}

#[test]
fn auth_state_pending_is_loading() {
    let state = AuthState::pending();
    assert!(state.user.is_none());
    assert!(state.loading);
}

// =============================================================
// should_redirect_unauth
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { user: None, loading: false };
    assert!(state.should_redirect_unauth());
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState { user: None, loading: true };
    assert!(!state.should_redirect_unauth());
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(user()), loading: false };
    assert!(!state.should_redirect_unauth());
}
