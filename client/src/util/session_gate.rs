//! Route gating on session and branch selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected pages render only once a user is signed in and a branch is
//! selected. `decide` maps the two state snapshots to a `GateDecision`;
//! `RedirectLatch` makes sure each redirect fires once per transition even
//! though the reactive effect re-runs on every snapshot.

#[cfg(test)]
#[path = "session_gate_test.rs"]
mod session_gate_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;
use crate::state::branch::BranchState;

/// Unauthenticated entry point.
pub const LOGIN_PATH: &str = "/login";
/// Branch-selection entry point.
pub const BRANCH_SELECT_PATH: &str = "/branches";

/// Outcome of evaluating the gate for one pair of state snapshots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Either source is still loading: show the loading indicator.
    Loading,
    /// No signed-in user.
    RedirectToLogin,
    /// Signed in, but no branch selected.
    RedirectToBranchSelection,
    /// Render the protected content.
    Render,
}

impl GateDecision {
    /// Navigation target for redirect decisions.
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToBranchSelection => Some(BRANCH_SELECT_PATH),
            Self::Loading | Self::Render => None,
        }
    }
}

/// Evaluate the gate. Loading takes precedence, then auth, then branch.
pub fn decide(auth: &AuthState, branch: &BranchState) -> GateDecision {
    if auth.loading || branch.loading {
        GateDecision::Loading
    } else if auth.user.is_none() {
        GateDecision::RedirectToLogin
    } else if branch.selected_branch.is_none() {
        GateDecision::RedirectToBranchSelection
    } else {
        GateDecision::Render
    }
}

/// Remembers the last observed decision so redirects fire on transitions only.
#[derive(Clone, Debug, Default)]
pub struct RedirectLatch {
    last: Option<GateDecision>,
}

impl RedirectLatch {
    /// Record `decision` and return a navigation target if this is a fresh
    /// transition into a redirect decision.
    pub fn observe(&mut self, decision: GateDecision) -> Option<&'static str> {
        let previous = self.last.replace(decision);
        if previous == Some(decision) {
            return None;
        }
        decision.redirect_path()
    }
}

/// Install an effect that redirects whenever the gate moves into a redirect state.
pub fn install_gate_redirect<F>(auth: RwSignal<AuthState>, branch: RwSignal<BranchState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let latch = StoredValue::new(RedirectLatch::default());
    Effect::new(move || {
        let decision = decide(&auth.get(), &branch.get());
        let mut target = None;
        latch.update_value(|l| target = l.observe(decision));
        if let Some(path) = target {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
