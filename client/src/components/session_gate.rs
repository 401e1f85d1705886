//! Wrapper that renders protected content only for a signed-in user with a
//! selected branch.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::state::branch::BranchState;
use crate::util::session_gate::{GateDecision, decide, install_gate_redirect};

/// Gate `children` on the auth and branch contexts.
///
/// Shows a loading line while either source is loading, nothing while a
/// redirect is in flight, and the children unchanged otherwise.
#[component]
pub fn SessionGate(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let branch = expect_context::<RwSignal<BranchState>>();
    install_gate_redirect(auth, branch, use_navigate());

    let decision = Memo::new(move |_| decide(&auth.get(), &branch.get()));

    move || match decision.get() {
        GateDecision::Render => children().into_any(),
        GateDecision::Loading => view! {
            <div class="session-gate session-gate--loading" role="status">
                <span class="session-gate__spinner" aria-hidden="true"></span>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GateDecision::RedirectToLogin | GateDecision::RedirectToBranchSelection => ().into_any(),
    }
}
