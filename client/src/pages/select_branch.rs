//! Branch picker shown after sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Requires a signed-in user but no branch. Choosing a branch stores it in
//! `BranchState` and `localStorage`, then returns to the dashboard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::branch_card::BranchCard;
use crate::net::types::Branch;
use crate::state::auth::AuthState;
use crate::state::branch::{BranchState, SELECTED_BRANCH_KEY};
use crate::util::auth::install_unauth_redirect;
use crate::util::storage;

#[component]
pub fn BranchSelectPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let branch = expect_context::<RwSignal<BranchState>>();
    let navigate = use_navigate();

    install_unauth_redirect(auth, navigate.clone());

    let fetching = RwSignal::new(false);
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        let state = auth.get();
        if state.loading || state.user.is_none() {
            return;
        }
        requested.set(true);
        fetching.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_branches().await;
            if let Err(e) = &result {
                leptos::logging::warn!("branch list failed: {e}");
            }
            branch.update(|s| s.apply_branches(result));
            fetching.set(false);
        });
    });

    let picked = RwSignal::new(false);
    let on_select = Callback::new(move |chosen: Branch| {
        storage::save_json(SELECTED_BRANCH_KEY, &chosen);
        branch.update(|s| s.select(chosen));
        picked.set(true);
    });

    Effect::new(move || {
        if picked.get() {
            picked.set(false);
            navigate("/", NavigateOptions::default());
        }
    });

    let selected_id = move || branch.get().selected_branch.map(|b| b.id);

    view! {
        <div class="branch-page">
            <header class="branch-page__header">
                <h1>"Choose a branch"</h1>
                <span class="branch-page__user">
                    {move || auth.get().user.map(|u| u.display_name().to_owned()).unwrap_or_default()}
                </span>
            </header>
            <Show when=move || branch.get().error.is_some()>
                <p class="branch-page__error">{move || branch.get().error.unwrap_or_default()}</p>
            </Show>
            <Show
                when=move || !fetching.get()
                fallback=move || view! { <p>"Loading branches..."</p> }
            >
                <Show
                    when=move || !branch.get().branches.is_empty()
                    fallback=move || view! { <p class="branch-page__empty">"No branches available."</p> }
                >
                    <div class="branch-page__list">
                        {move || {
                            let active_id = selected_id();
                            branch
                                .get()
                                .branches
                                .into_iter()
                                .map(|b| {
                                    let active = active_id.as_deref() == Some(b.id.as_str());
                                    view! { <BranchCard branch=b active=active on_select=on_select/> }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
