//! Selectable card for one branch on the branch picker.
//!
//! DESIGN
//! ======
//! The card only reports the click; persisting and navigating stay with the
//! page so the card can be reused in other lists.

use leptos::prelude::*;

use crate::net::types::Branch;

/// A clickable card representing a branch.
#[component]
pub fn BranchCard(branch: Branch, #[prop(optional)] active: bool, on_select: Callback<Branch>) -> impl IntoView {
    let class = if active { "branch-card branch-card--active" } else { "branch-card" };
    let name = branch.name.clone();
    let location = branch.location.clone();
    view! {
        <button class=class type="button" on:click=move |_| on_select.run(branch.clone())>
            <span class="branch-card__name">{name}</span>
            {location.map(|loc| view! { <span class="branch-card__location">{loc}</span> })}
        </button>
    }
}
