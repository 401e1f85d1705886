//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{dashboard::DashboardPage, login::LoginPage, select_branch::BranchSelectPage};
use crate::state::{auth::AuthState, branch::BranchState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth and branch contexts, starts the session lookup and the
/// branch restore, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::pending());
    let branch = RwSignal::new(BranchState::pending());

    provide_context(auth);
    provide_context(branch);

    #[cfg(feature = "hydrate")]
    {
        let restored = crate::util::storage::load_json::<crate::net::types::Branch>(
            crate::state::branch::SELECTED_BRANCH_KEY,
        );
        branch.update(|s| {
            s.selected_branch = restored;
            s.loading = false;
        });

        leptos::task::spawn_local(async move {
            let user = crate::net::api::fetch_current_user().await;
            if user.is_none() {
                leptos::logging::log!("no active session");
            }
            auth.set(AuthState { user, loading: false });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/stockdesk.css"/>
        <Title text="Stockdesk"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("branches") view=BranchSelectPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
