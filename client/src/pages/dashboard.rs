//! Branch dashboard: stock value, returns and efficiency KPIs.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the protected landing route. `SessionGate` keeps it behind sign-in
//! and branch selection; switching branch or logging out only clears state and
//! lets the gate perform the redirect.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::metric_card::MetricCard;
use crate::components::session_gate::SessionGate;
use crate::net::types::InventorySummary;
use crate::state::auth::AuthState;
use crate::state::branch::{BranchState, SELECTED_BRANCH_KEY};
use crate::util::currency::format_ugx;
use crate::util::metrics::{
    calculate_days_sales_of_inventory, calculate_efficiency_score, calculate_inventory_turnover, calculate_roi,
    calculate_wastage_rate,
};
use crate::util::storage;

/// Placeholder for metrics that cannot be computed from the current data.
const MISSING: &str = "-";

/// Display model for one dashboard tile.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricCardData {
    pub label: &'static str,
    pub value: String,
    pub caption: Option<String>,
    pub highlight: bool,
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Divide-guarded ratios for one summary. `None` where the divisor is zero or
/// the result is not finite.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct BranchRatios {
    roi: Option<f64>,
    turnover: Option<f64>,
    dsi: Option<f64>,
    wastage_rate: Option<f64>,
    efficiency: Option<f64>,
}

impl BranchRatios {
    fn from_summary(summary: &InventorySummary) -> Self {
        let roi = (summary.investment != 0.0)
            .then(|| calculate_roi(summary.investment, summary.returns))
            .and_then(finite);
        let turnover = (summary.average_inventory_value != 0.0)
            .then(|| calculate_inventory_turnover(summary.cost_of_goods_sold, summary.average_inventory_value))
            .and_then(finite);
        let dsi = turnover
            .filter(|t| *t != 0.0)
            .map(calculate_days_sales_of_inventory)
            .and_then(finite);
        let wastage_rate = (summary.total_inventory_value != 0.0)
            .then(|| calculate_wastage_rate(summary.expired_value, summary.total_inventory_value))
            .and_then(finite);
        let efficiency = match (wastage_rate, turnover, dsi) {
            (Some(w), Some(t), Some(d)) => finite(calculate_efficiency_score(w, t, d)),
            _ => None,
        };
        Self { roi, turnover, dsi, wastage_rate, efficiency }
    }
}

fn format_or_missing(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map_or_else(|| MISSING.to_owned(), format)
}

/// Build the dashboard tiles for `summary`.
pub fn build_metric_cards(summary: &InventorySummary) -> Vec<MetricCardData> {
    let ratios = BranchRatios::from_summary(summary);
    vec![
        MetricCardData {
            label: "Stock on hand",
            value: format_ugx(summary.total_inventory_value),
            caption: Some(format!("Average {}", format_ugx(summary.average_inventory_value))),
            highlight: false,
        },
        MetricCardData {
            label: "Return on investment",
            value: format_or_missing(ratios.roi, |v| format!("{v:.1}%")),
            caption: Some(format!(
                "{} returned on {}",
                format_ugx(summary.returns),
                format_ugx(summary.investment)
            )),
            highlight: false,
        },
        MetricCardData {
            label: "Inventory turnover",
            value: format_or_missing(ratios.turnover, |v| format!("{v:.2}x")),
            caption: Some(format!("COGS {}", format_ugx(summary.cost_of_goods_sold))),
            highlight: false,
        },
        MetricCardData {
            label: "Days sales of inventory",
            value: format_or_missing(ratios.dsi, |v| format!("{v:.0} days")),
            caption: None,
            highlight: false,
        },
        MetricCardData {
            label: "Wastage rate",
            value: format_or_missing(ratios.wastage_rate, |v| format!("{v:.1}%")),
            caption: Some(format!("{} expired", format_ugx(summary.expired_value))),
            highlight: false,
        },
        MetricCardData {
            label: "Efficiency score",
            value: format_or_missing(ratios.efficiency, |v| format!("{v:.0} / 100")),
            caption: None,
            highlight: true,
        },
    ]
}

/// Whether a summary fetched for `branch_id` may still be applied. A disposed
/// selection means the dashboard unmounted while the request was in flight.
#[cfg(any(test, feature = "hydrate"))]
fn summary_is_current(selected_id: Memo<Option<String>>, branch_id: &str) -> bool {
    selected_id
        .try_get_untracked()
        .is_some_and(|current| current.as_deref() == Some(branch_id))
}

/// Dashboard route, gated on session and branch selection.
#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <SessionGate>
            <DashboardContent/>
        </SessionGate>
    }
}

#[component]
fn DashboardContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let branch = expect_context::<RwSignal<BranchState>>();

    let summary = RwSignal::new(None::<InventorySummary>);
    let summary_error = RwSignal::new(None::<String>);
    let summary_loading = RwSignal::new(false);

    let selected_id = Memo::new(move |_| branch.get().selected_branch.map(|b| b.id));

    Effect::new(move || {
        let Some(branch_id) = selected_id.get() else {
            return;
        };
        summary.set(None);
        summary_error.set(None);
        summary_loading.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_inventory_summary(&branch_id).await;
            // A newer selection, or none at all, owns the signals now.
            if !summary_is_current(selected_id, &branch_id) {
                return;
            }
            match result {
                Ok(data) => {
                    summary.try_set(Some(data));
                }
                Err(e) => {
                    leptos::logging::warn!("inventory summary failed: branch={branch_id} error={e}");
                    summary_error.try_set(Some(e));
                }
            }
            summary_loading.try_set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = branch_id;
    });

    let on_switch_branch = move |_| {
        storage::remove(SELECTED_BRANCH_KEY);
        branch.update(BranchState::clear_selection);
    };

    let on_logout = move |_| {
        storage::remove(SELECTED_BRANCH_KEY);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::sign_out().await;
            branch.update(BranchState::clear_selection);
            auth.set(AuthState::default());
        });
    };

    let branch_name = move || branch.get().selected_branch.map(|b| b.name).unwrap_or_default();
    let user_name = move || auth.get().user.map(|u| u.display_name().to_owned()).unwrap_or_default();

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__branch-name">{branch_name}</span>
                <button class="btn toolbar__switch-branch" on:click=on_switch_branch>
                    "Switch Branch"
                </button>
                <span class="toolbar__spacer"></span>
                <span class="toolbar__self">{user_name}</span>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <div class="dashboard-page__grid">
                <Show when=move || summary_error.get().is_some()>
                    <p class="dashboard-page__error">{move || summary_error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !summary_loading.get()
                    fallback=move || view! { <p>"Loading inventory..."</p> }
                >
                    <div class="dashboard-page__cards">
                        {move || {
                            summary
                                .get()
                                .map(|data| {
                                    build_metric_cards(&data)
                                        .into_iter()
                                        .map(|card| {
                                            view! {
                                                <MetricCard
                                                    label=card.label
                                                    value=card.value
                                                    caption=card.caption
                                                    highlight=card.highlight
                                                />
                                            }
                                        })
                                        .collect_view()
                                })
                        }}
                    </div>
                </Show>
            </div>
        </div>
    }
}
