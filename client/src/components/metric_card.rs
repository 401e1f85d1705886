//! Single KPI tile on the branch dashboard.

use leptos::prelude::*;

/// A labelled metric value with an optional caption line.
#[component]
pub fn MetricCard(
    label: &'static str,
    value: String,
    caption: Option<String>,
    #[prop(optional)] highlight: bool,
) -> impl IntoView {
    let class = if highlight { "metric-card metric-card--highlight" } else { "metric-card" };
    view! {
        <div class=class>
            <span class="metric-card__label">{label}</span>
            <span class="metric-card__value">{value}</span>
            {caption.map(|text| view! { <span class="metric-card__caption">{text}</span> })}
        </div>
    }
}
