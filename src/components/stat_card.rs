//! Summary stat card for the dashboard grid.

use leptos::prelude::*;

/// A single labeled statistic.
#[component]
pub fn StatCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-card__value">{value}</span>
            <span class="stat-card__label">{label}</span>
        </div>
    }
}
