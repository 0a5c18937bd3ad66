//! Single-figure card for the admin analytics strip.

use leptos::prelude::*;

use crate::state::employees::AnalyticsState;

#[component]
pub fn AnalyticsCard(title: String, value: String) -> impl IntoView {
    view! {
        <div class="analytics-card">
            <h3 class="analytics-card__title">{title}</h3>
            <p class="analytics-card__value">{value}</p>
        </div>
    }
}

/// Total head-count followed by one card per department.
#[component]
pub fn AnalyticsStrip(analytics: RwSignal<AnalyticsState>) -> impl IntoView {
    view! {
        <div class="analytics-strip">
            {move || {
                let state = analytics.get();
                let total = state.total.map_or_else(|| "-".to_owned(), |t| t.to_string());
                let mut cards = vec![
                    view! { <AnalyticsCard title="Total Employees".to_owned() value=total/> },
                ];
                cards.extend(state.departments.into_iter().map(|d| {
                    view! { <AnalyticsCard title=d.department value=d.count.to_string()/> }
                }));
                cards
            }}
            <Show when=move || analytics.with(|a| a.error.is_some())>
                <p class="analytics-strip__error">
                    {move || analytics.with(|a| a.error.as_ref().map(|e| e.message.clone()).unwrap_or_default())}
                </p>
            </Show>
        </div>
    }
}
