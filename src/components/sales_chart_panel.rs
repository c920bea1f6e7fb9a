//! Sales Chart Component
//!
//! Horizontal bars for the last seven days of revenue. Staff pages only.

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::models::Amount;
use crate::state::DashboardStateStoreFields;

#[component]
pub fn SalesChartPanel() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;
    let currency = ctx.with_config(|c| c.currency.clone());

    view! {
        <Show when=move || store.sales_chart().read().is_some()>
            <section class="sales-chart">
                <h2>"Sales, last 7 days"</h2>
                {
                    let currency = currency.clone();
                    move || {
                        let bars = store.sales_chart().get().map(|chart| chart.bars()).unwrap_or_default();
                        bars.into_iter().map(|(label, value, pct)| view! {
                            <div class="chart-row">
                                <span class="chart-label">{label}</span>
                                <div class="chart-track">
                                    <div class="chart-bar" style=format!("width: {:.0}%;", pct)></div>
                                </div>
                                <span class="chart-value">{Amount(value).display_with(&currency)}</span>
                            </div>
                        }).collect_view()
                    }
                }
            </section>
        </Show>
    }
}
