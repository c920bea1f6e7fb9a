//! Stats Panel Component
//!
//! One tile per configured stat key, each with element id `stat-<key>`.

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::state::DashboardStateStoreFields;

/// `pending_orders` -> `Pending Orders`
fn stat_label(key: &str) -> String {
    key.split(|c| c == '_' || c == '-')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[component]
pub fn StatsPanel() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;
    let keys = ctx.with_config(|c| c.stat_keys.clone());

    view! {
        <section class="stats-grid">
            {keys.into_iter().map(|key| {
                let label = stat_label(&key);
                let id = format!("stat-{}", key);
                let value = move || {
                    store.stats().with(|stats| stats.get(&key).cloned()).unwrap_or_else(|| "–".to_string())
                };
                view! {
                    <div class="stat-card">
                        <span class="stat-value" id=id>{value}</span>
                        <span class="stat-label">{label}</span>
                    </div>
                }
            }).collect_view()}
        </section>
    }
}
