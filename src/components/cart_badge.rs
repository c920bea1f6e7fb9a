//! Cart Badge Component

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::state::DashboardStateStoreFields;

/// Cart icon with the server-reported item count
#[component]
pub fn CartBadge() -> impl IntoView {
    let store = use_dashboard().store;
    let count = move || store.cart().read().count;

    view! {
        <a href="/orders/cart/" class="cart-link" title="Cart">
            <span class="cart-icon">"🛒"</span>
            <span
                id="cart-count"
                class=move || { if count() > 0 { "cart-badge" } else { "cart-badge empty" } }
            >
                {count}
            </span>
        </a>
    }
}
