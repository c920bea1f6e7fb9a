//! Menu Grid Component
//!
//! Menu items rendered into the page at load time, and the row used for
//! both the grid and search results.

use leptos::prelude::*;

use crate::components::AddToCartButton;
use crate::context::use_dashboard;
use crate::models::MenuItem;
use crate::state::DashboardStateStoreFields;

/// One menu item with an inline add-to-cart control
#[component]
pub fn MenuItemRow(item: MenuItem) -> impl IntoView {
    let currency = use_dashboard().with_config(|c| c.currency.clone());

    view! {
        <div class="menu-item-row">
            {item.image.clone().map(|src| view! {
                <img class="menu-item-thumb" src=src alt=item.name.clone() />
            })}
            <div class="menu-item-info">
                <span class="menu-item-name">{item.name.clone()}</span>
                <span class="menu-item-price">{item.price.display_with(&currency)}</span>
            </div>
            <AddToCartButton menu_item_id=item.id />
        </div>
    }
}

#[component]
pub fn MenuGrid() -> impl IntoView {
    let store = use_dashboard().store;

    view! {
        <Show when=move || !store.menu_items().read().is_empty()>
            <section class="menu-grid">
                <h2>"Popular Items"</h2>
                <For
                    each=move || store.menu_items().get()
                    key=|item| item.id
                    children=move |item| view! { <MenuItemRow item=item /> }
                />
            </section>
        </Show>
    }
}
