//! Add To Cart Button Component
//!
//! Quantity input plus button. The button stays disabled while the
//! item's request is in flight.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_dashboard;
use crate::state::DashboardStateStoreFields;

#[component]
pub fn AddToCartButton(menu_item_id: u32) -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;
    let (quantity, set_quantity) = signal(1u32);

    let busy = move || store.adding().read().contains(&menu_item_id);

    let on_add = move |_| {
        let ctrl = ctx.controller();
        let qty = quantity.get_untracked();
        spawn_local(async move {
            ctrl.add_to_cart(menu_item_id, qty).await;
        });
    };

    view! {
        <div class="add-to-cart">
            <input
                type="number"
                min="1"
                class="quantity-input"
                prop:value=move || quantity.get().to_string()
                on:input=move |ev| {
                    if let Ok(q) = event_target_value(&ev).parse::<u32>() {
                        set_quantity.set(q.max(1));
                    }
                }
            />
            <button class="add-to-cart-btn" disabled=busy on:click=on_add>
                {move || { if busy() { "Adding..." } else { "Add to Cart" } }}
            </button>
        </div>
    }
}
