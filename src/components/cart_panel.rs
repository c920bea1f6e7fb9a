//! Cart Panel Component
//!
//! Cart lines with quantity steppers, remove and clear actions. Quantities
//! and totals are whatever the server last reported. Once an add leaves the
//! lines out of date the panel links to a fresh cart page instead.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::CartAction;
use crate::context::use_dashboard;
use crate::models::CartLine;
use crate::state::DashboardStateStoreFields;

#[component]
fn CartRow(line: CartLine) -> impl IntoView {
    let ctx = use_dashboard();
    let currency = ctx.with_config(|c| c.currency.clone());
    let id = line.menu_item_id;

    let step = move |action: CartAction| {
        let ctrl = ctx.controller();
        spawn_local(async move {
            ctrl.update_cart_quantity(id, action).await;
        });
    };

    let remove = move |_| {
        let ctrl = ctx.controller();
        spawn_local(async move {
            ctrl.remove_from_cart(id).await;
        });
    };

    view! {
        <div class="cart-item" id=format!("cart-item-{}", id)>
            <span class="cart-item-name">{line.name.clone()}</span>
            {line.unit_price.map(|price| view! {
                <span class="cart-item-price">{price.display_with(&currency)}</span>
            })}
            <div class="quantity-controls">
                <button class="qty-btn" on:click=move |_| step(CartAction::Decrease)>"−"</button>
                <span class="quantity">{line.quantity}</span>
                <button class="qty-btn" on:click=move |_| step(CartAction::Increase)>"+"</button>
            </div>
            <button class="remove-btn" title="Remove" on:click=remove>"×"</button>
        </div>
    }
}

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;
    let currency = ctx.with_config(|c| c.currency.clone());
    let is_empty = move || store.cart().read().lines.is_empty();

    let clear = move |_| {
        let ctrl = ctx.controller();
        spawn_local(async move {
            ctrl.clear_cart().await;
        });
    };

    view! {
        <section class="cart-panel">
            <h2>"Your Cart"</h2>
            <Show
                when=move || !store.cart().read().lines_stale
                fallback=|| view! {
                    <p class="cart-stale">
                        "Your cart has changed. " <a href="/orders/cart/">"View cart"</a>
                    </p>
                }
            >
                <Show when=is_empty>
                    <p class="cart-empty">"Your cart is empty."</p>
                </Show>
                // Keyed on quantity too so a changed line re-renders
                <For
                    each=move || store.cart().read().lines.clone()
                    key=|line| (line.menu_item_id, line.quantity)
                    children=move |line| view! { <CartRow line=line /> }
                />
                <div class="cart-summary">
                    <span class="cart-total-label">"Total"</span>
                    <span id="cart-total" class="cart-total">
                        {
                            let currency = currency.clone();
                            move || store.cart().read().total.display_with(&currency)
                        }
                    </span>
                </div>
            </Show>
            <Show when=move || !is_empty()>
                <button class="clear-cart-btn" on:click=clear>"Clear cart"</button>
            </Show>
        </section>
    }
}
