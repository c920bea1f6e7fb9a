//! Order Table Component
//!
//! Orders rendered into the page at load time, with a status selector and
//! a cancel action. Successful changes reload the page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_dashboard;
use crate::models::OrderSummary;
use crate::state::DashboardStateStoreFields;

#[component]
fn OrderRow(order: OrderSummary) -> impl IntoView {
    let ctx = use_dashboard();
    let (currency, options, status_label) = ctx.with_config(|c| {
        (c.currency.clone(), c.order_statuses.clone(), c.status_label(&order.status).to_string())
    });
    let id = order.id;
    let current = order.status.clone();

    let on_change = move |ev: web_sys::Event| {
        let status = event_target_value(&ev);
        let ctrl = ctx.controller();
        spawn_local(async move {
            ctrl.update_order_status(id, &status).await;
        });
    };

    let cancel_button = order.is_cancellable().then(|| {
        let number = order.order_number.clone();
        view! {
            <button
                class="cancel-order-btn"
                on:click=move |_| {
                    let ctrl = ctx.controller();
                    let number = number.clone();
                    spawn_local(async move {
                        ctrl.cancel_order(&number).await;
                    });
                }
            >
                "Cancel"
            </button>
        }
    });

    view! {
        <tr class="order-row" id=format!("order-{}", id)>
            <td>
                "#" {order.order_number.clone()}
                <span class=format!("status-badge status-{}", current.to_lowercase())>{status_label}</span>
            </td>
            <td>{order.customer.clone().unwrap_or_default()}</td>
            <td>{order.total.display_with(&currency)}</td>
            <td>
                <select class="status-select" on:change=on_change>
                    {options.into_iter().map(|opt| {
                        let selected = opt.value == current;
                        view! { <option value=opt.value selected=selected>{opt.label}</option> }
                    }).collect_view()}
                </select>
            </td>
            <td>{cancel_button}</td>
        </tr>
    }
}

#[component]
pub fn OrderTable() -> impl IntoView {
    let store = use_dashboard().store;

    view! {
        <Show when=move || !store.orders().read().is_empty()>
            <section class="orders">
                <h2>"Orders"</h2>
                <table class="order-table">
                    <thead>
                        <tr>
                            <th>"Order"</th>
                            <th>"Customer"</th>
                            <th>"Total"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.orders().get()
                            key=|order| order.id
                            children=move |order| view! { <OrderRow order=order /> }
                        />
                    </tbody>
                </table>
            </section>
        </Show>
    }
}
