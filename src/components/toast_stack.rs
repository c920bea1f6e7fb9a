//! Toast Stack Component
//!
//! Transient messages; each dismisses itself after the configured lifetime.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_dashboard;
use crate::state::DashboardStateStoreFields;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;
    let lifetime = ctx.with_config(|c| c.toast_lifetime());

    view! {
        <div class="toast-container" aria-live="polite">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    spawn_local(async move {
                        gloo_timers::future::sleep(lifetime).await;
                        ctx.dismiss_toast(id);
                    });
                    view! {
                        <div class=toast.kind.class() role="alert">
                            <span class="toast-message">{toast.message}</span>
                            <button class="toast-close" on:click=move |_| ctx.dismiss_toast(id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
