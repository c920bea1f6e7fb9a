//! Notification Bell Component
//!
//! Badge plus dropdown. The list is re-rendered wholesale from the latest
//! poll, in server order.

use leptos::prelude::*;

use crate::context::use_dashboard;
use crate::state::DashboardStateStoreFields;

#[component]
pub fn NotificationBell() -> impl IntoView {
    let store = use_dashboard().store;
    let (open, set_open) = signal(false);
    let count = move || store.notification_count().get();

    view! {
        <div class="notification-bell">
            <button class="bell-btn" title="Notifications" on:click=move |_| set_open.update(|v| *v = !*v)>
                "🔔"
                <span
                    id="notification-count"
                    class=move || { if count() > 0 { "notification-badge" } else { "notification-badge hidden" } }
                >
                    {count}
                </span>
            </button>
            <Show when=move || open.get()>
                <div id="notification-list" class="notification-dropdown">
                    {move || {
                        let notifications = store.notifications().get();
                        if notifications.is_empty() {
                            view! { <div class="notification-empty">"No new notifications"</div> }.into_any()
                        } else {
                            notifications.into_iter().map(|n| view! {
                                <a class="notification-item" href=n.url>
                                    <div class="notification-title">{n.title}</div>
                                    <div class="notification-message">{n.message}</div>
                                    <small class="notification-time">{n.time}</small>
                                </a>
                            }).collect_view().into_any()
                        }
                    }}
                </div>
            </Show>
        </div>
    }
}
