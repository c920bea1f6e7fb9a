//! Menu Search Component
//!
//! Search-as-you-type. Each keystroke goes through the controller, which
//! hides results for short queries and debounces the rest.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::MenuItemRow;
use crate::context::use_dashboard;
use crate::state::DashboardStateStoreFields;

#[component]
pub fn MenuSearch() -> impl IntoView {
    let ctx = use_dashboard();
    let store = ctx.store;
    let (query, set_query) = signal(String::new());

    let on_input = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        set_query.set(value.clone());
        let ctrl = ctx.controller();
        if let Some(ticket) = ctrl.search_input(&value) {
            spawn_local(async move {
                ctrl.run_search(ticket).await;
            });
        }
    };

    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" {
            set_query.set(String::new());
            // An empty query supersedes any pending search and hides results
            ctx.controller().search_input("");
        }
    };

    let visible = move || store.search().read().visible;
    let no_results = move || store.search().read().results.is_empty();

    view! {
        <div class="menu-search">
            <input
                type="search"
                id="menu-search"
                placeholder="Search the menu..."
                autocomplete="off"
                prop:value=move || query.get()
                on:input=on_input
                on:keydown=on_keydown
            />
            <Show when=visible>
                <div id="search-results" class="search-results">
                    <Show when=no_results>
                        <div class="search-empty">"No items found"</div>
                    </Show>
                    <For
                        each=move || store.search().read().results.clone()
                        key=|item| item.id
                        children=move |item| view! { <MenuItemRow item=item /> }
                    />
                </div>
            </Show>
        </div>
    }
}
