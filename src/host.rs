//! Page Host
//!
//! Browser facilities the controller needs besides the network: the
//! confirmation prompt, delayed reloads, and timers.

use std::time::Duration;

use async_trait::async_trait;
use leptos::logging::error;
use leptos::task::spawn_local;

#[async_trait(?Send)]
pub trait PageHost {
    /// Ask the user to confirm a destructive action
    fn confirm(&self, message: &str) -> bool;

    /// Reload the page after `delay` so server-rendered state shows up
    fn reload_after(&self, delay: Duration);

    async fn sleep(&self, duration: Duration);
}

/// [`PageHost`] backed by `window`
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserHost;

#[async_trait(?Send)]
impl PageHost for BrowserHost {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    fn reload_after(&self, delay: Duration) {
        spawn_local(async move {
            gloo_timers::future::sleep(delay).await;
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().reload() {
                    error!("[HOST] Reload failed: {:?}", e);
                }
            }
        });
    }

    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
