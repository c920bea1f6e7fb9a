//! Dashboard Controller
//!
//! Turns user gestures into requests and reconciles the responses into the
//! view model. All failures end as a toast; nothing propagates further.
//!
//! Overlapping cart mutations are not sequenced: each response carries the
//! server's authoritative count and total, so whichever lands last wins and
//! the next action or poll corrects any transient drift.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::logging::{error, log, warn};
use leptos::prelude::Write;

use crate::api::{accept, CartAction, DashboardApi};
use crate::config::DashboardConfig;
use crate::debounce::Debouncer;
use crate::error::DashboardError;
use crate::host::PageHost;
use crate::state::{AppStore, DashboardState, ToastKind};

const CONFIRM_REMOVE: &str = "Remove this item from your cart?";
const CONFIRM_CLEAR: &str = "Remove all items from your cart?";
const CONFIRM_CANCEL: &str = "Are you sure you want to cancel this order?";

/// Where the controller writes reconciled state
pub trait ViewSink {
    fn apply<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R;
}

impl ViewSink for AppStore {
    fn apply<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        let mut state = self.write();
        f(&mut *state)
    }
}

impl ViewSink for Rc<RefCell<DashboardState>> {
    fn apply<R>(&self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}

/// What an action ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted and the view was updated
    Applied,
    /// Transport or server failure, surfaced as a toast
    Failed,
    /// The user declined the confirmation prompt; nothing was sent
    Declined,
    /// No request was needed (short query, superseded keystroke)
    Skipped,
}

/// Controller tunables taken from [`DashboardConfig`]
#[derive(Debug, Clone)]
pub struct ControllerSettings {
    pub search_debounce: Duration,
    pub min_query_len: usize,
    pub search_result_limit: usize,
    pub reload_delay: Duration,
    pub show_sales_chart: bool,
}

impl From<&DashboardConfig> for ControllerSettings {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            search_debounce: config.search_debounce(),
            min_query_len: config.min_query_len,
            search_result_limit: config.search_result_limit,
            reload_delay: config.reload_delay(),
            show_sales_chart: config.show_sales_chart,
        }
    }
}

/// A keystroke that survived the length check and may become a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    query: String,
}

pub struct DashboardController<A, H, V> {
    api: Rc<A>,
    host: Rc<H>,
    view: V,
    settings: Rc<ControllerSettings>,
    debouncer: Debouncer,
}

impl<A, H, V: Clone> Clone for DashboardController<A, H, V> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            host: self.host.clone(),
            view: self.view.clone(),
            settings: self.settings.clone(),
            debouncer: self.debouncer.clone(),
        }
    }
}

impl<A, H, V> DashboardController<A, H, V>
where
    A: DashboardApi,
    H: PageHost,
    V: ViewSink,
{
    pub fn new(api: A, host: H, view: V, settings: ControllerSettings) -> Self {
        Self {
            api: Rc::new(api),
            host: Rc::new(host),
            view,
            settings: Rc::new(settings),
            debouncer: Debouncer::new(),
        }
    }

    fn toast_error(&self, tag: &str, err: &DashboardError) {
        error!("[{}] {}", tag, err);
        let message = err.user_message();
        self.view.apply(|s| s.push_toast(ToastKind::Error, message));
    }

    fn toast_success(&self, message: Option<String>, fallback: &str) {
        let message = message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| fallback.to_string());
        self.view.apply(|s| s.push_toast(ToastKind::Success, message));
    }

    // ========================
    // Cart
    // ========================

    /// Add `quantity` of a menu item. The item's loading flag is cleared on
    /// every path.
    pub async fn add_to_cart(&self, menu_item_id: u32, quantity: u32) -> ActionOutcome {
        self.view.apply(|s| s.begin_adding(menu_item_id));
        let result = self.api.add_to_cart(menu_item_id, quantity).await.and_then(accept);

        let outcome = match result {
            Ok(resp) => {
                log!("[CART] Added item {} x{}, cart_count={:?}", menu_item_id, quantity, resp.cart_count);
                self.view.apply(|s| s.apply_cart_added(&resp));
                self.toast_success(resp.message, "Item added to cart");
                ActionOutcome::Applied
            }
            Err(err) => {
                self.toast_error("CART", &err);
                ActionOutcome::Failed
            }
        };

        self.view.apply(|s| s.finish_adding(menu_item_id));
        outcome
    }

    pub async fn update_cart_quantity(&self, menu_item_id: u32, action: CartAction) -> ActionOutcome {
        match self.api.update_cart(menu_item_id, action).await.and_then(accept) {
            Ok(resp) => {
                log!("[CART] Item {} {:?} -> {:?}", menu_item_id, action, resp.new_quantity);
                self.view.apply(|s| s.apply_cart_updated(menu_item_id, &resp));
                ActionOutcome::Applied
            }
            Err(err) => {
                self.toast_error("CART", &err);
                ActionOutcome::Failed
            }
        }
    }

    pub async fn remove_from_cart(&self, menu_item_id: u32) -> ActionOutcome {
        if !self.host.confirm(CONFIRM_REMOVE) {
            return ActionOutcome::Declined;
        }
        match self.api.remove_from_cart(menu_item_id).await.and_then(accept) {
            Ok(resp) => {
                log!("[CART] Removed item {}", menu_item_id);
                self.view.apply(|s| s.apply_cart_removed(menu_item_id, &resp));
                ActionOutcome::Applied
            }
            Err(err) => {
                self.toast_error("CART", &err);
                ActionOutcome::Failed
            }
        }
    }

    pub async fn clear_cart(&self) -> ActionOutcome {
        if !self.host.confirm(CONFIRM_CLEAR) {
            return ActionOutcome::Declined;
        }
        match self.api.clear_cart().await.and_then(accept) {
            Ok(resp) => {
                self.view.apply(|s| s.apply_cart_cleared(&resp));
                self.toast_success(resp.message, "Cart cleared");
                ActionOutcome::Applied
            }
            Err(err) => {
                self.toast_error("CART", &err);
                ActionOutcome::Failed
            }
        }
    }

    pub async fn refresh_cart_count(&self) -> ActionOutcome {
        match self.api.cart_count().await {
            Ok(count) => {
                self.view.apply(|s| s.set_cart_count(count));
                ActionOutcome::Applied
            }
            Err(err) => {
                self.toast_error("CART", &err);
                ActionOutcome::Failed
            }
        }
    }

    // ========================
    // Orders
    // ========================

    /// On success the page reloads after the configured delay to pick up
    /// server-rendered changes.
    pub async fn update_order_status(&self, order_id: u32, status: &str) -> ActionOutcome {
        match self.api.update_order_status(order_id, status).await.and_then(accept) {
            Ok(resp) => {
                log!("[ORDERS] Order {} -> {}", order_id, status);
                self.toast_success(resp.message, "Order status updated");
                self.host.reload_after(self.settings.reload_delay);
                ActionOutcome::Applied
            }
            Err(err) => {
                self.toast_error("ORDERS", &err);
                ActionOutcome::Failed
            }
        }
    }

    pub async fn cancel_order(&self, order_number: &str) -> ActionOutcome {
        if !self.host.confirm(CONFIRM_CANCEL) {
            return ActionOutcome::Declined;
        }
        match self.api.cancel_order(order_number).await.and_then(accept) {
            Ok(resp) => {
                log!("[ORDERS] Cancelled order {}", order_number);
                self.toast_success(resp.message, "Order cancelled");
                self.host.reload_after(self.settings.reload_delay);
                ActionOutcome::Applied
            }
            Err(err) => {
                self.toast_error("ORDERS", &err);
                ActionOutcome::Failed
            }
        }
    }

    // ========================
    // Search
    // ========================

    /// Register a keystroke in the search box.
    ///
    /// Every keystroke supersedes pending searches. Queries under the
    /// minimum length hide the results panel and yield no ticket.
    pub fn search_input(&self, query: &str) -> Option<SearchTicket> {
        let generation = self.debouncer.bump();
        let query = query.trim();
        if query.chars().count() < self.settings.min_query_len {
            self.view.apply(|s| s.hide_search());
            return None;
        }
        Some(SearchTicket {
            generation,
            query: query.to_string(),
        })
    }

    /// Wait out the quiet period, then search if no newer keystroke came in
    pub async fn run_search(&self, ticket: SearchTicket) -> ActionOutcome {
        self.host.sleep(self.settings.search_debounce).await;
        if !self.debouncer.is_latest(ticket.generation) {
            return ActionOutcome::Skipped;
        }

        let result = self.api.search_menu(&ticket.query).await;
        if !self.debouncer.is_latest(ticket.generation) {
            log!("[SEARCH] Dropping stale results for {:?}", ticket.query);
            return ActionOutcome::Skipped;
        }

        match result {
            Ok(items) => {
                let limit = self.settings.search_result_limit;
                self.view.apply(|s| s.show_search_results(items, limit));
                ActionOutcome::Applied
            }
            Err(err) => {
                self.toast_error("SEARCH", &err);
                ActionOutcome::Failed
            }
        }
    }

    // ========================
    // Polled widgets
    // ========================

    /// Report a poll failure as a toast once per failure streak
    fn poll_error(&self, source: &str, err: &DashboardError) {
        warn!("[POLL] {} failed: {}", source, err);
        let message = err.user_message();
        self.view.apply(|s| {
            if s.poll_failed(source) {
                s.push_toast(ToastKind::Error, message);
            }
        });
    }

    pub async fn refresh_notifications(&self) -> ActionOutcome {
        match self.api.notifications().await {
            Ok(notifications) => {
                self.view.apply(|s| {
                    s.poll_recovered("notifications");
                    s.replace_notifications(notifications);
                });
                ActionOutcome::Applied
            }
            Err(err) => {
                self.poll_error("notifications", &err);
                ActionOutcome::Failed
            }
        }
    }

    pub async fn refresh_stats(&self) -> ActionOutcome {
        match self.api.order_stats().await {
            Ok(stats) => {
                self.view.apply(|s| {
                    s.poll_recovered("stats");
                    s.apply_stats(&stats);
                });
                ActionOutcome::Applied
            }
            Err(err) => {
                self.poll_error("stats", &err);
                ActionOutcome::Failed
            }
        }
    }

    pub async fn refresh_sales_chart(&self) -> ActionOutcome {
        if !self.settings.show_sales_chart {
            return ActionOutcome::Skipped;
        }
        match self.api.sales_chart().await {
            Ok(chart) => {
                self.view.apply(|s| {
                    s.poll_recovered("sales_chart");
                    s.replace_sales_chart(chart);
                });
                ActionOutcome::Applied
            }
            Err(err) => {
                self.poll_error("sales_chart", &err);
                ActionOutcome::Failed
            }
        }
    }

    /// One poll tick: every polled widget, each independent of the others
    pub async fn poll_all(&self) {
        self.refresh_notifications().await;
        self.refresh_stats().await;
        self.refresh_sales_chart().await;
    }

    pub fn dismiss_toast(&self, id: u64) {
        self.view.apply(|s| s.dismiss_toast(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::VecDeque;

    use async_trait::async_trait;
    use serde_json::json;

    use crate::api::OrderStats;
    use crate::error::GENERIC_FAILURE;
    use crate::models::{Amount, CartLine, CartResponse, MenuItem, Notification, SalesChart, StatusResponse};
    use crate::state::CartState;

    /// Canned responses plus a log of every call that reached the network
    #[derive(Default)]
    struct FakeApi {
        calls: RefCell<Vec<String>>,
        cart: RefCell<VecDeque<Result<CartResponse, DashboardError>>>,
        status: RefCell<VecDeque<Result<StatusResponse, DashboardError>>>,
        search: RefCell<VecDeque<Result<Vec<MenuItem>, DashboardError>>>,
        notifications: RefCell<VecDeque<Result<Vec<Notification>, DashboardError>>>,
        stats: RefCell<VecDeque<Result<OrderStats, DashboardError>>>,
        /// Runs while a search request is in flight
        during_search: RefCell<Option<Box<dyn Fn()>>>,
    }

    impl FakeApi {
        fn record(&self, call: String) {
            self.calls.borrow_mut().push(call);
        }

        fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn next<T>(queue: &RefCell<VecDeque<Result<T, DashboardError>>>) -> Result<T, DashboardError> {
            queue
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(DashboardError::Network("no canned response".into())))
        }
    }

    #[async_trait(?Send)]
    impl DashboardApi for FakeApi {
        async fn add_to_cart(&self, id: u32, quantity: u32) -> Result<CartResponse, DashboardError> {
            self.record(format!("add {} {}", id, quantity));
            Self::next(&self.cart)
        }
        async fn update_cart(&self, id: u32, action: CartAction) -> Result<CartResponse, DashboardError> {
            self.record(format!("update {} {:?}", id, action));
            Self::next(&self.cart)
        }
        async fn remove_from_cart(&self, id: u32) -> Result<CartResponse, DashboardError> {
            self.record(format!("remove {}", id));
            Self::next(&self.cart)
        }
        async fn clear_cart(&self) -> Result<CartResponse, DashboardError> {
            self.record("clear".into());
            Self::next(&self.cart)
        }
        async fn cart_count(&self) -> Result<u32, DashboardError> {
            self.record("count".into());
            Self::next(&self.cart).map(|r| r.cart_count.unwrap_or(0))
        }
        async fn update_order_status(&self, id: u32, status: &str) -> Result<StatusResponse, DashboardError> {
            self.record(format!("status {} {}", id, status));
            Self::next(&self.status)
        }
        async fn cancel_order(&self, number: &str) -> Result<StatusResponse, DashboardError> {
            self.record(format!("cancel {}", number));
            Self::next(&self.status)
        }
        async fn search_menu(&self, query: &str) -> Result<Vec<MenuItem>, DashboardError> {
            self.record(format!("search {}", query));
            if let Some(hook) = self.during_search.borrow().as_ref() {
                hook();
            }
            Self::next(&self.search)
        }
        async fn notifications(&self) -> Result<Vec<Notification>, DashboardError> {
            self.record("notifications".into());
            Self::next(&self.notifications)
        }
        async fn order_stats(&self) -> Result<OrderStats, DashboardError> {
            self.record("stats".into());
            Self::next(&self.stats)
        }
        async fn sales_chart(&self) -> Result<SalesChart, DashboardError> {
            self.record("sales_chart".into());
            Ok(SalesChart::default())
        }
    }

    #[derive(Default)]
    struct FakeHost {
        answer: Cell<bool>,
        prompts: RefCell<Vec<String>>,
        reloads: RefCell<Vec<Duration>>,
        sleeps: RefCell<Vec<Duration>>,
    }

    #[async_trait(?Send)]
    impl PageHost for FakeHost {
        fn confirm(&self, message: &str) -> bool {
            self.prompts.borrow_mut().push(message.to_string());
            self.answer.get()
        }
        fn reload_after(&self, delay: Duration) {
            self.reloads.borrow_mut().push(delay);
        }
        async fn sleep(&self, duration: Duration) {
            self.sleeps.borrow_mut().push(duration);
        }
    }

    type TestController = DashboardController<FakeApi, FakeHost, Rc<RefCell<DashboardState>>>;

    fn controller(api: FakeApi, host: FakeHost, state: DashboardState) -> (TestController, Rc<RefCell<DashboardState>>) {
        let view = Rc::new(RefCell::new(state));
        let settings = ControllerSettings::from(&DashboardConfig::default());
        (DashboardController::new(api, host, view.clone(), settings), view)
    }

    fn cart_state() -> DashboardState {
        let mut state = DashboardState::default();
        state.cart = CartState {
            lines: vec![CartLine { menu_item_id: 1, name: "Ndole".into(), unit_price: None, quantity: 2 }],
            count: 2,
            total: Amount(5000.0),
            lines_stale: false,
        };
        state
    }

    fn dish(id: u32) -> MenuItem {
        MenuItem { id, name: format!("Dish {}", id), price: Amount(1500.0), image: None }
    }

    #[test]
    fn test_add_to_cart_success_updates_badge_and_toasts() {
        let api = FakeApi::default();
        api.cart.borrow_mut().push_back(Ok(CartResponse {
            success: true,
            message: Some("Item added to cart".into()),
            cart_count: Some(3),
            ..Default::default()
        }));
        let (ctrl, view) = controller(api, FakeHost::default(), cart_state());

        assert_eq!(tokio_test::block_on(ctrl.add_to_cart(1, 1)), ActionOutcome::Applied);

        let state = view.borrow();
        assert_eq!(state.cart.count, 3);
        // Lines and total were not reported, so the panel must not show them as current
        assert!(state.cart.lines_stale);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].kind, ToastKind::Success);
        assert!(state.adding.is_empty());
    }

    #[test]
    fn test_add_to_cart_rejection_leaves_cart_untouched() {
        let api = FakeApi::default();
        api.cart.borrow_mut().push_back(Ok(CartResponse {
            success: false,
            message: Some("Out of stock".into()),
            ..Default::default()
        }));
        let (ctrl, view) = controller(api, FakeHost::default(), cart_state());
        let before = view.borrow().cart.clone();

        assert_eq!(tokio_test::block_on(ctrl.add_to_cart(1, 1)), ActionOutcome::Failed);

        let state = view.borrow();
        assert_eq!(state.cart, before);
        assert_eq!(state.toasts[0].kind, ToastKind::Error);
        assert_eq!(state.toasts[0].message, "Out of stock");
        assert!(state.adding.is_empty());
    }

    #[test]
    fn test_add_to_cart_network_error_uses_fallback() {
        let api = FakeApi::default();
        api.cart.borrow_mut().push_back(Err(DashboardError::Network("HTTP 502".into())));
        let (ctrl, view) = controller(api, FakeHost::default(), cart_state());

        tokio_test::block_on(ctrl.add_to_cart(1, 1));

        let state = view.borrow();
        assert_eq!(state.toasts[0].message, GENERIC_FAILURE);
        assert_eq!(state.cart.count, 2);
        assert!(state.adding.is_empty());
    }

    #[test]
    fn test_cart_failures_never_mutate_cart() {
        let api = FakeApi::default();
        for _ in 0..3 {
            api.cart.borrow_mut().push_back(Ok(CartResponse {
                success: false,
                message: Some("nope".into()),
                cart_count: Some(99),
                cart_total: Some(Amount(1.0)),
                new_quantity: Some(0),
            }));
        }
        let host = FakeHost::default();
        host.answer.set(true);
        let (ctrl, view) = controller(api, host, cart_state());
        let before = view.borrow().cart.clone();

        tokio_test::block_on(async {
            ctrl.add_to_cart(1, 1).await;
            ctrl.update_cart_quantity(1, CartAction::Increase).await;
            ctrl.remove_from_cart(1).await;
        });

        let state = view.borrow();
        assert_eq!(state.cart, before);
        assert_eq!(state.toasts.len(), 3);
    }

    #[test]
    fn test_update_quantity_uses_server_values() {
        let api = FakeApi::default();
        api.cart.borrow_mut().push_back(Ok(CartResponse {
            success: true,
            new_quantity: Some(3),
            cart_count: Some(3),
            cart_total: Some(Amount(7500.0)),
            ..Default::default()
        }));
        let (ctrl, view) = controller(api, FakeHost::default(), cart_state());

        tokio_test::block_on(ctrl.update_cart_quantity(1, CartAction::Increase));

        let state = view.borrow();
        assert_eq!(state.cart.line(1).unwrap().quantity, 3);
        assert_eq!(state.cart.total, Amount(7500.0));
        assert_eq!(ctrl.api.calls(), vec!["update 1 Increase"]);
    }

    #[test]
    fn test_declined_remove_and_cancel_send_nothing() {
        let host = FakeHost::default();
        host.answer.set(false);
        let (ctrl, view) = controller(FakeApi::default(), host, cart_state());

        let outcomes = tokio_test::block_on(async {
            (ctrl.remove_from_cart(1).await, ctrl.cancel_order("ORD-1").await, ctrl.clear_cart().await)
        });

        assert_eq!(outcomes, (ActionOutcome::Declined, ActionOutcome::Declined, ActionOutcome::Declined));
        assert!(ctrl.api.calls().is_empty());
        assert_eq!(ctrl.host.prompts.borrow().len(), 3);
        assert_eq!(view.borrow().cart.lines.len(), 1);
        assert!(view.borrow().toasts.is_empty());
    }

    #[test]
    fn test_confirmed_remove_drops_line() {
        let api = FakeApi::default();
        api.cart.borrow_mut().push_back(Ok(CartResponse {
            success: true,
            cart_count: Some(0),
            cart_total: Some(Amount(0.0)),
            ..Default::default()
        }));
        let host = FakeHost::default();
        host.answer.set(true);
        let (ctrl, view) = controller(api, host, cart_state());

        assert_eq!(tokio_test::block_on(ctrl.remove_from_cart(1)), ActionOutcome::Applied);
        assert!(view.borrow().cart.lines.is_empty());
        assert_eq!(view.borrow().cart.count, 0);
    }

    #[test]
    fn test_confirmed_clear_empties_cart() {
        let api = FakeApi::default();
        api.cart.borrow_mut().push_back(Ok(CartResponse { success: true, ..Default::default() }));
        let host = FakeHost::default();
        host.answer.set(true);
        let (ctrl, view) = controller(api, host, cart_state());

        assert_eq!(tokio_test::block_on(ctrl.clear_cart()), ActionOutcome::Applied);
        let state = view.borrow();
        assert!(state.cart.lines.is_empty());
        assert_eq!(state.cart.count, 0);
        assert_eq!(state.toasts[0].message, "Cart cleared");
    }

    #[test]
    fn test_sales_chart_skipped_when_hidden() {
        let (ctrl, _view) = controller(FakeApi::default(), FakeHost::default(), DashboardState::default());
        assert_eq!(tokio_test::block_on(ctrl.refresh_sales_chart()), ActionOutcome::Skipped);
        assert!(ctrl.api.calls().is_empty());
    }

    #[test]
    fn test_status_update_reloads_only_on_success() {
        let api = FakeApi::default();
        api.status.borrow_mut().push_back(Ok(StatusResponse { success: true, message: None }));
        api.status.borrow_mut().push_back(Ok(StatusResponse {
            success: false,
            message: Some("Permission denied".into()),
        }));
        let (ctrl, view) = controller(api, FakeHost::default(), DashboardState::default());

        tokio_test::block_on(async {
            assert_eq!(ctrl.update_order_status(5, "READY").await, ActionOutcome::Applied);
            assert_eq!(ctrl.update_order_status(5, "READY").await, ActionOutcome::Failed);
        });

        assert_eq!(*ctrl.host.reloads.borrow(), vec![Duration::from_secs(1)]);
        let state = view.borrow();
        assert_eq!(state.toasts[1].message, "Permission denied");
    }

    #[test]
    fn test_confirmed_cancel_reloads() {
        let api = FakeApi::default();
        api.status.borrow_mut().push_back(Ok(StatusResponse { success: true, message: Some("Cancelled".into()) }));
        let host = FakeHost::default();
        host.answer.set(true);
        let (ctrl, _view) = controller(api, host, DashboardState::default());

        assert_eq!(tokio_test::block_on(ctrl.cancel_order("ORD-7")), ActionOutcome::Applied);
        assert_eq!(ctrl.api.calls(), vec!["cancel ORD-7"]);
        assert_eq!(ctrl.host.reloads.borrow().len(), 1);
    }

    #[test]
    fn test_short_query_hides_results_without_request() {
        let (ctrl, view) = controller(FakeApi::default(), FakeHost::default(), DashboardState::default());
        view.borrow_mut().show_search_results(vec![dish(1)], 5);

        assert!(ctrl.search_input(" p ").is_none());

        assert!(ctrl.api.calls().is_empty());
        assert!(!view.borrow().search.visible);
        assert!(view.borrow().search.results.is_empty());
    }

    #[test]
    fn test_rapid_keystrokes_issue_one_search() {
        let api = FakeApi::default();
        api.search.borrow_mut().push_back(Ok((1..=7).map(dish).collect()));
        let (ctrl, view) = controller(api, FakeHost::default(), DashboardState::default());

        // Three keystrokes inside one quiet period
        let tickets: Vec<_> = ["pi", "piz", "pizza"].iter().filter_map(|q| ctrl.search_input(q)).collect();
        let outcomes: Vec<_> = tokio_test::block_on(async {
            let mut out = Vec::new();
            for ticket in tickets {
                out.push(ctrl.run_search(ticket).await);
            }
            out
        });

        assert_eq!(outcomes, vec![ActionOutcome::Skipped, ActionOutcome::Skipped, ActionOutcome::Applied]);
        assert_eq!(ctrl.api.calls(), vec!["search pizza"]);
        assert_eq!(*ctrl.host.sleeps.borrow(), vec![Duration::from_millis(300); 3]);
        assert_eq!(view.borrow().search.results.len(), 5);
    }

    #[test]
    fn test_short_query_supersedes_pending_search() {
        let (ctrl, _view) = controller(FakeApi::default(), FakeHost::default(), DashboardState::default());

        let pending = ctrl.search_input("rice").unwrap();
        assert!(ctrl.search_input("r").is_none());

        assert_eq!(tokio_test::block_on(ctrl.run_search(pending)), ActionOutcome::Skipped);
        assert!(ctrl.api.calls().is_empty());
    }

    #[test]
    fn test_response_after_newer_keystroke_is_dropped() {
        let api = FakeApi::default();
        api.search.borrow_mut().push_back(Ok(vec![dish(7), dish(8)]));
        let (ctrl, view) = controller(api, FakeHost::default(), DashboardState::default());
        view.borrow_mut().show_search_results(vec![dish(1)], 5);

        let ticket = ctrl.search_input("rice").unwrap();
        // The user keeps typing while the request is on the wire
        let debouncer = ctrl.debouncer.clone();
        *ctrl.api.during_search.borrow_mut() = Some(Box::new(move || {
            debouncer.bump();
        }));

        assert_eq!(tokio_test::block_on(ctrl.run_search(ticket)), ActionOutcome::Skipped);
        assert_eq!(ctrl.api.calls(), vec!["search rice"]);
        let state = view.borrow();
        assert_eq!(state.search.results, vec![dish(1)]);
        assert!(state.toasts.is_empty());
    }

    #[test]
    fn test_poll_replaces_notifications_and_updates_stats() {
        let note = |title: &str| Notification {
            kind: Some("order_update".into()),
            title: title.into(),
            message: String::new(),
            url: "/orders/".into(),
            time: "09:30".into(),
        };
        let api = FakeApi::default();
        api.notifications.borrow_mut().push_back(Ok(vec![note("a"), note("b")]));
        api.notifications.borrow_mut().push_back(Ok(vec![note("c")]));
        api.stats
            .borrow_mut()
            .push_back(Ok(serde_json::from_value(json!({"total": 10, "unknown": 1})).unwrap()));
        api.stats.borrow_mut().push_back(Ok(serde_json::from_value(json!({"pending": 4})).unwrap()));

        let state = DashboardState::from_config(&DashboardConfig::default());
        let (ctrl, view) = controller(api, FakeHost::default(), state);

        tokio_test::block_on(async {
            ctrl.poll_all().await;
            ctrl.poll_all().await;
        });

        let state = view.borrow();
        assert_eq!(state.notification_count, 1);
        assert_eq!(state.notifications[0].title, "c");
        assert_eq!(state.stats.get("total").map(String::as_str), Some("10"));
        assert_eq!(state.stats.get("pending").map(String::as_str), Some("4"));
        assert!(!state.stats.contains_key("unknown"));
        // Sales chart disabled by default
        assert!(!ctrl.api.calls().contains(&"sales_chart".to_string()));
    }

    #[test]
    fn test_failed_polls_toast_once_and_keep_content() {
        let api = FakeApi::default();
        api.notifications.borrow_mut().push_back(Ok(vec![Notification {
            kind: None,
            title: "Pending Orders".into(),
            message: "3 orders need attention".into(),
            url: "/orders/pending/".into(),
            time: "10:00".into(),
        }]));
        // Later ticks find the queue empty and fail
        let (ctrl, view) = controller(api, FakeHost::default(), DashboardState::default());

        tokio_test::block_on(async {
            ctrl.refresh_notifications().await;
            ctrl.refresh_notifications().await;
            ctrl.refresh_notifications().await;
        });

        let state = view.borrow();
        assert_eq!(state.notification_count, 1);
        assert_eq!(state.toasts.len(), 1);
        assert_eq!(state.toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_refresh_cart_count() {
        let api = FakeApi::default();
        api.cart.borrow_mut().push_back(Ok(CartResponse { cart_count: Some(4), ..Default::default() }));
        let (ctrl, view) = controller(api, FakeHost::default(), DashboardState::default());

        assert_eq!(tokio_test::block_on(ctrl.refresh_cart_count()), ActionOutcome::Applied);
        assert_eq!(view.borrow().cart.count, 4);
    }
}
