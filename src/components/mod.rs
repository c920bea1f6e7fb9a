//! UI Components
//!
//! Leptos components for the dashboard widgets.

mod add_to_cart_button;
mod cart_badge;
mod cart_panel;
mod menu_grid;
mod menu_search;
mod notification_bell;
mod order_table;
mod sales_chart_panel;
mod stats_panel;
mod toast_stack;

pub use add_to_cart_button::AddToCartButton;
pub use cart_badge::CartBadge;
pub use cart_panel::CartPanel;
pub use menu_grid::{MenuGrid, MenuItemRow};
pub use menu_search::MenuSearch;
pub use notification_bell::NotificationBell;
pub use order_table::OrderTable;
pub use sales_chart_panel::SalesChartPanel;
pub use stats_panel::StatsPanel;
pub use toast_stack::ToastStack;
