use std::cmp::Reverse;
use crate::client::cart;
use crate::client::model::cart::CartLine;
use crate::client::model::menu_item::{MenuItem, MenuItemDraft, MenuItemId};
use crate::client::model::order::{Order, OrderId, OrderStatus};
use crate::client::util::time;

pub(crate) const ALL_CATEGORIES: &str = "All";
const RECENT_COMPLETED_LIMIT: usize = 5;

#[derive(Debug)]
pub(crate) struct MenuView {
    pub categories: Vec<String>,
    pub selected: String,
    pub items: Vec<MenuItem>,
    pub cart_count: u32,
}

#[derive(Debug, PartialEq)]
pub(crate) struct CartRow {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub quantity: u32,
    pub subtotal: f64,
}

#[derive(Debug)]
pub(crate) struct CartView {
    pub rows: Vec<CartRow>,
    pub total: f64,
    pub cart_count: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OrderAction {
    MarkReady,
    MarkReceived,
}

impl OrderAction {
    pub fn target(self) -> OrderStatus {
        match self {
            Self::MarkReady => OrderStatus::Ready,
            Self::MarkReceived => OrderStatus::Completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Audience {
    Customer,
    Staff,
}

#[derive(Debug, PartialEq)]
pub(crate) struct OrderCard {
    pub id: OrderId,
    pub status: OrderStatus,
    pub customer: Option<String>,
    pub items_summary: String,
    pub total_price: f64,
    pub time: String,
    pub action: Option<OrderAction>,
}

#[derive(Debug)]
pub(crate) struct HistoryView {
    pub current: Vec<OrderCard>,
    pub past: Vec<OrderCard>,
    pub cart_count: u32,
}

#[derive(Debug)]
pub(crate) struct StaffOrdersView {
    pub active: Vec<OrderCard>,
    pub completed: Vec<OrderCard>,
}

#[derive(Debug)]
pub(crate) struct StaffMenuView {
    pub items: Vec<MenuItem>,
}

#[derive(Debug)]
pub(crate) struct ItemFormView {
    pub draft: Option<MenuItemDraft>,
}

impl ItemFormView {
    pub fn title(&self) -> &'static str {
        match self.draft {
            Some(_) => "Edit Item",
            None => "Add Item",
        }
    }
}

/// Distinct categories in first-seen order.
pub(crate) fn categories(items: &[MenuItem]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

/// `All` keeps everything, any other value keeps exact matches only.
pub(crate) fn filter_by_category<'a>(items: &'a [MenuItem], category: &str) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| category == ALL_CATEGORIES || item.category == category)
        .collect()
}

pub(crate) fn render_menu(items: &[MenuItem], category: &str, lines: &[CartLine]) -> MenuView {
    MenuView {
        categories: categories(items),
        selected: category.to_string(),
        items: filter_by_category(items, category)
            .into_iter()
            .filter(|item| item.available)
            .cloned()
            .collect(),
        cart_count: cart::item_count(lines),
    }
}

pub(crate) fn render_cart(lines: &[CartLine]) -> CartView {
    CartView {
        rows: lines
            .iter()
            .map(|line| CartRow {
                id: line.item.id,
                name: line.item.name.clone(),
                price: line.item.price,
                quantity: line.quantity,
                subtotal: line.subtotal(),
            })
            .collect(),
        total: cart::total(lines),
        cart_count: cart::item_count(lines),
    }
}

pub(crate) fn render_order_card(order: &Order, audience: Audience) -> OrderCard {
    let items_summary = order
        .order_items
        .iter()
        .map(|item| format!("{} (x{})", item.menu_item.name, item.quantity))
        .collect::<Vec<_>>()
        .join(", ");
    let (time, action, customer) = match audience {
        Audience::Customer => (
            time::format_timestamp(&order.order_time),
            (order.status == OrderStatus::Ready).then_some(OrderAction::MarkReceived),
            None,
        ),
        Audience::Staff => (
            time::format_clock(&order.order_time),
            (order.status == OrderStatus::Pending).then_some(OrderAction::MarkReady),
            order.user.as_ref().map(|u| u.username.clone()),
        ),
    };
    OrderCard {
        id: order.id,
        status: order.status.clone(),
        customer,
        items_summary,
        total_price: order.total_price,
        time,
        action,
    }
}

/// Newest first, split into orders still in progress and finished ones.
pub(crate) fn render_history(mut orders: Vec<Order>, lines: &[CartLine]) -> HistoryView {
    orders.sort_by_key(|order| Reverse(time::parse_order_time(&order.order_time)));
    let (past, current): (Vec<_>, Vec<_>) = orders.iter().partition(|order| order.status.is_terminal());
    HistoryView {
        current: current.into_iter().map(|o| render_order_card(o, Audience::Customer)).collect(),
        past: past.into_iter().map(|o| render_order_card(o, Audience::Customer)).collect(),
        cart_count: cart::item_count(lines),
    }
}

/// Oldest first for the active board, the most recent few finished orders newest first.
pub(crate) fn render_staff_orders(mut orders: Vec<Order>) -> StaffOrdersView {
    orders.sort_by_key(|order| time::parse_order_time(&order.order_time));
    let (active, done): (Vec<_>, Vec<_>) = orders.iter().partition(|order| order.status.is_active());
    StaffOrdersView {
        active: active.into_iter().map(|o| render_order_card(o, Audience::Staff)).collect(),
        completed: done
            .into_iter()
            .rev()
            .take(RECENT_COMPLETED_LIMIT)
            .map(|o| render_order_card(o, Audience::Staff))
            .collect(),
    }
}
