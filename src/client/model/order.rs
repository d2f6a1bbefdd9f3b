use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};
use crate::client::model::menu_item::{MenuItem, MenuItemId};
use crate::client::model::session::UserId;

pub(crate) type OrderId = i32;

/// Order lifecycle as the backend reports it.
///
/// `Received` is read as `Completed`, both name the single terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub(crate) enum OrderStatus {
    Pending,
    Ready,
    Completed,
    Other(String),
}

impl OrderStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "Pending",
            Self::Ready => "Ready",
            Self::Completed => "Completed",
            Self::Other(s) => s.as_str(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Still on the kitchen's board.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Pending | Self::Ready)
    }
}

impl From<String> for OrderStatus {
    fn from(s: String) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "pending" => Self::Pending,
            "ready" => Self::Ready,
            "completed" | "received" => Self::Completed,
            _ => Self::Other(s),
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    #[serde(default)]
    pub order_time: String,
    pub total_price: f64,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    pub user: Option<OrderUser>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderItem {
    pub menu_item: MenuItem,
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct OrderUser {
    pub username: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderRequest {
    pub user_id: UserId,
    /// menu item id to quantity
    pub cart_items: BTreeMap<MenuItemId, u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct StatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn received_is_the_terminal_state() {
        let status: OrderStatus = serde_json::from_str(r#""RECEIVED""#).unwrap();
        assert_eq!(status, OrderStatus::Completed);
        assert!(status.is_terminal());

        let status: OrderStatus = serde_json::from_str(r#""PENDING""#).unwrap();
        assert_eq!(status, OrderStatus::Pending);
        assert!(status.is_active());
    }

    #[test]
    fn unknown_status_is_kept_verbatim() {
        let status: OrderStatus = serde_json::from_str(r#""Cancelled""#).unwrap();
        assert_eq!(status, OrderStatus::Other("Cancelled".to_string()));
        assert!(!status.is_terminal());
        assert!(!status.is_active());
        assert_eq!(serde_json::to_string(&status).unwrap(), r#""Cancelled""#);
    }

    #[test]
    fn order_request_keys_items_by_id() {
        let request = OrderRequest {
            user_id: 7,
            cart_items: BTreeMap::from([(1, 2), (4, 1)]),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"userId":7,"cartItems":{"1":2,"4":1}}"#
        );
    }

    #[test]
    fn order_parses_backend_shape() {
        let order: Order = serde_json::from_str(r#"{
            "id": 12,
            "user": {"id": 7, "username": "asha", "role": "CUSTOMER"},
            "orderTime": "2024-03-02T18:45:10.123",
            "status": "Ready",
            "totalPrice": 250.0,
            "orderItems": [
                {"id": 1, "menuItem": {"id": 1, "name": "Paneer Tikka", "price": 100.0, "prepTime": 15, "category": "Starters", "imageUrl": null, "available": true}, "quantity": 2, "price": 100.0, "subtotal": 0.0}
            ]
        }"#).unwrap();
        assert_eq!(order.status, OrderStatus::Ready);
        assert_eq!(order.order_items[0].menu_item.name, "Paneer Tikka");
        assert_eq!(order.user.unwrap().username, "asha");
    }
}
