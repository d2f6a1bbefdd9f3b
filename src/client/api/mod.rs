//! Typed calls against the ordering backend.

#[cfg(test)]
pub(crate) mod mock;
pub(crate) mod transport;

use log::{debug, warn};
use reqwest::StatusCode;
use crate::client::error::ClientError;
use crate::client::model::auth::{AuthenticationRequest, AuthenticationResponse, RegistrationRequest};
use crate::client::model::menu_item::{MenuItem, MenuItemDraft, MenuItemId};
use crate::client::model::order::{Order, OrderId, OrderRequest, OrderStatus, StatusUpdate};
use crate::client::model::session::{Role, UserId};
use crate::client::api::transport::{ApiRequest, ApiResponse, Transport};

pub(crate) struct Api<T: Transport> {
    transport: T,
}

impl<T: Transport> Api<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send with the bearer token. 401 and 403 mean the session is no longer usable.
    async fn authorized(&self, request: ApiRequest, token: &str) -> Result<ApiResponse, ClientError> {
        let path = request.path.clone();
        let res = self.transport.send(request.bearer(token)).await?;
        match res.status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                warn!("{} refused the session token with {}", path, res.status);
                Err(ClientError::Unauthorized)
            }
            _ => Ok(res),
        }
    }

    pub async fn authenticate(&self, username: &str, password: &str) -> Result<AuthenticationResponse, ClientError> {
        let req = ApiRequest::post("/api/authenticate", &AuthenticationRequest { username, password })?;
        let res = self.transport.send(req).await?;
        if !res.status.is_success() {
            debug!("authentication refused with {}", res.status);
            return Err(ClientError::InvalidCredentials);
        }
        res.json()
    }

    pub async fn register(&self, username: &str, password: &str, role: Role) -> Result<(), ClientError> {
        let req = ApiRequest::post("/api/users/register", &RegistrationRequest { username, password, role })?;
        let res = self.transport.send(req).await?;
        match res.status {
            StatusCode::CREATED => Ok(()),
            StatusCode::CONFLICT => Err(ClientError::UsernameTaken),
            _ => Err(res.reject("An unexpected error occurred.")),
        }
    }

    pub async fn menu_items(&self, token: &str) -> Result<Vec<MenuItem>, ClientError> {
        self.authorized(ApiRequest::get("/api/menu-items"), token)
            .await?
            .ok_or_reject("Failed to fetch menu items.")?
            .json()
    }

    pub async fn menu_item(&self, token: &str, id: MenuItemId) -> Result<MenuItem, ClientError> {
        self.authorized(ApiRequest::get(format!("/api/menu-items/{id}")), token)
            .await?
            .ok_or_reject("Could not fetch item details.")?
            .json()
    }

    pub async fn create_menu_item(&self, token: &str, draft: &MenuItemDraft) -> Result<(), ClientError> {
        let req = ApiRequest::post("/api/menu-items", draft)?;
        self.authorized(req, token)
            .await?
            .ok_or_reject("Failed to save item.")
            .map(|_| ())
    }

    pub async fn update_menu_item<B>(&self, token: &str, id: MenuItemId, item: &B) -> Result<(), ClientError>
    where
        B: serde::Serialize,
    {
        let req = ApiRequest::put(format!("/api/menu-items/{id}"), item)?;
        self.authorized(req, token)
            .await?
            .ok_or_reject("Failed to save item.")
            .map(|_| ())
    }

    /// Every order, for the staff console.
    pub async fn orders(&self, token: &str) -> Result<Vec<Order>, ClientError> {
        self.authorized(ApiRequest::get("/api/orders"), token)
            .await?
            .ok_or_reject("Failed to fetch orders.")?
            .json()
    }

    pub async fn orders_for_user(&self, token: &str, user_id: UserId) -> Result<Vec<Order>, ClientError> {
        self.authorized(ApiRequest::get(format!("/api/orders/user/{user_id}")), token)
            .await?
            .ok_or_reject("Failed to fetch order history.")?
            .json()
    }

    /// Only `201 Created` counts as placed.
    pub async fn place_order(&self, token: &str, order: &OrderRequest) -> Result<(), ClientError> {
        let req = ApiRequest::post("/api/orders", order)?;
        let res = self.authorized(req, token).await?;
        if res.status != StatusCode::CREATED {
            return Err(res.reject("Failed to place order."));
        }
        debug!("order created, {}", res.body);
        Ok(())
    }

    pub async fn update_order_status(&self, token: &str, id: OrderId, status: OrderStatus) -> Result<(), ClientError> {
        let req = ApiRequest::put(format!("/api/orders/{id}/status"), &StatusUpdate { status })?;
        self.authorized(req, token)
            .await?
            .ok_or_reject("Failed to update status.")
            .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use reqwest::Method;
    use super::*;
    use crate::client::api::mock::MockTransport;

    #[tokio::test]
    async fn bearer_token_is_attached() {
        let api = Api::new(MockTransport::new().reply(200, "[]"));
        let items = api.menu_items("tok").await.unwrap();
        assert!(items.is_empty());

        let sent = api.transport().requests();
        assert_eq!(sent[0].method, Method::GET);
        assert_eq!(sent[0].path, "/api/menu-items");
        assert_eq!(sent[0].bearer.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn unauthorized_and_forbidden_end_the_session() {
        let api = Api::new(MockTransport::new().reply(401, "").reply(403, ""));
        assert!(matches!(api.orders("tok").await, Err(ClientError::Unauthorized)));
        assert!(matches!(api.orders_for_user("tok", 7).await, Err(ClientError::Unauthorized)));
    }

    #[tokio::test]
    async fn register_maps_conflict() {
        let api = Api::new(MockTransport::new().reply(201, "").reply(409, "").reply(500, ""));
        assert!(api.register("asha", "pw", Role::Customer).await.is_ok());
        assert!(matches!(api.register("asha", "pw", Role::Customer).await, Err(ClientError::UsernameTaken)));
        assert_eq!(
            api.register("asha", "pw", Role::Customer).await.unwrap_err().to_string(),
            "An unexpected error occurred."
        );
        let body = api.transport().requests()[0].body.clone().unwrap();
        assert_eq!(body["role"], "CUSTOMER");
    }

    #[tokio::test]
    async fn login_failure_is_invalid_credentials() {
        let api = Api::new(MockTransport::new().reply(401, ""));
        assert!(matches!(api.authenticate("asha", "bad").await, Err(ClientError::InvalidCredentials)));
        assert!(api.transport().requests()[0].bearer.is_none());
    }

    #[tokio::test]
    async fn place_order_requires_created() {
        let api = Api::new(MockTransport::new().reply(200, "{}").reply(400, r#"{"message":"User not found"}"#));
        let order = OrderRequest {
            user_id: 7,
            cart_items: BTreeMap::from([(1, 2)]),
        };
        assert_eq!(api.place_order("tok", &order).await.unwrap_err().to_string(), "Failed to place order.");
        assert_eq!(api.place_order("tok", &order).await.unwrap_err().to_string(), "User not found");
    }

    #[tokio::test]
    async fn status_update_sends_status_body() {
        let api = Api::new(MockTransport::new().reply(200, "{}"));
        api.update_order_status("tok", 12, OrderStatus::Ready).await.unwrap();

        let sent = api.transport().requests();
        assert_eq!(sent[0].method, Method::PUT);
        assert_eq!(sent[0].path, "/api/orders/12/status");
        assert_eq!(sent[0].body.clone().unwrap(), serde_json::json!({"status": "Ready"}));
    }
}
