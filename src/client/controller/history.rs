use log::info;
use crate::client::api::transport::Transport;
use crate::client::api::Api;
use crate::client::cart;
use crate::client::controller::{recover, recover_inline};
use crate::client::error::ClientError;
use crate::client::model::order::OrderId;
use crate::client::session;
use crate::client::storage::StateStore;
use crate::client::view::render::{render_history, OrderAction};
use crate::client::view::{Outcome, Screen};

pub(crate) async fn show<T, S>(api: &Api<T>, store: &mut S) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    let (token, user_id) = match session::require_user(store) {
        Ok(session) => (session.token, session.user_id.unwrap_or_default()),
        Err(e) => return recover(store, e),
    };
    match api.orders_for_user(&token, user_id).await {
        Ok(orders) => Ok(Outcome::show(Screen::History(render_history(orders, &cart::read_lines(store))))),
        Err(e) => recover_inline(store, e),
    }
}

/// Confirm pickup of a ready order, then reload the whole list.
pub(crate) async fn mark_received<T, S>(api: &Api<T>, store: &mut S, order_id: OrderId) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    let session = match session::require_user(store) {
        Ok(session) => session,
        Err(e) => return recover(store, e),
    };
    let status = OrderAction::MarkReceived.target();
    if let Err(e) = api.update_order_status(&session.token, order_id, status).await {
        return recover(store, e);
    }
    info!("order={} marked as received", order_id);
    show(api, store).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::api::mock::MockTransport;
    use crate::client::storage::memory::MemoryStore;
    use crate::client::view::{Notice, Page};

    const ORDERS: &str = r#"[
        {"id":1,"status":"Completed","orderTime":"2024-03-01T12:00:00","totalPrice":100.0,"orderItems":[]},
        {"id":2,"status":"Ready","orderTime":"2024-03-02T12:00:00","totalPrice":250.0,"orderItems":[]}
    ]"#;
    const ORDERS_AFTER: &str = r#"[
        {"id":1,"status":"Completed","orderTime":"2024-03-01T12:00:00","totalPrice":100.0,"orderItems":[]},
        {"id":2,"status":"Completed","orderTime":"2024-03-02T12:00:00","totalPrice":250.0,"orderItems":[]}
    ]"#;

    fn customer() -> MemoryStore {
        let mut store = MemoryStore::default();
        store.set_item("token", "tok".to_string()).unwrap();
        store.set_item("userId", "7".to_string()).unwrap();
        store
    }

    #[tokio::test]
    async fn needs_user_id() {
        let api = Api::new(MockTransport::new());
        let mut store = MemoryStore::default();
        store.set_item("token", "tok".to_string()).unwrap();

        let outcome = show(&api, &mut store).await.unwrap();
        assert_eq!(outcome.redirected_to(), Some(Page::Login));
        assert!(api.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn splits_current_and_past() {
        let api = Api::new(MockTransport::new().reply(200, ORDERS));
        let mut store = customer();

        let outcome = show(&api, &mut store).await.unwrap();
        let Some(Screen::History(view)) = outcome.screen() else {
            panic!("expected history");
        };
        assert_eq!(view.current.len(), 1);
        assert_eq!(view.past.len(), 1);
        assert_eq!(api.transport().calls(), vec!["GET /api/orders/user/7"]);
    }

    #[tokio::test]
    async fn received_refetches_full_list() {
        let api = Api::new(MockTransport::new().reply(200, "{}").reply(200, ORDERS_AFTER));
        let mut store = customer();

        let outcome = mark_received(&api, &mut store, 2).await.unwrap();
        assert_eq!(
            api.transport().calls(),
            vec!["PUT /api/orders/2/status", "GET /api/orders/user/7"]
        );
        assert_eq!(
            api.transport().requests()[0].body.clone().unwrap(),
            serde_json::json!({"status": "Completed"})
        );
        let Some(Screen::History(view)) = outcome.screen() else {
            panic!("expected history");
        };
        assert!(view.current.is_empty());
        assert_eq!(view.past.len(), 2);
    }

    #[tokio::test]
    async fn failed_transition_alerts_without_reload() {
        let api = Api::new(MockTransport::new().reply(404, ""));
        let mut store = customer();

        let outcome = mark_received(&api, &mut store, 2).await.unwrap();
        assert_eq!(outcome.notices, vec![Notice::Alert("Error: Failed to update status.".to_string())]);
        assert_eq!(api.transport().calls().len(), 1);
    }
}
