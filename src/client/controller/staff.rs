//! Staff console: the kitchen order board and menu management.

use log::info;
use crate::client::api::transport::Transport;
use crate::client::api::Api;
use crate::client::controller::{recover, recover_inline};
use crate::client::error::ClientError;
use crate::client::model::menu_item::{MenuItemDraft, MenuItemId};
use crate::client::model::order::OrderId;
use crate::client::session;
use crate::client::storage::StateStore;
use crate::client::view::render::{render_staff_orders, ItemFormView, OrderAction, StaffMenuView};
use crate::client::view::{Outcome, Screen};

/// Token of a staff session, or the outcome that sends the user away.
fn staff_token<S: StateStore>(store: &mut S) -> Result<Result<String, Outcome>, ClientError> {
    match session::require_staff(store) {
        Ok(session) => Ok(Ok(session.token)),
        Err(e) => recover(store, e).map(Err),
    }
}

pub(crate) async fn orders<T, S>(api: &Api<T>, store: &mut S) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    let token = match staff_token(store)? {
        Ok(token) => token,
        Err(outcome) => return Ok(outcome),
    };
    match api.orders(&token).await {
        Ok(orders) => Ok(Outcome::show(Screen::StaffOrders(render_staff_orders(orders)))),
        Err(e) => recover_inline(store, e),
    }
}

/// Move a pending order to ready, then reload the board.
pub(crate) async fn mark_ready<T, S>(api: &Api<T>, store: &mut S, order_id: OrderId) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    let token = match staff_token(store)? {
        Ok(token) => token,
        Err(outcome) => return Ok(outcome),
    };
    if let Err(e) = api.update_order_status(&token, order_id, OrderAction::MarkReady.target()).await {
        return recover(store, e);
    }
    info!("order={} marked as ready", order_id);
    orders(api, store).await
}

/// Every catalog item, unavailable ones included.
pub(crate) async fn menu<T, S>(api: &Api<T>, store: &mut S) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    let token = match staff_token(store)? {
        Ok(token) => token,
        Err(outcome) => return Ok(outcome),
    };
    match api.menu_items(&token).await {
        Ok(items) => Ok(Outcome::show(Screen::StaffMenu(StaffMenuView { items }))),
        Err(e) => recover_inline(store, e.reword("Failed to fetch menu.")),
    }
}

/// Blank form for a new item.
pub(crate) fn new_item_form<S: StateStore>(store: &mut S) -> Result<Outcome, ClientError> {
    Ok(match staff_token(store)? {
        Ok(_) => Outcome::show(Screen::ItemForm(ItemFormView { draft: None })),
        Err(outcome) => outcome,
    })
}

/// Load one item into the edit form.
pub(crate) async fn edit_item<T, S>(api: &Api<T>, store: &mut S, id: MenuItemId) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    let token = match staff_token(store)? {
        Ok(token) => token,
        Err(outcome) => return Ok(outcome),
    };
    match api.menu_item(&token, id).await {
        Ok(item) => Ok(Outcome::show(Screen::ItemForm(ItemFormView {
            draft: Some(item.into()),
        }))),
        Err(e) => recover(store, e),
    }
}

/// Create when the draft has no id, update otherwise. Reloads the list on success.
pub(crate) async fn save_item<T, S>(api: &Api<T>, store: &mut S, draft: MenuItemDraft) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    let token = match staff_token(store)? {
        Ok(token) => token,
        Err(outcome) => return Ok(outcome),
    };
    let saved = match draft.id {
        Some(id) => api.update_menu_item(&token, id, &draft).await,
        None => api.create_menu_item(&token, &draft).await,
    };
    if let Err(e) = saved {
        return recover(store, e);
    }
    info!("menu item {} saved", draft.name);
    menu(api, store).await
}

/// Soft-disable: read the item, flip `available` off and write the whole item back.
pub(crate) async fn disable_item<T, S>(api: &Api<T>, store: &mut S, id: MenuItemId) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    let token = match staff_token(store)? {
        Ok(token) => token,
        Err(outcome) => return Ok(outcome),
    };
    let mut item = match api.menu_item(&token, id).await {
        Ok(item) => item,
        Err(e) => return recover(store, e.reword("Could not fetch item to update.")),
    };
    item.available = false;
    if let Err(e) = api.update_menu_item(&token, id, &item).await {
        return recover(store, e.reword("Failed to mark item as unavailable."));
    }
    info!("menu item={} marked unavailable", id);
    menu(api, store).await
}
