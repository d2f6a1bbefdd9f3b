use log::{debug, info};
use crate::client::api::transport::Transport;
use crate::client::api::Api;
use crate::client::cart::{self, Cart};
use crate::client::controller::{recover, recover_inline};
use crate::client::error::ClientError;
use crate::client::model::menu_item::MenuItemId;
use crate::client::session;
use crate::client::storage::StateStore;
use crate::client::view::render::render_menu;
use crate::client::view::{Notice, Outcome, Screen};

/// Load the catalog once and show the available items of `category`.
pub(crate) async fn browse<T, S>(api: &Api<T>, store: &mut S, category: &str) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    let session = match session::require(store) {
        Ok(session) => session,
        Err(e) => return recover(store, e),
    };
    match api.menu_items(&session.token).await {
        Ok(items) => {
            debug!("fetched {} menu item(s)", items.len());
            let view = render_menu(&items, category, &cart::read_lines(store));
            Ok(Outcome::show(Screen::Menu(view)))
        }
        Err(e) => recover_inline(store, e),
    }
}

/// Add one unit of `item_id` to the cart, then show the menu again.
pub(crate) async fn add_to_cart<T, S>(api: &Api<T>, store: &mut S, item_id: MenuItemId, category: &str) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    let session = match session::require(store) {
        Ok(session) => session,
        Err(e) => return recover(store, e),
    };
    let items = match api.menu_items(&session.token).await {
        Ok(items) => items,
        Err(e) => return recover_inline(store, e),
    };
    let added = match items.iter().find(|item| item.id == item_id && item.available) {
        Some(item) => {
            Cart::load(store).add(item)?;
            info!("added item={} to cart", item.id);
            Some(Notice::Alert(format!("{} has been added to your cart!", item.name)))
        }
        None => {
            debug!("item={} is not orderable", item_id);
            None
        }
    };
    let mut outcome = Outcome::show(Screen::Menu(render_menu(&items, category, &cart::read_lines(store))));
    outcome.notices.extend(added);
    Ok(outcome)
}
