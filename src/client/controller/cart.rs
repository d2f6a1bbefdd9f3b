use log::{info, warn};
use crate::client::api::transport::Transport;
use crate::client::api::Api;
use crate::client::cart::{self, Cart};
use crate::client::controller::recover;
use crate::client::error::ClientError;
use crate::client::model::menu_item::MenuItemId;
use crate::client::model::order::OrderRequest;
use crate::client::session;
use crate::client::storage::StateStore;
use crate::client::view::render::render_cart;
use crate::client::view::{Notice, Outcome, Page, Screen};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CartIntent {
    Show,
    ChangeQuantity { id: MenuItemId, delta: i32 },
    Remove { id: MenuItemId },
    PlaceOrder,
}

pub(crate) async fn dispatch<T, S>(api: &Api<T>, store: &mut S, intent: CartIntent) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    if let Err(e) = session::require(store) {
        return recover(store, e);
    }
    match intent {
        CartIntent::Show => {}
        CartIntent::ChangeQuantity { id, delta } => Cart::load(store).change_quantity(id, delta)?,
        CartIntent::Remove { id } => Cart::load(store).remove(id)?,
        CartIntent::PlaceOrder => return place_order(api, store).await,
    }
    Ok(show(store))
}

fn show<S: StateStore>(store: &S) -> Outcome {
    Outcome::show(Screen::Cart(render_cart(&cart::read_lines(store))))
}

/// Submit the cart. The cart is only cleared once the backend reports the order created.
async fn place_order<T, S>(api: &Api<T>, store: &mut S) -> Result<Outcome, ClientError>
where
    T: Transport,
    S: StateStore,
{
    let (token, user_id) = match session::require_user(store) {
        Ok(session) => (session.token, session.user_id.unwrap_or_default()),
        Err(e) => return recover(store, e),
    };
    let cart = Cart::load(store);
    if cart.is_empty() {
        return Ok(Outcome::stay().with(Notice::Alert(ClientError::EmptyCart.to_string())));
    }
    let request = OrderRequest {
        user_id,
        cart_items: cart.order_items(),
    };
    match api.place_order(&token, &request).await {
        Ok(()) => {
            Cart::load(store).clear()?;
            info!("order placed with {} distinct item(s)", request.cart_items.len());
            Ok(Outcome::redirect(Page::History).with(Notice::Alert("Order placed successfully!".to_string())))
        }
        Err(e) => {
            warn!("order placement failed, {}", e);
            recover(store, e)
        }
    }
}
