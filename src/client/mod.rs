//! main file for the client

pub(crate) mod api;
mod cart;
pub(crate) mod cli;
mod controller;
mod error;
pub(crate) mod model;
mod session;
mod storage;
mod util;
mod view;

use anyhow::Context;
use log::debug;
use crate::client::api::transport::{HttpTransport, Transport};
use crate::client::api::Api;
use crate::client::cli::{CartCmds, Cli, Commands, HistoryCmds, MenuCmds, StaffCmds};
use crate::client::controller::cart::CartIntent;
use crate::client::controller::{auth, cart as cart_page, history, menu, staff};
use crate::client::error::ClientError;
use crate::client::model::config::ClientConfig;
use crate::client::storage::file::FileStore;
use crate::client::storage::StateStore;
use crate::client::view::render::ALL_CATEGORIES;
use crate::client::view::{Outcome, Page};

/// Redirects followed for one command before giving up.
const MAX_REDIRECTS: usize = 3;

/// Run one command against the backend and print what it produced
pub(crate) async fn run(ClientConfig { api_base, state_path }: ClientConfig, cli: Cli) -> anyhow::Result<()> {
    let api = Api::new(HttpTransport::new(api_base));
    let mut store = FileStore::open(&state_path)
        .with_context(|| format!("failed to open client state at {}", state_path.display()))?;

    let outcome = dispatch(&api, &mut store, cli.command).await?;
    for outcome in follow(&api, &mut store, outcome, MAX_REDIRECTS).await? {
        print!("{outcome}");
    }
    Ok(())
}

/// Follow redirects to pages other than login, at most `max_hops` of them.
/// Returns every outcome along the way, the first one included.
async fn follow<T: Transport, S: StateStore>(
    api: &Api<T>,
    store: &mut S,
    outcome: Outcome,
    max_hops: usize,
) -> Result<Vec<Outcome>, ClientError> {
    let mut trail = vec![outcome];
    for _ in 0..max_hops {
        let page = match trail.last().and_then(Outcome::redirected_to) {
            Some(page) if page != Page::Login => page,
            _ => break,
        };
        debug!("following redirect to {}", page);
        trail.push(open(api, store, page).await?);
    }
    Ok(trail)
}

/// Load a page the way navigating to it would.
async fn open<T: Transport, S: StateStore>(api: &Api<T>, store: &mut S, page: Page) -> Result<Outcome, ClientError> {
    match page {
        Page::Login => Ok(Outcome::redirect(Page::Login)),
        Page::CustomerDashboard => menu::browse(api, store, ALL_CATEGORIES).await,
        Page::StaffDashboard => staff::orders(api, store).await,
        Page::History => history::show(api, store).await,
    }
}

async fn dispatch<T: Transport, S: StateStore>(api: &Api<T>, store: &mut S, command: Commands) -> Result<Outcome, ClientError> {
    match command {
        Commands::Login { username, password } => auth::login(api, store, &username, &password).await,
        Commands::Register { username, password, role } => Ok(auth::register(api, &username, &password, role).await),
        Commands::Logout => auth::logout(store),
        Commands::Menu(args) => match args.command {
            None => menu::browse(api, store, &args.category).await,
            Some(MenuCmds::Add { id }) => menu::add_to_cart(api, store, id, &args.category).await,
        },
        Commands::Cart(args) => {
            let intent = match args.command.unwrap_or(CartCmds::Show) {
                CartCmds::Show => CartIntent::Show,
                CartCmds::Inc { id, by } => CartIntent::ChangeQuantity { id, delta: by },
                CartCmds::Dec { id, by } => CartIntent::ChangeQuantity { id, delta: -by },
                CartCmds::Remove { id } => CartIntent::Remove { id },
                CartCmds::Checkout => CartIntent::PlaceOrder,
            };
            cart_page::dispatch(api, store, intent).await
        }
        Commands::History(args) => match args.command {
            None => history::show(api, store).await,
            Some(HistoryCmds::Received { id }) => history::mark_received(api, store, id).await,
        },
        Commands::Staff(args) => match args.command {
            StaffCmds::Orders => staff::orders(api, store).await,
            StaffCmds::Ready { id } => staff::mark_ready(api, store, id).await,
            StaffCmds::Menu => staff::menu(api, store).await,
            StaffCmds::New => staff::new_item_form(store),
            StaffCmds::Add(fields) => staff::save_item(api, store, fields.into_draft(None)).await,
            StaffCmds::Edit { id } => staff::edit_item(api, store, id).await,
            StaffCmds::Update { id, fields } => staff::save_item(api, store, fields.into_draft(Some(id))).await,
            StaffCmds::Disable { id } => staff::disable_item(api, store, id).await,
        },
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use super::*;
    use crate::client::api::mock::MockTransport;
    use crate::client::storage::memory::MemoryStore;
    use crate::client::view::Screen;

    #[tokio::test]
    async fn login_lands_on_the_dashboard() {
        let api = Api::new(
            MockTransport::new()
                .reply(200, r#"{"jwt":"j","username":"asha","role":"CUSTOMER","userId":7}"#)
                .reply(200, "[]"),
        );
        let mut store = MemoryStore::default();
        let cli = Cli::parse_from(["orderly", "login", "asha", "--password", "pw"]);

        let outcome = dispatch(&api, &mut store, cli.command).await.unwrap();
        let trail = follow(&api, &mut store, outcome, MAX_REDIRECTS).await.unwrap();

        assert_eq!(trail.len(), 2);
        assert!(matches!(trail[1].screen(), Some(Screen::Menu(_))));
        assert_eq!(api.transport().calls(), vec!["POST /api/authenticate", "GET /api/menu-items"]);
    }

    #[tokio::test]
    async fn login_page_is_not_followed() {
        let api = Api::new(MockTransport::new());
        let mut store = MemoryStore::default();
        store.set_item("token", "t".to_string()).unwrap();
        let cli = Cli::parse_from(["orderly", "logout"]);

        let outcome = dispatch(&api, &mut store, cli.command).await.unwrap();
        let trail = follow(&api, &mut store, outcome, MAX_REDIRECTS).await.unwrap();

        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].redirected_to(), Some(Page::Login));
        assert!(api.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn checkout_loads_history_once() {
        let api = Api::new(MockTransport::new().reply(201, "{}").reply(200, "[]"));
        let mut store = MemoryStore::default();
        store.set_item("token", "t".to_string()).unwrap();
        store.set_item("userId", "7".to_string()).unwrap();
        store
            .set_item(
                "cart",
                r#"[{"id":1,"name":"Dosa","price":80.0,"prepTime":10,"category":"Mains","available":true,"quantity":2}]"#.to_string(),
            )
            .unwrap();
        let cli = Cli::parse_from(["orderly", "cart", "checkout"]);

        let outcome = dispatch(&api, &mut store, cli.command).await.unwrap();
        let trail = follow(&api, &mut store, outcome, MAX_REDIRECTS).await.unwrap();

        assert_eq!(trail.len(), 2);
        assert_eq!(trail[0].redirected_to(), Some(Page::History));
        assert!(matches!(trail[1].screen(), Some(Screen::History(_))));
        assert_eq!(api.transport().calls(), vec!["POST /api/orders", "GET /api/orders/user/7"]);
    }

    #[tokio::test]
    async fn hops_stop_at_the_cap() {
        let api = Api::new(MockTransport::new());
        let mut store = MemoryStore::default();

        let trail = follow(&api, &mut store, Outcome::redirect(Page::History), 0).await.unwrap();

        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].redirected_to(), Some(Page::History));
        assert!(api.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn logout_works_over_a_truncated_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        std::fs::write(&path, r#"{"token":"abc","cart":"[]"#).unwrap();
        let config = ClientConfig::new("http://localhost:9".to_string(), path.clone());

        run(config, Cli::parse_from(["orderly", "logout"])).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let entries: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries, serde_json::json!({}));
    }

    #[tokio::test]
    async fn dec_sends_a_negative_delta() {
        let api = Api::new(MockTransport::new());
        let mut store = MemoryStore::default();
        store.set_item("token", "t".to_string()).unwrap();
        store
            .set_item(
                "cart",
                r#"[{"id":1,"name":"Dosa","price":80.0,"prepTime":10,"category":"Mains","available":true,"quantity":2}]"#.to_string(),
            )
            .unwrap();
        let cli = Cli::parse_from(["orderly", "cart", "dec", "1", "--by", "2"]);

        let outcome = dispatch(&api, &mut store, cli.command).await.unwrap();
        let Some(Screen::Cart(view)) = outcome.screen() else {
            panic!("expected cart");
        };
        assert!(view.rows.is_empty());
    }
}
