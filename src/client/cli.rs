use clap::{ArgAction, Args, Parser, Subcommand};
use crate::client::model::menu_item::{MenuItemDraft, MenuItemId};
use crate::client::model::order::OrderId;
use crate::client::model::session::Role;
use crate::client::view::render::ALL_CATEGORIES;

#[derive(Parser, Debug)]
#[command(name = "orderly")]
#[command(about = "client cli used by restaurant customers and staffs to order and serve food", version, long_about = None
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// log in and keep the session locally
    #[command(arg_required_else_help = true)]
    Login {
        username: String,
        #[arg(long)]
        password: String,
    },
    /// create an account
    #[command(arg_required_else_help = true)]
    Register {
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "CUSTOMER", help = "STAFF or CUSTOMER")]
        role: Role,
    },
    /// forget the session and the cart
    Logout,
    /// browse the menu
    Menu(MenuArgs),
    /// cart related ops
    Cart(CartArgs),
    /// own order history
    History(HistoryArgs),
    /// staff console
    #[command(arg_required_else_help = true)]
    Staff(StaffArgs),
}

#[derive(Debug, Args)]
pub(crate) struct MenuArgs {
    #[arg(short, long, default_value = ALL_CATEGORIES, help = "Category to show")]
    pub category: String,
    #[command(subcommand)]
    pub command: Option<MenuCmds>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum MenuCmds {
    /// add one unit of a menu item to the cart
    #[command(arg_required_else_help = true)]
    Add {
        #[arg(value_name = "MENU_ITEM_ID")]
        id: MenuItemId,
    },
}

#[derive(Debug, Args)]
pub(crate) struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCmds>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum CartCmds {
    Show,
    #[command(arg_required_else_help = true)]
    Inc {
        #[arg(value_name = "MENU_ITEM_ID")]
        id: MenuItemId,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(1..))]
        by: i32,
    },
    #[command(arg_required_else_help = true)]
    Dec {
        #[arg(value_name = "MENU_ITEM_ID")]
        id: MenuItemId,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(i32).range(1..))]
        by: i32,
    },
    #[command(arg_required_else_help = true)]
    Remove {
        #[arg(value_name = "MENU_ITEM_ID")]
        id: MenuItemId,
    },
    /// place an order with the whole cart
    Checkout,
}

#[derive(Debug, Args)]
pub(crate) struct HistoryArgs {
    #[command(subcommand)]
    pub command: Option<HistoryCmds>,
}

#[derive(Debug, Subcommand)]
pub(crate) enum HistoryCmds {
    /// confirm a ready order was picked up
    #[command(arg_required_else_help = true)]
    Received {
        #[arg(value_name = "ORDER_ID")]
        id: OrderId,
    },
}

#[derive(Debug, Args)]
pub(crate) struct StaffArgs {
    #[command(subcommand)]
    pub command: StaffCmds,
}

#[derive(Debug, Subcommand)]
pub(crate) enum StaffCmds {
    /// active and recently completed orders
    Orders,
    #[command(arg_required_else_help = true)]
    Ready {
        #[arg(value_name = "ORDER_ID")]
        id: OrderId,
    },
    /// every menu item with its availability
    Menu,
    /// blank form for a new menu item
    New,
    #[command(arg_required_else_help = true)]
    Add(ItemFields),
    #[command(arg_required_else_help = true)]
    Edit {
        #[arg(value_name = "MENU_ITEM_ID")]
        id: MenuItemId,
    },
    #[command(arg_required_else_help = true)]
    Update {
        #[arg(value_name = "MENU_ITEM_ID")]
        id: MenuItemId,
        #[command(flatten)]
        fields: ItemFields,
    },
    /// mark an item unavailable, it is not deleted
    #[command(arg_required_else_help = true)]
    Disable {
        #[arg(value_name = "MENU_ITEM_ID")]
        id: MenuItemId,
    },
}

#[derive(Debug, Args)]
pub(crate) struct ItemFields {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub price: f64,
    #[arg(long, help = "Preparation time in minutes")]
    pub prep_time: u32,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub image_url: Option<String>,
    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    pub available: bool,
}

impl ItemFields {
    pub fn into_draft(self, id: Option<MenuItemId>) -> MenuItemDraft {
        MenuItemDraft {
            id,
            name: self.name,
            price: self.price,
            prep_time: self.prep_time,
            category: self.category,
            image_url: self.image_url,
            available: self.available,
        }
    }
}
