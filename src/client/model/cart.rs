use serde::{Deserialize, Serialize};
use crate::client::model::menu_item::MenuItem;

/// One cart entry, the menu item snapshot plus how many of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CartLine {
    #[serde(flatten)]
    pub item: MenuItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn new(item: MenuItem) -> Self {
        Self { item, quantity: 1 }
    }

    pub fn subtotal(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }
}
