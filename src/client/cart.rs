//! Client-side cart accumulator, keyed by menu item id.

use std::collections::BTreeMap;
use log::debug;
use crate::client::error::ClientError;
use crate::client::model::cart::CartLine;
use crate::client::model::menu_item::{MenuItem, MenuItemId};
use crate::client::storage::{self, StateStore};

pub(crate) const CART_KEY: &str = "cart";

/// Current cart lines, empty when nothing (or nothing readable) is stored.
pub(crate) fn read_lines<S: StateStore>(store: &S) -> Vec<CartLine> {
    storage::read_json(store, CART_KEY).unwrap_or_default()
}

pub(crate) fn total(lines: &[CartLine]) -> f64 {
    lines.iter().map(CartLine::subtotal).sum()
}

/// Number of units across all lines.
pub(crate) fn item_count(lines: &[CartLine]) -> u32 {
    lines.iter().map(|line| line.quantity).sum()
}

/// Every mutation writes the full snapshot back before returning.
pub(crate) struct Cart<'s, S: StateStore> {
    store: &'s mut S,
    lines: Vec<CartLine>,
}

impl<'s, S: StateStore> Cart<'s, S> {
    pub fn load(store: &'s mut S) -> Self {
        let lines = read_lines(store);
        Self { store, lines }
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Quantities keyed by item id, the shape the order endpoint takes.
    pub fn order_items(&self) -> BTreeMap<MenuItemId, u32> {
        self.lines
            .iter()
            .map(|line| (line.item.id, line.quantity))
            .collect()
    }

    pub fn add(&mut self, item: &MenuItem) -> Result<(), ClientError> {
        match self.lines.iter_mut().find(|line| line.item.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::new(item.clone())),
        }
        self.persist()
    }

    /// Apply `delta`, a line that drops to zero or below leaves the cart.
    pub fn change_quantity(&mut self, id: MenuItemId, delta: i32) -> Result<(), ClientError> {
        if let Some(idx) = self.lines.iter().position(|line| line.item.id == id) {
            let quantity = i64::from(self.lines[idx].quantity) + i64::from(delta);
            match u32::try_from(quantity) {
                Ok(q) if q > 0 => self.lines[idx].quantity = q,
                _ => {
                    self.lines.remove(idx);
                }
            }
        }
        self.persist()
    }

    pub fn remove(&mut self, id: MenuItemId) -> Result<(), ClientError> {
        self.lines.retain(|line| line.item.id != id);
        self.persist()
    }

    pub fn clear(&mut self) -> Result<(), ClientError> {
        self.lines.clear();
        self.store.remove_item(CART_KEY)
    }

    fn persist(&mut self) -> Result<(), ClientError> {
        debug!("persisting cart with {} line(s)", self.lines.len());
        storage::write_json(&mut *self.store, CART_KEY, &self.lines)
    }
}
