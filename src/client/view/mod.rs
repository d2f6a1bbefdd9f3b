//! View descriptions produced from state snapshots, and where to go next.

mod display;
pub(crate) mod render;

use derive_more::Display;
use crate::client::view::render::{CartView, HistoryView, ItemFormView, MenuView, StaffMenuView, StaffOrdersView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum Page {
    #[display("login")]
    Login,
    #[display("customer dashboard")]
    CustomerDashboard,
    #[display("staff dashboard")]
    StaffDashboard,
    #[display("order history")]
    History,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Notice {
    /// Shown next to the form or list that failed.
    Inline(String),
    /// Blocking message, the previous screen stays as it was.
    Alert(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AuthForm {
    Login,
    Register,
}

#[derive(Debug)]
pub(crate) enum Screen {
    Auth(AuthForm),
    Menu(MenuView),
    Cart(CartView),
    History(HistoryView),
    StaffOrders(StaffOrdersView),
    StaffMenu(StaffMenuView),
    ItemForm(ItemFormView),
}

#[derive(Debug)]
pub(crate) enum Next {
    Show(Screen),
    Redirect(Page),
    Stay,
}

/// Result of handling one intent.
#[derive(Debug)]
pub(crate) struct Outcome {
    pub notices: Vec<Notice>,
    pub next: Next,
}

impl Outcome {
    pub fn show(screen: Screen) -> Self {
        Self {
            notices: vec![],
            next: Next::Show(screen),
        }
    }

    pub fn redirect(page: Page) -> Self {
        Self {
            notices: vec![],
            next: Next::Redirect(page),
        }
    }

    pub fn stay() -> Self {
        Self {
            notices: vec![],
            next: Next::Stay,
        }
    }

    pub fn with(mut self, notice: Notice) -> Self {
        self.notices.push(notice);
        self
    }

    pub fn redirected_to(&self) -> Option<Page> {
        match self.next {
            Next::Redirect(page) => Some(page),
            _ => None,
        }
    }

    #[cfg(test)]
    pub fn screen(&self) -> Option<&Screen> {
        match &self.next {
            Next::Show(screen) => Some(screen),
            _ => None,
        }
    }
}
