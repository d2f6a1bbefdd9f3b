use std::fmt::{self, Display, Formatter};
use crate::client::view::render::{CartView, HistoryView, ItemFormView, MenuView, OrderAction, OrderCard, StaffMenuView, StaffOrdersView};
use crate::client::view::{AuthForm, Next, Notice, Outcome, Page, Screen};

fn price(amount: f64) -> String {
    format!("₹{amount:.2}")
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Inline(text) => write!(f, "error: {text}"),
            Notice::Alert(text) => write!(f, "[!] {text}"),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for notice in &self.notices {
            writeln!(f, "{notice}")?;
        }
        match &self.next {
            Next::Show(screen) => write!(f, "{screen}"),
            Next::Redirect(Page::Login) => write!(f, "{}", AuthForm::Login),
            Next::Redirect(page) => writeln!(f, "-> {page}"),
            Next::Stay => Ok(()),
        }
    }
}

impl Display for AuthForm {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AuthForm::Login => writeln!(f, "log in with: orderly login <USERNAME> --password <PASSWORD>"),
            AuthForm::Register => writeln!(
                f,
                "register with: orderly register <USERNAME> --password <PASSWORD> [--role STAFF|CUSTOMER]"
            ),
        }
    }
}

impl Display for Screen {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Screen::Auth(form) => form.fmt(f),
            Screen::Menu(view) => view.fmt(f),
            Screen::Cart(view) => view.fmt(f),
            Screen::History(view) => view.fmt(f),
            Screen::StaffOrders(view) => view.fmt(f),
            Screen::StaffMenu(view) => view.fmt(f),
            Screen::ItemForm(view) => view.fmt(f),
        }
    }
}

impl Display for MenuView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Menu [{}]  categories: All, {}  Cart ({})", self.selected, self.categories.join(", "), self.cart_count)?;
        if self.items.is_empty() {
            return writeln!(f, "No menu items available in this category.");
        }
        for item in &self.items {
            writeln!(
                f,
                "  #{:<4} {:<28} {:>10}  {} mins  {}",
                item.id,
                item.name,
                price(item.price),
                item.prep_time,
                item.category
            )?;
            if let Some(url) = item.image() {
                writeln!(f, "        {url}")?;
            }
        }
        Ok(())
    }
}

impl Display for CartView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cart ({})", self.cart_count)?;
        if self.rows.is_empty() {
            return writeln!(f, "Your cart is empty.");
        }
        writeln!(f, "  {:<5} {:<28} {:>10} {:>5} {:>12}", "Id", "Item", "Price", "Qty", "Subtotal")?;
        for row in &self.rows {
            writeln!(
                f,
                "  {:<5} {:<28} {:>10} {:>5} {:>12}",
                row.id,
                row.name,
                price(row.price),
                row.quantity,
                price(row.subtotal)
            )?;
        }
        writeln!(f, "Total: {}", price(self.total))
    }
}

impl Display for OrderCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.customer {
            Some(user) => writeln!(f, "  Order #{} | User: {}  [{}]", self.id, user, self.status.as_str())?,
            None => writeln!(f, "  Order ID: #{}  [{}]", self.id, self.status.as_str())?,
        }
        writeln!(f, "    Items: {}", self.items_summary)?;
        writeln!(f, "    Total: {}", price(self.total_price))?;
        writeln!(f, "    Time: {}", self.time)?;
        match self.action {
            Some(OrderAction::MarkReady) => writeln!(f, "    -> orderly staff ready {}", self.id),
            Some(OrderAction::MarkReceived) => writeln!(f, "    -> orderly history received {}", self.id),
            None => Ok(()),
        }
    }
}

fn cards(f: &mut Formatter<'_>, heading: &str, cards: &[OrderCard], empty: &str) -> fmt::Result {
    writeln!(f, "{heading}")?;
    if cards.is_empty() {
        return writeln!(f, "  {empty}");
    }
    cards.iter().try_for_each(|card| card.fmt(f))
}

impl Display for HistoryView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cart ({})", self.cart_count)?;
        cards(f, "Current Orders", &self.current, "No current orders.")?;
        cards(f, "Past Orders", &self.past, "No past orders found.")
    }
}

impl Display for StaffOrdersView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        cards(f, "Active Orders", &self.active, "No active orders.")?;
        cards(f, "Recently Completed", &self.completed, "No recent completed orders.")
    }
}

impl Display for StaffMenuView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Current Menu")?;
        for item in &self.items {
            writeln!(
                f,
                "  #{:<4} {} ({:.2}) - {} | Status: {}",
                item.id,
                item.name,
                item.price,
                item.category,
                if item.available { "Available" } else { "Unavailable" }
            )?;
        }
        Ok(())
    }
}

impl Display for ItemFormView {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title())?;
        match &self.draft {
            Some(draft) => {
                let id = draft.id.map(|id| id.to_string()).unwrap_or_default();
                writeln!(
                    f,
                    "  orderly staff update {} --name {:?} --price {} --prep-time {} --category {:?} --image-url {:?} --available {}",
                    id,
                    draft.name,
                    draft.price,
                    draft.prep_time,
                    draft.category,
                    draft.image_url.as_deref().unwrap_or_default(),
                    draft.available
                )
            }
            None => writeln!(
                f,
                "  orderly staff add --name <NAME> --price <PRICE> --prep-time <MINS> --category <CATEGORY> [--image-url <URL>]"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::view::render::CartRow;

    #[test]
    fn empty_cart_message() {
        let view = CartView { rows: vec![], total: 0.0, cart_count: 0 };
        assert_eq!(view.to_string(), "Cart (0)\nYour cart is empty.\n");
    }

    #[test]
    fn prices_use_two_decimals() {
        let view = CartView {
            rows: vec![CartRow { id: 1, name: "Dosa".to_string(), price: 80.0, quantity: 2, subtotal: 160.0 }],
            total: 160.0,
            cart_count: 2,
        };
        assert!(view.to_string().ends_with("Total: ₹160.00\n"));
    }

    #[test]
    fn notices_precede_the_screen() {
        let outcome = Outcome::stay().with(Notice::Alert("Error: Failed to update status.".to_string()));
        assert_eq!(outcome.to_string(), "[!] Error: Failed to update status.\n");
    }
}
