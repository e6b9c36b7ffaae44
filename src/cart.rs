//! Cart

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tracing::{debug, trace};

use crate::{
    discounts::Category,
    items::{ItemError, LineItem},
    money::{format_money, usd},
    table::{Align, Table},
};

/// Number of columns on a ticket.
pub const TICKET_COLUMNS: usize = 6;

const TICKET_HEADER: [&str; TICKET_COLUMNS] =
    ["#", "Item", "Price", "Quan.", "Discount", "Total"];

const TICKET_ALIGNMENT: [Align; TICKET_COLUMNS] = [
    Align::Right,
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Right,
    Align::Right,
];

/// Ordered collection of validated line items.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
    total: Decimal,
}

impl Cart {
    /// Create a new, empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates and appends an item.
    ///
    /// The cart is left unchanged when validation fails.
    ///
    /// # Errors
    ///
    /// Returns an [`ItemError`] naming the constraint the title, price or quantity broke,
    /// or [`ItemError::TotalOverflow`] if the cart total would become unrepresentable.
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        price: Decimal,
        quantity: u32,
        category: Category,
    ) -> Result<(), ItemError> {
        let (item, total) = LineItem::new(title, price, quantity, category)
            .and_then(|item| {
                let total = self
                    .total
                    .checked_add(*item.total().amount())
                    .ok_or(ItemError::TotalOverflow)?;

                Ok((item, total))
            })
            .inspect_err(|err| {
                debug!(error = %err, "rejected item");
            })?;

        debug!(
            title = item.title(),
            price = %item.price().amount(),
            quantity,
            %category,
            "added item"
        );

        self.items.push(item);
        self.total = total;

        Ok(())
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Iterate over items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter()
    }

    /// Get the number of items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every discounted line total.
    ///
    /// Line totals are rounded to cents before summing, so the total always matches
    /// the rows printed on the ticket.
    pub fn total(&self) -> Money<'static, Currency> {
        usd(self.total)
    }

    /// Lays the cart out as a ticket table.
    pub fn ticket(&self) -> Table<TICKET_COLUMNS> {
        let mut table = Table::new(TICKET_HEADER, TICKET_ALIGNMENT);

        for (idx, item) in self.items.iter().enumerate() {
            table.push_row(ticket_row(idx, item));
        }

        let total = format_money(&self.total());

        table.with_footer([
            self.len().to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
            total,
        ])
    }

    /// Renders the ticket text, or `No items.` for an empty cart.
    pub fn format_ticket(&self) -> String {
        let ticket = self.ticket().render();

        debug!(items = self.len(), "rendered ticket");

        ticket
    }
}

impl<'a> IntoIterator for &'a Cart {
    type Item = &'a LineItem;
    type IntoIter = std::slice::Iter<'a, LineItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

fn ticket_row(idx: usize, item: &LineItem) -> [String; TICKET_COLUMNS] {
    let discount = item.discount();
    let total = format_money(item.total());

    trace!(line = idx + 1, discount, %total, "ticket line");

    [
        (idx + 1).to_string(),
        item.title().to_string(),
        format_money(item.price()),
        item.quantity().to_string(),
        discount_label(discount),
        total,
    ]
}

fn discount_label(discount: u8) -> String {
    if discount == 0 {
        "-".to_string()
    } else {
        format!("{discount}%")
    }
}
