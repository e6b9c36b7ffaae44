//! Items

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;

use crate::{
    discounts::{Category, calculate_discount},
    money::{discounted_total, usd},
};

/// Longest accepted item title, in characters.
pub const MAX_TITLE_LEN: usize = 32;

/// Smallest accepted unit price, one cent.
pub const MIN_PRICE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Errors raised when an item fails validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ItemError {
    /// Title is empty or longer than [`MAX_TITLE_LEN`] characters (title, length).
    #[error("invalid title {0:?}: expected 1 to {max} characters, got {1}", max = MAX_TITLE_LEN)]
    InvalidTitle(String, usize),

    /// Unit price is below [`MIN_PRICE`].
    #[error("invalid price {0}: must be at least 0.01")]
    InvalidPrice(Decimal),

    /// Quantity is zero.
    #[error("invalid quantity {0}: must be at least 1")]
    InvalidQuantity(u32),

    /// The discounted total is too large to represent.
    #[error("total overflows the largest representable amount")]
    TotalOverflow,
}

/// A validated line on a ticket.
#[derive(Clone, Debug, PartialEq)]
pub struct LineItem {
    title: String,
    price: Money<'static, Currency>,
    quantity: u32,
    category: Category,
    discount: u8,
    total: Money<'static, Currency>,
}

impl LineItem {
    /// Validates and creates a new line item.
    ///
    /// # Errors
    ///
    /// - [`ItemError::InvalidTitle`]: the title is empty or longer than [`MAX_TITLE_LEN`].
    /// - [`ItemError::InvalidPrice`]: the price is less than [`MIN_PRICE`].
    /// - [`ItemError::InvalidQuantity`]: the quantity is zero.
    /// - [`ItemError::TotalOverflow`]: the discounted line total cannot be represented.
    pub fn new(
        title: impl Into<String>,
        price: Decimal,
        quantity: u32,
        category: Category,
    ) -> Result<Self, ItemError> {
        let title = title.into();
        let title_len = title.chars().count();

        if title_len == 0 || title_len > MAX_TITLE_LEN {
            return Err(ItemError::InvalidTitle(title, title_len));
        }

        if price < MIN_PRICE {
            return Err(ItemError::InvalidPrice(price));
        }

        if quantity == 0 {
            return Err(ItemError::InvalidQuantity(quantity));
        }

        let price = usd(price);
        let discount = calculate_discount(category, quantity);
        let total =
            discounted_total(&price, quantity, discount).ok_or(ItemError::TotalOverflow)?;

        Ok(Self {
            title,
            price,
            quantity,
            category,
            discount,
            total,
        })
    }

    /// Returns the title of the item
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> &Money<'static, Currency> {
        &self.price
    }

    /// Returns the number of units bought
    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Returns the pricing category
    pub fn category(&self) -> Category {
        self.category
    }

    /// Discount percentage earned by this line.
    pub fn discount(&self) -> u8 {
        self.discount
    }

    /// Line total after discount, rounded to cents.
    pub fn total(&self) -> &Money<'static, Currency> {
        &self.total
    }
}
