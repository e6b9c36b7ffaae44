//! Discounts
//!
//! Every line item belongs to a [`Category`] which, together with the quantity bought,
//! decides the percentage knocked off its line total.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Highest percentage any line item can be discounted by.
pub const MAX_DISCOUNT: u8 = 80;

/// Every this many units bought adds one percentage point to the discount.
const VOLUME_STEP: u32 = 10;

/// Error returned when parsing an unknown category name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct CategoryError(pub String);

/// Pricing category of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// New arrivals, never discounted.
    New,

    /// Regular stock, discounted by volume only.
    Regular,

    /// Buy more than one and pay for half.
    SecondFree,

    /// Clearance stock.
    Sale,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::New,
        Category::Regular,
        Category::SecondFree,
        Category::Sale,
    ];

    /// Upper-case name used in fixtures and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::New => "NEW",
            Category::Regular => "REGULAR",
            Category::SecondFree => "SECOND_FREE",
            Category::Sale => "SALE",
        }
    }

    /// Discount before the volume bonus is added, or `None` if the category is never
    /// discounted.
    fn base_discount(self, quantity: u32) -> Option<u8> {
        match self {
            Category::New => None,
            Category::Regular => Some(0),
            Category::SecondFree if quantity > 1 => Some(50),
            Category::SecondFree => Some(0),
            Category::Sale => Some(70),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CategoryError(s.to_string()))
    }
}

/// Calculates the discount percentage for `quantity` units of an item in `category`.
///
/// [`Category::New`] is never discounted. Every other category starts from its base
/// discount and gains one point per ten units bought, capped at [`MAX_DISCOUNT`].
pub fn calculate_discount(category: Category, quantity: u32) -> u8 {
    let volume_bonus = u8::try_from(quantity / VOLUME_STEP).unwrap_or(u8::MAX);

    category.base_discount(quantity).map_or(0, |base| {
        base.saturating_add(volume_bonus).min(MAX_DISCOUNT)
    })
}
