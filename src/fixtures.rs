//! Fixtures
//!
//! Carts described in YAML, loaded from `<base>/carts/<name>.yml`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{cart::Cart, discounts::Category, items::ItemError};

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// An item failed validation (1-based position in the fixture, cause).
    #[error("Invalid item #{0}: {1}")]
    Item(usize, #[source] ItemError),
}

/// Wrapper for cart items in YAML
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Items in ticket order
    pub items: Vec<ItemFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item title
    pub title: String,

    /// Unit price in dollars (e.g., "17.20")
    pub price: String,

    /// Units bought
    pub quantity: u32,

    /// Pricing category (e.g., `SECOND_FREE`)
    pub category: Category,
}

impl CartFixture {
    /// Parse a cart fixture from YAML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not a valid cart fixture.
    pub fn from_yaml(contents: &str) -> Result<Self, FixtureError> {
        Ok(serde_norway::from_str(contents)?)
    }

    /// Read and parse a cart fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;

        debug!(path = %path.display(), "loading cart fixture");

        Self::from_yaml(&contents)
    }

    /// Build a cart from the fixture items, in order.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first item with an unparseable price or one that
    /// fails validation.
    pub fn into_cart(self) -> Result<Cart, FixtureError> {
        let mut cart = Cart::new();

        for (idx, item) in self.items.into_iter().enumerate() {
            let price = parse_price(&item.price)?;

            cart.add_item(item.title, price, item.quantity, item.category)
                .map_err(|err| FixtureError::Item(idx + 1, err))?;
        }

        Ok(cart)
    }
}

/// Locates cart fixtures under a base directory.
#[derive(Debug, Clone)]
pub struct Fixtures {
    base_path: PathBuf,
}

impl Default for Fixtures {
    fn default() -> Self {
        Self::with_base_path("./fixtures")
    }
}

impl Fixtures {
    /// Fixtures under `./fixtures`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixtures under a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Path of the named cart fixture.
    pub fn cart_path(&self, name: &str) -> PathBuf {
        self.base_path.join("carts").join(format!("{name}.yml"))
    }

    /// Load the named cart fixture into a new cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or any item is invalid.
    pub fn cart(&self, name: &str) -> Result<Cart, FixtureError> {
        CartFixture::from_path(self.cart_path(name))?.into_cart()
    }
}

/// Parse a price string (e.g., "0.99" or "$0.99") into dollars.
///
/// # Errors
///
/// Returns an error if the amount is not a decimal number.
pub fn parse_price(s: &str) -> Result<Decimal, FixtureError> {
    let trimmed = s.trim();
    let amount = trimmed.strip_prefix('$').unwrap_or(trimmed);

    amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))
}
