//! Tally
//!
//! Tally keeps a cart of line items, discounts each line by its pricing category and the
//! quantity bought, and renders the result as a plain-text ticket.
//!
//! ```
//! use rust_decimal::Decimal;
//! use tally::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add_item("Nails", Decimal::new(200, 2), 500, Category::Regular)?;
//!
//! assert!(cart.format_ticket().ends_with("$500.00"));
//! # Ok::<(), ItemError>(())
//! ```

pub mod cart;
pub mod discounts;
pub mod fixtures;
pub mod items;
pub mod money;
pub mod prelude;
pub mod table;
