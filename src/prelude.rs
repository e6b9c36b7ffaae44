//! Tally prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, TICKET_COLUMNS},
    discounts::{Category, CategoryError, MAX_DISCOUNT, calculate_discount},
    fixtures::{CartFixture, FixtureError, Fixtures},
    items::{ItemError, LineItem},
    money::format_money,
    table::{Align, NO_ITEMS, Table, append_formatted},
};
