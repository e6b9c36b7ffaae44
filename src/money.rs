//! Money
//!
//! Ticket amounts are US dollars held as [`Money`] over a [`Decimal`] amount.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// Number of decimal places shown for every amount.
const CENTS_DP: u32 = 2;

/// Wraps a decimal amount of dollars.
pub fn usd(amount: Decimal) -> Money<'static, Currency> {
    Money::from_decimal(amount, iso::USD)
}

/// Zero dollars.
pub fn zero() -> Money<'static, Currency> {
    Money::from_minor(0, iso::USD)
}

/// Rounds an amount to whole cents, ties to even.
pub fn round_to_cents(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CENTS_DP, RoundingStrategy::MidpointNearestEven)
}

/// Total for `quantity` units at `price`, reduced by `discount` percent and rounded to cents.
///
/// Returns `None` if the amount cannot be represented.
pub fn discounted_total(
    price: &Money<'static, Currency>,
    quantity: u32,
    discount: u8,
) -> Option<Money<'static, Currency>> {
    let payable =
        Decimal::from(100_u8.saturating_sub(discount)).checked_div(Decimal::ONE_HUNDRED)?;
    let gross = price.amount().checked_mul(Decimal::from(quantity))?;
    let total = gross.checked_mul(payable)?;

    Some(Money::from_decimal(round_to_cents(total), price.currency()))
}

/// Formats an amount with its currency symbol and exactly two decimals, e.g. `$12.34`.
///
/// No thousands separator is inserted.
pub fn format_money(money: &Money<'_, Currency>) -> String {
    format!(
        "{}{:.2}",
        money.currency().symbol,
        round_to_cents(*money.amount())
    )
}
