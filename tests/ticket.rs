//! End-to-end ticket rendering for the sample cart.
//!
//! Expected lines:
//!
//! 1. Apple, NEW, 5 x $0.99 - no discount -> $4.95
//! 2. Banana, `SECOND_FREE`, 4 x $20.00 - 50% -> $40.00
//! 3. Toilet paper, SALE, 1 x $17.20 - 70% -> $5.16
//! 4. Nails, REGULAR, 500 x $2.00 - 500 / 10 = 50% -> $500.00
//!
//! Total: $550.11

use rust_decimal::Decimal;
use testresult::TestResult;

use tally::prelude::*;

fn sample_cart() -> Result<Cart, ItemError> {
    let mut cart = Cart::new();

    cart.add_item("Apple", Decimal::new(99, 2), 5, Category::New)?;
    cart.add_item("Banana", Decimal::new(2000, 2), 4, Category::SecondFree)?;
    cart.add_item(
        "A long piece of toilet paper",
        Decimal::new(1720, 2),
        1,
        Category::Sale,
    )?;
    cart.add_item("Nails", Decimal::new(200, 2), 500, Category::Regular)?;

    Ok(cart)
}

#[test]
fn sample_cart_renders_full_ticket() -> TestResult {
    let expected = [
        "# Item                          Price Quan. Discount   Total",
        "------------------------------------------------------------",
        "1 Apple                         $0.99     5        -   $4.95",
        "2 Banana                       $20.00     4      50%  $40.00",
        "3 A long piece of toilet paper $17.20     1      70%   $5.16",
        "4 Nails                         $2.00   500      50% $500.00",
        "------------------------------------------------------------",
        "4                                                    $550.11",
    ]
    .join("\n");

    assert_eq!(sample_cart()?.format_ticket(), expected);

    Ok(())
}

#[test]
fn every_line_has_the_rule_width() -> TestResult {
    let ticket = sample_cart()?.format_ticket();
    let widths: Vec<usize> = ticket.lines().map(|line| line.chars().count()).collect();

    assert_eq!(widths.len(), 8);
    assert!(widths.iter().all(|&width| width == 60), "widths: {widths:?}");

    Ok(())
}

#[test]
fn ticket_has_six_columns() -> TestResult {
    let ticket = sample_cart()?.ticket();

    assert_eq!(ticket.column_widths(), [1, 28, 6, 5, 8, 7]);
    assert_eq!(ticket.rows().len(), 4);

    Ok(())
}

#[test]
fn empty_cart_prints_no_items() {
    assert_eq!(Cart::new().format_ticket(), "No items.");
}

#[test]
fn invalid_items_are_rejected_without_changing_the_cart() -> TestResult {
    let mut cart = sample_cart()?;
    let before = cart.format_ticket();

    let too_long = "A".repeat(33);

    assert!(cart.add_item(too_long, Decimal::ONE, 1, Category::New).is_err());
    assert!(cart.add_item("Free", Decimal::new(0, 2), 1, Category::New).is_err());
    assert!(cart.add_item("Nothing", Decimal::ONE, 0, Category::New).is_err());

    assert_eq!(cart.len(), 4);
    assert_eq!(cart.format_ticket(), before);

    Ok(())
}

#[test]
fn cheap_item_keeps_leading_zero() -> TestResult {
    let mut cart = Cart::new();
    cart.add_item("Pin", Decimal::new(1, 2), 1, Category::Regular)?;

    assert_eq!(
        cart.format_ticket(),
        [
            "# Item Price Quan. Discount Total",
            "---------------------------------",
            "1 Pin  $0.01     1        - $0.01",
            "---------------------------------",
            "1                           $0.01",
        ]
        .join("\n")
    );

    Ok(())
}

#[test]
fn unrepresentable_totals_are_rejected_without_changing_the_cart() -> TestResult {
    let mut cart = sample_cart()?;
    let before = cart.format_ticket();

    let yacht = Decimal::from_i128_with_scale(10_i128.pow(20), 0);
    let tower = Decimal::from_i128_with_scale(5 * 10_i128.pow(28), 0);

    assert_eq!(
        cart.add_item("Yacht", yacht, 1_000_000_000, Category::Regular),
        Err(ItemError::TotalOverflow)
    );
    assert_eq!(cart.len(), 4);
    assert_eq!(cart.format_ticket(), before);

    cart.add_item("Tower", tower, 1, Category::New)?;

    assert_eq!(
        cart.add_item("Tower", tower, 1, Category::New),
        Err(ItemError::TotalOverflow)
    );
    assert_eq!(cart.len(), 5);
    assert!(cart.format_ticket().contains("5 Tower"));

    Ok(())
}
