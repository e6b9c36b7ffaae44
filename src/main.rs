//! Tally
//!
//! Prints the ticket for a sample cart, or for a named cart fixture with `-f`.
//!
//! Use `-f` to load a cart fixture by name
//! Use `--fixtures-dir` to change where fixtures are looked up
//! Use `-l` to set the log level (logs go to stderr)

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tally::prelude::*;

/// Arguments for the ticket printer
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Cart fixture to print instead of the built-in sample
    #[arg(short, long)]
    fixture: Option<String>,

    /// Directory holding the `carts/` fixtures
    #[arg(long, default_value = "./fixtures")]
    fixtures_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    log_level: String,
}

#[expect(clippy::print_stdout, reason = "The ticket is the program output")]
fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&args.log_level);

    let cart = match args.fixture.as_deref() {
        Some(name) => {
            info!(fixture = name, "loading cart");
            Fixtures::with_base_path(&args.fixtures_dir).cart(name)?
        }
        None => sample_cart()?,
    };

    println!("{}", cart.format_ticket());

    Ok(())
}

fn init_logging(log_level: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_err| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .compact()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();
}

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
