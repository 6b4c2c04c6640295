//! Command line interface

use std::{io, path::PathBuf};

use clap::Parser;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::{
    cart::Cart,
    fixtures::{FixtureError, load_cart, parse_currency, parse_item},
    receipt::{Receipt, ReceiptError},
};

/// Errors surfaced by the `trolley` binary.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error loading a fixture or parsing an item
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// Error rendering the receipt
    #[error(transparent)]
    Receipt(#[from] ReceiptError),

    /// The tracing subscriber could not be installed
    #[error("Failed to initialise logging: {0}")]
    Logging(String),
}

/// Trolley configuration
#[derive(Debug, Parser)]
#[command(name = "trolley", about = "Build a shopping cart and print its total", long_about = None)]
pub struct Cli {
    /// YAML cart fixture to start from
    #[arg(short, long, env = "TROLLEY_FIXTURE")]
    pub fixture: Option<PathBuf>,

    /// Currency of the cart when no fixture is given (GBP, USD or EUR)
    #[arg(short, long, env = "TROLLEY_CURRENCY", default_value = "GBP")]
    pub currency: String,

    /// Item to add, as `UUID=PRICExQTY` (e.g. `apples=0.50 GBPx6`)
    #[arg(short, long = "add", value_name = "ITEM")]
    pub add: Vec<String>,

    /// Item uuid to remove, applied after every `--add`
    #[arg(short, long = "remove", value_name = "UUID")]
    pub remove: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Install a stderr `tracing` subscriber filtered by `RUST_LOG` or the
    /// configured log level.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init_logging(&self) -> Result<(), CliError> {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(&self.log_level)),
            )
            .with_writer(io::stderr)
            .try_init()
            .map_err(|err| CliError::Logging(err.to_string()))
    }

    /// Build the cart described by the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the fixture, currency or an item cannot be parsed, or
    /// if an added item is priced in another currency from the cart.
    pub fn build_cart(&self) -> Result<Cart, CliError> {
        let mut cart = match &self.fixture {
            Some(path) => {
                debug!(path = %path.display(), "loading cart fixture");

                load_cart(path)?
            }
            None => Cart::new(parse_currency(&self.currency)?),
        };

        for item in &self.add {
            cart.add_item(parse_item(item, cart.currency())?);
        }

        for uuid in &self.remove {
            cart.remove_item(uuid);
        }

        info!(
            items = cart.len(),
            currency = cart.currency().iso_alpha_code,
            "built cart"
        );

        Ok(cart)
    }

    /// Build the cart and write its receipt to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart cannot be built or the receipt cannot be written.
    pub fn run(&self, out: impl io::Write) -> Result<(), CliError> {
        let cart = self.build_cart()?;

        Receipt::new(&cart).write_to(out)?;

        Ok(())
    }
}
