//! Receipt

use std::io;

use rusty_money::Money;
use tabled::{
    builder::Builder,
    settings::{Alignment, Style, object::Columns},
};
use thiserror::Error;

use crate::{
    cart::Cart,
    items::ShoppingItem,
    pricing::{TotalPriceError, line_total},
};

/// Errors that can occur when rendering a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// Error calculating line or cart totals.
    #[error(transparent)]
    TotalPrice(#[from] TotalPriceError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Printable summary of a cart.
#[derive(Debug)]
pub struct Receipt<'c> {
    cart: &'c Cart,
}

impl<'c> Receipt<'c> {
    /// Create a receipt for the given cart.
    pub fn new(cart: &'c Cart) -> Self {
        Self { cart }
    }

    /// Items on the receipt, sorted by `uuid`.
    pub fn lines(&self) -> Vec<&'c ShoppingItem> {
        let mut lines = self.cart.items();

        lines.sort_unstable_by(|a, b| a.uuid().cmp(b.uuid()));

        lines
    }

    /// Writes the receipt table and total.
    ///
    /// # Errors
    ///
    /// Returns an error if a total cannot be calculated or the output cannot be written.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["Item", "Unit Price", "Quantity", "Line Total"]);

        let currency = self.cart.currency();

        for item in self.lines() {
            builder.push_record([
                item.uuid().to_string(),
                Money::from_decimal(item.price(), currency).to_string(),
                item.quantity().to_string(),
                Money::from_decimal(line_total(item)?, currency).to_string(),
            ]);
        }

        let total = self.cart.total()?;

        let mut table = builder.build();
        table.with(Style::modern_rounded());
        table.modify(Columns::new(1..4), Alignment::right());

        writeln!(out, "\n{table}").map_err(|_err| ReceiptError::IO)?;
        writeln!(out, " Total: {total}").map_err(|_err| ReceiptError::IO)
    }
}
