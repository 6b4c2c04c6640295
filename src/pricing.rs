//! Prices

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use thiserror::Error;
use tracing::trace;

use crate::items::ShoppingItem;

/// Errors that can occur while calculating total price.
#[derive(Debug, Error, PartialEq)]
pub enum TotalPriceError {
    /// The amount does not fit in a `Decimal`.
    #[error("total overflowed at item {0}")]
    Overflow(String),
}

/// Calculates `price * quantity` for a single item, without rounding.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the product does not fit in a `Decimal`.
pub fn line_total(item: &ShoppingItem) -> Result<Decimal, TotalPriceError> {
    item.price()
        .checked_mul(Decimal::from(item.quantity()))
        .ok_or_else(|| TotalPriceError::Overflow(item.uuid().to_string()))
}

/// Calculates the total price of a set of items in the given currency.
///
/// An empty set totals zero. No rounding is applied to the sum.
///
/// # Errors
///
/// Returns [`TotalPriceError::Overflow`] if the total does not fit in a `Decimal`.
pub fn total_price<'a, 'b>(
    items: impl IntoIterator<Item = &'b ShoppingItem>,
    currency: &'a Currency,
) -> Result<Money<'a, Currency>, TotalPriceError> {
    let total = items.into_iter().try_fold(Decimal::ZERO, |acc, item| {
        acc.checked_add(line_total(item)?)
            .ok_or_else(|| TotalPriceError::Overflow(item.uuid().to_string()))
    })?;

    trace!(%total, currency = currency.iso_alpha_code, "calculated total");

    Ok(Money::from_decimal(total, currency))
}
