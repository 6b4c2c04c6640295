//! Fixtures
//!
//! Carts described in YAML:
//!
//! ```yaml
//! currency: GBP
//! items:
//!   - uuid: apples
//!     price: "0.50 GBP"
//!     quantity: 6
//! ```

use std::{fs, path::Path, str::FromStr};

use rust_decimal::Decimal;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;
use thiserror::Error;

use crate::{cart::Cart, items::ShoppingItem};

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

    /// Invalid item format
    #[error("Invalid item format: {0}")]
    InvalidItem(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Item priced in a different currency from the cart
    #[error("Currency mismatch for item {uuid}: expected {expected}, found {found}")]
    CurrencyMismatch {
        /// Item identifier
        uuid: String,
        /// Cart currency code
        expected: &'static str,
        /// Item currency code
        found: &'static str,
    },
}

/// Cart Fixture
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Cart currency code (e.g., "GBP")
    pub currency: String,

    /// Items in the cart, later entries overwriting earlier ones with the same uuid
    #[serde(default)]
    pub items: Vec<ItemFixture>,
}

/// Item Fixture
#[derive(Debug, Deserialize)]
pub struct ItemFixture {
    /// Item identifier
    pub uuid: String,

    /// Unit price (e.g., "2.99 GBP")
    pub price: String,

    /// Quantity
    pub quantity: u32,
}

impl CartFixture {
    /// Load a cart fixture from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let contents = fs::read_to_string(path)?;

        contents.parse()
    }

    /// Build a cart from the fixture.
    ///
    /// # Errors
    ///
    /// Returns an error if a price or currency cannot be parsed, or if an item
    /// is priced in a different currency from the cart.
    pub fn into_cart(self) -> Result<Cart, FixtureError> {
        let currency = parse_currency(&self.currency)?;

        let items = self
            .items
            .into_iter()
            .map(|fixture| fixture.into_item(currency))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cart::with_items(items, currency))
    }
}

impl FromStr for CartFixture {
    type Err = FixtureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(serde_norway::from_str(s)?)
    }
}

impl ItemFixture {
    /// Build an item, requiring its price to be in `currency`.
    ///
    /// # Errors
    ///
    /// Returns an error if the price cannot be parsed or is in another currency.
    pub fn into_item(self, currency: &'static Currency) -> Result<ShoppingItem, FixtureError> {
        let price = price_in(&self.uuid, &self.price, currency)?;

        Ok(ShoppingItem::new(self.uuid, price, self.quantity))
    }
}

/// Load a cart from a YAML fixture file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed, or converted into a cart.
pub fn load_cart(path: impl AsRef<Path>) -> Result<Cart, FixtureError> {
    CartFixture::from_path(path)?.into_cart()
}

/// Parse an item string of the form `UUID=PRICExQUANTITY`, e.g. `apples=0.50 GBPx6`,
/// for a cart priced in `currency`.
///
/// The uuid runs up to the first `=` and the quantity follows the last `x`.
///
/// # Errors
///
/// Returns an error if the item string is malformed, the price cannot be
/// parsed, or the price is in another currency.
pub fn parse_item(s: &str, currency: &'static Currency) -> Result<ShoppingItem, FixtureError> {
    let (uuid, rest) = s
        .split_once('=')
        .ok_or_else(|| FixtureError::InvalidItem(format!("Expected 'UUID=PRICExQTY', got: {s}")))?;

    let (price, quantity) = rest
        .rsplit_once('x')
        .ok_or_else(|| FixtureError::InvalidItem(format!("Missing quantity in: {s}")))?;

    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|_err| FixtureError::InvalidItem(s.to_string()))?;

    Ok(ShoppingItem::new(
        uuid,
        price_in(uuid, price, currency)?,
        quantity,
    ))
}

/// Parse price string (e.g., "2.99 GBP") into an exact amount and currency
///
/// The amount is kept as written; fractions of a minor unit are not rounded.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(Decimal, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((amount, parse_currency(currency_code)?))
}

/// Parse an ISO currency code. Only GBP, USD and EUR are supported.
///
/// # Errors
///
/// Returns [`FixtureError::UnknownCurrency`] for any other code.
pub fn parse_currency(code: &str) -> Result<&'static Currency, FixtureError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(FixtureError::UnknownCurrency(other.to_string())),
    }
}

fn price_in(
    uuid: &str,
    price: &str,
    currency: &'static Currency,
) -> Result<Decimal, FixtureError> {
    let (amount, price_currency) = parse_price(price)?;

    if price_currency != currency {
        return Err(FixtureError::CurrencyMismatch {
            uuid: uuid.to_string(),
            expected: currency.iso_alpha_code,
            found: price_currency.iso_alpha_code,
        });
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use rusty_money::Money;
    use testresult::TestResult;

    use super::*;

    const WEEKLY_SHOP: &str = r#"
currency: GBP
items:
  - uuid: apples
    price: "0.50 GBP"
    quantity: 6
  - uuid: bread
    price: "1.35 GBP"
    quantity: 1
  - uuid: apples
    price: "0.45 GBP"
    quantity: 4
"#;

    #[test]
    fn parse_price_rejects_amount_without_currency() {
        assert!(matches!(
            parse_price("2.99"),
            Err(FixtureError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("2.99 GBP each"),
            Err(FixtureError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_is_case_sensitive_on_currency() {
        let result = parse_price("2.99 gbp");

        assert!(matches!(result, Err(FixtureError::UnknownCurrency(code)) if code == "gbp"));
    }

    #[test]
    fn parse_price_ignores_surrounding_whitespace() -> TestResult {
        let (amount, currency) = parse_price("  12.50\tEUR \n")?;

        assert_eq!(amount, Decimal::new(1_250, 2));
        assert_eq!(currency, EUR);

        Ok(())
    }

    #[test]
    fn parse_price_keeps_fractions_of_a_penny() -> TestResult {
        let (amount, currency) = parse_price("0.004 GBP")?;

        assert_eq!(amount, Decimal::new(4, 3));
        assert_eq!(currency, GBP);

        Ok(())
    }

    #[test]
    fn parse_item_reads_uuid_price_and_quantity() -> TestResult {
        let item = parse_item("apples=0.50 GBPx6", GBP)?;

        assert_eq!(item, ShoppingItem::new("apples", Decimal::new(50, 2), 6));

        Ok(())
    }

    #[test]
    fn parse_item_allows_empty_uuid() -> TestResult {
        let item = parse_item("=1 USDx2", USD)?;

        assert_eq!(item.uuid(), "");
        assert_eq!(item.quantity(), 2);

        Ok(())
    }

    #[test]
    fn parse_item_rejects_missing_quantity() {
        assert!(matches!(
            parse_item("apples=0.50 GBP", GBP),
            Err(FixtureError::InvalidItem(_))
        ));
        assert!(matches!(
            parse_item("apples=0.50 GBPx-1", GBP),
            Err(FixtureError::InvalidItem(_))
        ));
    }

    #[test]
    fn parse_item_rejects_other_currency() {
        assert!(matches!(
            parse_item("coffee=3.00 USDx1", GBP),
            Err(FixtureError::CurrencyMismatch { uuid, expected: "GBP", found: "USD" })
                if uuid == "coffee"
        ));
    }

    #[test]
    fn fixture_builds_cart_with_last_write_wins() -> TestResult {
        let cart = WEEKLY_SHOP.parse::<CartFixture>()?.into_cart()?;

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get("apples").map(ShoppingItem::quantity), Some(4));
        assert_eq!(cart.total()?, Money::from_minor(315, GBP));

        Ok(())
    }

    #[test]
    fn fixture_without_items_is_empty_cart() -> TestResult {
        let cart = "currency: EUR".parse::<CartFixture>()?.into_cart()?;

        assert!(cart.is_empty());
        assert_eq!(cart.currency(), EUR);

        Ok(())
    }

    #[test]
    fn fixture_rejects_mixed_currencies() -> TestResult {
        let fixture: CartFixture = r#"
currency: GBP
items:
  - uuid: coffee
    price: "3.00 USD"
    quantity: 1
"#
        .parse()?;

        assert!(matches!(
            fixture.into_cart(),
            Err(FixtureError::CurrencyMismatch { uuid, .. }) if uuid == "coffee"
        ));

        Ok(())
    }

    #[test]
    fn load_cart_reads_file() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(WEEKLY_SHOP.as_bytes())?;

        let cart = load_cart(file.path())?;

        assert_eq!(cart.len(), 2);

        Ok(())
    }

    #[test]
    fn load_cart_reports_missing_file() {
        let result = load_cart("does/not/exist.yml");

        assert!(matches!(result, Err(FixtureError::Io(_))));
    }
}
