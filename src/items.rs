//! Items

use rust_decimal::Decimal;

/// A line in a shopping cart, keyed by its `uuid`.
///
/// The unit price is a bare amount; the cart holding the item supplies the
/// currency.
#[derive(Clone, Debug, PartialEq)]
pub struct ShoppingItem {
    uuid: String,
    price: Decimal,
    quantity: u32,
}

impl ShoppingItem {
    /// Creates a new item with the given identifier, unit price and quantity.
    ///
    /// Neither the identifier nor the amounts are validated; an empty `uuid`
    /// is a valid key.
    pub fn new(uuid: impl Into<String>, price: Decimal, quantity: u32) -> Self {
        Self {
            uuid: uuid.into(),
            price,
            quantity,
        }
    }

    /// Returns the item identifier
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Returns the unit price of the item
    pub fn price(&self) -> Decimal {
        self.price
    }

    /// Returns the quantity of the item
    pub fn quantity(&self) -> u32 {
        self.quantity
    }
}
