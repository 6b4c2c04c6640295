//! Cart

use std::collections::hash_map::Values;

use rustc_hash::FxHashMap;
use rusty_money::{Money, iso::Currency};
use tracing::debug;

use crate::{
    items::ShoppingItem,
    pricing::{TotalPriceError, total_price},
};

/// The operations every cart implementation supports.
pub trait ShoppingCart {
    /// Returns a snapshot of every item in the cart, in no particular order.
    fn list_items(&self) -> Vec<ShoppingItem>;

    /// Inserts the item, replacing any item with the same `uuid`.
    ///
    /// Returns the replaced item, if there was one.
    fn add_item(&mut self, item: ShoppingItem) -> Option<ShoppingItem>;

    /// Removes the item with the given `uuid`, if present.
    fn remove_item(&mut self, uuid: &str) -> Option<ShoppingItem>;

    /// Sums `price * quantity` over every item in the cart.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if the total overflows.
    fn total(&self) -> Result<Money<'static, Currency>, TotalPriceError>;
}

/// Shopping cart, keyed by item `uuid`.
///
/// Holds at most one item per `uuid`; adding an item with a `uuid` that is
/// already present overwrites the earlier item rather than merging
/// quantities. Every item is priced in the cart's currency.
#[derive(Debug, Clone)]
pub struct Cart {
    items: FxHashMap<String, ShoppingItem>,
    currency: &'static Currency,
}

impl Cart {
    /// Create a new, empty cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: FxHashMap::default(),
            currency,
        }
    }

    /// Create a new cart with the given items.
    ///
    /// Items sharing a `uuid` collapse to the last one given.
    pub fn with_items(
        items: impl IntoIterator<Item = ShoppingItem>,
        currency: &'static Currency,
    ) -> Self {
        let mut cart = Cart::new(currency);

        cart.extend(items);

        cart
    }

    /// Iterate over the items in the cart, in no particular order.
    pub fn iter(&self) -> Values<'_, String, ShoppingItem> {
        self.items.values()
    }

    /// Borrow every item in the cart, in no particular order.
    pub fn items(&self) -> Vec<&ShoppingItem> {
        self.iter().collect()
    }

    /// Insert or replace the item keyed by its `uuid`.
    pub fn add_item(&mut self, item: ShoppingItem) -> Option<ShoppingItem> {
        let replaced = self.items.insert(item.uuid().to_string(), item);

        debug!(replaced = replaced.is_some(), "added item to cart");

        replaced
    }

    /// Remove the item with the given `uuid`. Missing items are ignored.
    pub fn remove_item(&mut self, uuid: &str) -> Option<ShoppingItem> {
        let removed = self.items.remove(uuid);

        debug!(uuid, removed = removed.is_some(), "removed item from cart");

        removed
    }

    /// Get an item from the cart.
    pub fn get(&self, uuid: &str) -> Option<&ShoppingItem> {
        self.items.get(uuid)
    }

    /// Check whether an item with the given `uuid` is in the cart.
    pub fn contains(&self, uuid: &str) -> bool {
        self.items.contains_key(uuid)
    }

    /// Calculate the total of the cart.
    ///
    /// # Errors
    ///
    /// Returns a `TotalPriceError` if the total overflows.
    pub fn total(&self) -> Result<Money<'static, Currency>, TotalPriceError> {
        total_price(self, self.currency)
    }

    /// Remove every item from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Get the number of distinct items in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the currency of the cart.
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }
}

impl<'c> IntoIterator for &'c Cart {
    type Item = &'c ShoppingItem;
    type IntoIter = Values<'c, String, ShoppingItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<ShoppingItem> for Cart {
    fn extend<I: IntoIterator<Item = ShoppingItem>>(&mut self, iter: I) {
        for item in iter {
            self.add_item(item);
        }
    }
}

impl ShoppingCart for Cart {
    fn list_items(&self) -> Vec<ShoppingItem> {
        self.iter().cloned().collect()
    }

    fn add_item(&mut self, item: ShoppingItem) -> Option<ShoppingItem> {
        Cart::add_item(self, item)
    }

    fn remove_item(&mut self, uuid: &str) -> Option<ShoppingItem> {
        Cart::remove_item(self, uuid)
    }

    fn total(&self) -> Result<Money<'static, Currency>, TotalPriceError> {
        Cart::total(self)
    }
}
