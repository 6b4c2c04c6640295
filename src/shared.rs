//! Shared Cart
//!
//! A [`Cart`] behind a mutex, for carts that outlive a single request and
//! are touched from more than one thread.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use rusty_money::{Money, iso::Currency};

use crate::{
    cart::{Cart, ShoppingCart},
    items::ShoppingItem,
    pricing::TotalPriceError,
};

/// Cloneable, thread-safe handle to a cart.
///
/// Every clone refers to the same cart.
#[derive(Debug, Clone)]
pub struct SharedCart {
    inner: Arc<Mutex<Cart>>,
}

impl SharedCart {
    /// Create a new, empty shared cart priced in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self::from(Cart::new(currency))
    }

    /// Run `f` with exclusive access to the underlying cart.
    pub fn with_cart<R>(&self, f: impl FnOnce(&mut Cart) -> R) -> R {
        f(&mut *self.lock())
    }

    /// Get the number of distinct items in the cart.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while the lock is held cannot leave the map half-written, so
    // a poisoned lock still guards a consistent cart.
    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl From<Cart> for SharedCart {
    fn from(cart: Cart) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cart)),
        }
    }
}

impl ShoppingCart for SharedCart {
    fn list_items(&self) -> Vec<ShoppingItem> {
        self.lock().iter().cloned().collect()
    }

    fn add_item(&mut self, item: ShoppingItem) -> Option<ShoppingItem> {
        self.lock().add_item(item)
    }

    fn remove_item(&mut self, uuid: &str) -> Option<ShoppingItem> {
        self.lock().remove_item(uuid)
    }

    fn total(&self) -> Result<Money<'static, Currency>, TotalPriceError> {
        self.lock().total()
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use rust_decimal::Decimal;
    use rusty_money::iso::GBP;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn clones_share_one_cart() -> TestResult {
        let mut cart = SharedCart::new(GBP);
        let mut other = cart.clone();

        cart.add_item(ShoppingItem::new("a", Decimal::new(10, 0), 2));
        other.add_item(ShoppingItem::new("b", Decimal::new(5, 0), 1));

        assert_eq!(cart.len(), 2);
        assert_eq!(other.total()?, Money::from_minor(2_500, GBP));

        Ok(())
    }

    #[test]
    fn concurrent_adds_keep_one_entry_per_uuid() -> TestResult {
        let cart = SharedCart::new(GBP);

        let handles: Vec<_> = (0..8)
            .map(|n| {
                let mut cart = cart.clone();

                thread::spawn(move || {
                    for i in 0..50 {
                        cart.add_item(ShoppingItem::new(
                            format!("item-{i}"),
                            Decimal::ONE,
                            n,
                        ));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().map_err(|_err| "worker thread panicked")?;
        }

        assert_eq!(cart.len(), 50);

        Ok(())
    }

    #[test]
    fn with_cart_gives_exclusive_access() {
        let cart = SharedCart::from(Cart::new(GBP));

        cart.with_cart(|inner| {
            inner.add_item(ShoppingItem::new("a", Decimal::ONE, 1));
            inner.remove_item("a");
        });

        assert!(cart.is_empty());
    }
}
