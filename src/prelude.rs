//! Trolley prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::{Cart, ShoppingCart},
    fixtures::{CartFixture, FixtureError, load_cart},
    items::ShoppingItem,
    pricing::{TotalPriceError, line_total, total_price},
    receipt::{Receipt, ReceiptError},
    shared::SharedCart,
};
