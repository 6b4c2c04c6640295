//! Trolley
//!
//! Trolley is an in-memory shopping cart: items keyed by identifier, with
//! add, remove, list and total operations priced in a single currency.

pub mod cart;
pub mod cli;
pub mod fixtures;
pub mod items;
pub mod prelude;
pub mod pricing;
pub mod receipt;
pub mod shared;
