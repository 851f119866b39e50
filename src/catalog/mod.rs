//! Menu catalog — item types and the inventory ledger.
//!
//! The catalog owns the only contended piece of shared state in the
//! system: each item's `available_quantity`. `CatalogStore::try_reserve`
//! is the atomic check-and-decrement primitive order placement builds on.

mod item;
mod store;

pub use item::{Category, MenuItem, NewMenuItem};
pub use store::{CatalogStore, Reservation};
