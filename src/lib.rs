//! Cafe ordering backend.
//!
//! A menu catalog with a race-safe inventory ledger, all-or-nothing
//! order placement, and staff order management, exposed as named
//! commands over HTTP.
//!
//! The one correctness-critical guarantee in the system lives in
//! [`CatalogStore::try_reserve`]: two concurrent checkouts competing for
//! the last unit of an item can never both succeed. Everything else is
//! conventional CRUD around it.

mod cafe;
mod catalog;
mod config;
mod error;
mod orders;
mod recommend;
mod state;

pub mod handlers;
pub mod http;
pub mod service;

pub use cafe::{CafeProfile, CafeStore};
pub use catalog::{CatalogStore, Category, MenuItem, NewMenuItem, Reservation};
pub use config::Config;
pub use error::StoreError;
pub use orders::{
    place_order, CartLine, CreateOrderError, Order, OrderLine, OrderNumberGenerator, OrderStatus,
    OrderStore, PlaceOrderError, PlacedOrder, UpdateStatusError,
};
pub use recommend::{recommend, RECOMMENDATION_LIMIT};
pub use state::AppState;
