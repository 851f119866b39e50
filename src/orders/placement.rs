//! Order placement — all-or-nothing assembly of a cart into an order.
//!
//! Cart lines are reserved one at a time, in submitted order, against the
//! catalog's atomic check-and-decrement. The first failure releases every
//! reservation already made in the same call, so the caller-visible
//! outcome is all-or-nothing: either a new pending order exists and stock
//! dropped by exactly the ordered quantities, or neither happened.
//!
//! Trade-off, accepted: between a line's reservation and a later abort,
//! concurrent buyers can observe stock held by a call that ultimately
//! fails. This buys freedom from a multi-item atomic commit primitive;
//! the end state is still consistent.

use std::fmt;

use tracing::{error, info};

use crate::catalog::{CatalogStore, Reservation};
use crate::error::StoreError;

use super::number::OrderNumberGenerator;
use super::order::{CartLine, Order, OrderLine};
use super::store::{CreateOrderError, OrderStore};

/// Collision retries before giving up on order-number generation.
const MAX_NUMBER_ATTEMPTS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceOrderError {
    EmptyCart,
    InvalidQuantity { item_id: String },
    ItemNotFound { item_id: String },
    InsufficientStock { name: String },
    NumberSpaceExhausted,
    Store(StoreError),
}

impl fmt::Display for PlaceOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceOrderError::EmptyCart => write!(f, "cart is empty"),
            PlaceOrderError::InvalidQuantity { item_id } => {
                write!(f, "quantity for item {} must be positive", item_id)
            }
            PlaceOrderError::ItemNotFound { item_id } => {
                write!(f, "item {} not found", item_id)
            }
            PlaceOrderError::InsufficientStock { name } => {
                write!(f, "not enough {} in stock", name)
            }
            PlaceOrderError::NumberSpaceExhausted => {
                write!(f, "could not generate a unique order number")
            }
            PlaceOrderError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PlaceOrderError {}

impl From<StoreError> for PlaceOrderError {
    fn from(err: StoreError) -> Self {
        PlaceOrderError::Store(err)
    }
}

/// What a successful placement hands back to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedOrder {
    pub order_id: String,
    pub order_number: String,
}

/// Turn a cart into a committed order, or fail with zero net effect.
///
/// Validates the cart, reserves each line, prices the order from the
/// reservation-time snapshots, and commits it under a unique order
/// number. Every failure path after the first successful reservation
/// compensates with [`CatalogStore::release`] before returning.
pub fn place_order(
    catalog: &CatalogStore,
    orders: &OrderStore,
    numbers: &OrderNumberGenerator,
    owner_id: &str,
    cart: &[CartLine],
) -> Result<PlacedOrder, PlaceOrderError> {
    if cart.is_empty() {
        return Err(PlaceOrderError::EmptyCart);
    }
    if let Some(line) = cart.iter().find(|line| line.quantity == 0) {
        return Err(PlaceOrderError::InvalidQuantity {
            item_id: line.item_id.clone(),
        });
    }

    let mut reserved: Vec<OrderLine> = Vec::with_capacity(cart.len());
    for line in cart {
        match catalog.try_reserve(&line.item_id, line.quantity) {
            Ok(Reservation::Reserved { name, unit_price }) => reserved.push(OrderLine {
                item_id: line.item_id.clone(),
                item_name: name,
                quantity: line.quantity,
                unit_price,
            }),
            Ok(Reservation::InsufficientStock { name }) => {
                release_all(catalog, &reserved);
                return Err(PlaceOrderError::InsufficientStock { name });
            }
            Ok(Reservation::ItemNotFound) => {
                release_all(catalog, &reserved);
                return Err(PlaceOrderError::ItemNotFound {
                    item_id: line.item_id.clone(),
                });
            }
            Err(e) => {
                release_all(catalog, &reserved);
                return Err(e.into());
            }
        }
    }

    for _ in 0..MAX_NUMBER_ATTEMPTS {
        let order = Order::new(owner_id, numbers.generate(), reserved.clone());
        let placed = PlacedOrder {
            order_id: order.id.clone(),
            order_number: order.order_number.clone(),
        };
        match orders.create(order) {
            Ok(()) => {
                info!(
                    order_number = %placed.order_number,
                    owner_id,
                    lines = reserved.len(),
                    "order placed"
                );
                return Ok(placed);
            }
            Err(CreateOrderError::DuplicateOrderNumber(number)) => {
                info!(%number, "order number collision, regenerating");
            }
            Err(CreateOrderError::Store(e)) => {
                release_all(catalog, &reserved);
                return Err(e.into());
            }
        }
    }

    release_all(catalog, &reserved);
    Err(PlaceOrderError::NumberSpaceExhausted)
}

/// Compensate a failed placement: give back every unit reserved so far,
/// most recent first. Called exactly once per abort path.
fn release_all(catalog: &CatalogStore, reserved: &[OrderLine]) {
    for line in reserved.iter().rev() {
        if let Err(e) = catalog.release(&line.item_id, line.quantity) {
            error!(item_id = %line.item_id, quantity = line.quantity, error = %e, "failed to release reservation");
        }
    }
}
