//! OrderStore — record of committed orders.
//!
//! Orders are immutable once created except for `status`, which moves
//! only through `update_status` and only along the transition graph in
//! [`OrderStatus::can_transition_to`]. Order numbers are unique; `create`
//! rejects collisions so callers can retry with a fresh number.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, RwLock};

use crate::error::StoreError;

use super::order::{Order, OrderStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOrderError {
    DuplicateOrderNumber(String),
    Store(StoreError),
}

impl fmt::Display for CreateOrderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreateOrderError::DuplicateOrderNumber(number) => {
                write!(f, "order number {} already taken", number)
            }
            CreateOrderError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for CreateOrderError {}

impl From<StoreError> for CreateOrderError {
    fn from(err: StoreError) -> Self {
        CreateOrderError::Store(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateStatusError {
    NotFound(String),
    InvalidTransition {
        from: OrderStatus,
        to: OrderStatus,
    },
    Store(StoreError),
}

impl fmt::Display for UpdateStatusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStatusError::NotFound(id) => write!(f, "order {} not found", id),
            UpdateStatusError::InvalidTransition { from, to } => {
                write!(f, "cannot change order status from {} to {}", from, to)
            }
            UpdateStatusError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for UpdateStatusError {}

impl From<StoreError> for UpdateStatusError {
    fn from(err: StoreError) -> Self {
        UpdateStatusError::Store(err)
    }
}

/// Orders by id plus the set of taken order numbers, behind one lock so
/// the uniqueness check and the insert are a single step.
#[derive(Default)]
struct Records {
    by_id: HashMap<String, Order>,
    numbers: HashSet<String>,
}

/// In-memory order store. Clone-friendly via `Arc`; clones share storage.
#[derive(Clone, Default)]
pub struct OrderStore {
    records: Arc<RwLock<Records>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a new order, enforcing order-number uniqueness.
    pub fn create(&self, order: Order) -> Result<(), CreateOrderError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("order create"))?;
        if records.numbers.contains(&order.order_number) {
            return Err(CreateOrderError::DuplicateOrderNumber(order.order_number));
        }
        records.numbers.insert(order.order_number.clone());
        records.by_id.insert(order.id.clone(), order);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Option<Order>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("order get"))?;
        Ok(records.by_id.get(id).cloned())
    }

    /// A customer's orders, newest first.
    pub fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Order>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("order list_by_owner"))?;
        let mut orders: Vec<Order> = records
            .by_id
            .values()
            .filter(|order| order.owner_id == owner_id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// Every order, newest first, optionally narrowed to one status.
    pub fn list_all(&self, status: Option<OrderStatus>) -> Result<Vec<Order>, StoreError> {
        let records = self
            .records
            .read()
            .map_err(|_| StoreError::LockPoisoned("order list_all"))?;
        let mut orders: Vec<Order> = records
            .by_id
            .values()
            .filter(|order| status.map_or(true, |s| order.status == s))
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// Apply a status transition. The only mutation path after creation.
    pub fn update_status(
        &self,
        id: &str,
        new_status: OrderStatus,
    ) -> Result<Order, UpdateStatusError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| StoreError::LockPoisoned("order update_status"))?;
        let order = records
            .by_id
            .get_mut(id)
            .ok_or_else(|| UpdateStatusError::NotFound(id.to_string()))?;
        if !order.status.can_transition_to(new_status) {
            return Err(UpdateStatusError::InvalidTransition {
                from: order.status,
                to: new_status,
            });
        }
        order.status = new_status;
        Ok(order.clone())
    }
}
