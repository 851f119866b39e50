use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Order lifecycle. `Completed` and `Cancelled` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn is_terminal(self) -> bool {
        matches!(self, OrderStatus::Completed | OrderStatus::Cancelled)
    }

    /// The transition gate: each non-terminal state moves one step forward
    /// or to `Cancelled`. Terminal states accept nothing.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Preparing)
                | (Pending, Cancelled)
                | (Preparing, Ready)
                | (Preparing, Cancelled)
                | (Ready, Completed)
                | (Ready, Cancelled)
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// One cart position as submitted at checkout. Never persisted.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartLine {
    pub item_id: String,
    pub quantity: u32,
}

/// A committed order line. `unit_price` is the catalog price read at
/// reservation time and is never recomputed.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: String,
    pub item_name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

/// A committed purchase. Everything except `status` is immutable once the
/// order exists; `total` is computed from the lines' price snapshots at
/// creation and stored, never derived from live catalog prices.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub order_number: String,
    pub owner_id: String,
    pub lines: Vec<OrderLine>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Build a new pending order, totaling the line snapshots.
    pub fn new(owner_id: impl Into<String>, order_number: String, lines: Vec<OrderLine>) -> Self {
        let total = lines
            .iter()
            .map(|line| line.unit_price * Decimal::from(line.quantity))
            .sum();
        Self {
            id: Uuid::new_v4().to_string(),
            order_number,
            owner_id: owner_id.into(),
            lines,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
