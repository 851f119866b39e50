//! Handler: order.set_status — staff move an order along its lifecycle.
//!
//! A transition into `cancelled` releases the order's reserved stock back
//! to the catalog. `cancelled` is terminal, so the release runs at most
//! once per order.

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use crate::orders::OrderStatus;
use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "order.set_status";

#[derive(Deserialize)]
pub struct Input {
    pub id: String,
    pub status: OrderStatus,
}

pub fn guard(ctx: &Context<AppState>) -> bool {
    ctx.has_fields(&["id", "status"])
}

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    ctx.require_admin()?;
    let input = ctx.input::<Input>()?;

    let state = ctx.state();
    let updated = state.orders.update_status(&input.id, input.status)?;

    if updated.status == OrderStatus::Cancelled {
        for line in &updated.lines {
            state.catalog.release(&line.item_id, line.quantity)?;
        }
        info!(
            order_number = %updated.order_number,
            "cancelled order restocked"
        );
    }

    info!(
        order_number = %updated.order_number,
        status = %updated.status,
        "order status changed"
    );

    Ok(json!({
        "id": updated.id,
        "order_number": updated.order_number,
        "status": updated.status,
    }))
}
