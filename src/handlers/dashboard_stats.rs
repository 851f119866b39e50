//! Handler: dashboard.stats — counts and revenue for the admin dashboard.

use rust_decimal::Decimal;
use serde_json::{json, Value};

use crate::orders::OrderStatus;
use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "dashboard.stats";

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    ctx.require_admin()?;

    let state = ctx.state();
    let orders = state.orders.list_all(None)?;

    let pending_orders = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count();
    let completed_orders = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .count();
    let total_revenue: Decimal = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .map(|o| o.total)
        .sum();

    Ok(json!({
        "total_orders": orders.len(),
        "pending_orders": pending_orders,
        "completed_orders": completed_orders,
        "total_revenue": total_revenue,
        "total_menu_items": state.catalog.count()?,
    }))
}
