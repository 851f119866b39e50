//! Handler: order.list_mine — the caller's orders, newest first.

use serde_json::Value;

use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "order.list_mine";

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    let identity = ctx.identity()?;
    let orders = ctx.state().orders.list_by_owner(&identity.user_id)?;
    Ok(serde_json::to_value(orders)?)
}
