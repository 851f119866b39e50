//! Handler: order.list_all — every order for staff views, newest first,
//! optionally filtered by status.

use serde::Deserialize;
use serde_json::Value;

use crate::orders::OrderStatus;
use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "order.list_all";

#[derive(Default, Deserialize)]
pub struct Input {
    #[serde(default)]
    pub status: Option<OrderStatus>,
}

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    ctx.require_admin()?;
    let input = ctx.input::<Input>()?;
    let orders = ctx.state().orders.list_all(input.status)?;
    Ok(serde_json::to_value(orders)?)
}
