//! Handler: order.get — one order, visible to its owner and to staff.

use serde::Deserialize;
use serde_json::Value;

use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "order.get";

#[derive(Deserialize)]
pub struct Input {
    pub id: String,
}

pub fn guard(ctx: &Context<AppState>) -> bool {
    ctx.has_fields(&["id"])
}

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    let identity = ctx.identity()?;
    let input = ctx.input::<Input>()?;

    let order = ctx
        .state()
        .orders
        .get(&input.id)?
        .ok_or_else(|| HandlerError::NotFound(input.id.clone()))?;

    if order.owner_id != identity.user_id && !identity.is_admin() {
        return Err(HandlerError::Forbidden(
            "order belongs to another customer".into(),
        ));
    }

    Ok(serde_json::to_value(order)?)
}
