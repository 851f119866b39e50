//! Handler: order.place — turn the caller's cart into a committed order.
//!
//! The all-or-nothing semantics live in [`crate::orders::place_order`];
//! this handler only authenticates, decodes, and maps the outcome.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::orders::{place_order, CartLine};
use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "order.place";

#[derive(Deserialize)]
pub struct Input {
    pub items: Vec<CartLine>,
}

pub fn guard(ctx: &Context<AppState>) -> bool {
    ctx.raw_input()
        .get("items")
        .and_then(Value::as_array)
        .map(|items| !items.is_empty())
        .unwrap_or(false)
}

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    let identity = ctx.identity()?;
    let input = ctx.input::<Input>()?;

    let state = ctx.state();
    let placed = place_order(
        &state.catalog,
        &state.orders,
        &state.numbers,
        &identity.user_id,
        &input.items,
    )?;

    Ok(json!({
        "order_id": placed.order_id,
        "order_number": placed.order_number,
    }))
}
