//! Handler: menu.get — one menu item by id.

use serde::Deserialize;
use serde_json::Value;

use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "menu.get";

#[derive(Deserialize)]
pub struct Input {
    pub id: String,
}

pub fn guard(ctx: &Context<AppState>) -> bool {
    ctx.has_fields(&["id"])
}

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    ctx.identity()?;
    let input = ctx.input::<Input>()?;

    let item = ctx
        .state()
        .catalog
        .get(&input.id)?
        .ok_or_else(|| HandlerError::NotFound(input.id.clone()))?;

    Ok(serde_json::to_value(item)?)
}
