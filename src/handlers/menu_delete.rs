//! Handler: menu.delete — remove a menu item (admin).

use serde::Deserialize;
use serde_json::{json, Value};

use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "menu.delete";

#[derive(Deserialize)]
pub struct Input {
    pub id: String,
}

pub fn guard(ctx: &Context<AppState>) -> bool {
    ctx.has_fields(&["id"])
}

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    ctx.require_admin()?;
    let input = ctx.input::<Input>()?;

    if !ctx.state().catalog.remove(&input.id)? {
        return Err(HandlerError::NotFound(input.id));
    }
    Ok(json!({ "deleted": true }))
}
