//! Handler: menu.create — add a menu item (admin).

use serde_json::Value;

use crate::catalog::NewMenuItem;
use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "menu.create";

pub fn guard(ctx: &Context<AppState>) -> bool {
    ctx.has_fields(&[
        "name",
        "description",
        "price",
        "category",
        "available_quantity",
    ])
}

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    ctx.require_admin()?;
    let new = ctx.input::<NewMenuItem>()?;
    new.validate()
        .map_err(|reason| HandlerError::Rejected(reason.into()))?;

    let item = ctx.state().catalog.insert(new)?;
    Ok(serde_json::to_value(item)?)
}
