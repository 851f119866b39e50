//! Handler: menu.update — replace a menu item's fields (admin).

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::NewMenuItem;
use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "menu.update";

#[derive(Deserialize)]
pub struct Input {
    pub id: String,
    #[serde(flatten)]
    pub fields: NewMenuItem,
}

pub fn guard(ctx: &Context<AppState>) -> bool {
    ctx.has_fields(&[
        "id",
        "name",
        "description",
        "price",
        "category",
        "available_quantity",
    ])
}

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    ctx.require_admin()?;
    let input = ctx.input::<Input>()?;
    input
        .fields
        .validate()
        .map_err(|reason| HandlerError::Rejected(reason.into()))?;

    let item = ctx
        .state()
        .catalog
        .update(&input.id, input.fields)?
        .ok_or_else(|| HandlerError::NotFound(input.id.clone()))?;

    Ok(serde_json::to_value(item)?)
}
