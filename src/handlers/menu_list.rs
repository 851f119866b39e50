//! Handler: menu.list — the public menu, name ascending.

use serde_json::Value;

use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "menu.list";

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    let items = ctx.state().catalog.list()?;
    Ok(serde_json::to_value(items)?)
}
