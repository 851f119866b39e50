//! Handler: menu.recommendations — suggested items, personalized when the
//! caller is known.

use serde_json::Value;

use crate::recommend::recommend;
use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "menu.recommendations";

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    let owner = ctx.session().user_id();
    let state = ctx.state();
    let picks = recommend(&state.catalog, &state.orders, owner)?;
    Ok(serde_json::to_value(picks)?)
}
