//! Handler: cafe.get — the cafe profile (admin).

use serde_json::Value;

use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "cafe.get";

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    ctx.require_admin()?;
    let profile = ctx
        .state()
        .cafe
        .get()?
        .ok_or_else(|| HandlerError::NotFound("cafe profile".into()))?;
    Ok(serde_json::to_value(profile)?)
}
