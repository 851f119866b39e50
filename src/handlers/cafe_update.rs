//! Handler: cafe.update — create or replace the cafe profile (admin).

use serde_json::Value;

use crate::cafe::CafeProfile;
use crate::service::{Context, HandlerError};
use crate::state::AppState;

pub const COMMAND: &str = "cafe.update";

pub fn guard(ctx: &Context<AppState>) -> bool {
    ctx.has_fields(&["name", "description", "opening_hours", "location"])
}

pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
    ctx.require_admin()?;
    let profile = ctx.input::<CafeProfile>()?;

    for (field, value) in [
        ("name", &profile.name),
        ("description", &profile.description),
        ("opening_hours", &profile.opening_hours),
        ("location", &profile.location),
    ] {
        if value.trim().is_empty() {
            return Err(HandlerError::Rejected(format!("{field} must not be empty")));
        }
    }

    let saved = ctx.state().cafe.upsert(profile)?;
    Ok(serde_json::to_value(saved)?)
}
