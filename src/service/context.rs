//! Context passed to command handlers.
//!
//! Carries the parsed input, session variables, and a reference to the
//! shared application state. Role checks happen here, once, through the
//! typed identity — handlers never re-derive who the caller is.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::HandlerError;
use super::session::{Identity, Session};

/// The context passed to every command handler.
///
/// Generic over `S` (the shared state type) so handlers can access
/// whatever state the service is configured with.
pub struct Context<'a, S> {
    /// The command name being handled.
    command_name: String,
    /// Raw JSON input from the request.
    input: Value,
    /// Session variables (user ID, role, etc.).
    session: Session,
    /// Reference to the shared state.
    state: &'a S,
}

impl<'a, S> Context<'a, S> {
    pub(crate) fn new(command_name: String, input: Value, session: Session, state: &'a S) -> Self {
        Self {
            command_name,
            input,
            session,
            state,
        }
    }

    /// Deserialize the input payload into a typed struct.
    pub fn input<T: DeserializeOwned>(&self) -> Result<T, HandlerError> {
        serde_json::from_value(self.input.clone())
            .map_err(|e| HandlerError::DecodeFailed(e.to_string()))
    }

    /// Get the raw JSON input.
    pub fn raw_input(&self) -> &Value {
        &self.input
    }

    /// Get the command name.
    pub fn command_name(&self) -> &str {
        &self.command_name
    }

    /// Get the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The verified caller. Returns `Unauthorized` when the session
    /// carries no usable identity.
    pub fn identity(&self) -> Result<Identity, HandlerError> {
        self.session
            .identity()
            .ok_or_else(|| HandlerError::Unauthorized("missing or invalid caller identity".into()))
    }

    /// The verified caller, required to be an admin.
    pub fn require_admin(&self) -> Result<Identity, HandlerError> {
        let identity = self.identity()?;
        if !identity.is_admin() {
            return Err(HandlerError::Forbidden(format!(
                "{} requires the admin role",
                self.command_name
            )));
        }
        Ok(identity)
    }

    /// Get a reference to the shared state.
    pub fn state(&self) -> &S {
        self.state
    }

    /// Check if the raw input contains a field.
    pub fn has_field(&self, field: &str) -> bool {
        self.input.get(field).is_some()
    }

    /// Check if the raw input contains all specified fields.
    pub fn has_fields(&self, fields: &[&str]) -> bool {
        fields.iter().all(|f| self.has_field(f))
    }
}
