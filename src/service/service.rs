//! Service — command handler registry and dispatch.
//!
//! `Service<S>` holds shared state and a set of named command handlers.
//! Each handler receives a `Context<S>` and returns `Result<Value, HandlerError>`.
//!
//! ## Example
//!
//! ```ignore
//! use serde_json::json;
//!
//! let service = Service::new(AppState::new())
//!     .command("menu.list", |ctx| {
//!         let items = ctx.state().catalog.list()?;
//!         Ok(serde_json::to_value(items)?)
//!     });
//!
//! let result = service.dispatch("menu.list", json!({}), Session::new());
//! ```

use std::collections::HashMap;

use serde_json::Value;

use super::context::Context;
use super::error::HandlerError;
use super::session::Session;

/// A registered command handler with optional guard.
struct CommandHandler<S> {
    guard: Option<Box<dyn Fn(&Context<S>) -> bool + Send + Sync>>,
    handle: Box<dyn Fn(&Context<S>) -> Result<Value, HandlerError> + Send + Sync>,
}

/// Routes commands to handler functions.
///
/// Generic over `S`, the shared state type. Handlers receive a
/// `Context<S>` and can access the stores via `ctx.state()`.
pub struct Service<S> {
    state: S,
    handlers: HashMap<String, CommandHandler<S>>,
}

impl<S: Send + Sync + 'static> Service<S> {
    /// Create a new service with the given shared state.
    pub fn new(state: S) -> Self {
        Self {
            state,
            handlers: HashMap::new(),
        }
    }

    /// Register a command handler.
    ///
    /// Uses builder pattern — returns `self` for chaining.
    pub fn command<F>(mut self, name: &str, handler: F) -> Self
    where
        F: Fn(&Context<S>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: None,
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Register a command handler with a guard function.
    ///
    /// The guard is called before the handler. If it returns `false`,
    /// the command is rejected with `HandlerError::GuardRejected`.
    pub fn command_guarded<G, F>(mut self, name: &str, guard: G, handler: F) -> Self
    where
        G: Fn(&Context<S>) -> bool + Send + Sync + 'static,
        F: Fn(&Context<S>) -> Result<Value, HandlerError> + Send + Sync + 'static,
    {
        self.handlers.insert(
            name.to_string(),
            CommandHandler {
                guard: Some(Box::new(guard)),
                handle: Box::new(handler),
            },
        );
        self
    }

    /// Dispatch a command by name.
    ///
    /// Builds a `Context` from the input and session, looks up the handler,
    /// runs the guard (if any), then calls the handler.
    pub fn dispatch(
        &self,
        command: &str,
        input: Value,
        session: Session,
    ) -> Result<Value, HandlerError> {
        let handler = self
            .handlers
            .get(command)
            .ok_or_else(|| HandlerError::UnknownCommand(command.to_string()))?;

        let ctx = Context::new(command.to_string(), input, session, &self.state);

        if let Some(guard) = &handler.guard {
            if !guard(&ctx) {
                return Err(HandlerError::GuardRejected(command.to_string()));
            }
        }

        (handler.handle)(&ctx)
    }

    /// List registered command names.
    pub fn commands(&self) -> Vec<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }

    /// Get a reference to the shared state.
    pub fn state(&self) -> &S {
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn test_service() -> Service<()> {
        Service::new(())
    }

    #[test]
    fn dispatch_returns_handler_result() {
        let service = test_service().command("ping", |_ctx| Ok(json!({ "pong": true })));
        let result = service.dispatch("ping", json!({}), Session::new()).unwrap();
        assert_eq!(result, json!({ "pong": true }));
    }

    #[test]
    fn unknown_command() {
        let service = test_service().command("ping", |_ctx| Ok(json!({})));
        let result = service.dispatch("unknown", json!({}), Session::new());
        assert!(matches!(result, Err(HandlerError::UnknownCommand(ref s)) if s == "unknown"));
    }

    #[test]
    fn handler_error_propagates() {
        let service =
            test_service().command("fail", |_ctx| Err(HandlerError::Rejected("nope".into())));
        let result = service.dispatch("fail", json!({}), Session::new());
        assert!(matches!(result, Err(HandlerError::Rejected(ref s)) if s == "nope"));
    }

    #[test]
    fn decode_error_from_bad_payload() {
        #[derive(serde::Deserialize)]
        struct Input {
            _name: String,
        }

        let service = test_service().command("typed", |ctx| {
            let _input = ctx.input::<Input>()?;
            Ok(json!({}))
        });
        let result = service.dispatch("typed", json!({ "wrong": 1 }), Session::new());
        assert!(matches!(result, Err(HandlerError::DecodeFailed(_))));
    }

    #[test]
    fn commands_list() {
        let service = test_service()
            .command("a", |_| Ok(json!({})))
            .command("b", |_| Ok(json!({})));
        let mut cmds = service.commands();
        cmds.sort();
        assert_eq!(cmds, vec!["a", "b"]);
    }

    #[test]
    fn guard_passes() {
        let service = test_service().command_guarded(
            "greet",
            |ctx| ctx.has_fields(&["name"]),
            |ctx| {
                let name = ctx.raw_input()["name"].as_str().unwrap();
                Ok(json!({ "hello": name }))
            },
        );
        let result = service
            .dispatch("greet", json!({ "name": "Sam" }), Session::new())
            .unwrap();
        assert_eq!(result, json!({ "hello": "Sam" }));
    }

    #[test]
    fn guard_rejects() {
        let service = test_service().command_guarded(
            "greet",
            |ctx| ctx.has_fields(&["name"]),
            |_ctx| panic!("handler should not run"),
        );
        let result = service.dispatch("greet", json!({ "wrong": 1 }), Session::new());
        assert!(matches!(result, Err(HandlerError::GuardRejected(ref s)) if s == "greet"));
    }

    #[test]
    fn admin_gate_checks_session() {
        let service = test_service().command("admin.only", |ctx| {
            ctx.require_admin()?;
            Ok(json!({ "ok": true }))
        });

        // No identity at all
        let result = service.dispatch("admin.only", json!({}), Session::new());
        assert!(matches!(result, Err(HandlerError::Unauthorized(_))));

        // Customer identity
        let mut session = Session::new();
        session.set("x-user-id", "user-1");
        session.set("x-user-role", "customer");
        let result = service.dispatch("admin.only", json!({}), session);
        assert!(matches!(result, Err(HandlerError::Forbidden(_))));

        // Admin identity
        let mut session = Session::new();
        session.set("x-user-id", "user-2");
        session.set("x-user-role", "admin");
        assert!(service.dispatch("admin.only", json!({}), session).is_ok());
    }
}
