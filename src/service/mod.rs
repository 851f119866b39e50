//! service — convention-based command handler registry.
//!
//! The HTTP surface is a set of named commands dispatched on a
//! [`Service`]. Each handler receives a [`Context`] with the parsed
//! input, the caller's session, and the shared state.
//!
//! ## Handler Convention
//!
//! Each handler module exports:
//!
//! ```ignore
//! // src/handlers/order_place.rs
//!
//! pub const COMMAND: &str = "order.place";
//!
//! pub fn guard(ctx: &Context<AppState>) -> bool {
//!     ctx.has_fields(&["items"])
//! }
//!
//! pub fn handle(ctx: &Context<AppState>) -> Result<Value, HandlerError> {
//!     let identity = ctx.identity()?;
//!     let input = ctx.input::<Input>()?;
//!     // ...
//! }
//! ```

mod context;
mod error;
mod service;
mod session;

pub use context::Context;
pub use error::HandlerError;
pub use service::Service;
pub use session::{Identity, Role, Session};

/// Register handler modules with a service using the convention pattern.
///
/// Each handler module must export `COMMAND`, `guard`, and `handle`.
///
/// # Example
/// ```ignore
/// let service = cafe_service::register_handlers!(
///     service::Service::new(state),
///     handlers::order_place,
///     handlers::order_set_status,
/// );
/// ```
#[macro_export]
macro_rules! register_handlers {
    ($service:expr, $( $($seg:ident)::+ ),+ $(,)?) => {
        $service
        $(
            .command_guarded(
                $($seg)::+::COMMAND,
                $($seg)::+::guard,
                $($seg)::+::handle,
            )
        )+
    };
}
