//! Error types for command handlers.

use std::error::Error;
use std::fmt;

use crate::error::StoreError;
use crate::orders::{PlaceOrderError, UpdateStatusError};

/// Error type for command handler operations.
#[derive(Debug)]
pub enum HandlerError {
    /// No handler registered for this command name.
    UnknownCommand(String),
    /// Payload decode / deserialization failed.
    DecodeFailed(String),
    /// Business logic rejected the command (validation, invariant violation).
    Rejected(String),
    /// Resource not found.
    NotFound(String),
    /// Missing or invalid caller identity.
    Unauthorized(String),
    /// Caller identity lacks the required role.
    Forbidden(String),
    /// Store infrastructure failure.
    Store(StoreError),
    /// Guard rejected the command (input shape validation failed).
    GuardRejected(String),
    /// Other error.
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for HandlerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandlerError::UnknownCommand(name) => write!(f, "unknown command: {}", name),
            HandlerError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
            HandlerError::Rejected(msg) => write!(f, "rejected: {}", msg),
            HandlerError::NotFound(id) => write!(f, "not found: {}", id),
            HandlerError::Unauthorized(msg) => write!(f, "unauthorized: {}", msg),
            HandlerError::Forbidden(msg) => write!(f, "forbidden: {}", msg),
            HandlerError::Store(e) => write!(f, "store error: {}", e),
            HandlerError::GuardRejected(name) => {
                write!(f, "guard rejected command: {}", name)
            }
            HandlerError::Other(e) => write!(f, "handler error: {}", e),
        }
    }
}

impl Error for HandlerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            HandlerError::Store(e) => Some(e),
            HandlerError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<StoreError> for HandlerError {
    fn from(err: StoreError) -> Self {
        HandlerError::Store(err)
    }
}

impl From<serde_json::Error> for HandlerError {
    fn from(err: serde_json::Error) -> Self {
        HandlerError::DecodeFailed(err.to_string())
    }
}

impl From<PlaceOrderError> for HandlerError {
    fn from(err: PlaceOrderError) -> Self {
        match err {
            PlaceOrderError::EmptyCart | PlaceOrderError::InvalidQuantity { .. } => {
                HandlerError::Rejected(err.to_string())
            }
            PlaceOrderError::ItemNotFound { ref item_id } => {
                HandlerError::NotFound(item_id.clone())
            }
            PlaceOrderError::InsufficientStock { .. } => HandlerError::Rejected(err.to_string()),
            PlaceOrderError::NumberSpaceExhausted => HandlerError::Other(Box::new(err)),
            PlaceOrderError::Store(e) => HandlerError::Store(e),
        }
    }
}

impl From<UpdateStatusError> for HandlerError {
    fn from(err: UpdateStatusError) -> Self {
        match err {
            UpdateStatusError::NotFound(id) => HandlerError::NotFound(id),
            UpdateStatusError::InvalidTransition { .. } => HandlerError::Rejected(err.to_string()),
            UpdateStatusError::Store(e) => HandlerError::Store(e),
        }
    }
}

impl HandlerError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            HandlerError::UnknownCommand(_) => 404,
            HandlerError::DecodeFailed(_) => 400,
            HandlerError::Rejected(_) => 422,
            HandlerError::NotFound(_) => 404,
            HandlerError::Unauthorized(_) => 401,
            HandlerError::Forbidden(_) => 403,
            HandlerError::Store(_) => 500,
            HandlerError::GuardRejected(_) => 400,
            HandlerError::Other(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::OrderStatus;

    #[test]
    fn insufficient_stock_maps_to_unprocessable() {
        let err: HandlerError = PlaceOrderError::InsufficientStock {
            name: "Scone".into(),
        }
        .into();
        assert_eq!(err.status_code(), 422);
        assert!(err.to_string().contains("Scone"));
    }

    #[test]
    fn unknown_item_maps_to_not_found() {
        let err: HandlerError = PlaceOrderError::ItemNotFound {
            item_id: "i9".into(),
        }
        .into();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn invalid_transition_maps_to_unprocessable() {
        let err: HandlerError = UpdateStatusError::InvalidTransition {
            from: OrderStatus::Completed,
            to: OrderStatus::Pending,
        }
        .into();
        assert_eq!(err.status_code(), 422);
        assert!(err.to_string().contains("completed"));
    }

    #[test]
    fn store_failures_are_internal() {
        let err: HandlerError = StoreError::LockPoisoned("test").into();
        assert_eq!(err.status_code(), 500);
    }
}
