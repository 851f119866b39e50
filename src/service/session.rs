//! Session variables from the request context, and the typed identity
//! the authentication collaborator vouches for.

use std::collections::HashMap;
use std::fmt;

/// Caller role. The closed set the authorization gate understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Customer,
    Admin,
}

impl Role {
    /// Parse a role header value. Unknown values are rejected rather than
    /// silently downgraded.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "customer" => Some(Role::Customer),
            "admin" => Some(Role::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Customer => f.write_str("customer"),
            Role::Admin => f.write_str("admin"),
        }
    }
}

/// A verified caller. Produced once per request by [`Session::identity`];
/// operations receive it explicitly instead of re-deriving it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub role: Role,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// Parsed session variables from the incoming request.
///
/// The authentication collaborator in front of this service verifies
/// credentials and forwards the caller as headers:
///
/// ```json
/// {
///   "x-user-id": "user-42",
///   "x-user-role": "customer"
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Session {
    variables: HashMap<String, String>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from a map of variables.
    pub fn from_map(variables: HashMap<String, String>) -> Self {
        Self { variables }
    }

    /// Get the user ID (`x-user-id`).
    pub fn user_id(&self) -> Option<&str> {
        self.get("x-user-id")
    }

    /// Get the raw role value (`x-user-role`).
    pub fn role(&self) -> Option<&str> {
        self.get("x-user-role")
    }

    /// The typed identity, if the session carries one.
    ///
    /// A missing role header defaults to `customer`; an unparseable role
    /// yields no identity at all.
    pub fn identity(&self) -> Option<Identity> {
        let user_id = self.user_id()?;
        let role = match self.role() {
            Some(value) => Role::parse(value)?,
            None => Role::Customer,
        };
        Some(Identity {
            user_id: user_id.to_string(),
            role,
        })
    }

    /// Get a session variable by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(|v| v.as_str())
    }

    /// Set a session variable.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Check if a session variable exists.
    pub fn has(&self, key: &str) -> bool {
        self.variables.contains_key(key)
    }
}
