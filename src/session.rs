//! Session context: the current user's identity and auth token.
//!
//! An explicit read-only capability handed to the components that need to
//! act on the user's behalf, replacing ad hoc reads of persisted browser
//! state. It is created at login by the surrounding auth layer, cleared at
//! logout by dropping it, and never mutated by the booking core.

use serde::{Deserialize, Serialize};

/// The authenticated user for the lifetime of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    username: String,
    access_token: String,
}

impl SessionContext {
    /// Create a session context from a completed login.
    pub fn new(username: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            access_token: access_token.into(),
        }
    }

    /// The logged-in user's name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Token for `Authorization: Bearer` headers.
    pub fn bearer_token(&self) -> &str {
        &self.access_token
    }
}
