//! Session state machine types.
//!
//! The session is a tri-state value derived from the stored credential
//! and the outcome of validating it against the backend. Only the
//! session manager in the application layer may produce transitions.

use serde::{Deserialize, Serialize};

use crate::identity::Identity;

/// Current authentication state of the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SessionState {
    /// Initial state: a stored credential may exist and validation has
    /// not completed yet.
    #[default]
    Unresolved,

    /// A credential was accepted by the backend.
    Authenticated {
        /// The validated principal.
        identity: Identity,
    },

    /// No credential, or the last one was rejected.
    Anonymous,
}

impl SessionState {
    /// Wraps an identity in the authenticated state.
    #[must_use]
    pub const fn authenticated(identity: Identity) -> Self {
        Self::Authenticated { identity }
    }

    /// Returns true while the initial validation has not resolved.
    #[must_use]
    pub const fn is_unresolved(&self) -> bool {
        matches!(self, Self::Unresolved)
    }

    /// Returns true if a validated identity is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Returns true if the session resolved to no identity.
    #[must_use]
    pub const fn is_anonymous(&self) -> bool {
        matches!(self, Self::Anonymous)
    }

    /// Returns the identity if authenticated.
    #[must_use]
    pub const fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Authenticated { identity } => Some(identity),
            _ => None,
        }
    }
}
