//! Typed outcomes for session operations.

use crate::ports::GatewayError;

/// Result of a login, registration or profile update.
///
/// Session operations never propagate errors; every failure is
/// recovered into this value so the presentation layer decides how to
/// surface it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    /// The operation succeeded and session state was updated.
    Success,
    /// The operation failed and session state is unchanged.
    Failure {
        /// Backend-provided message, when one was present.
        message: Option<String>,
    },
}

impl AuthOutcome {
    /// Creates a failure with a message.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: Some(message.into()),
        }
    }

    /// Creates a failure carrying no message.
    #[must_use]
    pub const fn failure_without_message() -> Self {
        Self::Failure { message: None }
    }

    /// Returns true if the operation succeeded.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the failure message, when present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failure { message } => message.as_deref(),
            Self::Success => None,
        }
    }
}

impl From<&GatewayError> for AuthOutcome {
    fn from(error: &GatewayError) -> Self {
        Self::Failure {
            message: error.user_message().map(str::to_string),
        }
    }
}
