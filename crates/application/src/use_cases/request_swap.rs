//! Swap request use case.
//!
//! Validates the user's draft, attaches the current credential when one
//! exists, and submits. Nothing here feeds back into the session.

use rewear_domain::{Credential, SwapRequestDraft};

use crate::ports::SwapGateway;

/// Result of submitting a swap request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SwapOutcome {
    /// The request was accepted by the backend.
    Sent,
    /// The draft was invalid or the backend declined the request.
    Failed {
        /// Message to surface to the user, when available.
        message: Option<String>,
    },
}

impl SwapOutcome {
    /// Returns true if the request was sent.
    #[must_use]
    pub const fn sent(&self) -> bool {
        matches!(self, Self::Sent)
    }

    /// Returns the failure message, when present.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => message.as_deref(),
            Self::Sent => None,
        }
    }
}

/// Use case for submitting a swap or points-redemption request.
pub struct RequestSwap<G: SwapGateway> {
    gateway: G,
}

impl<G: SwapGateway> RequestSwap<G> {
    /// Creates a new `RequestSwap` use case.
    #[must_use]
    pub const fn new(gateway: G) -> Self {
        Self { gateway }
    }

    /// Validates the draft and submits it.
    ///
    /// The credential is read from the session by the caller and passed
    /// in; an anonymous submission is allowed and left for the backend
    /// to reject.
    pub async fn execute(
        &self,
        credential: Option<Credential>,
        draft: SwapRequestDraft,
    ) -> SwapOutcome {
        let body = match draft.into_body() {
            Ok(body) => body,
            Err(error) => {
                return SwapOutcome::Failed {
                    message: Some(error.to_string()),
                }
            }
        };

        match self.gateway.submit_request(credential.as_ref(), &body).await {
            Ok(()) => SwapOutcome::Sent,
            Err(error) => {
                tracing::debug!(%error, item = %body.item_id, "swap request failed");
                SwapOutcome::Failed {
                    message: error.user_message().map(str::to_string),
                }
            }
        }
    }
}
