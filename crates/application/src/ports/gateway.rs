//! Remote service gateway ports.
//!
//! Gateways wrap the marketplace REST backend. Adapters normalize the
//! wire envelope and user records at this boundary, so the application
//! layer only ever sees domain types.

use async_trait::async_trait;
use thiserror::Error;

use rewear_domain::{
    ClothingItem, Credential, Identity, LoginRequest, ProfileChanges, RegisterRequest,
    SwapRequestBody,
};

/// Errors surfaced by gateway adapters.
///
/// Transport failures and explicit backend rejections are deliberately
/// both plain failures from the session's point of view; the variants
/// exist so callers can log and surface the backend message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// Non-2xx status or `success: false` envelope.
    #[error("request rejected (status {status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        /// HTTP status code; 200 when the envelope itself said no.
        status: u16,
        /// Backend-provided message, when present.
        message: Option<String>,
    },

    /// Network unreachable, timeout, or connection failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl GatewayError {
    /// Backend message suitable for surfacing to a user, when present.
    #[must_use]
    pub fn user_message(&self) -> Option<&str> {
        match self {
            Self::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// A successful login or registration: identity plus fresh credential.
#[derive(Debug, Clone)]
pub struct AuthGrant {
    /// The authenticated principal, already normalized.
    pub identity: Identity,
    /// Freshly issued bearer credential.
    pub credential: Credential,
}

/// Port for the remote identity service.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Exchanges credentials for an identity and bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure, rejection, or a
    /// malformed response.
    async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, GatewayError>;

    /// Creates an account; same contract shape as [`Self::login`].
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure, rejection, or a
    /// malformed response.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, GatewayError>;

    /// Validates a stored credential and returns the identity it
    /// belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Rejected`] when the backend no longer
    /// accepts the credential.
    async fn validate(&self, credential: &Credential) -> Result<Identity, GatewayError>;

    /// Applies a partial profile update under the given credential and
    /// returns the replacement identity.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] on transport failure, rejection, or a
    /// malformed response.
    async fn update_profile(
        &self,
        credential: &Credential,
        changes: &ProfileChanges,
    ) -> Result<Identity, GatewayError>;
}

/// Port for reading the item catalog. Anonymous access is allowed.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetches a single item by id.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the item does not exist or the
    /// call fails.
    async fn fetch_item(&self, item_id: &str) -> Result<ClothingItem, GatewayError>;
}

/// Port for submitting swap requests.
#[async_trait]
pub trait SwapGateway: Send + Sync {
    /// Submits a swap request, attaching the credential as a bearer
    /// header when one is present. Fire-and-forget with respect to
    /// session state.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] when the backend declines the request.
    async fn submit_request(
        &self,
        credential: Option<&Credential>,
        body: &SwapRequestBody,
    ) -> Result<(), GatewayError>;
}
