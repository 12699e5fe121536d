//! Reqwest adapter for the identity service.
//!
//! Implements the `IdentityGateway` port against the `/auth` routes.
//! Wire user records are normalized into domain identities here, at the
//! system boundary, so alternate identifier spellings never leave this
//! module.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use url::Url;

use rewear_application::{AuthGrant, GatewayError, IdentityGateway};
use rewear_domain::{
    AuthData, Credential, Identity, LoginRequest, ProfileChanges, RegisterRequest, UserData,
    WireUser,
};

use super::{build_client, map_transport_error, unwrap_envelope, Endpoints};

/// Identity gateway backed by the remote `/auth` routes.
#[derive(Debug, Clone)]
pub struct HttpIdentityGateway {
    client: Client,
    endpoints: Endpoints,
}

impl HttpIdentityGateway {
    /// Creates a gateway with the default client configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying client cannot be created.
    pub fn new(endpoints: Endpoints) -> Result<Self, GatewayError> {
        Ok(Self {
            client: build_client()?,
            endpoints,
        })
    }

    /// Creates a gateway with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client, endpoints: Endpoints) -> Self {
        Self { client, endpoints }
    }

    fn normalize(user: WireUser) -> Result<Identity, GatewayError> {
        user.into_identity()
            .map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    /// Shared body of login and register: both post a JSON payload and
    /// answer with a `{user, token}` envelope.
    async fn post_for_grant<B: Serialize + Sync>(
        &self,
        url: &Url,
        body: &B,
    ) -> Result<AuthGrant, GatewayError> {
        tracing::debug!(%url, "requesting auth grant");
        let response = self
            .client
            .post(url.clone())
            .json(body)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let data: AuthData = unwrap_envelope(response).await?;
        Ok(AuthGrant {
            identity: Self::normalize(data.user)?,
            credential: Credential::new(data.token),
        })
    }
}

#[async_trait]
impl IdentityGateway for HttpIdentityGateway {
    async fn login(&self, request: &LoginRequest) -> Result<AuthGrant, GatewayError> {
        self.post_for_grant(self.endpoints.login(), request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthGrant, GatewayError> {
        self.post_for_grant(self.endpoints.register(), request).await
    }

    async fn validate(&self, credential: &Credential) -> Result<Identity, GatewayError> {
        let url = self.endpoints.me();
        tracing::debug!(%url, credential = %credential.preview(), "validating credential");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::AUTHORIZATION, credential.authorization_header())
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let data: UserData = unwrap_envelope(response).await?;
        Self::normalize(data.user)
    }

    async fn update_profile(
        &self,
        credential: &Credential,
        changes: &ProfileChanges,
    ) -> Result<Identity, GatewayError> {
        let url = self.endpoints.profile();
        tracing::debug!(%url, "updating profile");
        let response = self
            .client
            .put(url.clone())
            .header(reqwest::header::AUTHORIZATION, credential.authorization_header())
            .json(changes)
            .send()
            .await
            .map_err(|e| map_transport_error(&e))?;

        let data: UserData = unwrap_envelope(response).await?;
        Self::normalize(data.user)
    }
}
