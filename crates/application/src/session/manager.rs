//! The auth session manager.
//!
//! `AuthSession` owns the tri-state session value and serializes all
//! identity-affecting operations through itself. It is the only writer
//! of the credential store; collaborators read derived identity state
//! and, for outgoing authenticated calls, the current credential via
//! [`AuthSession::credential`].

use std::sync::Arc;

use tokio::sync::RwLock;

use rewear_domain::{
    Credential, Identity, LoginRequest, ProfileChanges, RegisterRequest, Role, SessionState,
};

use crate::ports::{AuthGrant, CredentialStore, IdentityGateway};
use crate::session::AuthOutcome;

#[derive(Debug, Default)]
struct Inner {
    state: SessionState,
    credential: Option<Credential>,
    loading: bool,
}

/// Single source of truth for session state.
///
/// Constructed once at application start via [`AuthSession::start`],
/// which resolves any stored credential against the backend before
/// returning. Clones share the same state.
///
/// Overlapping operations are not deduplicated: the last response to
/// resolve wins and sets the final state. This is an accepted race.
#[derive(Debug, Clone)]
pub struct AuthSession<S, G> {
    store: S,
    gateway: G,
    inner: Arc<RwLock<Inner>>,
}

impl<S, G> AuthSession<S, G>
where
    S: CredentialStore,
    G: IdentityGateway,
{
    /// Builds the session and resolves the stored credential.
    ///
    /// With no stored credential the session is immediately anonymous
    /// and no network call is issued. With one, a validation request is
    /// sent: success re-persists the credential and authenticates the
    /// session, any failure clears the store and leaves the session
    /// anonymous.
    pub async fn start(gateway: G, store: S) -> Self {
        let session = Self {
            store,
            gateway,
            inner: Arc::new(RwLock::new(Inner {
                state: SessionState::Unresolved,
                credential: None,
                loading: true,
            })),
        };
        session.resolve_stored_credential().await;
        session
    }

    async fn resolve_stored_credential(&self) {
        let Some(credential) = self.store.get().await else {
            let mut inner = self.inner.write().await;
            inner.state = SessionState::Anonymous;
            inner.loading = false;
            return;
        };

        match self.gateway.validate(&credential).await {
            Ok(identity) => {
                tracing::debug!(user = %identity.id, "stored credential validated");
                self.store.set(&credential).await;
                let mut inner = self.inner.write().await;
                inner.state = SessionState::authenticated(identity);
                inner.credential = Some(credential);
                inner.loading = false;
            }
            Err(error) => {
                tracing::debug!(
                    credential = %credential.preview(),
                    %error,
                    "stored credential rejected, clearing"
                );
                self.store.clear().await;
                let mut inner = self.inner.write().await;
                inner.state = SessionState::Anonymous;
                inner.credential = None;
                inner.loading = false;
            }
        }
    }

    /// Signs in with email and password.
    ///
    /// On success the new credential is persisted and the identity
    /// replaces any previous one. On failure the session is left
    /// exactly as it was: a failed attempt while already authenticated
    /// must not log the user out.
    pub async fn login(&self, email: &str, password: &str, role: Role) -> AuthOutcome {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
            role,
        };
        self.set_loading(true).await;
        let outcome = match self.gateway.login(&request).await {
            Ok(grant) => self.accept_grant(grant).await,
            Err(error) => {
                tracing::debug!(%error, "login failed");
                AuthOutcome::from(&error)
            }
        };
        self.set_loading(false).await;
        outcome
    }

    /// Creates an account; same contract shape as [`Self::login`].
    pub async fn register(&self, request: RegisterRequest) -> AuthOutcome {
        self.set_loading(true).await;
        let outcome = match self.gateway.register(&request).await {
            Ok(grant) => self.accept_grant(grant).await,
            Err(error) => {
                tracing::debug!(%error, "registration failed");
                AuthOutcome::from(&error)
            }
        };
        self.set_loading(false).await;
        outcome
    }

    /// Applies a partial profile update.
    ///
    /// Fails without a network call when the session is not
    /// authenticated. On success the identity is replaced and the
    /// credential kept; on failure the session is unchanged.
    pub async fn update_profile(&self, changes: ProfileChanges) -> AuthOutcome {
        let Some(credential) = self.credential().await else {
            return AuthOutcome::failure("not signed in");
        };

        self.set_loading(true).await;
        let outcome = match self.gateway.update_profile(&credential, &changes).await {
            Ok(identity) => {
                let mut inner = self.inner.write().await;
                inner.state = SessionState::authenticated(identity);
                AuthOutcome::Success
            }
            Err(error) => {
                tracing::debug!(%error, "profile update failed");
                AuthOutcome::from(&error)
            }
        };
        self.set_loading(false).await;
        outcome
    }

    /// Signs out unconditionally.
    ///
    /// Clears the stored credential and transitions to anonymous. No
    /// network call is made and the operation cannot fail.
    pub async fn logout(&self) {
        self.store.clear().await;
        let mut inner = self.inner.write().await;
        inner.state = SessionState::Anonymous;
        inner.credential = None;
    }

    /// Returns a snapshot of the current session state.
    pub async fn state(&self) -> SessionState {
        self.inner.read().await.state.clone()
    }

    /// Returns the current identity, if authenticated.
    pub async fn identity(&self) -> Option<Identity> {
        self.inner.read().await.state.identity().cloned()
    }

    /// Returns the current credential for outgoing authenticated calls.
    pub async fn credential(&self) -> Option<Credential> {
        self.inner.read().await.credential.clone()
    }

    /// Returns true while an operation is in flight.
    pub async fn is_loading(&self) -> bool {
        self.inner.read().await.loading
    }

    async fn accept_grant(&self, grant: AuthGrant) -> AuthOutcome {
        self.store.set(&grant.credential).await;
        let mut inner = self.inner.write().await;
        inner.state = SessionState::authenticated(grant.identity);
        inner.credential = Some(grant.credential);
        AuthOutcome::Success
    }

    async fn set_loading(&self, loading: bool) {
        self.inner.write().await.loading = loading;
    }
}
