//! Integration tests for the session lifecycle.
//!
//! These exercise the full manager state machine against a scripted
//! gateway and the in-memory credential store: startup resolution,
//! login/logout, profile updates, and the invariants tying the stored
//! credential to the identity state.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use tokio::sync::Mutex;

use rewear_application::{
    AuthGrant, AuthOutcome, AuthSession, CredentialStore, GatewayError, IdentityGateway,
    MemoryCredentialStore,
};
use rewear_domain::{
    Credential, Identity, LoginRequest, ProfileChanges, RegisterRequest, Role, SessionState,
};

fn identity(id: &str, name: &str) -> Identity {
    Identity {
        id: id.to_string(),
        email: String::new(),
        name: name.to_string(),
        role: Role::User,
        gender: None,
        age: None,
        avatar: None,
        points: None,
    }
}

fn rejected(message: &str) -> GatewayError {
    GatewayError::Rejected {
        status: 401,
        message: Some(message.to_string()),
    }
}

/// Gateway returning pre-scripted responses and recording every call.
#[derive(Clone, Default)]
struct ScriptedGateway {
    login: Option<Result<AuthGrant, GatewayError>>,
    register: Option<Result<AuthGrant, GatewayError>>,
    validate: Option<Result<Identity, GatewayError>>,
    update_profile: Option<Result<Identity, GatewayError>>,
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl ScriptedGateway {
    async fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().await.clone()
    }
}

#[async_trait]
impl IdentityGateway for ScriptedGateway {
    async fn login(&self, _request: &LoginRequest) -> Result<AuthGrant, GatewayError> {
        self.calls.lock().await.push("login");
        self.login.clone().expect("login not scripted")
    }

    async fn register(&self, _request: &RegisterRequest) -> Result<AuthGrant, GatewayError> {
        self.calls.lock().await.push("register");
        self.register.clone().expect("register not scripted")
    }

    async fn validate(&self, _credential: &Credential) -> Result<Identity, GatewayError> {
        self.calls.lock().await.push("validate");
        self.validate.clone().expect("validate not scripted")
    }

    async fn update_profile(
        &self,
        _credential: &Credential,
        _changes: &ProfileChanges,
    ) -> Result<Identity, GatewayError> {
        self.calls.lock().await.push("update_profile");
        self.update_profile.clone().expect("update_profile not scripted")
    }
}

// Startup with no stored credential resolves to anonymous without any
// network traffic.
#[tokio::test]
async fn startup_without_credential_is_anonymous_and_offline() {
    let gateway = ScriptedGateway::default();
    let store = MemoryCredentialStore::new();

    let session = AuthSession::start(gateway.clone(), store).await;

    assert_eq!(session.state().await, SessionState::Anonymous);
    assert!(!session.is_loading().await);
    assert!(gateway.calls().await.is_empty());
}

// Startup with a stored credential validates it and re-persists on
// success.
#[tokio::test]
async fn startup_with_valid_credential_authenticates() {
    let gateway = ScriptedGateway {
        validate: Some(Ok(identity("u9", "Ann"))),
        ..ScriptedGateway::default()
    };
    let store = MemoryCredentialStore::with_credential(Credential::new("T"));

    let session = AuthSession::start(gateway.clone(), store.clone()).await;

    let current = session.identity().await.unwrap();
    assert_eq!(current.id, "u9");
    assert_eq!(current.name, "Ann");
    assert!(!session.is_loading().await);
    assert_eq!(store.get().await, Some(Credential::new("T")));
    assert_eq!(gateway.calls().await, vec!["validate"]);
}

// P4: a stale stored credential is cleared from the store when
// validation fails.
#[tokio::test]
async fn failed_validation_clears_stored_credential() {
    let gateway = ScriptedGateway {
        validate: Some(Err(rejected("token expired"))),
        ..ScriptedGateway::default()
    };
    let store = MemoryCredentialStore::with_credential(Credential::new("STALE"));

    let session = AuthSession::start(gateway, store.clone()).await;

    assert_eq!(session.state().await, SessionState::Anonymous);
    assert!(!session.is_loading().await);
    assert!(store.get().await.is_none());
    assert!(session.credential().await.is_none());
}

// Transport errors during validation behave the same as rejections.
#[tokio::test]
async fn transport_error_during_validation_clears_credential() {
    let gateway = ScriptedGateway {
        validate: Some(Err(GatewayError::Transport("unreachable".to_string()))),
        ..ScriptedGateway::default()
    };
    let store = MemoryCredentialStore::with_credential(Credential::new("T"));

    let session = AuthSession::start(gateway, store.clone()).await;

    assert_eq!(session.state().await, SessionState::Anonymous);
    assert!(store.get().await.is_none());
}

// P3: a successful login canonicalizes the identity and persists the
// new credential.
#[tokio::test]
async fn login_persists_credential_and_identity() {
    let gateway = ScriptedGateway {
        login: Some(Ok(AuthGrant {
            identity: Identity {
                email: "a@b.com".to_string(),
                ..identity("u1", "Ann")
            },
            credential: Credential::new("T"),
        })),
        ..ScriptedGateway::default()
    };
    let store = MemoryCredentialStore::new();
    let session = AuthSession::start(gateway, store.clone()).await;

    let outcome = session.login("a@b.com", "pw", Role::User).await;

    assert_eq!(outcome, AuthOutcome::Success);
    assert_eq!(session.identity().await.unwrap().id, "u1");
    assert_eq!(store.get().await, Some(Credential::new("T")));
    assert!(!session.is_loading().await);
}

// P2: a failed login while authenticated leaves the session untouched.
#[tokio::test]
async fn failed_login_does_not_log_out() {
    let gateway = ScriptedGateway {
        validate: Some(Ok(identity("u1", "Ann"))),
        login: Some(Err(rejected("Invalid credentials"))),
        ..ScriptedGateway::default()
    };
    let store = MemoryCredentialStore::with_credential(Credential::new("T"));
    let session = AuthSession::start(gateway, store.clone()).await;
    let before = session.state().await;

    let outcome = session.login("a@b.com", "wrong", Role::User).await;

    assert_eq!(outcome.message(), Some("Invalid credentials"));
    assert_eq!(session.state().await, before);
    assert_eq!(store.get().await, Some(Credential::new("T")));
    assert!(!session.is_loading().await);
}

// Registration follows the same contract shape as login.
#[tokio::test]
async fn registration_success_authenticates() {
    let gateway = ScriptedGateway {
        register: Some(Ok(AuthGrant {
            identity: identity("u2", "Bea"),
            credential: Credential::new("R"),
        })),
        ..ScriptedGateway::default()
    };
    let store = MemoryCredentialStore::new();
    let session = AuthSession::start(gateway, store.clone()).await;

    let outcome = session
        .register(RegisterRequest {
            email: "bea@example.com".to_string(),
            password: "pw".to_string(),
            name: "Bea".to_string(),
            gender: None,
            age: Some(30),
        })
        .await;

    assert!(outcome.succeeded());
    assert_eq!(session.identity().await.unwrap().id, "u2");
    assert_eq!(store.get().await, Some(Credential::new("R")));
}

#[tokio::test]
async fn registration_failure_leaves_session_anonymous() {
    let gateway = ScriptedGateway {
        register: Some(Err(GatewayError::Rejected {
            status: 400,
            message: Some("Email already registered".to_string()),
        })),
        ..ScriptedGateway::default()
    };
    let store = MemoryCredentialStore::new();
    let session = AuthSession::start(gateway, store.clone()).await;

    let outcome = session
        .register(RegisterRequest {
            email: "dup@example.com".to_string(),
            password: "pw".to_string(),
            name: "Dup".to_string(),
            gender: None,
            age: None,
        })
        .await;

    assert_eq!(outcome.message(), Some("Email already registered"));
    assert_eq!(session.state().await, SessionState::Anonymous);
    assert!(store.get().await.is_none());
}

// P5: a successful profile update replaces the identity but keeps the
// credential.
#[tokio::test]
async fn profile_update_preserves_credential() {
    let gateway = ScriptedGateway {
        validate: Some(Ok(identity("u1", "Old"))),
        update_profile: Some(Ok(identity("u1", "New"))),
        ..ScriptedGateway::default()
    };
    let store = MemoryCredentialStore::with_credential(Credential::new("T"));
    let session = AuthSession::start(gateway, store.clone()).await;

    let outcome = session
        .update_profile(ProfileChanges {
            name: Some("New".to_string()),
            ..ProfileChanges::default()
        })
        .await;

    assert!(outcome.succeeded());
    assert_eq!(session.identity().await.unwrap().name, "New");
    assert_eq!(store.get().await, Some(Credential::new("T")));
    assert_eq!(session.credential().await, Some(Credential::new("T")));
}

#[tokio::test]
async fn profile_update_failure_keeps_previous_identity() {
    let gateway = ScriptedGateway {
        validate: Some(Ok(identity("u1", "Old"))),
        update_profile: Some(Err(rejected("validation failed"))),
        ..ScriptedGateway::default()
    };
    let store = MemoryCredentialStore::with_credential(Credential::new("T"));
    let session = AuthSession::start(gateway, store.clone()).await;

    let outcome = session
        .update_profile(ProfileChanges {
            name: Some("New".to_string()),
            ..ProfileChanges::default()
        })
        .await;

    assert!(!outcome.succeeded());
    assert_eq!(session.identity().await.unwrap().name, "Old");
    assert_eq!(store.get().await, Some(Credential::new("T")));
}

// An anonymous profile update is a no-op failure with no network call.
#[tokio::test]
async fn anonymous_profile_update_fails_offline() {
    let gateway = ScriptedGateway::default();
    let store = MemoryCredentialStore::new();
    let session = AuthSession::start(gateway.clone(), store).await;

    let outcome = session
        .update_profile(ProfileChanges {
            name: Some("New".to_string()),
            ..ProfileChanges::default()
        })
        .await;

    assert!(!outcome.succeeded());
    assert!(gateway.calls().await.is_empty());
}

// P1: logout is idempotent.
#[tokio::test]
async fn logout_twice_is_same_as_once() {
    let gateway = ScriptedGateway {
        validate: Some(Ok(identity("u1", "Ann"))),
        ..ScriptedGateway::default()
    };
    let store = MemoryCredentialStore::with_credential(Credential::new("T"));
    let session = AuthSession::start(gateway, store.clone()).await;

    session.logout().await;
    let after_first = (session.state().await, store.get().await);

    session.logout().await;
    let after_second = (session.state().await, store.get().await);

    assert_eq!(after_first, (SessionState::Anonymous, None));
    assert_eq!(after_first, after_second);
    assert!(session.credential().await.is_none());
}

// The session is the only writer of the store: its clone observes
// transitions made through the original.
#[tokio::test]
async fn cloned_sessions_share_state() {
    let gateway = ScriptedGateway {
        login: Some(Ok(AuthGrant {
            identity: identity("u1", "Ann"),
            credential: Credential::new("T"),
        })),
        ..ScriptedGateway::default()
    };
    let session = AuthSession::start(gateway, MemoryCredentialStore::new()).await;
    let observer = session.clone();

    session.login("a@b.com", "pw", Role::User).await;

    assert!(observer.state().await.is_authenticated());
    observer.logout().await;
    assert!(session.state().await.is_anonymous());
}
