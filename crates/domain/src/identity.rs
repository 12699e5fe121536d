//! Authenticated principal and credential types.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Role of an authenticated principal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Ordinary marketplace user.
    #[default]
    User,
    /// Platform administrator.
    Admin,
}

impl Role {
    /// Returns the wire representation of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            "user" => Ok(Self::User),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

/// Normalized representation of the authenticated user.
///
/// The backend returns its identifier under either `_id` or `id`;
/// [`crate::WireUser::into_identity`] canonicalizes it into the single
/// `id` field here, so nothing downstream ever sees the alternate
/// spelling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Canonical unique identifier.
    pub id: String,
    /// Account email address. Empty when the backend omits it.
    #[serde(default)]
    pub email: String,
    /// Display name. Empty when the backend omits it.
    #[serde(default)]
    pub name: String,
    /// Account role.
    #[serde(default)]
    pub role: Role,
    /// Optional self-reported gender.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Optional age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Optional avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Points balance, when the backend reports one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,
}

impl Identity {
    /// Returns true if this identity has the admin role.
    #[must_use]
    pub const fn is_admin(&self) -> bool {
        matches!(self.role, Role::Admin)
    }
}

/// Opaque bearer token authorizing API calls.
///
/// At most one credential is persisted at a time; its presence is the
/// sole signal of "possibly authenticated".
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    /// Wraps a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the raw token.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the `Authorization` header value for this credential.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.0)
    }

    /// Returns a short preview of the token, safe for logs.
    #[must_use]
    pub fn preview(&self) -> String {
        if self.0.len() > 12 {
            format!("{}...", &self.0[..8])
        } else {
            self.0.clone()
        }
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the full token
        f.debug_tuple("Credential").field(&self.preview()).finish()
    }
}

impl From<&str> for Credential {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

/// Credentials sent to the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plaintext password, sent over TLS only.
    pub password: String,
    /// Role the user is signing in as.
    pub role: Role,
}

/// Payload sent to the registration endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    /// Account email.
    pub email: String,
    /// Plaintext password, sent over TLS only.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Optional self-reported gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Optional age in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
}

/// Partial identity update sent to the profile endpoint.
///
/// Only the populated fields are serialized, so an empty value is a
/// valid (if pointless) update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileChanges {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New gender.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// New age.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// New avatar URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl ProfileChanges {
    /// Returns true if no field is populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.gender.is_none() && self.age.is_none() && self.avatar.is_none()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_round_trips_through_wire_form() {
        assert_eq!(Role::User.as_str(), "user");
        assert_eq!(Role::Admin.as_str(), "admin");
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert!("superuser".parse::<Role>().is_err());
    }

    #[test]
    fn credential_debug_is_masked() {
        let credential = Credential::new("supersecrettoken12345");
        let debug = format!("{credential:?}");
        assert!(!debug.contains("supersecrettoken12345"));
        assert!(debug.contains("supersec..."));
    }

    #[test]
    fn credential_authorization_header() {
        let credential = Credential::new("T");
        assert_eq!(credential.authorization_header(), "Bearer T");
    }

    #[test]
    fn short_credential_preview_is_whole_token() {
        assert_eq!(Credential::new("short").preview(), "short");
    }

    #[test]
    fn profile_changes_serializes_only_populated_fields() {
        let changes = ProfileChanges {
            name: Some("New".to_string()),
            ..ProfileChanges::default()
        };
        let json = serde_json::to_value(&changes).unwrap();
        assert_eq!(json, serde_json::json!({"name": "New"}));
    }

    #[test]
    fn login_request_includes_role() {
        let request = LoginRequest {
            email: "a@b.com".to_string(),
            password: "pw".to_string(),
            role: Role::User,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "user");
    }
}
