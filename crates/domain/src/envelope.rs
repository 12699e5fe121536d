//! Wire types for the ReWear REST API.
//!
//! Every route answers with the same `{success, data, message?}`
//! envelope. User records arrive with the identifier under either
//! `_id` (Mongo spelling) or `id`; [`WireUser::into_identity`] is the
//! single place that canonicalizes it.

use serde::Deserialize;

use crate::error::{DomainError, DomainResult};
use crate::identity::{Identity, Role};
use crate::item::ClothingItem;

/// Standard response envelope wrapping every backend payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Explicit success flag; absent is treated as failure.
    #[serde(default)]
    pub success: bool,
    /// Payload, present on success.
    #[serde(default)]
    pub data: Option<T>,
    /// Human-readable message, usually populated on failure.
    #[serde(default)]
    pub message: Option<String>,
}

/// User record as the backend serializes it.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireUser {
    /// Identifier under the Mongo spelling.
    #[serde(rename = "_id", default)]
    pub mongo_id: Option<String>,
    /// Identifier under the canonical spelling.
    #[serde(default)]
    pub id: Option<String>,
    /// Account email.
    #[serde(default)]
    pub email: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Account role.
    #[serde(default)]
    pub role: Option<Role>,
    /// Optional gender.
    #[serde(default)]
    pub gender: Option<String>,
    /// Optional age.
    #[serde(default)]
    pub age: Option<u32>,
    /// Optional avatar URL.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Points balance.
    #[serde(default)]
    pub points: Option<i64>,
}

impl WireUser {
    /// Normalizes the wire record into an [`Identity`].
    ///
    /// The `_id` spelling wins when both are present, matching the
    /// backend's own precedence.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::MissingIdentifier`] when neither
    /// identifier field is populated.
    pub fn into_identity(self) -> DomainResult<Identity> {
        let id = self
            .mongo_id
            .or(self.id)
            .filter(|id| !id.is_empty())
            .ok_or(DomainError::MissingIdentifier("user"))?;

        Ok(Identity {
            id,
            email: self.email.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            role: self.role.unwrap_or_default(),
            gender: self.gender,
            age: self.age,
            avatar: self.avatar,
            points: self.points,
        })
    }
}

/// Payload of login and registration responses.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthData {
    /// The authenticated user.
    pub user: WireUser,
    /// Freshly issued bearer token.
    pub token: String,
}

/// Payload of validation and profile-update responses.
#[derive(Debug, Clone, Deserialize)]
pub struct UserData {
    /// The authenticated user.
    pub user: WireUser,
}

/// Payload of single-item responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ItemData {
    /// The requested item.
    pub item: ClothingItem,
}
