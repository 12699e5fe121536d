//! Credential persistence port.
//!
//! The store holds at most one bearer credential across restarts. All
//! three operations are infallible by contract: adapters swallow and
//! log storage errors, and `get` treats them as "absent".

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use rewear_domain::Credential;

/// Port for durable credential persistence.
///
/// Only the session manager writes through this trait; everything else
/// reads derived identity state from the session instead.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Returns the stored credential, or `None` when absent or when the
    /// storage layer fails. No side effects.
    async fn get(&self) -> Option<Credential>;

    /// Overwrites any existing credential. Idempotent.
    async fn set(&self, credential: &Credential);

    /// Removes the credential. Idempotent; succeeds when nothing was
    /// stored.
    async fn clear(&self);
}

/// In-memory credential store.
///
/// Useful for tests and for embedding the session manager without any
/// persistence. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    slot: Arc<RwLock<Option<Credential>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a credential.
    #[must_use]
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(credential))),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self) -> Option<Credential> {
        self.slot.read().await.clone()
    }

    async fn set(&self, credential: &Credential) {
        *self.slot.write().await = Some(credential.clone());
    }

    async fn clear(&self) {
        *self.slot.write().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn empty_store_returns_none() {
        let store = MemoryCredentialStore::new();
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn set_overwrites_previous_credential() {
        let store = MemoryCredentialStore::new();
        store.set(&Credential::new("first")).await;
        store.set(&Credential::new("second")).await;
        assert_eq!(store.get().await.map(|c| c.as_str().to_string()), Some("second".to_string()));
    }

    #[tokio::test]
    async fn clear_is_idempotent() {
        let store = MemoryCredentialStore::with_credential(Credential::new("T"));
        store.clear().await;
        store.clear().await;
        assert!(store.get().await.is_none());
    }

    #[tokio::test]
    async fn clones_share_the_slot() {
        let store = MemoryCredentialStore::new();
        let clone = store.clone();
        store.set(&Credential::new("shared")).await;
        assert!(clone.get().await.is_some());
    }
}
