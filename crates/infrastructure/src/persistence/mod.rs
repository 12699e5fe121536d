//! Persistence adapters.

mod credential_store;

pub use credential_store::{CredentialStoreError, FileCredentialStore};
