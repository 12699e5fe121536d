//! File-based credential persistence.
//!
//! Stores the bearer token as a single file in the platform-specific
//! config directory:
//! - Linux/macOS: `~/.config/rewear/credential`
//! - Windows: `%APPDATA%/rewear/credential`
//!
//! The store contract is infallible: read errors are treated as
//! "absent" and write errors are logged and swallowed, so a broken
//! config directory degrades to an anonymous session instead of an
//! error path.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use rewear_application::CredentialStore;
use rewear_domain::Credential;

/// Error type for constructing the store.
#[derive(Debug, thiserror::Error)]
pub enum CredentialStoreError {
    /// Could not determine the platform config directory.
    #[error("could not determine config directory")]
    NoConfigDir,
}

/// Credential store backed by a single token file.
#[derive(Debug, Clone)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    /// Creates a store at the default platform location.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialStoreError::NoConfigDir`] when the platform
    /// config directory cannot be determined.
    pub fn new() -> Result<Self, CredentialStoreError> {
        let config_dir = dirs::config_dir().ok_or(CredentialStoreError::NoConfigDir)?;
        Ok(Self {
            path: config_dir.join("rewear").join("credential"),
        })
    }

    /// Creates a store at an explicit path.
    #[must_use]
    pub const fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the path of the token file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self) -> Option<Credential> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => {
                let token = content.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(Credential::new(token))
                }
            }
            Err(error) => {
                if error.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!(path = %self.path.display(), %error, "credential read failed");
                }
                None
            }
        }
    }

    async fn set(&self, credential: &Credential) {
        if let Some(parent) = self.path.parent() {
            if let Err(error) = fs::create_dir_all(parent).await {
                tracing::warn!(path = %parent.display(), %error, "could not create config dir");
                return;
            }
        }
        if let Err(error) = fs::write(&self.path, credential.as_str()).await {
            tracing::warn!(path = %self.path.display(), %error, "credential write failed");
        }
    }

    async fn clear(&self) {
        if let Err(error) = fs::remove_file(&self.path).await {
            if error.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), %error, "credential remove failed");
            }
        }
    }
}
