//! Endpoint table for the marketplace backend.
//!
//! Mirrors the backend's route layout: auth routes under `/auth`,
//! catalog under `/items`, swap requests under `/swaps`.

use url::Url;

/// Base URL used when `REWEAR_API_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding the backend base URL.
pub const BASE_URL_ENV: &str = "REWEAR_API_URL";

/// Resolved endpoint URLs for one backend.
#[derive(Debug, Clone)]
pub struct Endpoints {
    login: Url,
    register: Url,
    me: Url,
    profile: Url,
    items: Url,
    swap_request: Url,
}

impl Endpoints {
    /// Builds the endpoint table from a base URL.
    ///
    /// A trailing slash on the base is optional.
    ///
    /// # Errors
    ///
    /// Returns an error when the base URL does not parse.
    pub fn new(base_url: &str) -> Result<Self, url::ParseError> {
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base = Url::parse(&normalized)?;

        Ok(Self {
            login: base.join("auth/login")?,
            register: base.join("auth/register")?,
            me: base.join("auth/me")?,
            profile: base.join("auth/profile")?,
            items: base.join("items")?,
            swap_request: base.join("swaps/request")?,
        })
    }

    /// Builds the endpoint table from `REWEAR_API_URL`, falling back to
    /// [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns an error when the configured URL does not parse.
    pub fn from_env() -> Result<Self, url::ParseError> {
        let base = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(&base)
    }

    /// `POST` — exchange credentials for a token.
    #[must_use]
    pub const fn login(&self) -> &Url {
        &self.login
    }

    /// `POST` — create an account.
    #[must_use]
    pub const fn register(&self) -> &Url {
        &self.register
    }

    /// `GET` — validate a bearer token.
    #[must_use]
    pub const fn me(&self) -> &Url {
        &self.me
    }

    /// `PUT` — partial profile update.
    #[must_use]
    pub const fn profile(&self) -> &Url {
        &self.profile
    }

    /// `GET` — single item detail.
    #[must_use]
    pub fn item(&self, item_id: &str) -> Url {
        let mut url = self.items.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(item_id);
        }
        url
    }

    /// `POST` — submit a swap request.
    #[must_use]
    pub const fn swap_request(&self) -> &Url {
        &self.swap_request
    }
}
