//! ReWear Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports defined in
//! the application layer: reqwest-backed gateways for the marketplace
//! REST backend and a file-based credential store.

pub mod http;
pub mod persistence;

pub use http::{Endpoints, HttpIdentityGateway, HttpMarketGateway, DEFAULT_BASE_URL};
pub use persistence::{CredentialStoreError, FileCredentialStore};
