//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external
//! systems. Each port is a trait implemented by adapters in the
//! infrastructure layer, or by in-memory fakes in tests.

mod credential_store;
mod gateway;

pub use credential_store::{CredentialStore, MemoryCredentialStore};
pub use gateway::{AuthGrant, CatalogGateway, GatewayError, IdentityGateway, SwapGateway};
