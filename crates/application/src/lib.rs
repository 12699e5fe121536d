//! ReWear Application - Session management, ports and use cases
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for the credential store and remote gateways)
//! - The `AuthSession` manager, single source of truth for session state
//! - Item and swap use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod session;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{
    AuthGrant, CatalogGateway, CredentialStore, GatewayError, IdentityGateway,
    MemoryCredentialStore, SwapGateway,
};
pub use session::{AuthOutcome, AuthSession};
pub use use_cases::{RequestSwap, SwapOutcome, ViewItem};
