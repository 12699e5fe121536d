//! ReWear Domain - Core business types
//!
//! This crate defines the domain model for the ReWear marketplace client.
//! All types here are pure Rust with no I/O dependencies.

pub mod envelope;
pub mod error;
pub mod identity;
pub mod item;
pub mod session;
pub mod swap;

pub use envelope::{ApiEnvelope, AuthData, ItemData, UserData, WireUser};
pub use error::{DomainError, DomainResult};
pub use identity::{Credential, Identity, LoginRequest, ProfileChanges, RegisterRequest, Role};
pub use item::{ClothingItem, Condition, PointsBreakdown};
pub use session::SessionState;
pub use swap::{SwapKind, SwapRequestBody, SwapRequestDraft};
