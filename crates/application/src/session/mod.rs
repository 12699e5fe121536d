//! Session management.
//!
//! This module provides:
//! - The `AuthSession` manager, single source of truth for session state
//! - Typed operation outcomes returned to presentation code

mod manager;
mod outcome;

pub use manager::AuthSession;
pub use outcome::AuthOutcome;
