//! Session module — the retrieval engine and its lockout.
//!
//! This module provides:
//! - The `Session` context object (`context`)
//! - The failed-attempt state machine (`lockout`)
//! - Operator credential checks for reauthorization (`credentials`)

pub mod context;
pub mod credentials;
pub mod lockout;

// Re-export the most commonly used items.
pub use context::Session;
pub use credentials::{CredentialCheck, OperatorCredential};
pub use lockout::{LockoutGuard, LockoutState, DEFAULT_THRESHOLD};
