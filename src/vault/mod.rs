//! Vault module — sealed record storage.
//!
//! This module provides:
//! - `VaultRecord` and `RecordMetadata` types (`record`)
//! - The in-memory `VaultStore` keyed by label (`store`)

pub mod record;
pub mod store;

// Re-export the most commonly used items.
pub use record::{RecordMetadata, VaultRecord};
pub use store::VaultStore;
