//! Cryptographic primitives for Lockbox.
//!
//! This module provides:
//! - SHA-256 passkey-to-key derivation (`kdf`)
//! - Passkey fingerprints with constant-time matching (`fingerprint`)
//! - AES-256-GCM encryption and decryption (`encryption`)

pub mod encryption;
pub mod fingerprint;
pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, derive_key, ...};
pub use encryption::{decrypt, encrypt};
pub use fingerprint::{fingerprint, matches, PasskeyFingerprint};
pub use kdf::{derive_key, DerivedKey, KEY_LEN};
