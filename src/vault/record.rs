//! VaultRecord and RecordMetadata types held by a `VaultStore`.
//!
//! A record is sealed at creation: the label, ciphertext, and passkey
//! fingerprint cannot be changed afterwards.

use chrono::{DateTime, Utc};

use crate::crypto::PasskeyFingerprint;

/// A single encrypted entry in the vault.
#[derive(Debug, Clone)]
pub struct VaultRecord {
    label: String,

    /// Nonce + AES-GCM ciphertext + tag.
    ciphertext: Vec<u8>,

    fingerprint: PasskeyFingerprint,

    created_at: DateTime<Utc>,
}

impl VaultRecord {
    /// Seal a new record stamped with the current time.
    pub fn new(label: &str, ciphertext: Vec<u8>, fingerprint: PasskeyFingerprint) -> Self {
        Self {
            label: label.to_string(),
            ciphertext,
            fingerprint,
            created_at: Utc::now(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn fingerprint(&self) -> &PasskeyFingerprint {
        &self.fingerprint
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Metadata view of this record (no ciphertext, no fingerprint).
    pub fn metadata(&self) -> RecordMetadata {
        RecordMetadata {
            label: self.label.clone(),
            ciphertext_len: self.ciphertext.len(),
            created_at: self.created_at(),
        }
    }
}

/// Lightweight metadata about a record.
///
/// Returned by `VaultStore::list_records` so callers can display
/// labels and timestamps without touching any ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMetadata {
    pub label: String,
    pub ciphertext_len: usize,
    pub created_at: DateTime<Utc>,
}
