//! In-memory label -> record storage.
//!
//! `VaultStore` only holds sealed records; it never sees a passkey or a
//! plaintext.  Encryption and passkey checks happen in `session`.

use std::collections::HashMap;

use crate::errors::{LockboxError, Result};

use super::record::{RecordMetadata, VaultRecord};

/// The record map owned by one session.
#[derive(Debug, Default)]
pub struct VaultStore {
    records: HashMap<String, VaultRecord>,
}

impl VaultStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Record operations
    // ------------------------------------------------------------------

    /// Insert a sealed record under its label.
    ///
    /// Fails with `LabelExists` if the label is taken; the existing
    /// record is left untouched.
    pub fn insert(&mut self, record: VaultRecord) -> Result<()> {
        if self.records.contains_key(record.label()) {
            return Err(LockboxError::LabelExists(record.label().to_string()));
        }
        self.records.insert(record.label().to_string(), record);
        Ok(())
    }

    /// Look up a record by label.  Pure; does not touch any attempt budget.
    pub fn get(&self, label: &str) -> Option<&VaultRecord> {
        self.records.get(label)
    }

    /// Remove and return a record.
    pub fn remove(&mut self, label: &str) -> Result<VaultRecord> {
        self.records
            .remove(label)
            .ok_or_else(|| LockboxError::LabelNotFound(label.to_string()))
    }

    /// All known labels, sorted.
    pub fn labels(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.records.keys().cloned().collect();
        labels.sort();
        labels
    }

    /// Metadata for all records, sorted by label.
    pub fn list_records(&self) -> Vec<RecordMetadata> {
        let mut list: Vec<RecordMetadata> =
            self.records.values().map(VaultRecord::metadata).collect();
        list.sort_by(|a, b| a.label.cmp(&b.label));
        list
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns `true` if a record exists under `label`.
    pub fn contains(&self, label: &str) -> bool {
        self.records.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
