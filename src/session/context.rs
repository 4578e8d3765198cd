//! High-level vault operations for one user session.
//!
//! `Session` owns the record store and the lockout guard, and composes
//! the crypto layer into `store` / `retrieve` / `reauthorize`.  Create
//! one at session start and drop it at session end; nothing outlives it.

use zeroize::Zeroize;

use crate::crypto::{decrypt, derive_key, encrypt, fingerprint, matches};
use crate::errors::{LockboxError, Result};
use crate::vault::{RecordMetadata, VaultRecord, VaultStore};

use super::credentials::{CredentialCheck, OperatorCredential};
use super::lockout::{LockoutGuard, LockoutState, DEFAULT_THRESHOLD};

pub struct Session {
    store: VaultStore,
    guard: LockoutGuard,
    credentials: Box<dyn CredentialCheck>,

    /// When set, a retrieval for an unknown label counts as a failure.
    count_missing_labels: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Box::new(OperatorCredential::default()), DEFAULT_THRESHOLD)
    }
}

impl Session {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Start an empty session that locks after `threshold` failures.
    pub fn new(credentials: Box<dyn CredentialCheck>, threshold: u32) -> Self {
        Self {
            store: VaultStore::new(),
            guard: LockoutGuard::new(threshold),
            credentials,
            count_missing_labels: false,
        }
    }

    /// Choose whether unknown labels count against the lockout budget.
    ///
    /// Off by default: a missing label leaves the counter untouched.
    pub fn with_missing_label_policy(mut self, count_missing_labels: bool) -> Self {
        self.count_missing_labels = count_missing_labels;
        self
    }

    // ------------------------------------------------------------------
    // Vault operations
    // ------------------------------------------------------------------

    /// Encrypt `text` under `passkey` and keep it under `label`.
    ///
    /// Fails with `LabelExists` if the label is already taken.
    pub fn store(&mut self, label: &str, text: &str, passkey: &str) -> Result<()> {
        // Refuse before doing any crypto work.
        if self.store.contains(label) {
            return Err(LockboxError::LabelExists(label.to_string()));
        }

        let key = derive_key(passkey);
        let ciphertext = encrypt(&key, text.as_bytes())?;
        let record = VaultRecord::new(label, ciphertext, fingerprint(passkey));

        self.store.insert(record)
    }

    /// Decrypt and return the text stored under `label`.
    ///
    /// Wrong passkeys and undecryptable records count toward the
    /// lockout; a correct retrieval clears the counter.
    pub fn retrieve(&mut self, label: &str, passkey: &str) -> Result<String> {
        // 1. Refuse immediately while locked.
        if !self.guard.can_attempt() {
            return Err(LockboxError::Locked);
        }

        // 2. Look up the record.
        let Some(record) = self.store.get(label) else {
            if self.count_missing_labels {
                self.guard.record_failure();
            }
            return Err(LockboxError::LabelNotFound(label.to_string()));
        };

        // 3. Verify the passkey without decrypting.
        if !matches(passkey, record.fingerprint()) {
            self.guard.record_failure();
            return Err(LockboxError::WrongPasskey);
        }

        // 4. Decrypt and authenticate.
        let key = derive_key(passkey);
        let plaintext = decrypt(&key, record.ciphertext()).and_then(|bytes| {
            String::from_utf8(bytes).map_err(|e| {
                let mut bad_bytes = e.into_bytes();
                bad_bytes.zeroize();
                LockboxError::InvalidCiphertext
            })
        });

        match plaintext {
            Ok(text) => {
                self.guard.record_success();
                Ok(text)
            }
            Err(_) => {
                self.guard.record_failure();
                Err(LockboxError::DecryptionFailed)
            }
        }
    }

    /// Clear a lockout using the operator credential.
    pub fn reauthorize(&mut self, username: &str, password: &str) -> Result<()> {
        self.guard
            .reauthorize(self.credentials.as_ref(), username, password)
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// All stored labels, sorted.
    pub fn list_labels(&self) -> Vec<String> {
        self.store.labels()
    }

    /// Metadata for every record, sorted by label.
    pub fn records(&self) -> Vec<RecordMetadata> {
        self.store.list_records()
    }

    pub fn record_count(&self) -> usize {
        self.store.len()
    }

    pub fn failed_attempt_count(&self) -> u32 {
        self.guard.failed_attempts()
    }

    pub fn lockout_state(&self) -> LockoutState {
        self.guard.state()
    }

    pub fn can_attempt(&self) -> bool {
        self.guard.can_attempt()
    }

    /// Returns the lockout guard (threshold, remaining attempts, ...).
    pub fn guard(&self) -> &LockoutGuard {
        &self.guard
    }

    pub fn counts_missing_labels(&self) -> bool {
        self.count_missing_labels
    }

    /// Mutable access to the underlying store.
    ///
    /// Used by tests to corrupt ciphertext in place.
    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut VaultStore {
        &mut self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_retrieve() {
        let mut session = Session::default();
        session.store("secret1", "hello world", "pass123").unwrap();
        assert_eq!(
            session.retrieve("secret1", "pass123").unwrap(),
            "hello world"
        );
        assert_eq!(session.failed_attempt_count(), 0);
    }

    #[test]
    fn store_duplicate_is_rejected() {
        let mut session = Session::default();
        session.store("a", "first", "pk1").unwrap();
        let err = session.store("a", "second", "pk2").unwrap_err();
        assert!(matches!(err, LockboxError::LabelExists(_)));

        // Original record still answers to the original passkey.
        assert_eq!(session.retrieve("a", "pk1").unwrap(), "first");
    }

    #[test]
    fn missing_label_does_not_count_by_default() {
        let mut session = Session::default();
        for _ in 0..5 {
            let err = session.retrieve("ghost", "pk").unwrap_err();
            assert!(matches!(err, LockboxError::LabelNotFound(_)));
        }
        assert_eq!(session.failed_attempt_count(), 0);
        assert!(session.can_attempt());
    }

    #[test]
    fn missing_label_counts_when_policy_enabled() {
        let mut session = Session::default().with_missing_label_policy(true);
        for _ in 0..3 {
            let _ = session.retrieve("ghost", "pk");
        }
        assert_eq!(session.lockout_state(), LockoutState::Locked);
        assert!(matches!(
            session.retrieve("ghost", "pk"),
            Err(LockboxError::Locked)
        ));
    }

    #[test]
    fn tampered_record_fails_decryption_and_counts() {
        let mut session = Session::default();
        session.store("a", "payload", "pk").unwrap();

        // Replace the record with one whose ciphertext has a flipped byte.
        let original = session.store_mut().remove("a").unwrap();
        let mut blob = original.ciphertext().to_vec();
        let last = blob.len() - 1;
        blob[last] ^= 0xFF;
        session
            .store_mut()
            .insert(VaultRecord::new(
                "a",
                blob,
                original.fingerprint().clone(),
            ))
            .unwrap();

        let err = session.retrieve("a", "pk").unwrap_err();
        assert!(matches!(err, LockboxError::DecryptionFailed));
        assert_eq!(session.failed_attempt_count(), 1);
    }

    #[test]
    fn non_utf8_plaintext_fails_decryption_and_counts() {
        let mut session = Session::default();
        let blob = encrypt(&derive_key("pk"), &[0xff, 0xfe]).unwrap();
        session
            .store_mut()
            .insert(VaultRecord::new("raw", blob, fingerprint("pk")))
            .unwrap();

        let err = session.retrieve("raw", "pk").unwrap_err();
        assert!(matches!(err, LockboxError::DecryptionFailed));
        assert_eq!(session.failed_attempt_count(), 1);
    }

    #[test]
    fn locked_session_refuses_before_lookup() {
        let mut session = Session::default();
        session.store("a", "x", "right").unwrap();
        for _ in 0..3 {
            let _ = session.retrieve("a", "wrong");
        }

        // Even an unknown label reports Locked, not LabelNotFound.
        assert!(matches!(
            session.retrieve("ghost", "right"),
            Err(LockboxError::Locked)
        ));
        assert_eq!(session.failed_attempt_count(), 3);
    }

    #[test]
    fn custom_threshold_is_honoured() {
        let mut session = Session::new(Box::new(OperatorCredential::default()), 1);
        session.store("a", "x", "right").unwrap();
        let _ = session.retrieve("a", "wrong");
        assert!(!session.can_attempt());
    }
}
