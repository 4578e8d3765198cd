//! Passkey fingerprints for verification without decryption.
//!
//! A fingerprint is `base64(SHA-256(domain || passkey))`.  The domain
//! prefix keeps it on a separate derivation path from the cipher key in
//! `kdf`, so a stored fingerprint never equals the key that encrypted the
//! record next to it.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Domain separator for passkey fingerprints.
const FINGERPRINT_DOMAIN: &[u8] = b"lockbox-passkey-fingerprint:";

/// One-way digest of a passkey, stored next to the ciphertext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasskeyFingerprint(String);

impl PasskeyFingerprint {
    /// The base64 form of the digest.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Compute the fingerprint of `passkey`.
pub fn fingerprint(passkey: &str) -> PasskeyFingerprint {
    let digest = Sha256::new()
        .chain_update(FINGERPRINT_DOMAIN)
        .chain_update(passkey.as_bytes())
        .finalize();
    PasskeyFingerprint(BASE64.encode(digest))
}

/// Check `passkey` against a stored fingerprint.
///
/// Uses constant-time comparison to avoid timing side channels.
pub fn matches(passkey: &str, expected: &PasskeyFingerprint) -> bool {
    let actual = fingerprint(passkey);
    actual
        .0
        .as_bytes()
        .ct_eq(expected.0.as_bytes())
        .into()
}
