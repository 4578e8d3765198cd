//! Passkey-to-key derivation.
//!
//! A passkey is hashed with SHA-256 over its raw UTF-8 bytes.  The 32-byte
//! digest is exactly the key size AES-256-GCM expects, so it is used as the
//! cipher key without further encoding.
//!
//! No salt: the same passkey always produces the same key.  An empty
//! passkey yields a valid (and predictable) key.

use sha2::{Digest, Sha256};
use zeroize::Zeroize;

/// Length of a derived cipher key in bytes (256 bits, for AES-256).
pub const KEY_LEN: usize = 32;

/// A 32-byte cipher key derived from a passkey.
///
/// The key bytes are wiped from memory when the value is dropped.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct DerivedKey {
    bytes: [u8; KEY_LEN],
}

impl DerivedKey {
    /// Access the raw key bytes (e.g. to build a cipher).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

impl std::fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedKey(..)")
    }
}

/// Derive the cipher key for `passkey`.
///
/// Deterministic and total: any string, including the empty string,
/// maps to a key.
pub fn derive_key(passkey: &str) -> DerivedKey {
    let mut digest: [u8; KEY_LEN] = Sha256::digest(passkey.as_bytes()).into();
    let key = DerivedKey { bytes: digest };
    digest.zeroize();
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_passkey_same_key() {
        let a = derive_key("pass123");
        let b = derive_key("pass123");
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn different_passkeys_different_keys() {
        let a = derive_key("pass123");
        let b = derive_key("pass124");
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn empty_passkey_is_accepted() {
        let key = derive_key("");
        assert_eq!(key.as_bytes().len(), KEY_LEN);
    }

    #[test]
    fn debug_does_not_leak_key_bytes() {
        let key = derive_key("pass123");
        assert_eq!(format!("{key:?}"), "DerivedKey(..)");
    }
}
