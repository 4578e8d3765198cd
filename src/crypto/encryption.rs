//! AES-256-GCM authenticated encryption.
//!
//! Each call to `encrypt` generates a fresh random 12-byte nonce and
//! prepends it to the ciphertext.  `decrypt` splits the nonce back out
//! before decrypting.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::crypto::kdf::DerivedKey;
use crate::errors::{LockboxError, Result};

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Size of the AES-256-GCM authentication tag in bytes.
const TAG_LEN: usize = 16;

/// Encrypt `plaintext` under `key`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
pub fn encrypt(key: &DerivedKey, plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
        .map_err(|e| LockboxError::EncryptionFailed(format!("invalid key length: {e}")))?;

    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| LockboxError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the record only needs to hold one blob.
    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Fails with `InvalidCiphertext` if the blob is malformed, was
/// encrypted under a different key, or has been altered.
pub fn decrypt(key: &DerivedKey, ciphertext_with_nonce: &[u8]) -> Result<Vec<u8>> {
    // A valid blob carries at least a nonce and a tag.
    if ciphertext_with_nonce.len() < NONCE_LEN + TAG_LEN {
        return Err(LockboxError::InvalidCiphertext);
    }

    let (nonce_bytes, ciphertext) = ciphertext_with_nonce.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher =
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| LockboxError::InvalidCiphertext)?;

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| LockboxError::InvalidCiphertext)
}
