use thiserror::Error;

/// All errors that can occur in Lockbox.
#[derive(Debug, Error)]
pub enum LockboxError {
    // --- Store errors ---
    #[error("Label '{0}' already exists — choose a different label")]
    LabelExists(String),

    // --- Retrieval errors ---
    #[error("Too many failed attempts — reauthorize before retrieving again")]
    Locked,

    #[error("Label '{0}' not found")]
    LabelNotFound(String),

    #[error("Incorrect passkey")]
    WrongPasskey,

    #[error("Decryption failed — stored data could not be authenticated")]
    DecryptionFailed,

    // --- Reauthorization errors ---
    #[error("Invalid operator credentials")]
    InvalidCredentials,

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Invalid ciphertext — wrong key or tampered data")]
    InvalidCiphertext,

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),
}

/// Convenience type alias for Lockbox results.
pub type Result<T> = std::result::Result<T, LockboxError>;
