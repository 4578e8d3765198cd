//! Operator credential checks used to clear a lockout.
//!
//! The session only sees the `CredentialCheck` trait, so the credential
//! source can be swapped without touching the lockout logic.

use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Validates an operator's username and password.
pub trait CredentialCheck {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Default operator username.
pub const DEFAULT_OPERATOR_USERNAME: &str = "admin";

/// Default operator password.
pub const DEFAULT_OPERATOR_PASSWORD: &str = "admin";

/// A single fixed operator account.
///
/// Only SHA-256 digests of the username and password are kept.
#[derive(Clone)]
pub struct OperatorCredential {
    username_digest: [u8; 32],
    password_digest: [u8; 32],
}

impl OperatorCredential {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username_digest: Sha256::digest(username.as_bytes()).into(),
            password_digest: Sha256::digest(password.as_bytes()).into(),
        }
    }
}

impl Default for OperatorCredential {
    fn default() -> Self {
        Self::new(DEFAULT_OPERATOR_USERNAME, DEFAULT_OPERATOR_PASSWORD)
    }
}

impl std::fmt::Debug for OperatorCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("OperatorCredential(..)")
    }
}

impl CredentialCheck for OperatorCredential {
    fn verify(&self, username: &str, password: &str) -> bool {
        let user: [u8; 32] = Sha256::digest(username.as_bytes()).into();
        let pass: [u8; 32] = Sha256::digest(password.as_bytes()).into();

        // Evaluate both halves so a wrong username costs the same as a wrong password.
        let user_ok = user[..].ct_eq(&self.username_digest[..]);
        let pass_ok = pass[..].ct_eq(&self.password_digest[..]);
        (user_ok & pass_ok).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_accepts_admin_admin() {
        assert!(OperatorCredential::default().verify("admin", "admin"));
    }

    #[test]
    fn rejects_wrong_username_or_password() {
        let cred = OperatorCredential::new("ops", "s3cret");
        assert!(cred.verify("ops", "s3cret"));
        assert!(!cred.verify("ops", "wrong"));
        assert!(!cred.verify("admin", "s3cret"));
        assert!(!cred.verify("", ""));
    }

    #[test]
    fn debug_hides_digests() {
        let cred = OperatorCredential::default();
        assert_eq!(format!("{cred:?}"), "OperatorCredential(..)");
    }

    #[test]
    fn custom_checks_work_as_trait_objects() {
        struct AllowAll;
        impl CredentialCheck for AllowAll {
            fn verify(&self, _: &str, _: &str) -> bool {
                true
            }
        }
        let check: &dyn CredentialCheck = &AllowAll;
        assert!(check.verify("anyone", "anything"));
    }
}
