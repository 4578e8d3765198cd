//! Failed-attempt tracking and the retrieval lockout.
//!
//! ```text
//!   Open --record_failure (count reaches threshold)--> Locked
//!   Open --record_success--> Open (count = 0)
//!   Locked --reauthorize ok--> Open (count = 0)
//!   Locked --reauthorize rejected--> Locked
//! ```
//!
//! The state is derived from the counter, so it can never disagree with it.

use crate::errors::{LockboxError, Result};

use super::credentials::CredentialCheck;

/// Number of consecutive failures that triggers a lockout.
pub const DEFAULT_THRESHOLD: u32 = 3;

/// Whether retrieval is currently allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockoutState {
    Open,
    Locked,
}

#[derive(Debug, Clone)]
pub struct LockoutGuard {
    failed_attempts: u32,
    threshold: u32,
}

impl Default for LockoutGuard {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl LockoutGuard {
    /// Create an open guard that locks after `threshold` failures.
    ///
    /// A threshold of zero is treated as one.
    pub fn new(threshold: u32) -> Self {
        Self {
            failed_attempts: 0,
            threshold: threshold.max(1),
        }
    }

    pub fn state(&self) -> LockoutState {
        if self.failed_attempts >= self.threshold {
            LockoutState::Locked
        } else {
            LockoutState::Open
        }
    }

    /// True iff the guard is `Open`.
    pub fn can_attempt(&self) -> bool {
        self.state() == LockoutState::Open
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Attempts left before the guard locks (zero when locked).
    pub fn remaining_attempts(&self) -> u32 {
        self.threshold.saturating_sub(self.failed_attempts)
    }

    pub fn record_failure(&mut self) {
        self.failed_attempts = self.failed_attempts.saturating_add(1);
    }

    pub fn record_success(&mut self) {
        self.failed_attempts = 0;
    }

    /// Clear the counter after checking operator credentials.
    ///
    /// Rejected credentials leave the counter exactly as it was.
    pub fn reauthorize(
        &mut self,
        check: &dyn CredentialCheck,
        username: &str,
        password: &str,
    ) -> Result<()> {
        if !check.verify(username, password) {
            return Err(LockboxError::InvalidCredentials);
        }
        self.failed_attempts = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::credentials::OperatorCredential;

    fn admin() -> OperatorCredential {
        OperatorCredential::new("admin", "admin")
    }

    #[test]
    fn starts_open() {
        let guard = LockoutGuard::default();
        assert_eq!(guard.state(), LockoutState::Open);
        assert_eq!(guard.failed_attempts(), 0);
        assert_eq!(guard.remaining_attempts(), 3);
    }

    #[test]
    fn locks_at_threshold() {
        let mut guard = LockoutGuard::default();
        guard.record_failure();
        guard.record_failure();
        assert!(guard.can_attempt());
        guard.record_failure();
        assert!(!guard.can_attempt());
        assert_eq!(guard.state(), LockoutState::Locked);
        assert_eq!(guard.remaining_attempts(), 0);
    }

    #[test]
    fn success_resets_counter() {
        let mut guard = LockoutGuard::default();
        guard.record_failure();
        guard.record_failure();
        guard.record_success();
        assert_eq!(guard.failed_attempts(), 0);
        assert!(guard.can_attempt());
    }

    #[test]
    fn reauthorize_unlocks() {
        let mut guard = LockoutGuard::new(2);
        guard.record_failure();
        guard.record_failure();
        assert!(!guard.can_attempt());

        guard.reauthorize(&admin(), "admin", "admin").unwrap();
        assert!(guard.can_attempt());
        assert_eq!(guard.failed_attempts(), 0);
    }

    #[test]
    fn rejected_reauthorize_leaves_state() {
        let mut guard = LockoutGuard::default();
        for _ in 0..4 {
            guard.record_failure();
        }

        let err = guard.reauthorize(&admin(), "admin", "nope").unwrap_err();
        assert!(matches!(err, LockboxError::InvalidCredentials));
        assert_eq!(guard.failed_attempts(), 4);
        assert_eq!(guard.state(), LockoutState::Locked);
    }

    #[test]
    fn zero_threshold_is_clamped() {
        let mut guard = LockoutGuard::new(0);
        assert_eq!(guard.threshold(), 1);
        assert!(guard.can_attempt());
        guard.record_failure();
        assert!(!guard.can_attempt());
    }
}
