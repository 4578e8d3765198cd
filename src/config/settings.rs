use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{LockboxError, Result};
use crate::session::{
    credentials::{DEFAULT_OPERATOR_PASSWORD, DEFAULT_OPERATOR_USERNAME},
    OperatorCredential, Session, DEFAULT_THRESHOLD,
};

/// Environment variable that overrides `operator_username`.
pub const OPERATOR_USERNAME_ENV: &str = "LOCKBOX_OPERATOR_USERNAME";

/// Environment variable that overrides `operator_password`.
pub const OPERATOR_PASSWORD_ENV: &str = "LOCKBOX_OPERATOR_PASSWORD";

/// Session configuration, loaded from `.lockbox.toml`.
///
/// Every field has a sensible default so Lockbox works out-of-the-box
/// without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Consecutive failed retrievals before the session locks (default: 3).
    #[serde(default = "default_max_failed_attempts")]
    pub max_failed_attempts: u32,

    /// Count retrievals of unknown labels as failed attempts (default: false).
    #[serde(default)]
    pub count_missing_labels: bool,

    /// Operator username accepted by `login` (default: "admin").
    #[serde(default = "default_operator_username")]
    pub operator_username: String,

    /// Operator password accepted by `login` (default: "admin").
    #[serde(default = "default_operator_password")]
    pub operator_password: String,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_max_failed_attempts() -> u32 {
    DEFAULT_THRESHOLD
}

fn default_operator_username() -> String {
    DEFAULT_OPERATOR_USERNAME.to_string()
}

fn default_operator_password() -> String {
    DEFAULT_OPERATOR_PASSWORD.to_string()
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_failed_attempts: default_max_failed_attempts(),
            count_missing_labels: false,
            operator_username: default_operator_username(),
            operator_password: default_operator_password(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    pub const FILE_NAME: &'static str = ".lockbox.toml";

    /// Load settings from `<dir>/.lockbox.toml`, then apply env overrides.
    ///
    /// If the file does not exist, defaults are used.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        let settings = if config_path.exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };

        Ok(settings.with_env_overrides())
    }

    /// Load settings from an explicit file path, then apply env overrides.
    ///
    /// Unlike `load`, a missing file is an error.
    pub fn load_file(path: &Path) -> Result<Self> {
        Ok(Self::from_file(path)?.with_env_overrides())
    }

    fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            LockboxError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&contents)
            .map_err(|e| LockboxError::ConfigError(format!("{}: {e}", path.display())))
    }

    /// Parse and validate TOML settings.
    pub fn parse(contents: &str) -> std::result::Result<Self, String> {
        let settings: Settings =
            toml::from_str(contents).map_err(|e| format!("failed to parse: {e}"))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> std::result::Result<(), String> {
        if self.max_failed_attempts < 1 {
            return Err("max_failed_attempts must be at least 1".into());
        }
        if self.operator_username.is_empty() {
            return Err("operator_username cannot be empty".into());
        }
        Ok(())
    }

    /// Apply `LOCKBOX_OPERATOR_*` environment overrides (CI friendly).
    fn with_env_overrides(mut self) -> Self {
        if let Ok(user) = std::env::var(OPERATOR_USERNAME_ENV) {
            if !user.is_empty() {
                self.operator_username = user;
            }
        }
        if let Ok(pw) = std::env::var(OPERATOR_PASSWORD_ENV) {
            if !pw.is_empty() {
                self.operator_password = pw;
            }
        }
        self
    }

    /// Build the operator credential check from these settings.
    pub fn operator_credential(&self) -> OperatorCredential {
        OperatorCredential::new(&self.operator_username, &self.operator_password)
    }

    /// Start a fresh session configured by these settings.
    pub fn session(&self) -> Session {
        Session::new(
            Box::new(self.operator_credential()),
            self.max_failed_attempts,
        )
        .with_missing_label_policy(self.count_missing_labels)
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::CredentialCheck;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.max_failed_attempts, 3);
        assert!(!s.count_missing_labels);
        assert_eq!(s.operator_username, "admin");
        assert_eq!(s.operator_password, "admin");
    }

    #[test]
    fn parse_reads_all_fields() {
        let config = r#"
max_failed_attempts = 5
count_missing_labels = true
operator_username = "ops"
operator_password = "letmein"
"#;
        let s = Settings::parse(config).unwrap();
        assert_eq!(s.max_failed_attempts, 5);
        assert!(s.count_missing_labels);
        assert_eq!(s.operator_username, "ops");
        assert_eq!(s.operator_password, "letmein");
    }

    #[test]
    fn parse_uses_defaults_for_missing_fields() {
        let s = Settings::parse("max_failed_attempts = 7\n").unwrap();
        assert_eq!(s.max_failed_attempts, 7);
        assert_eq!(s.operator_username, "admin");
    }

    #[test]
    fn parse_rejects_zero_threshold() {
        let err = Settings::parse("max_failed_attempts = 0\n").unwrap_err();
        assert!(err.contains("at least 1"), "unexpected error: {err}");
    }

    #[test]
    fn parse_rejects_invalid_toml() {
        assert!(Settings::parse("not valid {{toml").is_err());
    }

    #[test]
    fn load_errors_on_invalid_file() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".lockbox.toml"), "max_failed_attempts = \"x\"").unwrap();

        let result = Settings::load(tmp.path());
        assert!(matches!(result, Err(LockboxError::ConfigError(_))));
    }

    #[test]
    fn load_file_errors_when_missing() {
        let tmp = TempDir::new().unwrap();
        let result = Settings::load_file(&tmp.path().join("absent.toml"));
        assert!(matches!(result, Err(LockboxError::ConfigError(_))));
    }

    #[test]
    fn session_uses_configured_threshold_and_credentials() {
        let s = Settings {
            max_failed_attempts: 2,
            operator_username: "ops".into(),
            operator_password: "pw".into(),
            ..Settings::default()
        };
        assert!(s.operator_credential().verify("ops", "pw"));

        let session = s.session();
        assert_eq!(session.guard().threshold(), 2);
        assert!(!session.counts_missing_labels());
    }
}
