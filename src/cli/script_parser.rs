//! Line-oriented session script parsing.
//!
//! Used by `lockbox run` to drive a whole session from a file or stdin:
//!
//! ```text
//! # comment
//! store <label> <passkey> <text...>
//! retrieve <label> <passkey>
//! login <username> <password>
//! labels
//! status
//! ```

use crate::errors::{LockboxError, Result};

/// One parsed script command, borrowing from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand<'a> {
    Store {
        label: &'a str,
        passkey: &'a str,
        text: &'a str,
    },
    Retrieve {
        label: &'a str,
        passkey: &'a str,
    },
    Login {
        username: &'a str,
        password: &'a str,
    },
    Labels,
    Status,
}

/// Split off the first whitespace-delimited word.
fn next_word(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.find(char::is_whitespace) {
        Some(idx) => Some((&s[..idx], &s[idx..])),
        None => Some((s, "")),
    }
}

/// Require exactly two more words and nothing after them.
fn two_words<'a>(rest: &'a str, usage: &str) -> Result<(&'a str, &'a str)> {
    let (first, rest) = next_word(rest).ok_or_else(|| usage_error(usage))?;
    let (second, rest) = next_word(rest).ok_or_else(|| usage_error(usage))?;
    if !rest.trim().is_empty() {
        return Err(usage_error(usage));
    }
    Ok((first, second))
}

fn usage_error(usage: &str) -> LockboxError {
    LockboxError::CommandFailed(format!("usage: {usage}"))
}

/// Parse a single script line.
///
/// Returns `Ok(None)` for blank lines and comments.  The `store` text is
/// the rest of the line, trimmed, with one optional pair of surrounding
/// quotes removed.
pub fn parse_script_line(line: &str) -> Result<Option<ScriptCommand<'_>>> {
    let trimmed = line.trim();

    // Skip empty lines and comments.
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let Some((verb, rest)) = next_word(trimmed) else {
        return Ok(None);
    };

    let command = match verb {
        "store" => {
            const USAGE: &str = "store <label> <passkey> <text...>";
            let (label, rest) = next_word(rest).ok_or_else(|| usage_error(USAGE))?;
            let (passkey, rest) = next_word(rest).ok_or_else(|| usage_error(USAGE))?;
            let text = rest.trim();
            let text = text
                .strip_prefix('"')
                .and_then(|t| t.strip_suffix('"'))
                .unwrap_or(text);
            if text.is_empty() {
                return Err(usage_error(USAGE));
            }
            ScriptCommand::Store {
                label,
                passkey,
                text,
            }
        }
        "retrieve" => {
            let (label, passkey) = two_words(rest, "retrieve <label> <passkey>")?;
            ScriptCommand::Retrieve { label, passkey }
        }
        "login" => {
            let (username, password) = two_words(rest, "login <username> <password>")?;
            ScriptCommand::Login { username, password }
        }
        "labels" => ScriptCommand::Labels,
        "status" => ScriptCommand::Status,
        other => {
            return Err(LockboxError::CommandFailed(format!(
                "unknown command '{other}'"
            )));
        }
    };

    Ok(Some(command))
}
