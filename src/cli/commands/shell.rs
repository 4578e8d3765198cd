//! `lockbox shell` — interactive menu-driven session.
//!
//! Pages: Home (status + stored labels), Insert Data, Retrieve Data,
//! Login (reauthorize after a lockout), Quit.  Everything stored here is
//! gone when the shell exits.

use dialoguer::{Input, Password, Select};
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{load_settings, Cli};
use crate::errors::{LockboxError, Result};
use crate::session::Session;

const MENU: [&str; 5] = ["Home", "Insert Data", "Retrieve Data", "Login", "Quit"];

/// Execute the `shell` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = load_settings(cli)?;
    let mut session = settings.session();

    output::info("Secure data storage — everything is kept in memory for this session only.");

    loop {
        let choice = Select::new()
            .with_prompt("Navigation")
            .items(&MENU)
            .default(0)
            .interact()
            .map_err(|e| LockboxError::CommandFailed(format!("menu prompt: {e}")))?;

        let result = match choice {
            0 => {
                home(&session);
                Ok(())
            }
            1 => insert(&mut session),
            2 => retrieve(&mut session),
            3 => login(&mut session),
            _ => break,
        };

        // Prompt failures end the shell; vault errors are reported and we loop.
        match result {
            Err(e @ LockboxError::CommandFailed(_)) => return Err(e),
            Err(e) => output::error(&e.to_string()),
            Ok(()) => {}
        }
    }

    output::info("Session closed — stored data discarded.");
    Ok(())
}

fn home(session: &Session) {
    output::info(&output::lockout_summary(session));
    output::print_records_table(&session.records());
}

fn insert(session: &mut Session) -> Result<()> {
    let label = prompt_text("Data key (unique identifier)")?;
    let text = prompt_text("Text to store")?;
    let passkey = prompt_secret("Passkey")?;

    if label.is_empty() || text.is_empty() || passkey.is_empty() {
        output::warning("Please fill in all fields.");
        return Ok(());
    }

    session.store(&label, &text, &passkey)?;
    output::success(&format!("Data stored successfully under key '{label}'"));
    Ok(())
}

fn retrieve(session: &mut Session) -> Result<()> {
    if !session.can_attempt() {
        output::error("Too many failed attempts. Please login first.");
        return Ok(());
    }

    let label = prompt_text("Data key")?;
    let passkey = prompt_secret("Passkey")?;

    if label.is_empty() || passkey.is_empty() {
        output::warning("Enter both key and passkey.");
        return Ok(());
    }

    let result = session.retrieve(&label, &passkey);
    match result {
        Ok(text) => {
            let text = Zeroizing::new(text);
            output::success("Data retrieved successfully!");
            println!("{}", text.as_str());
        }
        Err(e) => {
            output::error(&e.to_string());
            if !session.can_attempt() {
                output::warning(&format!(
                    "{} failed attempts. Please go to the Login page.",
                    session.failed_attempt_count()
                ));
            } else if session.failed_attempt_count() > 0 {
                output::tip(&format!(
                    "{} attempt(s) left before lockout.",
                    session.guard().remaining_attempts()
                ));
            }
        }
    }
    Ok(())
}

fn login(session: &mut Session) -> Result<()> {
    let username = prompt_text("Username")?;
    let password = prompt_secret("Password")?;

    session.reauthorize(&username, &password)?;
    output::success("Login successful! Failed attempts reset.");
    Ok(())
}

// ---------------------------------------------------------------------------
// Prompt helpers
// ---------------------------------------------------------------------------

fn prompt_text(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| LockboxError::CommandFailed(format!("input prompt: {e}")))
}

/// Hidden prompt; the value is wiped from memory on drop.
fn prompt_secret(prompt: &str) -> Result<Zeroizing<String>> {
    let value = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()
        .map_err(|e| LockboxError::CommandFailed(format!("password prompt: {e}")))?;
    Ok(Zeroizing::new(value))
}
