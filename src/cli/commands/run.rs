//! `lockbox run` — drive one session from a script file or stdin.
//!
//! Each line is applied to the same in-memory session, so lockouts and
//! stored labels carry across lines exactly as they would in the shell.
//! Retrieved text goes to stdout; errors and warnings go to stderr.

use std::fs;
use std::io::{self, Read};

use crate::cli::output;
use crate::cli::script_parser::{parse_script_line, ScriptCommand};
use crate::cli::{load_settings, Cli};
use crate::errors::{LockboxError, Result};
use crate::session::Session;

/// Result of applying one script command.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Stored(String),
    Retrieved(String),
    Reauthorized,
    Labels(Vec<String>),
    Status(String),
}

/// Execute the `run` command.
pub fn execute(cli: &Cli, file: Option<&str>, strict: bool) -> Result<()> {
    let settings = load_settings(cli)?;

    let script = match file {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| LockboxError::CommandFailed(format!("failed to read {path}: {e}")))?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let mut session = settings.session();
    let failed = run_script(&mut session, &script);

    if strict && failed > 0 {
        return Err(LockboxError::CommandFailed(format!(
            "{failed} script command(s) failed"
        )));
    }

    Ok(())
}

/// Apply every line of `script` to `session`, printing each outcome.
///
/// Returns the number of lines that failed.
pub fn run_script(session: &mut Session, script: &str) -> usize {
    let mut failed = 0;

    for (idx, line) in script.lines().enumerate() {
        let line_no = idx + 1;

        let result = parse_script_line(line).and_then(|parsed| match parsed {
            Some(cmd) => apply(session, &cmd).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(Some(outcome)) => print_outcome(&outcome),
            Ok(None) => {}
            Err(e) => {
                failed += 1;
                output::error(&format!("line {line_no}: {e}"));
                if !matches!(e, LockboxError::Locked) && !session.can_attempt() {
                    output::warning("Retrieval locked — use `login <username> <password>`.");
                }
            }
        }
    }

    failed
}

/// Apply a single parsed command to the session.
pub fn apply(session: &mut Session, command: &ScriptCommand<'_>) -> Result<Outcome> {
    match *command {
        ScriptCommand::Store {
            label,
            passkey,
            text,
        } => {
            session.store(label, text, passkey)?;
            Ok(Outcome::Stored(label.to_string()))
        }
        ScriptCommand::Retrieve { label, passkey } => {
            session.retrieve(label, passkey).map(Outcome::Retrieved)
        }
        ScriptCommand::Login { username, password } => {
            session.reauthorize(username, password)?;
            Ok(Outcome::Reauthorized)
        }
        ScriptCommand::Labels => Ok(Outcome::Labels(session.list_labels())),
        ScriptCommand::Status => Ok(Outcome::Status(output::lockout_summary(session))),
    }
}

fn print_outcome(outcome: &Outcome) {
    match outcome {
        Outcome::Stored(label) => output::success(&format!("Stored data under '{label}'")),
        Outcome::Retrieved(text) => println!("{text}"),
        Outcome::Reauthorized => output::success("Reauthorized — failed attempts reset"),
        Outcome::Labels(labels) => {
            for label in labels {
                println!("{label}");
            }
        }
        Outcome::Status(summary) => output::info(summary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(s: &str) -> ScriptCommand<'_> {
        parse_script_line(s).unwrap().unwrap()
    }

    #[test]
    fn apply_store_then_retrieve() {
        let mut session = Session::default();
        assert_eq!(
            apply(&mut session, &line("store s1 pass123 hello world")).unwrap(),
            Outcome::Stored("s1".into())
        );
        assert_eq!(
            apply(&mut session, &line("retrieve s1 pass123")).unwrap(),
            Outcome::Retrieved("hello world".into())
        );
    }

    #[test]
    fn apply_labels_and_status() {
        let mut session = Session::default();
        apply(&mut session, &line("store b p x")).unwrap();
        apply(&mut session, &line("store a p y")).unwrap();
        assert_eq!(
            apply(&mut session, &line("labels")).unwrap(),
            Outcome::Labels(vec!["a".into(), "b".into()])
        );
        assert_eq!(
            apply(&mut session, &line("status")).unwrap(),
            Outcome::Status("Failed attempts: 0/3 (open)".into())
        );
    }

    #[test]
    fn run_script_counts_failures_and_continues() {
        let mut session = Session::default();
        let script = "\
# lockout walk-through
store secret1 pass123 hello world
retrieve secret1 wrongpass
retrieve secret1 wrongpass
retrieve secret1 wrongpass
retrieve secret1 pass123
login admin admin
retrieve secret1 pass123
bogus line
";
        let failed = run_script(&mut session, script);

        // Three wrong passkeys, one Locked refusal, one unknown command.
        assert_eq!(failed, 5);
        assert_eq!(session.failed_attempt_count(), 0);
        assert!(session.can_attempt());
    }
}
