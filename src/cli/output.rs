//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::session::{LockoutState, Session};
use crate::vault::RecordMetadata;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// One-line lockout summary, e.g. "Failed attempts: 1/3 (open)".
pub fn lockout_summary(session: &Session) -> String {
    let state = match session.lockout_state() {
        LockoutState::Open => "open",
        LockoutState::Locked => "locked",
    };
    format!(
        "Failed attempts: {}/{} ({state})",
        session.failed_attempt_count(),
        session.guard().threshold()
    )
}

/// Print a table of record metadata (Label, Created, Size).
pub fn print_records_table(records: &[RecordMetadata]) {
    if records.is_empty() {
        info("No data stored in this session yet.");
        tip("Choose \"Insert Data\" to store your first secret.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Label", "Created", "Encrypted size"]);

    for r in records {
        table.add_row(vec![
            r.label.clone(),
            r.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            format!("{} bytes", r.ciphertext_len),
        ]);
    }

    println!("{table}");
}
