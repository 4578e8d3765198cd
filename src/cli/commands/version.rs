//! `lockbox version` — display version and build details.

use console::style;

use crate::errors::Result;

/// Execute the `version` command.
pub fn execute() -> Result<()> {
    let current = env!("CARGO_PKG_VERSION");
    println!("lockbox {current}");
    println!(
        "{} AES-256-GCM, SHA-256 passkey derivation",
        style("cipher:").dim()
    );
    Ok(())
}
