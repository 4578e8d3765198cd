//! One module per `lockbox` subcommand.

pub mod run;
pub mod shell;
pub mod version;
