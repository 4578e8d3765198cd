use clap::Parser;
use lockbox::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Shell => lockbox::cli::commands::shell::execute(&cli),
        Commands::Run { ref file, strict } => {
            lockbox::cli::commands::run::execute(&cli, file.as_deref(), strict)
        }
        Commands::Version => lockbox::cli::commands::version::execute(),
    };

    if let Err(e) = result {
        lockbox::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
