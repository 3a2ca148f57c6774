//! Main entry point for the pathkit CLI.
//!
//! This is the command-line interface for the pathkit library.
//! It provides commands for deriving facts about paths:
//! - `demo`: Walk through every derivation of `file.txt`
//! - `path`, `name`, `base-name`, `extension`, `parent-name`, `parent-path`,
//!   `normalize`, `remove-extension`: Print one derived value
//! - `inspect`: Print every derived value
//! - `assert-exists`: Exit non-zero unless a path exists

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::{Cli, Command};
use pathkit::Operation;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let logger = pathkit::init_logger(cli.verbose, cli.quiet);
    if logger.install().is_err() {
        logger.warn("a logger was already installed");
    }

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        check_existence: cli.check_existence,
        dot_enabled: cli.dot_enabled,
        not_found: cli.not_found,
        separator: cli.separator,
        expand_tilde: cli.expand_tilde,
    };

    // Execute the command
    let result = match cli.command {
        Command::Demo(cmd) => cmd.execute(&global),
        Command::Path(cmd) => cmd.execute(Operation::Path, &global),
        Command::Name(cmd) => cmd.execute(Operation::Name, &global),
        Command::BaseName(cmd) => cmd.execute(Operation::BaseName, &global),
        Command::Extension(cmd) => cmd.execute(Operation::Extension, &global),
        Command::ParentName(cmd) => cmd.execute(Operation::ParentName, &global),
        Command::ParentPath(cmd) => cmd.execute(Operation::ParentPath, &global),
        Command::Normalize(cmd) => cmd.execute(Operation::Normalize, &global),
        Command::RemoveExtension(cmd) => cmd.execute(Operation::RemoveExtension, &global),
        Command::Inspect(cmd) => cmd.execute(&global),
        Command::AssertExists(cmd) => cmd.execute(&global),
        Command::ShowConfig(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
