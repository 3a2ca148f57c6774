//! Demonstration command.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use pathkit::{Operation, PathResolver, ResolverOptions};

/// Input the demonstration derives from.
pub const DEMO_INPUT: &str = "file.txt";

/// Sentinel the demonstration configures.
pub const DEMO_NOT_FOUND: &str = "Invalid path detected";

/// Print every classic derivation of `file.txt` in the working directory.
///
/// The configuration is fixed; files, environment and flags are ignored.
#[derive(Args)]
pub struct DemoCommand {}

impl DemoCommand {
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let options = ResolverOptions::default()
            .with_check_existence(true)
            .with_dot_enabled(false)
            .with_not_found(DEMO_NOT_FOUND);
        let resolver = PathResolver::new(options)?;

        for operation in Operation::CORE {
            println!(
                "{}: {}",
                operation.label(),
                operation.apply(&resolver, DEMO_INPUT)
            );
        }

        Ok(())
    }
}
