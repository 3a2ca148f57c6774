//! Command to assert that a path exists.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;

/// Assert that a path exists.
#[derive(Args)]
pub struct AssertExistsCommand {
    /// Path to check, absolute or relative to the working directory
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Invert the assertion (fail if the path exists)
    #[arg(long)]
    pub not: bool,
}

impl AssertExistsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut resolver = build_resolver(global)?;
        resolver.options_mut().check_existence = true;

        let exists = match resolver.try_path(&self.path) {
            Ok(_) => true,
            Err(e) if e.is_not_found() => false,
            Err(e) => return Err(e.into()),
        };

        let success = if self.not { !exists } else { exists };

        if success {
            Ok(())
        } else {
            let msg = if self.not {
                format!("Assertion failed: {} exists", self.path)
            } else {
                format!("Assertion failed: {} does not exist", self.path)
            };
            Err(CliError::SemanticFailure(msg))
        }
    }
}
