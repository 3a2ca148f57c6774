//! Single-value derivation commands.
//!
//! `path`, `name`, `base-name`, `extension`, `parent-name`, `parent-path`,
//! `normalize` and `remove-extension` all share this implementation and
//! differ only in the [`Operation`] they run.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::Args;
use pathkit::Operation;

/// Print one derived value for a path.
#[derive(Args)]
pub struct DeriveCommand {
    /// Input path, absolute or relative to the working directory
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,
}

impl DeriveCommand {
    pub fn execute(self, operation: Operation, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;
        println!("{}", operation.apply(&resolver, &self.path));
        Ok(())
    }
}
