//! Command to show the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;

/// Show the effective configuration as YAML.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Show only the values that were set explicitly
    #[arg(long)]
    pub explicit: bool,
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let shown = if self.explicit {
            config
        } else {
            config.effective()
        };

        print!("{}", shown.to_yaml()?);
        Ok(())
    }
}
