//! Inspect command implementation.
//!
//! This module implements the `inspect` command, which prints every
//! derivation of one input in human-readable or JSON form.

use crate::error::CliError;
use crate::utils::{build_resolver, GlobalOptions};
use clap::{Args, ValueEnum};

/// Print every derivation of a path.
#[derive(Args)]
pub struct InspectCommand {
    /// Input path, absolute or relative to the working directory
    #[arg(value_name = "PATH", allow_hyphen_values = true)]
    pub path: String,

    /// Output format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: ReportFormat,
}

/// Output formats for `inspect`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// One `label: value` line per derivation
    Human,
    /// A JSON object keyed by derivation
    Json,
}

impl InspectCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let resolver = build_resolver(global)?;
        let report = resolver.report(&self.path);

        let rendered = match self.format {
            ReportFormat::Human => report.to_lines(),
            ReportFormat::Json => report.to_json()?,
        };
        println!("{rendered}");

        Ok(())
    }
}
