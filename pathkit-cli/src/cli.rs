//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AssertExistsCommand, CompletionsCommand, DemoCommand, DeriveCommand, InspectCommand,
    ShowConfigCommand,
};
use clap::{Parser, Subcommand};
use pathkit::SeparatorStyle;
use std::path::PathBuf;

/// Command-line tool for deriving facts about filesystem paths.
#[derive(Parser)]
#[command(name = "pathkit")]
#[command(
    version,
    about = "Derive names, parents and normalized forms of filesystem paths",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Load this configuration file on top of the discovered ones
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Require inputs to exist before deriving anything from them
    #[arg(
        long,
        value_name = "BOOL",
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub check_existence: Option<bool>,

    /// Enable dot-path handling for a literal `.` input
    #[arg(
        long,
        value_name = "BOOL",
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub dot_enabled: Option<bool>,

    /// Value printed when a result cannot be derived
    #[arg(long, value_name = "TEXT", global = true)]
    pub not_found: Option<String>,

    /// Separator convention for normalization (unix or windows)
    #[arg(long, value_name = "STYLE", global = true)]
    pub separator: Option<SeparatorStyle>,

    /// Expand a leading `~` to the home directory
    #[arg(
        long,
        value_name = "BOOL",
        global = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub expand_tilde: Option<bool>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print every derivation of `file.txt` with a fixed configuration
    Demo(DemoCommand),

    /// Print the absolute path
    Path(DeriveCommand),

    /// Print the final path segment
    Name(DeriveCommand),

    /// Print the final segment without its extension
    BaseName(DeriveCommand),

    /// Print the extension of the final segment
    Extension(DeriveCommand),

    /// Print the name of the parent directory
    ParentName(DeriveCommand),

    /// Print the canonical path of the parent directory
    ParentPath(DeriveCommand),

    /// Print the absolute path with `.` and `..` collapsed
    Normalize(DeriveCommand),

    /// Print the absolute path without the final extension
    RemoveExtension(DeriveCommand),

    /// Print every derivation of a path
    Inspect(InspectCommand),

    /// Assert that a path exists
    AssertExists(AssertExistsCommand),

    /// Show the effective configuration
    ShowConfig(ShowConfigCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
