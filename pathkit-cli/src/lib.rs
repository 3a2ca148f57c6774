//! Library exports for pathkit-cli.
//!
//! This module exports the CLI structure for use by tests and benchmarks.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for tests
pub use cli::Cli;
