//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `demo`: Fixed-configuration walkthrough of `file.txt`
//! - `derive`: The single-value commands (`path`, `name`, `extension`, ...)
//! - `inspect`: Every derivation of one path
//! - `assert_exists`: Assert a path exists
//! - `show_config`: Show the effective configuration
//! - `completions`: Shell completion scripts

pub mod assert_exists;
pub mod completions;
pub mod demo;
pub mod derive;
pub mod inspect;
pub mod show_config;

pub use assert_exists::AssertExistsCommand;
pub use completions::CompletionsCommand;
pub use demo::DemoCommand;
pub use derive::DeriveCommand;
pub use inspect::InspectCommand;
pub use show_config::ShowConfigCommand;
