//! Build script for pathkit-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// A global `--flag[=BOOL]` option.
fn bool_flag(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .help(help)
        .value_name("BOOL")
        .num_args(0..=1)
        .require_equals(true)
        .default_missing_value("true")
        .global(true)
}

/// A command taking a single PATH argument.
fn path_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(Arg::new("path").value_name("PATH").required(true))
}

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("pathkit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Derive names, parents and normalized forms of filesystem paths")
        .long_about(
            "Command-line tool for deriving absolute paths, names, extensions, parents \
             and normalized forms of filesystem paths",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load this configuration file on top of the discovered ones")
                .value_name("FILE")
                .global(true),
        )
        .arg(bool_flag(
            "check-existence",
            "Require inputs to exist before deriving anything from them",
        ))
        .arg(bool_flag(
            "dot-enabled",
            "Enable dot-path handling for a literal `.` input",
        ))
        .arg(
            Arg::new("not-found")
                .long("not-found")
                .help("Value printed when a result cannot be derived")
                .value_name("TEXT")
                .global(true),
        )
        .arg(
            Arg::new("separator")
                .long("separator")
                .help("Separator convention for normalization (unix or windows)")
                .value_name("STYLE")
                .global(true),
        )
        .arg(bool_flag(
            "expand-tilde",
            "Expand a leading `~` to the home directory",
        ))
        .subcommands(vec![
            Command::new("demo")
                .about("Print every derivation of `file.txt` with a fixed configuration"),
            path_command("path", "Print the absolute path"),
            path_command("name", "Print the final path segment"),
            path_command("base-name", "Print the final segment without its extension"),
            path_command("extension", "Print the extension of the final segment"),
            path_command("parent-name", "Print the name of the parent directory"),
            path_command(
                "parent-path",
                "Print the canonical path of the parent directory",
            ),
            path_command(
                "normalize",
                "Print the absolute path with `.` and `..` collapsed",
            ),
            path_command(
                "remove-extension",
                "Print the absolute path without the final extension",
            ),
            path_command("inspect", "Print every derivation of a path").arg(
                Arg::new("format")
                    .long("format")
                    .value_parser(["human", "json"])
                    .default_value("human"),
            ),
            path_command("assert-exists", "Assert that a path exists")
                .long_about("Check if a path exists and exit with appropriate status code"),
            Command::new("show-config")
                .about("Show the effective configuration")
                .long_about("Print the merged configuration from files, environment and flags"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main pathkit.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathkit.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
