// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for ci-plan using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! ci-plan [global options] <command>
//! version
//! options
//! configs
//! list [--platform-independent] [--format]
//! show <MODE> [--format]
//! matrix [PATTERN...] [-p PLATFORM]... [--primary-platform] [--pretty] [-o FILE]
//! ```

pub mod global;
pub mod plan;


use crate::cli::global::GlobalOptions;
use crate::cli::plan::{ListArgs, MatrixArgs, ShowArgs};
use clap::{Parser, Subcommand};

/// Cargo CI mode table and job matrix planner.
#[derive(Debug, Parser)]
#[command(
    name = "ci-plan",
    author,
    version,
    about = "Cargo CI mode table and job matrix planner",
    long_about = "ci-plan Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Describes the cargo invocations (modes) a CI workflow runs and\n\
                  expands them into a job matrix. `ci-plan matrix` prints the\n\
                  matrix as JSON for `strategy.matrix`; `ci-plan list` shows the\n\
                  available modes.",
    after_help = "CONFIGURATION:\n\n\
                  ci-plan reads `ci-plan.toml` from the current directory if it\n\
                  exists. Additional files can be given with --config; they are\n\
                  loaded in order and override earlier ones. CI_PLAN_* environment\n\
                  variables and --set override all files. Use --no-default-config\n\
                  to skip `ci-plan.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files used.
    Configs,

    /// Lists available modes.
    List(ListArgs),

    /// Shows a single mode.
    Show(ShowArgs),

    /// Prints the CI job matrix.
    Matrix(MatrixArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
