// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mode and matrix command arguments.
//!
//! ```text
//! list   [--platform-independent] [--format text|json]
//! show   <MODE> [--format text|json]
//! matrix [PATTERN...] [-p PLATFORM]... [--primary-platform P] [--pretty] [-o FILE]
//! ```

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Output format for `list` and `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// JSON, same shape as the mode table.
    Json,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Only list modes that run on a single platform.
    #[arg(long = "platform-independent")]
    pub platform_independent: bool,

    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `show` command.
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Mode key, e.g. 'clippy'.
    #[arg(value_name = "MODE")]
    pub mode: String,

    /// Output format.
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Arguments for the `matrix` command.
#[derive(Debug, Clone, Default, Args)]
pub struct MatrixArgs {
    /// Modes to include. Globs like 'c*' are supported.
    /// Defaults to `plan.modes`, or every mode when that is empty.
    #[arg(value_name = "PATTERN")]
    pub modes: Vec<String>,

    /// Platform to plan for, replaces `plan.platforms`. Can be repeated.
    #[arg(short = 'p', long = "platform", value_name = "PLATFORM", action = clap::ArgAction::Append)]
    pub platforms: Vec<String>,

    /// Platform for platform-independent modes.
    #[arg(long = "primary-platform", value_name = "PLATFORM")]
    pub primary_platform: Option<String>,

    /// Pretty-print the JSON document.
    #[arg(long)]
    pub pretty: bool,

    /// Write the matrix to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}
