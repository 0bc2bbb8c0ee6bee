// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use ci_plan::cli::Cli;
use ci_plan::cli::Command;
use ci_plan::cli::plan::OutputFormat;
use clap::Parser;

// =============================================================================
// Simple Commands
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["ci-plan", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_options_and_configs() {
    let cli = Cli::try_parse_from(["ci-plan", "options"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));

    let cli = Cli::try_parse_from(["ci-plan", "configs"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Configs)));
}

#[test]
fn cli_unknown_command_rejected() {
    assert!(Cli::try_parse_from(["ci-plan", "run"]).is_err());
}

// =============================================================================
// List Command
// =============================================================================

#[test]
fn cli_list_defaults() {
    let cli = Cli::try_parse_from(["ci-plan", "list"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert!(!args.platform_independent);
    assert_eq!(args.format, OutputFormat::Text);
}

#[test]
fn cli_list_filters() {
    let cli =
        Cli::try_parse_from(["ci-plan", "list", "--platform-independent", "-f", "json"]).unwrap();
    let Some(Command::List(args)) = cli.command else {
        panic!("expected list command");
    };
    assert!(args.platform_independent);
    assert_eq!(args.format, OutputFormat::Json);
}

#[test]
fn cli_list_invalid_format_rejected() {
    assert!(Cli::try_parse_from(["ci-plan", "list", "--format", "yaml"]).is_err());
}

// =============================================================================
// Matrix Command
// =============================================================================

#[test]
fn cli_matrix_no_args() {
    let cli = Cli::try_parse_from(["ci-plan", "matrix"]).unwrap();
    let Some(Command::Matrix(args)) = cli.command else {
        panic!("expected matrix command");
    };
    assert!(args.modes.is_empty());
    assert!(args.platforms.is_empty());
    assert!(args.primary_platform.is_none());
    assert!(!args.pretty);
}

#[test]
fn cli_matrix_output_file() {
    let cli = Cli::try_parse_from(["ci-plan", "matrix", "-o", "matrix.json", "clippy"]).unwrap();
    let Some(Command::Matrix(args)) = cli.command else {
        panic!("expected matrix command");
    };
    assert_eq!(args.modes, ["clippy"]);
    assert_eq!(
        args.output.as_deref(),
        Some(std::path::Path::new("matrix.json"))
    );
}

#[test]
fn cli_global_options_anywhere() {
    let cli = Cli::try_parse_from([
        "ci-plan",
        "matrix",
        "--set",
        "plan.tool=cross",
        "--file-log-level",
        "5",
        "--log-file",
        "plan.log",
    ])
    .unwrap();

    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "plan.tool=cross",
        "global.file_log_level=5",
        "global.log_file=plan.log",
    ]
    "#);
}
