// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Matrix command implementation for ci-plan.
//!
//! ```text
//! [plan] config + CLI args --> Planner --> Matrix JSON --> stdout | --output
//! ```

use anyhow::Context;

use crate::cli::plan::MatrixArgs;
use crate::config::Config;
use crate::error::Result;
use crate::mode::ModeTable;
use crate::plan::{Matrix, Planner};

/// Main handler for matrix command.
///
/// # Errors
///
/// Returns an error if planning fails or the output file cannot be written.
pub fn run_matrix_command(args: &MatrixArgs, config: &Config) -> Result<()> {
    let matrix = plan_matrix(args, config, ModeTable::builtin())?;
    let json = matrix.to_json(args.pretty)?;

    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write matrix to {}", path.display()))?;
            tracing::info!(path = %path.display(), jobs = matrix.len(), "Wrote job matrix");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Builds the planner from config and CLI arguments, then plans `table`.
///
/// CLI values replace config values. Passing `--platform` also replaces the
/// configured primary platform, which then defaults to the first CLI platform.
///
/// # Errors
///
/// Returns an error if the platform setup is invalid or a mode is unknown.
pub fn plan_matrix(args: &MatrixArgs, config: &Config, table: &ModeTable) -> Result<Matrix> {
    let planner = planner_for(args, config);
    tracing::debug!(
        platforms = ?planner.platforms(),
        modes = ?planner.modes(),
        "Planning job matrix"
    );
    Ok(planner.plan(table)?)
}

fn planner_for(args: &MatrixArgs, config: &Config) -> Planner {
    let mut plan = config.plan.clone();

    if !args.platforms.is_empty() {
        plan.platforms.clone_from(&args.platforms);
        plan.primary_platform = None;
    }
    if args.primary_platform.is_some() {
        plan.primary_platform.clone_from(&args.primary_platform);
    }
    if !args.modes.is_empty() {
        plan.modes.clone_from(&args.modes);
    }

    Planner::from_config(&plan)
}
