// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show command implementation for ci-plan.

use crate::cli::plan::{OutputFormat, ShowArgs};
use crate::config::Config;
use crate::error::Result;
use crate::mode::ModeTable;

/// Main handler for show command.
///
/// # Errors
///
/// Returns an error if the mode is unknown.
pub fn run_show_command(args: &ShowArgs, config: &Config) -> Result<()> {
    let output = render_show(args, ModeTable::builtin(), &config.plan.tool)?;
    println!("{output}");
    Ok(())
}

/// Renders one mode.
///
/// # Errors
///
/// Returns an error if the mode is unknown or JSON serialization fails.
pub fn render_show(args: &ShowArgs, table: &ModeTable, tool: &str) -> Result<String> {
    let mode = table.get(&args.mode)?;

    match args.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(mode)?),
        OutputFormat::Text => {
            let platforms = if mode.platform_independent {
                "single"
            } else {
                "all"
            };
            Ok([
                format!("key:       {}", args.mode),
                format!("name:      {}", mode.name),
                format!("command:   {}", mode.command),
                format!("args:      {}", mode.args),
                format!("cache key: {}", mode.cache_key),
                format!("platforms: {platforms}"),
                format!("runs:      {}", mode.command_line(tool)),
            ]
            .join("\n"))
        }
    }
}
