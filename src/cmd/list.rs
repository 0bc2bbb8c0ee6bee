// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! List command implementation for ci-plan.

use crate::cli::plan::{ListArgs, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::mode::ModeTable;

/// Main handler for list command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn run_list_command(args: &ListArgs, config: &Config) -> Result<()> {
    let output = render_list(args, ModeTable::builtin(), &config.plan.tool)?;
    if output.is_empty() {
        println!("No modes found");
    } else {
        println!("{output}");
    }
    Ok(())
}

/// Renders the mode list.
///
/// Text output is one `key  command line` row per mode, with a `*` after the
/// key of platform-independent modes. JSON output is a table object.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_list(args: &ListArgs, table: &ModeTable, tool: &str) -> Result<String> {
    let selected: ModeTable = table
        .entries()
        .filter(|(_, mode)| !args.platform_independent || mode.platform_independent)
        .map(|(key, mode)| (key, mode.clone()))
        .collect();

    match args.format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&selected)?),
        OutputFormat::Text => {
            let width = selected.keys().map(|k| k.len() + 1).max().unwrap_or(0);
            let lines: Vec<String> = selected
                .entries()
                .map(|(key, mode)| {
                    let label = if mode.platform_independent {
                        format!("{key}*")
                    } else {
                        key.to_string()
                    };
                    format!("{label:<width$}  {}", mode.command_line(tool))
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}
