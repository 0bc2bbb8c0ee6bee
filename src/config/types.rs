// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for ci-plan.
//!
//! ```text
//! Config: GlobalConfig (logging), PlanConfig (tool, platforms, selection)
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;

use crate::error::ConfigError;
use crate::logging::LogLevel;
use crate::mode::DEFAULT_TOOL;

/// Runner labels used when no platforms are configured.
pub const DEFAULT_PLATFORMS: &[&str] = &["ubuntu-latest", "windows-latest", "macos-latest"];

/// Global configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-5).
    pub file_log_level: LogLevel,
    /// Path to log file. No file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Job matrix planning options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlanConfig {
    /// Build tool each mode invokes.
    pub tool: String,
    /// Platforms (runner labels) in matrix order.
    pub platforms: Vec<String>,
    /// Platform for platform-independent modes. Defaults to the first platform.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_platform: Option<String>,
    /// Default mode selection. Empty selects every mode.
    pub modes: Vec<String>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            platforms: DEFAULT_PLATFORMS.iter().map(ToString::to_string).collect(),
            primary_platform: None,
            modes: Vec::new(),
        }
    }
}

impl PlanConfig {
    /// Checks the section for values the planner cannot work with.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for an empty tool, a platform list
    /// rejected by [`check_platforms`], or a primary platform outside the list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |key: &str, message: String| ConfigError::InvalidValue {
            section: "plan".to_string(),
            key: key.to_string(),
            message,
        };

        if self.tool.trim().is_empty() {
            return Err(invalid("tool", "tool must not be empty".to_string()));
        }
        check_platforms(&self.platforms)?;
        if let Some(primary) = &self.primary_platform
            && !self.platforms.contains(primary)
        {
            return Err(invalid(
                "primary_platform",
                format!(
                    "'{primary}' is not one of the platforms [{}]",
                    self.platforms.join(", ")
                ),
            ));
        }
        Ok(())
    }
}

/// Checks a platform list before jobs are planned on it.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the list is empty, holds a blank
/// label, or names a platform twice.
pub fn check_platforms(platforms: &[String]) -> Result<(), ConfigError> {
    let invalid = |message: String| ConfigError::InvalidValue {
        section: "plan".to_string(),
        key: "platforms".to_string(),
        message,
    };

    if platforms.is_empty() {
        return Err(invalid("at least one platform is required".to_string()));
    }
    if platforms.iter().any(|p| p.trim().is_empty()) {
        return Err(invalid("platform labels must not be empty".to_string()));
    }
    let mut seen = HashSet::with_capacity(platforms.len());
    if let Some(repeated) = platforms.iter().find(|p| !seen.insert(p.as_str())) {
        return Err(invalid(format!(
            "platform '{repeated}' is listed more than once"
        )));
    }
    Ok(())
}
