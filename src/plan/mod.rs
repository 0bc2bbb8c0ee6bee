// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Job matrix planning.
//!
//! ```text
//! ModeTable + selection ["clippy", "{fmt,docs}"]
//!   select:  --> [clippy, docs, fmt]
//!   expand:  clippy --> one job per platform
//!            docs   --> primary platform only (platformIndependent)
//!            fmt    --> primary platform only (platformIndependent)
//!        |
//!        v
//!   Matrix { include: [Job, ...] }   (strategy.matrix shape)
//! ```

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::config::types::{PlanConfig, check_platforms};
use crate::error::{ConfigError, PlanResult};
use crate::mode::{DEFAULT_TOOL, Mode, ModeTable};

/// One CI job: a mode on a platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    /// Mode table key.
    pub mode: String,
    /// Display label of the mode.
    pub name: String,
    /// Cargo subcommand.
    pub command: String,
    /// Argument string after the subcommand.
    pub args: String,
    /// Full command line, tool included.
    pub command_line: String,
    /// Cache partition label.
    pub cache_key: String,
    /// Platform (runner label) the job runs on.
    pub platform: String,
}

impl Job {
    fn new(key: &str, mode: &Mode, tool: &str, platform: &str) -> Self {
        Self {
            mode: key.to_string(),
            name: mode.name.to_string(),
            command: mode.command.to_string(),
            args: mode.args.to_string(),
            command_line: mode.command_line(tool),
            cache_key: mode.cache_key.to_string(),
            platform: platform.to_string(),
        }
    }
}

/// Job matrix in the `strategy.matrix.include` shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matrix {
    pub include: Vec<Job>,
}

impl Matrix {
    #[must_use]
    pub fn len(&self) -> usize {
        self.include.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.include.is_empty()
    }

    /// Jobs planned for a mode key.
    pub fn jobs_for<'a>(&'a self, mode: &'a str) -> impl Iterator<Item = &'a Job> {
        self.include.iter().filter(move |job| job.mode == mode)
    }

    /// Renders the matrix as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        }
    }
}

/// Expands a mode table into a job matrix.
#[derive(Debug, Clone, Builder)]
pub struct Planner {
    /// Platforms in matrix order.
    #[builder(setters(name = with_platforms))]
    platforms: Vec<String>,
    /// Platform for platform-independent modes; defaults to the first platform.
    #[builder(setters(name = with_primary_platform))]
    primary_platform: Option<String>,
    /// Mode selection patterns; empty selects every mode.
    #[builder(setters(name = with_modes), default)]
    modes: Vec<String>,
    /// Build tool named in each job's command line.
    #[builder(setters(name = with_tool), default = DEFAULT_TOOL.to_string())]
    tool: String,
}

impl Planner {
    /// Creates a planner from the `[plan]` configuration section.
    #[must_use]
    pub fn from_config(config: &PlanConfig) -> Self {
        Self::builder()
            .with_platforms(config.platforms.clone())
            .maybe_with_primary_platform(config.primary_platform.clone())
            .with_modes(config.modes.clone())
            .with_tool(config.tool.clone())
            .build()
    }

    #[must_use]
    pub fn platforms(&self) -> &[String] {
        &self.platforms
    }

    #[must_use]
    pub fn modes(&self) -> &[String] {
        &self.modes
    }

    #[must_use]
    pub fn tool(&self) -> &str {
        &self.tool
    }

    /// Platform that platform-independent modes run on.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the platform list is empty, holds a blank or
    /// repeated label, or does not contain the primary platform.
    pub fn primary_platform(&self) -> PlanResult<&str> {
        check_platforms(&self.platforms)?;

        // non-empty after check_platforms
        match &self.primary_platform {
            None => Ok(self.platforms[0].as_str()),
            Some(primary) if self.platforms.contains(primary) => Ok(primary.as_str()),
            Some(primary) => Err(ConfigError::InvalidValue {
                section: "plan".to_string(),
                key: "primary_platform".to_string(),
                message: format!(
                    "'{primary}' is not one of the platforms [{}]",
                    self.platforms.join(", ")
                ),
            }
            .into()),
        }
    }

    /// Plans the job matrix for `table`.
    ///
    /// Jobs follow selection order, then platform order. Platform-independent
    /// modes get a single job on the primary platform.
    ///
    /// # Errors
    ///
    /// Returns an error if the platform setup is invalid or the selection names
    /// an unknown mode.
    pub fn plan(&self, table: &ModeTable) -> PlanResult<Matrix> {
        let primary = self.primary_platform()?;
        let selected = table.select(&self.modes)?;

        let mut include = Vec::new();
        for key in selected {
            let mode = table.get(key)?;
            if mode.platform_independent {
                tracing::debug!(mode = key, platform = primary, "Planned single-platform job");
                include.push(Job::new(key, mode, &self.tool, primary));
            } else {
                for platform in &self.platforms {
                    tracing::debug!(mode = key, platform = %platform, "Planned job");
                    include.push(Job::new(key, mode, &self.tool, platform));
                }
            }
        }

        tracing::info!(
            jobs = include.len(),
            platforms = self.platforms.len(),
            "Planned job matrix"
        );
        Ok(Matrix { include })
    }
}
