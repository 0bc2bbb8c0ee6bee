// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for ci-plan.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ci-plan.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. CI_PLAN_* env vars
//! 5. --set overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! CI_PLAN_PLAN__TOOL=cross              → plan.tool = "cross"
//! CI_PLAN_PLAN__PLATFORMS=linux,macos   → plan.platforms = ["linux", "macos"]
//! CI_PLAN_GLOBAL__OUTPUT_LOG_LEVEL=4    → global.output_log_level = 4
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GlobalConfig, PlanConfig};

/// Default configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "ci-plan.toml";

/// Prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "CI_PLAN";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Job matrix options.
    pub plan: PlanConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use ci_plan::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file("ci/plan.toml")
    ///     .add_toml_file_optional("ci-plan.toml")
    ///     .with_env_prefix("CI_PLAN")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Validate the merged configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the `[plan]` section is unusable.
    pub fn validate(&self) -> Result<()> {
        self.plan.validate()?;
        Ok(())
    }

    /// Format configuration options for display.
    ///
    /// One aligned `key = value` line per option, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_plan_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file".into(),
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
    }

    fn format_plan_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("plan.tool".into(), self.plan.tool.clone());
        options.insert("plan.platforms".into(), self.plan.platforms.join(", "));
        options.insert(
            "plan.primary_platform".into(),
            self.plan.primary_platform.clone().unwrap_or_default(),
        );
        options.insert("plan.modes".into(), self.plan.modes.join(", "));
    }
}
