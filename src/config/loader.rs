// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! ConfigLoader::new()
//!   .add_toml_file_optional()
//!   .add_toml_file(req)
//!   .add_toml_str()
//!   .with_env_prefix()
//!   .set()
//!        |
//!        v
//!    build() --> Config (validated)
//! ```

use std::path::PathBuf;

use super::Config;
use crate::error::{ConfigError, Result};

/// Builder for loading configuration from multiple sources.
pub struct ConfigLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
    env_prefix: Option<String>,
    files: Vec<(String, PathBuf)>,
}

impl ConfigLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
            env_prefix: None,
            files: Vec::new(),
        }
    }

    /// Adds a TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't exist
    /// or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(true));
        self.files.push(("file".to_string(), p.to_path_buf()));
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        let p = path.as_ref();
        self.builder = self
            .builder
            .add_source(File::from(p).format(FileFormat::Toml).required(false));
        if p.exists() {
            self.files.push(("optional".to_string(), p.to_path_buf()));
        }
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self.files
            .push(("string".to_string(), PathBuf::from("<string>")));
        self
    }

    /// Reads `<PREFIX>_<SECTION>__<KEY>` environment variables.
    ///
    /// `plan.platforms` and `plan.modes` accept comma-separated lists.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = Some(prefix.to_string());
        self
    }

    /// Sets a configuration override.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is invalid or if the value cannot be converted
    /// to a configuration value.
    pub fn set<T: Into<config::Value>>(mut self, key: &str, value: T) -> Result<Self> {
        self.builder = self
            .builder
            .set_override(key, value)
            .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        Ok(self)
    }

    /// Applies a `section.key=value` override as given on the command line.
    ///
    /// Values for `plan.platforms` and `plan.modes` are split on commas.
    ///
    /// # Errors
    ///
    /// Returns an error if the override has no `=` or an empty key.
    pub fn set_option(self, option: &str) -> Result<Self> {
        let Some((key, value)) = option.split_once('=') else {
            return Err(ConfigError::InvalidValue {
                section: "cli".to_string(),
                key: "set".to_string(),
                message: format!("expected KEY=VALUE, got '{option}'"),
            }
            .into());
        };

        let key = key.trim();
        if key.is_empty() {
            return Err(ConfigError::MissingKey {
                section: "cli".to_string(),
                key: "set".to_string(),
            }
            .into());
        }

        if is_list_key(key) {
            let items: Vec<String> = value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToString::to_string)
                .collect();
            self.set(key, items)
        } else {
            self.set(key, value.trim())
        }
    }

    /// Builds the configuration from all added sources.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing (`ConfigError::NotFound`).
    /// - Configuration sources have invalid TOML syntax (`ConfigError::ParseError`).
    /// - Environment variables cannot be parsed.
    /// - The merged configuration cannot be deserialized into the `Config` struct.
    /// - The merged configuration fails validation.
    pub fn build(self) -> Result<Config> {
        if let Some((_, path)) = self
            .files
            .iter()
            .find(|(source, file)| source == "file" && !file.is_file())
        {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let builder = match &self.env_prefix {
            Some(prefix) => self.builder.add_source(
                config::Environment::with_prefix(prefix)
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("plan.platforms")
                    .with_list_parse_key("plan.modes")
                    .try_parsing(true),
            ),
            None => self.builder,
        };
        let cfg = builder.build().map_err(source_error)?;
        let config: Config = cfg.try_deserialize()?;
        config.validate()?;
        tracing::debug!(sources = self.files.len(), "Configuration loaded");
        Ok(config)
    }

    #[must_use]
    pub fn loaded_files(&self) -> Vec<(String, PathBuf)> {
        self.files.clone()
    }

    #[must_use]
    pub fn format_loaded_files(&self) -> Vec<String> {
        self.files
            .iter()
            .enumerate()
            .map(|(i, (source, path))| format!("{}. [{}] {}", i + 1, source, path.display()))
            .collect()
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn source_error(err: config::ConfigError) -> anyhow::Error {
    match err {
        config::ConfigError::FileParse { uri, cause } => ConfigError::ParseError {
            path: uri.unwrap_or_else(|| "<string>".to_string()),
            message: cause.to_string(),
        }
        .into(),
        other => other.into(),
    }
}

fn is_list_key(key: &str) -> bool {
    matches!(key, "plan.platforms" | "plan.modes")
}
