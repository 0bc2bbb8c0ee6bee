// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for configuration loading.
//!
//! Tests the Config module with realistic TOML files on disk.

use std::io::Write;

use ci_plan::config::Config;
use ci_plan::config::loader::ConfigLoader;
use ci_plan::error::ConfigError;
use ci_plan::logging::LogLevel;

fn write_toml(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn config_from_file() {
    let file = write_toml(
        r#"
[plan]
platforms = ["ubuntu-22.04", "windows-2022"]
modes = ["clippy", "test"]
"#,
    );
    let config = Config::from_file(file.path()).unwrap();

    assert_eq!(config.plan.platforms, ["ubuntu-22.04", "windows-2022"]);
    assert_eq!(config.plan.modes, ["clippy", "test"]);
    assert_eq!(config.plan.tool, "cargo");
}

#[test]
fn config_builder_layered() {
    let base = write_toml(
        r#"
[global]
output_log_level = 2

[plan]
platforms = ["linux", "macos"]
primary_platform = "linux"
"#,
    );
    let local = write_toml(
        r#"
[plan]
primary_platform = "macos"
"#,
    );

    let loader = ConfigLoader::new()
        .add_toml_file(base.path())
        .add_toml_file(local.path());
    assert_eq!(loader.loaded_files().len(), 2);

    let config = loader.build().unwrap();
    assert_eq!(config.global.output_log_level, LogLevel::WARN);
    assert_eq!(config.plan.platforms, ["linux", "macos"]);
    assert_eq!(config.plan.primary_platform.as_deref(), Some("macos"));
}

#[test]
fn config_builder_set_override() {
    let file = write_toml(
        r#"
[plan]
tool = "cargo"
modes = ["fmt"]
"#,
    );

    let config = ConfigLoader::new()
        .add_toml_file(file.path())
        .set("plan.tool", "cross")
        .unwrap()
        .set_option("plan.modes=clippy,docs")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.plan.tool, "cross");
    assert_eq!(config.plan.modes, ["clippy", "docs"]);
}

#[test]
fn config_invalid_toml() {
    let file = write_toml("[plan\nplatforms = ");
    let err = Config::from_file(file.path()).unwrap_err();
    let Some(ConfigError::ParseError { path, .. }) = err.downcast_ref::<ConfigError>() else {
        panic!("expected a parse error, got {err:#}");
    };
    assert!(path.ends_with(".toml"));
}

#[test]
fn config_optional_file_present() {
    let file = write_toml("[plan]\ntool = \"cross\"\n");
    let loader = ConfigLoader::new().add_toml_file_optional(file.path());

    let lines = loader.format_loaded_files();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("1. [optional] "));
    assert_eq!(loader.build().unwrap().plan.tool, "cross");
}

#[test]
fn config_empty_platforms_rejected() {
    let file = write_toml("[plan]\nplatforms = []\n");
    let err = Config::from_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("at least one platform is required"));
}
