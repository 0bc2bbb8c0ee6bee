// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{Config, ConfigLoader};
use crate::config::types::PlanConfig;
use crate::error::ConfigError;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.global.file_log_level, LogLevel::TRACE);
    assert_eq!(config.global.log_file, None);
    assert_eq!(config.plan.tool, "cargo");
    assert_eq!(
        config.plan.platforms,
        ["ubuntu-latest", "windows-latest", "macos-latest"]
    );
    assert!(config.plan.modes.is_empty());
}

#[test]
fn test_parse_empty_is_default() {
    let config = Config::parse("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_plan_section() {
    let config = Config::parse(
        r#"
[plan]
tool = "cross"
platforms = ["linux", "macos"]
primary_platform = "macos"
modes = ["clippy", "fmt"]
"#,
    )
    .unwrap();

    assert_eq!(config.plan.tool, "cross");
    assert_eq!(config.plan.platforms, ["linux", "macos"]);
    assert_eq!(config.plan.primary_platform.as_deref(), Some("macos"));
    assert_eq!(config.plan.modes, ["clippy", "fmt"]);
}

#[test]
fn test_parse_global_section() {
    let config = Config::parse(
        r#"
[global]
output_log_level = 4
file_log_level = 2
log_file = "logs/plan.log"
"#,
    )
    .unwrap();

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(config.global.file_log_level, LogLevel::WARN);
    assert_eq!(config.global.log_file, Some(PathBuf::from("logs/plan.log")));
}

#[test]
fn test_parse_rejects_unknown_field() {
    let result = Config::parse(
        r"
[plan]
platfroms = []
",
    );
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_log_level_out_of_range() {
    let result = Config::parse(
        r"
[global]
output_log_level = 9
",
    );
    assert!(result.is_err());
}

#[test]
fn test_parse_rejects_primary_outside_platforms() {
    let err = Config::parse(
        r#"
[plan]
platforms = ["linux"]
primary_platform = "windows"
"#,
    )
    .unwrap_err();

    let config_err = err.downcast_ref::<ConfigError>().unwrap();
    assert!(matches!(
        config_err,
        ConfigError::InvalidValue { key, .. } if key == "primary_platform"
    ));
}

#[test]
fn test_validate_plan_config() {
    let mut plan = PlanConfig::default();
    assert!(plan.validate().is_ok());

    plan.platforms.clear();
    insta::assert_snapshot!(
        plan.validate().unwrap_err().to_string(),
        @"invalid value for 'platforms' in section '[plan]': at least one platform is required"
    );

    plan.platforms = vec!["linux".to_string(), " ".to_string()];
    assert!(plan.validate().is_err());

    plan.platforms = vec!["linux".to_string(), "linux".to_string()];
    insta::assert_snapshot!(
        plan.validate().unwrap_err().to_string(),
        @"invalid value for 'platforms' in section '[plan]': platform 'linux' is listed more than once"
    );

    plan.platforms = vec!["linux".to_string()];
    plan.tool = String::new();
    assert!(plan.validate().is_err());
}

#[test]
fn test_loader_string_priority() {
    let config = ConfigLoader::new()
        .add_toml_str("[plan]\ntool = \"cargo\"\nplatforms = [\"a\"]")
        .add_toml_str("[plan]\ntool = \"cross\"")
        .build()
        .unwrap();

    assert_eq!(config.plan.tool, "cross");
    assert_eq!(config.plan.platforms, ["a"]);
}

#[test]
fn test_loader_set_option() {
    let config = ConfigLoader::new()
        .set_option("plan.platforms=linux, windows")
        .unwrap()
        .set_option("plan.primary_platform=windows")
        .unwrap()
        .set_option("global.output_log_level=5")
        .unwrap()
        .build()
        .unwrap();

    assert_eq!(config.plan.platforms, ["linux", "windows"]);
    assert_eq!(config.plan.primary_platform.as_deref(), Some("windows"));
    assert_eq!(config.global.output_log_level, LogLevel::TRACE);
}

#[test]
fn test_loader_set_option_malformed() {
    assert!(ConfigLoader::new().set_option("plan.tool").is_err());
    assert!(ConfigLoader::new().set_option("=cargo").is_err());
}

#[test]
fn test_loader_required_file_missing() {
    let result = ConfigLoader::new()
        .add_toml_file("definitely/not/here/ci-plan.toml")
        .build();
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<ConfigError>(),
        Some(ConfigError::NotFound(path)) if path == "definitely/not/here/ci-plan.toml"
    ));
}

#[test]
fn test_loader_invalid_toml_string() {
    let err = Config::parse("[plan\ntool = ").unwrap_err();
    let Some(ConfigError::ParseError { path, message }) = err.downcast_ref::<ConfigError>() else {
        panic!("expected a parse error, got {err:#}");
    };
    assert_eq!(path, "<string>");
    assert!(!message.is_empty());
}

#[test]
fn test_loader_optional_file_missing() {
    let loader = ConfigLoader::new().add_toml_file_optional("definitely/not/here/ci-plan.toml");
    assert!(loader.loaded_files().is_empty());
    assert_eq!(loader.build().unwrap(), Config::default());
}

#[test]
fn test_format_loaded_files() {
    let loader = ConfigLoader::new()
        .add_toml_str("")
        .add_toml_file("ci/plan.toml");
    insta::assert_debug_snapshot!(loader.format_loaded_files(), @r#"
    [
        "1. [string] <string>",
        "2. [file] ci/plan.toml",
    ]
    "#);
}

#[test]
fn test_format_options() {
    let config = Config::default();
    let lines: Vec<_> = config
        .format_options()
        .iter()
        .map(|line| line.trim_end().to_string())
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    global.file_log_level   = 5
    global.log_file         =
    global.output_log_level = 3
    plan.modes              =
    plan.platforms          = ubuntu-latest, windows-latest, macos-latest
    plan.primary_platform   =
    plan.tool               = cargo
    ");
}
