// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use tracing::Level;

#[test]
fn test_log_level_range() {
    assert_eq!(LogLevel::new(0).unwrap(), LogLevel::SILENT);
    assert_eq!(LogLevel::new(5).unwrap(), LogLevel::TRACE);
    assert!(LogLevel::new(6).is_err());
    assert_eq!(LogLevel::from_u8(4), Some(LogLevel::DEBUG));
    assert_eq!(LogLevel::from_u8(200), None);
    assert_eq!(LogLevel::try_from(2).unwrap(), LogLevel::WARN);
    assert_eq!(u8::from(LogLevel::ERROR), 1);
}

#[test]
fn test_log_level_error_message() {
    insta::assert_snapshot!(
        LogLevel::new(7).unwrap_err().to_string(),
        @"invalid value for 'log_level' in section '[global]': log level must be 0-5, got 7"
    );
}

#[test]
fn test_log_level_filters() {
    let filters: Vec<_> = (0..=5)
        .filter_map(LogLevel::from_u8)
        .map(LogLevel::to_filter_string)
        .collect();
    assert_eq!(filters, ["off", "error", "warn", "info", "debug", "trace"]);
}

#[test]
fn test_log_level_tracing() {
    assert_eq!(LogLevel::SILENT.to_tracing_level(), None);
    assert_eq!(LogLevel::INFO.to_tracing_level(), Some(Level::INFO));
    assert_eq!(LogLevel::TRACE.to_tracing_level(), Some(Level::TRACE));
}

#[test]
fn test_log_level_serde() {
    assert_eq!(serde_json::to_string(&LogLevel::DEBUG).unwrap(), "4");
    assert_eq!(serde_json::from_str::<LogLevel>("2").unwrap(), LogLevel::WARN);
    assert!(serde_json::from_str::<LogLevel>("6").is_err());
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert_eq!(config.log_file(), None);
    assert!(!config.show_target());
    assert!(config.ansi());
}

#[test]
fn test_log_config_builder() {
    let config = LogConfig::builder()
        .with_console_level(LogLevel::WARN)
        .maybe_with_log_file(Some("plan.log".to_string()))
        .with_ansi(false)
        .build();
    assert_eq!(config.console_level(), LogLevel::WARN);
    assert_eq!(config.log_file(), Some("plan.log"));
    assert!(!config.ansi());
}
