// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Configs | List | Show | Matrix
//! ```

use std::io::IsTerminal;
use std::process::ExitCode;

use ci_plan::cli::global::GlobalOptions;
use ci_plan::cli::{self, Command};
use ci_plan::cmd::config::{run_configs_command, run_options_command};
use ci_plan::cmd::list::run_list_command;
use ci_plan::cmd::matrix::run_matrix_command;
use ci_plan::cmd::show::run_show_command;
use ci_plan::config::loader::ConfigLoader;
use ci_plan::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use ci_plan::logging::{LogConfig, LogGuard, LogLevel, init_logging};

fn main() -> ExitCode {
    let cli = cli::parse();

    let Some(command) = &cli.command else {
        eprintln!("No command specified. Use --help for usage information.");
        return ExitCode::FAILURE;
    };

    if matches!(command, Command::Version) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let loader = match build_config_loader(&cli.global) {
        Ok(loader) => loader,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let loaded_files = loader.format_loaded_files();
    let config = match loader.build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match start_logging(&config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(command, &config, &loaded_files)
}

fn dispatch_command(command: &Command, config: &Config, loaded_files: &[String]) -> ExitCode {
    let result = match command {
        Command::Version => {
            handle_version_command();
            Ok(())
        }
        Command::Options => {
            run_options_command(config);
            Ok(())
        }
        Command::Configs => {
            run_configs_command(loaded_files);
            Ok(())
        }
        Command::List(args) => run_list_command(args, config),
        Command::Show(args) => run_show_command(args, config),
        Command::Matrix(args) => run_matrix_command(args, config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ci_plan::error::Result<ConfigLoader> {
    let mut loader = ConfigLoader::new();
    if !global.no_default_config {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for path in &global.configs {
        loader = loader.add_toml_file(path);
    }
    loader = loader.with_env_prefix(ENV_PREFIX);
    for option in global.to_config_overrides() {
        loader = loader.set_option(&option)?;
    }
    Ok(loader)
}

fn start_logging(config: &Config) -> ci_plan::error::Result<LogGuard> {
    let global = &config.global;
    let log_config = LogConfig::builder()
        .with_console_level(global.output_log_level)
        .with_file_level(if global.log_file.is_some() {
            global.file_log_level
        } else {
            LogLevel::SILENT
        })
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .with_ansi(std::io::stderr().is_terminal())
        .build();
    init_logging(&log_config)
}
