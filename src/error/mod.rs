// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!    PlanError (pointer-sized)
//!          |
//!     +----+----+
//!     |         |
//!     v         v
//!   Mode      Config
//!   Box       Box
//!
//! Sub-errors (unboxed internally):
//!   Mode    Unknown, InvalidPattern
//!   Config  ParseError, MissingKey, InvalidValue, NotFound
//! ```
//!
//! `PlanError` is what the planner returns. Command handlers and the config
//! loader work in `anyhow::Result` and add context at I/O boundaries; typed
//! errors stay recoverable through `downcast_ref`.

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PlanError`].
pub type PlanResult<T> = std::result::Result<T, PlanError>;

/// Error returned by job matrix planning.
///
/// Sub-errors are boxed to keep this enum small on the stack.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Mode lookup or selection error.
    #[error("mode error: {0}")]
    Mode(#[from] Box<ModeError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PlanError {
                fn from(err: $error) -> Self {
                    PlanError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ModeError => Mode,
    ConfigError => Config,
}

// --- Mode Errors ---

/// Mode table errors.
///
/// An unknown mode is a workflow configuration defect, never a transient
/// failure: callers surface it and stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    /// Requested key is not in the mode table.
    #[error("unknown mode '{name}'")]
    Unknown { name: String },

    /// Selection pattern is not a valid glob.
    #[error("invalid mode pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration source is not valid TOML.
    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// Required configuration file does not exist.
    #[error("config file not found: {0}")]
    NotFound(String),
}
