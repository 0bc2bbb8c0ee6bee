// ci-plan: Cargo CI mode table and job matrix planner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mode table: named cargo invocations for CI jobs.
//!
//! ```text
//!  key      name    command  args                                      cacheKey  platform
//!  build    build   build    --workspace                               build     all
//!  clippy   clippy  clippy   --workspace --all-targets -- -D warnings  clippy    all
//!  docs     doc     doc      --workspace --document-private-items      doc       one
//!  fmt      fmt     fmt      -- --check                                code      one
//!  test     test    test     --workspace                               test      all
//! ```
//!
//! The built-in table is initialized once on first access and never mutated.
//! Modes sharing a `cacheKey` share cache state in the orchestrator.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use serde::{Deserialize, Deserializer, Serialize};
use wax::{Glob, Program};

use crate::error::ModeError;

/// Build tool every mode is an invocation of.
pub const DEFAULT_TOOL: &str = "cargo";

/// Built-in modes, in declaration order.
const BUILTIN_MODES: [(&str, Mode); 5] = [
    (
        "clippy",
        Mode::declare(
            "clippy",
            "clippy",
            "--workspace --all-targets -- -D warnings",
            "clippy",
            false,
        ),
    ),
    (
        "test",
        Mode::declare("test", "test", "--workspace", "test", false),
    ),
    (
        "build",
        Mode::declare("build", "build", "--workspace", "build", false),
    ),
    (
        "fmt",
        Mode::declare("fmt", "fmt", "-- --check", "code", true),
    ),
    (
        "docs",
        Mode::declare(
            "doc",
            "doc",
            "--workspace --document-private-items",
            "doc",
            true,
        ),
    ),
];

static BUILTIN: LazyLock<ModeTable> = LazyLock::new(|| BUILTIN_MODES.into_iter().collect());

/// One cargo invocation recipe plus its CI metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Mode {
    /// Display label; may differ from the table key.
    pub name: Cow<'static, str>,
    /// Cargo subcommand (`test`, `clippy`, ...).
    pub command: Cow<'static, str>,
    /// Argument string appended after the subcommand. May be empty.
    pub args: Cow<'static, str>,
    /// Label partitioning the orchestrator's build caches.
    pub cache_key: Cow<'static, str>,
    /// Output does not vary by platform; run on one platform only.
    ///
    /// Serialized only when set. An explicit `false` is rejected on input.
    #[serde(
        default,
        skip_serializing_if = "is_false",
        deserialize_with = "deserialize_present_true"
    )]
    pub platform_independent: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
const fn is_false(value: &bool) -> bool {
    !*value
}

fn deserialize_present_true<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    if bool::deserialize(deserializer)? {
        Ok(true)
    } else {
        Err(serde::de::Error::custom(
            "platformIndependent must be `true` when present; omit it instead of `false`",
        ))
    }
}

impl Mode {
    const fn declare(
        name: &'static str,
        command: &'static str,
        args: &'static str,
        cache_key: &'static str,
        platform_independent: bool,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            command: Cow::Borrowed(command),
            args: Cow::Borrowed(args),
            cache_key: Cow::Borrowed(cache_key),
            platform_independent,
        }
    }

    /// Creates a platform-specific mode.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        command: impl Into<Cow<'static, str>>,
        args: impl Into<Cow<'static, str>>,
        cache_key: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
            args: args.into(),
            cache_key: cache_key.into(),
            platform_independent: false,
        }
    }

    /// Marks the mode as platform-independent.
    #[must_use]
    pub fn with_platform_independent(mut self) -> Self {
        self.platform_independent = true;
        self
    }

    /// Argument string split into individual arguments.
    pub fn arg_list(&self) -> impl Iterator<Item = &str> {
        self.args.split_whitespace()
    }

    /// Full argv for this mode: `[tool, command, args...]`.
    #[must_use]
    pub fn invocation(&self, tool: &str) -> Vec<String> {
        [tool, self.command.as_ref()]
            .into_iter()
            .chain(self.arg_list())
            .map(str::to_owned)
            .collect()
    }

    /// Invocation joined into a single command line.
    #[must_use]
    pub fn command_line(&self, tool: &str) -> String {
        self.invocation(tool).join(" ")
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.args.is_empty() {
            write!(f, "{}", self.command)
        } else {
            write!(f, "{} {}", self.command, self.args)
        }
    }
}

/// Immutable mapping from mode key to [`Mode`].
///
/// Iteration is ordered by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModeTable {
    modes: BTreeMap<String, Mode>,
}

impl<K: Into<String>> FromIterator<(K, Mode)> for ModeTable {
    fn from_iter<I: IntoIterator<Item = (K, Mode)>>(iter: I) -> Self {
        Self {
            modes: iter.into_iter().map(|(k, m)| (k.into(), m)).collect(),
        }
    }
}

impl ModeTable {
    /// The process-wide built-in table.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Looks up a mode by key.
    ///
    /// # Errors
    ///
    /// Returns [`ModeError::Unknown`] if `key` is not in the table.
    pub fn get(&self, key: &str) -> std::result::Result<&Mode, ModeError> {
        self.modes.get(key).ok_or_else(|| ModeError::Unknown {
            name: key.to_string(),
        })
    }

    /// All `(key, mode)` pairs, ordered by key.
    pub fn entries(&self) -> impl ExactSizeIterator<Item = (&str, &Mode)> {
        self.modes.iter().map(|(k, m)| (k.as_str(), m))
    }

    /// All keys, ordered.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> {
        self.modes.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.modes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modes.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.modes.contains_key(key)
    }

    /// Resolves selection patterns to mode keys.
    ///
    /// - Empty `patterns` selects every mode.
    /// - An exact key selects that mode.
    /// - A glob (`c*`, `{fmt,docs}`) selects all matching keys, in key order.
    /// - Results are deduplicated, first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns [`ModeError::Unknown`] for a plain name that is not a key, and
    /// [`ModeError::InvalidPattern`] for a glob that does not parse.
    pub fn select(&self, patterns: &[String]) -> std::result::Result<Vec<&str>, ModeError> {
        if patterns.is_empty() {
            return Ok(self.keys().collect());
        }

        let mut result = Vec::new();
        let mut seen = BTreeSet::new();

        for pattern in patterns {
            let matches = self.match_pattern(pattern)?;

            if matches.is_empty() {
                tracing::warn!(pattern = %pattern, "Pattern matched no modes");
            }

            for key in matches {
                if seen.insert(key) {
                    result.push(key);
                }
            }
        }

        Ok(result)
    }

    fn match_pattern(&self, pattern: &str) -> std::result::Result<Vec<&str>, ModeError> {
        if let Some((key, _)) = self.modes.get_key_value(pattern) {
            return Ok(vec![key.as_str()]);
        }

        if !is_glob(pattern) {
            return Err(ModeError::Unknown {
                name: pattern.to_string(),
            });
        }

        let glob = Glob::new(pattern).map_err(|e| ModeError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;

        Ok(self.keys().filter(|key| glob.is_match(*key)).collect())
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{', '<'])
}
