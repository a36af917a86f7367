//! Parsing and flattening options.
//!
//! Flattening options can be read from the environment:
//!
//! - `MANYWORLDS_FLATTEN_MODE`: `strict` (default) or `relaxed`
//! - `MANYWORLDS_WRITE_COMMENTS`: write step and row comments (default off)

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Environment variable selecting the flattening mode.
pub const FLATTEN_MODE_ENV: &str = "MANYWORLDS_FLATTEN_MODE";
/// Environment variable enabling comment output.
pub const WRITE_COMMENTS_ENV: &str = "MANYWORLDS_WRITE_COMMENTS";

/// How the forest is walked when flattening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FlattenMode {
    /// One scenario per scenario with assertions; a single `When`/`Then`
    /// block per output scenario.
    #[default]
    Strict,
    /// One scenario per leaf; each scenario's assertions are tested exactly
    /// once across the output.
    Relaxed,
}

impl FlattenMode {
    /// Lower-case name of the mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Relaxed => "relaxed",
        }
    }
}

impl fmt::Display for FlattenMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FlattenMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "relaxed" => Ok(Self::Relaxed),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// Options controlling a flattening pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlattenOptions {
    /// Traversal policy.
    pub mode: FlattenMode,
    /// Whether step and data-row comments are written.
    pub write_comments: bool,
}

impl FlattenOptions {
    /// Return a copy using `mode`.
    #[must_use]
    pub const fn with_mode(mut self, mode: FlattenMode) -> Self {
        self.mode = mode;
        self
    }

    /// Return a copy with comment output switched on or off.
    #[must_use]
    pub const fn with_comments(mut self, write_comments: bool) -> Self {
        self.write_comments = write_comments;
        self
    }

    /// Read options from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unrecognised
    /// value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read options through `lookup`, which maps a variable name to its
    /// value. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an unrecognised
    /// value.
    ///
    /// # Examples
    ///
    /// ```
    /// use manyworlds::{FlattenMode, FlattenOptions};
    ///
    /// let options = FlattenOptions::from_lookup(|key| match key {
    ///     "MANYWORLDS_FLATTEN_MODE" => Some("relaxed".into()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(options.mode, FlattenMode::Relaxed);
    /// assert!(!options.write_comments);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut options = Self::default();
        if let Some(mode) = lookup(FLATTEN_MODE_ENV) {
            options.mode = mode.parse()?;
        }
        if let Some(value) = lookup(WRITE_COMMENTS_ENV) {
            options.write_comments =
                parse_env_bool(&value).ok_or_else(|| ConfigError::InvalidBool {
                    key: WRITE_COMMENTS_ENV.to_string(),
                    value,
                })?;
        }
        Ok(options)
    }
}

fn parse_env_bool(value: &str) -> Option<bool> {
    match value.trim() {
        "1" | "true" | "TRUE" | "True" | "yes" | "YES" | "Yes" | "on" | "ON" | "On" => Some(true),
        "0" | "false" | "FALSE" | "False" | "no" | "NO" | "No" | "off" | "OFF" | "Off" => {
            Some(false)
        }
        _ => None,
    }
}

/// Indentation convention for step lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StepIndentation {
    /// Steps sit at the same indentation as their `Scenario:` line.
    SameAsScenario,
    /// Steps sit one unit deeper than their `Scenario:` line.
    Nested,
}

impl StepIndentation {
    /// Levels between a scenario header and its steps.
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::SameAsScenario => 0,
            Self::Nested => 1,
        }
    }

    /// The convention with the given offset, if any.
    #[must_use]
    pub const fn from_offset(offset: usize) -> Option<Self> {
        match offset {
            0 => Some(Self::SameAsScenario),
            1 => Some(Self::Nested),
            _ => None,
        }
    }
}

/// Options controlling how a document is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseOptions {
    /// Fixed step indentation. `None` adopts the convention of the first
    /// step in the document.
    pub step_indentation: Option<StepIndentation>,
}

impl ParseOptions {
    /// Return a copy requiring `convention` for every step.
    #[must_use]
    pub const fn with_step_indentation(mut self, convention: StepIndentation) -> Self {
        self.step_indentation = Some(convention);
        self
    }
}
