//! Theme modes and their derived visual theme.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The color scheme reported by the operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    Light,
    Dark,
}

impl ColorMode {
    /// Returns `true` when the OS prefers a dark appearance.
    pub fn prefers_dark(self) -> bool {
        matches!(self, ColorMode::Dark)
    }
}

/// The user's theme preference.
///
/// `System` defers to the OS appearance signal; `Light` and `Dark` are
/// explicit choices that override it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    System,
    Light,
    Dark,
}

impl ThemeMode {
    /// All modes, in cycle order.
    pub const ALL: [ThemeMode; 3] = [ThemeMode::System, ThemeMode::Light, ThemeMode::Dark];

    /// Returns the persisted name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::System => "system",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Returns the mode that follows this one in the toggle cycle.
    ///
    /// | Current | Next |
    /// |---------|------|
    /// | System | Light |
    /// | Light | Dark |
    /// | Dark | System |
    pub fn next(self) -> ThemeMode {
        match self {
            ThemeMode::System => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
        }
    }

    /// Derives the visual theme for this mode given the OS color scheme.
    pub fn resolve(self, os: ColorMode) -> EffectiveTheme {
        match self {
            ThemeMode::Light => EffectiveTheme::Light,
            ThemeMode::Dark => EffectiveTheme::Dark,
            ThemeMode::System => os.into(),
        }
    }

    /// Returns the document marker value for this mode, if any.
    ///
    /// `System` carries no marker so styling falls through to the
    /// `prefers-color-scheme` rules.
    pub fn marker(self) -> Option<&'static str> {
        match self {
            ThemeMode::System => None,
            explicit => Some(explicit.as_str()),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of `system`, `light` or `dark`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode '{0}' (expected system, light or dark)")]
pub struct ParseThemeModeError(pub String);

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    /// Parses a persisted mode name. Matching is exact: stored values are
    /// always written in lowercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "system" => Ok(ThemeMode::System),
            "light" => Ok(ThemeMode::Light),
            "dark" => Ok(ThemeMode::Dark),
            other => Err(ParseThemeModeError(other.to_string())),
        }
    }
}

/// The theme actually shown, derived from a [`ThemeMode`] and the OS signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            EffectiveTheme::Light => "light",
            EffectiveTheme::Dark => "dark",
        }
    }
}

impl From<ColorMode> for EffectiveTheme {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Light => EffectiveTheme::Light,
            ColorMode::Dark => EffectiveTheme::Dark,
        }
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
