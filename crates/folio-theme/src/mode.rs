//! Theme mode — the persisted light/dark/system preference.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The user's theme preference.
///
/// `System` defers to the device color scheme; the other two override it.
/// Resolution to a concrete dark flag happens in [`ThemeMode::resolve`] so
/// the palette derivation stays a pure function of `(accent, bool)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: &[Self] = &[Self::Light, Self::Dark, Self::System];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Resolve this preference against the detected system scheme.
    #[must_use]
    pub const fn resolve(self, system_is_dark: bool) -> bool {
        match self {
            Self::Light => false,
            Self::Dark => true,
            Self::System => system_is_dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ParseThemeModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParseThemeModeError(other.to_owned())),
        }
    }
}

/// Error for an unrecognized theme mode string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme mode `{0}` (expected light, dark, or system)")]
pub struct ParseThemeModeError(String);

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
