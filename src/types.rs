//! Domain types for vibe-tweet.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// STYLE KEY
// ============================================================================

/// The closed set of style presets.
///
/// Serialized and parsed as kebab-case keys: `web3-native`, `explainer`,
/// `hot-take`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKey {
    /// Witty, crypto-flavoured.
    #[default]
    Web3Native,
    /// Clear and educational.
    Explainer,
    /// Spicy but not cringe.
    HotTake,
}

impl StyleKey {
    /// All keys in display order.
    pub const ALL: [StyleKey; 3] = [StyleKey::Web3Native, StyleKey::Explainer, StyleKey::HotTake];

    /// The wire/CLI key for this style.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleKey::Web3Native => "web3-native",
            StyleKey::Explainer => "explainer",
            StyleKey::HotTake => "hot-take",
        }
    }

    /// Position in [`StyleKey::ALL`].
    pub fn index(self) -> usize {
        match self {
            StyleKey::Web3Native => 0,
            StyleKey::Explainer => 1,
            StyleKey::HotTake => 2,
        }
    }

    /// The next style, wrapping around.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// The previous style, wrapping around.
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for StyleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StyleKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "unknown style '{}' (expected one of: web3-native, explainer, hot-take)",
                    s
                ))
            })
    }
}

// ============================================================================
// PRESETS & TEMPLATES
// ============================================================================

/// Display metadata for a style. The rules are guidance shown to the user;
/// the generator never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    pub key: StyleKey,
    pub name: &'static str,
    pub description: &'static str,
    pub rules: [&'static str; 5],
}

/// Hook/body/closer templates for one style.
///
/// Each template may contain a `{topic}` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSet {
    pub hooks: &'static [&'static str],
    pub bodies: &'static [&'static str],
    pub closers: &'static [&'static str],
}

// ============================================================================
// GENERATED POST
// ============================================================================

/// One generated post and the variant that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedPost {
    pub variant: usize,
    pub text: String,
}

impl GeneratedPost {
    /// Length in characters, as counted against the truncation budget.
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// One-based number shown as "Option N". Saturates at `usize::MAX`.
    pub fn option_number(&self) -> usize {
        self.variant.saturating_add(1)
    }
}

// ============================================================================
// CONFIGURATION ENUMS
// ============================================================================

/// Output format for the non-interactive commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

/// Display mode. Only affects rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn from_dark(dark: bool) -> Self {
        if dark { ThemeMode::Dark } else { ThemeMode::Light }
    }
}
