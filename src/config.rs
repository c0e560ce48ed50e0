//! User configuration: default style, initial theme, copied-indicator timing.
//!
//! Stored as JSON under the platform config directory. Every field is
//! optional; a missing file means defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ConfigErrorSource, Error, Result};
use crate::types::{StyleKey, ThemeMode};

/// How long the "Copied!" indicator stays up, matching the web widget.
pub const DEFAULT_COPIED_INDICATOR_MS: u64 = 1000;

const APP_DIR: &str = "vibe-tweet";
const CONFIG_FILE: &str = "config.json";
const LOG_FILE: &str = "vibe-tweet.log";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Style selected when the UI opens.
    pub default_style: StyleKey,
    /// Initial display mode.
    pub theme: ThemeMode,
    /// Lifetime of the "Copied!" indicator.
    pub copied_indicator: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_style: StyleKey::default(),
            theme: ThemeMode::default(),
            copied_indicator: Duration::from_millis(DEFAULT_COPIED_INDICATOR_MS),
        }
    }
}

/// On-disk shape. The style stays a string so an unknown key surfaces as
/// `InvalidArgument` instead of a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    default_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    theme: Option<ThemeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    copied_indicator_ms: Option<u64>,
}

impl ConfigFile {
    fn resolve(self) -> Result<Config> {
        let defaults = Config::default();
        let default_style = match self.default_style {
            Some(s) => s.parse()?,
            None => defaults.default_style,
        };
        Ok(Config {
            default_style,
            theme: self.theme.unwrap_or(defaults.theme),
            copied_indicator: self
                .copied_indicator_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.copied_indicator),
        })
    }
}

impl From<&Config> for ConfigFile {
    fn from(config: &Config) -> Self {
        Self {
            default_style: Some(config.default_style.as_str().to_string()),
            theme: Some(config.theme),
            copied_indicator_ms: Some(config.copied_indicator.as_millis() as u64),
        }
    }
}

// ============================================================================
// PATHS
// ============================================================================

/// Default config location: `<config_dir>/vibe-tweet/config.json`.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}

/// Where the TUI writes its log: `<cache_dir>/vibe-tweet/vibe-tweet.log`.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(LOG_FILE)
}

// ============================================================================
// LOAD / SAVE
// ============================================================================

/// Load config from `path`, falling back to defaults if the file is absent.
///
/// # Errors
/// [`Error::Config`] if the file exists but cannot be read or parsed,
/// [`Error::InvalidArgument`] if it names an unknown style.
pub fn load_config(path: &Path) -> Result<Config> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }
        Err(e) => return Err(config_error(path, e.into())),
    };

    let file: ConfigFile =
        serde_json::from_str(&contents).map_err(|e| config_error(path, e.into()))?;
    let config = file.resolve()?;
    info!(path = %path.display(), style = %config.default_style, "loaded config");
    Ok(config)
}

/// Write `config` to `path`, creating parent directories.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn save_config(config: &Config, path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::InvalidArgument(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| config_error(path, e.into()))?;
    }
    fs::write(path, to_json(config)).map_err(|e| config_error(path, e.into()))
}

/// Render a config as the JSON that [`load_config`] accepts.
pub fn to_json(config: &Config) -> String {
    serde_json::to_string_pretty(&ConfigFile::from(config))
        .unwrap_or_else(|e| panic!("Failed to serialize config to JSON: {}", e))
}

fn config_error(path: &Path, source: ConfigErrorSource) -> Error {
    Error::Config {
        path: path.to_path_buf(),
        source,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let config = load_config(&temp.path().join("nope.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.copied_indicator, Duration::from_millis(1000));
    }

    #[test]
    fn all_fields_are_read() {
        let temp = TempDir::new().unwrap();
        let path = write(
            &temp,
            r#"{"default_style": "hot-take", "theme": "light", "copied_indicator_ms": 250}"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.default_style, StyleKey::HotTake);
        assert_eq!(config.theme, ThemeMode::Light);
        assert_eq!(config.copied_indicator, Duration::from_millis(250));
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, r#"{"theme": "light"}"#);
        let config = load_config(&path).unwrap();
        assert_eq!(config.default_style, StyleKey::Web3Native);
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn unknown_style_is_invalid_argument() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, r#"{"default_style": "sarcastic"}"#);
        assert!(matches!(load_config(&path), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn malformed_json_is_config_error() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "{ not json");
        assert!(matches!(load_config(&path), Err(Error::Config { .. })));
    }

    #[test]
    fn saved_config_loads_back() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join(CONFIG_FILE);
        let config = Config {
            default_style: StyleKey::Explainer,
            theme: ThemeMode::Light,
            copied_indicator: Duration::from_millis(1500),
        };
        save_config(&config, &path, false).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn save_refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let path = write(&temp, "{}");
        assert!(save_config(&Config::default(), &path, false).is_err());
        assert!(save_config(&Config::default(), &path, true).is_ok());
    }

    #[test]
    fn default_paths_contain_app_name() {
        assert!(default_config_path().to_string_lossy().contains("vibe-tweet"));
        assert!(default_log_path().to_string_lossy().contains("vibe-tweet"));
    }
}
