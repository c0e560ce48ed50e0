//! Error type shared by the generator, config loader, and UI effects.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong in vibe-tweet.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller passed a value outside the accepted domain
    /// (unknown style key, empty topic, bad config value).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The system clipboard could not be opened or written.
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// The config file exists but could not be read or parsed.
    #[error("failed to load config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigErrorSource,
    },

    /// Terminal or filesystem I/O.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Underlying cause of a [`Error::Config`].
#[derive(Debug, Error)]
pub enum ConfigErrorSource {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
