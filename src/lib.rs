//! vibe-tweet: Generate template-based sample posts from a topic and a style preset.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod generator;
pub mod presets;
pub mod report;
pub mod templates;
pub mod tui;
pub mod types;
