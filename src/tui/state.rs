//! TUI state algebra: pure types, zero effects.
//!
//! `App` holds every piece of UI state as an explicit field. Each field is
//! changed only by the handler for its own action (see `update`). The
//! effects layer reads `App` to render and interprets `Effect`s.

use crossterm::event::KeyEvent;

use crate::config::Config;
use crate::generator::require_topic;
use crate::types::{GeneratedPost, StyleKey, ThemeMode};

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - Short-lived timer threads send `CopyIndicatorExpired`
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The "Copied!" timer for the copy identified by `ticket` ran out.
    CopyIndicatorExpired { ticket: u64 },
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Which form element receives typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Topic,
    Style,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Topic => Focus::Style,
            Focus::Style => Focus::Results,
            Focus::Results => Focus::Topic,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Topic => Focus::Results,
            Focus::Style => Focus::Topic,
            Focus::Results => Focus::Style,
        }
    }
}

/// Transient "Copied!" marker on one result.
///
/// `ticket` identifies the copy that raised it, so only that copy's timer
/// may clear it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopiedIndicator {
    pub index: usize,
    pub ticket: u64,
}

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Topic text as typed.
    pub topic: String,
    /// Selected style preset.
    pub style: StyleKey,
    /// Last generated batch. Empty until the first successful generate.
    pub posts: Vec<GeneratedPost>,
    /// Light/dark display mode.
    pub theme: ThemeMode,
    /// Which result, if any, shows the copied indicator.
    pub copied: Option<CopiedIndicator>,
    /// Form element with keyboard focus.
    pub focus: Focus,
    /// Focused result row.
    pub cursor: usize,
    /// Last non-fatal diagnostic (e.g. clipboard failure).
    pub status: Option<String>,
    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
    /// Source of copy tickets. Monotonic.
    pub(crate) last_ticket: u64,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Append a character to the topic.
    Insert(char),
    /// Delete the last topic character.
    Backspace,
    /// Empty the topic field.
    ClearTopic,
    /// Move focus to the next form element.
    NextFocus,
    /// Move focus to the previous form element.
    PrevFocus,
    /// Previous style or previous result, depending on focus.
    MoveUp,
    /// Next style or next result, depending on focus.
    MoveDown,
    /// Pick a style directly.
    SelectStyle(StyleKey),
    /// Generate three posts from the current topic and style.
    Generate,
    /// Copy the focused result.
    Copy,
    /// Copy a result by index.
    CopyOption(usize),
    /// Flip light/dark.
    ToggleTheme,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// What the effects layer should do after an update.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Keep running; re-render.
    Continue,
    /// Quit the application.
    Quit,
    /// Execute a side effect.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
#[derive(Debug, PartialEq)]
pub enum Effect {
    /// Write a result's text to the clipboard.
    Copy { index: usize, text: String },
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Fresh form: empty topic, no results, style and theme from config.
    pub fn new(config: &Config) -> Self {
        App {
            topic: String::new(),
            style: config.default_style,
            posts: Vec::new(),
            theme: config.theme,
            copied: None,
            focus: Focus::Topic,
            cursor: 0,
            status: None,
            should_quit: false,
            last_ticket: 0,
        }
    }

    /// Whether the generate action would do anything.
    pub fn can_generate(&self) -> bool {
        require_topic(&self.topic).is_ok()
    }

    /// Allocate a ticket for a new copied indicator.
    pub(crate) fn issue_ticket(&mut self) -> u64 {
        self.last_ticket += 1;
        self.last_ticket
    }
}

impl Default for App {
    fn default() -> Self {
        App::new(&Config::default())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_starts_empty_on_topic() {
        let app = App::default();
        assert!(app.topic.is_empty());
        assert!(app.posts.is_empty());
        assert_eq!(app.focus, Focus::Topic);
        assert!(app.copied.is_none());
        assert!(!app.should_quit);
    }

    #[test]
    fn new_app_takes_style_and_theme_from_config() {
        let config = Config {
            default_style: StyleKey::HotTake,
            theme: ThemeMode::Light,
            ..Default::default()
        };
        let app = App::new(&config);
        assert_eq!(app.style, StyleKey::HotTake);
        assert_eq!(app.theme, ThemeMode::Light);
    }

    #[test]
    fn can_generate_requires_non_blank_topic() {
        let mut app = App::default();
        assert!(!app.can_generate());
        app.topic = "  \t".into();
        assert!(!app.can_generate());
        app.topic = " gm ".into();
        assert!(app.can_generate());
    }

    #[test]
    fn tickets_are_increasing() {
        let mut app = App::default();
        let a = app.issue_ticket();
        let b = app.issue_ticket();
        assert!(b > a);
    }

    #[test]
    fn focus_cycles_both_ways() {
        assert_eq!(Focus::Topic.next().next().next(), Focus::Topic);
        assert_eq!(Focus::Topic.prev(), Focus::Results);
        assert_eq!(Focus::Style.next().prev(), Focus::Style);
    }
}
