//! State transitions: (App, Action) → Transition.
//!
//! The core logic of the TUI. Fully testable without a terminal. Each
//! action touches only the fields it owns; unhandled actions are no-ops.

use tracing::warn;

use crate::error::Error;
use crate::generator::generate_batch;
use crate::types::ThemeMode;

use super::state::{Action, App, AppEvent, CopiedIndicator, Effect, Focus, Transition};

/// Apply a user action to the app.
///
/// Returns what the effects layer should do next.
pub fn update(app: &mut App, action: &Action) -> Transition {
    match action {
        Action::Quit => Transition::Quit,
        Action::NextFocus => {
            app.focus = app.focus.next();
            Transition::Continue
        }
        Action::PrevFocus => {
            app.focus = app.focus.prev();
            Transition::Continue
        }
        Action::Insert(c) => {
            app.topic.push(*c);
            Transition::Continue
        }
        Action::Backspace => {
            app.topic.pop();
            Transition::Continue
        }
        Action::ClearTopic => {
            app.topic.clear();
            Transition::Continue
        }
        Action::MoveUp => move_cursor(app, Direction::Up),
        Action::MoveDown => move_cursor(app, Direction::Down),
        Action::SelectStyle(style) => {
            app.style = *style;
            Transition::Continue
        }
        Action::Generate => handle_generate(app),
        Action::Copy => {
            let index = app.cursor;
            request_copy(app, index)
        }
        Action::CopyOption(index) => request_copy(app, *index),
        Action::ToggleTheme => {
            app.theme = ThemeMode::from_dark(!app.theme.is_dark());
            Transition::Continue
        }
    }
}

/// Apply a non-key event from a background producer.
pub fn handle_background_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::CopyIndicatorExpired { ticket } => {
            // A newer copy owns the indicator; its own timer will clear it.
            if app.copied.is_some_and(|c| c.ticket == ticket) {
                app.copied = None;
            }
        }
        AppEvent::Key(_) => {}
    }
}

/// Record the outcome of an `Effect::Copy`.
///
/// On success, raises the copied indicator and returns the ticket the
/// caller must schedule a reset for. On failure, logs and sets a status
/// diagnostic; posts are left untouched.
pub fn apply_copy_result(
    app: &mut App,
    index: usize,
    result: Result<(), Error>,
) -> Option<u64> {
    match result {
        Ok(()) => {
            let ticket = app.issue_ticket();
            app.copied = Some(CopiedIndicator { index, ticket });
            app.status = None;
            Some(ticket)
        }
        Err(e) => {
            warn!(index, error = %e, "failed to copy");
            app.status = Some(format!("Failed to copy: {}", e));
            None
        }
    }
}

// ============================================================================
// PER-ACTION HANDLERS
// ============================================================================

enum Direction {
    Up,
    Down,
}

/// Style focus cycles the preset; results focus moves the row cursor.
fn move_cursor(app: &mut App, direction: Direction) -> Transition {
    match app.focus {
        Focus::Style => {
            app.style = match direction {
                Direction::Up => app.style.prev(),
                Direction::Down => app.style.next(),
            };
        }
        Focus::Results => {
            let len = app.posts.len();
            app.cursor = match direction {
                Direction::Up => app.cursor.saturating_sub(1),
                Direction::Down if len == 0 => 0,
                Direction::Down => (app.cursor + 1).min(len - 1),
            };
        }
        Focus::Topic => {}
    }
    Transition::Continue
}

/// Blank topic: no generation, previous results stay. Otherwise the batch
/// replaces whatever was shown.
fn handle_generate(app: &mut App) -> Transition {
    if !app.can_generate() {
        return Transition::Continue;
    }
    app.posts = generate_batch(&app.topic, app.style);
    app.cursor = 0;
    app.copied = None;
    app.status = None;
    app.focus = Focus::Results;
    Transition::Continue
}

fn request_copy(app: &mut App, index: usize) -> Transition {
    match app.posts.get(index) {
        Some(post) => {
            app.cursor = index;
            Transition::Effect(Effect::Copy {
                index,
                text: post.text.clone(),
            })
        }
        None => Transition::Continue,
    }
}

// ============================================================================
// TESTS
// ============================================================================
