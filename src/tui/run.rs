//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui,
//! and owns the clipboard.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Timer threads: one per successful copy, sends the indicator reset
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::types::StyleKey;

use super::state::{Action, App, AppEvent, Effect, Focus, Transition};
use super::update::{apply_copy_result, handle_background_event, update};
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// The topic field swallows printable keys, so the mapping depends on
/// focus. Control chords work everywhere.
pub fn map_key(key: KeyEvent, focus: Focus) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('g') => Some(Action::Generate),
            KeyCode::Char('u') if focus == Focus::Topic => Some(Action::ClearTopic),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => return Some(Action::NextFocus),
        KeyCode::BackTab => return Some(Action::PrevFocus),
        KeyCode::Esc => return Some(Action::Quit),
        _ => {}
    }

    match focus {
        Focus::Topic => match key.code {
            KeyCode::Enter => Some(Action::Generate),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(Action::Insert(c))
            }
            _ => None,
        },
        Focus::Style => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Char(c @ '1'..='3') => {
                Some(Action::SelectStyle(StyleKey::ALL[(c as u8 - b'1') as usize]))
            }
            KeyCode::Enter | KeyCode::Char('g') => Some(Action::Generate),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Focus::Results => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
            KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => Some(Action::Copy),
            KeyCode::Char(c @ '1'..='3') => Some(Action::CopyOption((c as u8 - b'1') as usize)),
            KeyCode::Char('g') => Some(Action::Generate),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key presses to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore releases, mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

/// Spawn a timer that clears the copied indicator for `ticket` after `delay`.
fn spawn_indicator_reset(tx: mpsc::Sender<AppEvent>, ticket: u64, delay: Duration) {
    thread::spawn(move || {
        thread::sleep(delay);
        // Receiver gone means the TUI already exited.
        let _ = tx.send(AppEvent::CopyIndicatorExpired { ticket });
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user quits.
pub fn run(config: &Config, clipboard: &mut dyn Clipboard) -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(config);
    info!(style = %app.style, "tui started");

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());

    loop {
        terminal.draw(|frame| render(&app, frame))?;

        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                let Some(action) = map_key(key, app.focus) else {
                    continue;
                };
                match update(&mut app, &action) {
                    Transition::Continue => {}
                    Transition::Quit => app.should_quit = true,
                    Transition::Effect(effect) => {
                        handle_effect(effect, &mut app, clipboard, &tx, config.copied_indicator);
                    }
                }
            }
            background_event => handle_background_event(&mut app, background_event),
        }
    }

    restore_terminal()?;
    info!("tui exited");
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Execute a side effect requested by a transition.
fn handle_effect(
    effect: Effect,
    app: &mut App,
    clipboard: &mut dyn Clipboard,
    tx: &mpsc::Sender<AppEvent>,
    indicator: Duration,
) {
    match effect {
        Effect::Copy { index, text } => {
            let result = clipboard.set_text(&text);
            if let Some(ticket) = apply_copy_result(app, index, result) {
                debug!(index, ticket, "copied; scheduling indicator reset");
                spawn_indicator_reset(tx.clone(), ticket, indicator);
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
