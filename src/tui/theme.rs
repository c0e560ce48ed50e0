//! TUI color semantics, one palette per display mode.
//!
//! Pure data, consumed by the rendering layer. Switching palettes is the
//! only thing the theme toggle does.
//!
//! Color semantics:
//! - Accent: interactive elements, focused borders, keybinding hints
//! - Green: success ("Copied!")
//! - Red: diagnostics, over-budget warnings
//! - Dim: de-emphasized (char counts, descriptions)

use ratatui::style::{Color, Modifier, Style};

use crate::types::ThemeMode;

/// Styles for one display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Frame background and default text.
    pub base: Style,
    /// Title bar / header.
    pub title: Style,
    /// Interactive element / keybinding hint.
    pub interactive: Style,
    /// De-emphasized metadata.
    pub dim: Style,
    /// Success.
    pub safe: Style,
    /// Errors and warnings.
    pub danger: Style,
    /// Border of the focused form element.
    pub focused: Style,
    /// Border of unfocused form elements.
    pub unfocused: Style,
    /// Footer / help line.
    pub help: Style,
}

// ============================================================================
// PALETTES
// ============================================================================

pub const DARK: Palette = Palette {
    base: Style::new().fg(Color::Rgb(220, 220, 220)).bg(Color::Rgb(30, 30, 30)),
    title: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    interactive: Style::new().fg(Color::Rgb(138, 180, 248)),
    dim: Style::new().fg(Color::Rgb(128, 128, 128)),
    safe: Style::new().fg(Color::Rgb(144, 238, 144)).add_modifier(Modifier::BOLD),
    danger: Style::new().fg(Color::Rgb(244, 135, 135)),
    focused: Style::new().fg(Color::Rgb(138, 180, 248)),
    unfocused: Style::new().fg(Color::Rgb(90, 90, 90)),
    help: Style::new().fg(Color::Rgb(128, 128, 128)),
};

pub const LIGHT: Palette = Palette {
    base: Style::new().fg(Color::Rgb(40, 40, 40)).bg(Color::Rgb(250, 250, 250)),
    title: Style::new().fg(Color::Rgb(26, 26, 26)).add_modifier(Modifier::BOLD),
    interactive: Style::new().fg(Color::Rgb(26, 115, 232)),
    dim: Style::new().fg(Color::Rgb(140, 140, 140)),
    safe: Style::new().fg(Color::Rgb(52, 168, 83)).add_modifier(Modifier::BOLD),
    danger: Style::new().fg(Color::Rgb(200, 50, 50)),
    focused: Style::new().fg(Color::Rgb(26, 115, 232)),
    unfocused: Style::new().fg(Color::Rgb(200, 200, 200)),
    help: Style::new().fg(Color::Rgb(140, 140, 140)),
};

/// The palette for a display mode.
pub fn palette(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modes_map_to_distinct_backgrounds() {
        assert_ne!(palette(ThemeMode::Dark).base.bg, palette(ThemeMode::Light).base.bg);
    }

    #[test]
    fn title_is_bold_in_both_modes() {
        assert!(DARK.title.add_modifier.contains(Modifier::BOLD));
        assert!(LIGHT.title.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn focused_border_differs_from_unfocused() {
        for p in [&DARK, &LIGHT] {
            assert_ne!(p.focused, p.unfocused);
        }
    }
}
