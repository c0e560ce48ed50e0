//! Pure rendering: map App state to ratatui widget trees.
//!
//! One render function per form section. Widget-building functions are
//! pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};
use ratatui::Frame;

use crate::generator::MAX_POST_CHARS;
use crate::presets;
use crate::types::{GeneratedPost, StyleKey};

use super::state::{App, Focus};
use super::theme::{palette, Palette};

const TOPIC_PLACEHOLDER: &str = "x402 payments";

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the whole form to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();
    let p = palette(app.theme);

    frame.render_widget(Block::new().style(p.base), area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Length(3), // topic
        Constraint::Length(5), // style picker
        Constraint::Length(7), // rules
        Constraint::Length(1), // generate hint / status
        Constraint::Min(0),    // results
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(app, p), chunks[0]);
    frame.render_widget(render_topic(app, p), chunks[1]);
    frame.render_widget(render_styles(app, p), chunks[2]);
    frame.render_widget(render_rules(app.style, p), chunks[3]);
    frame.render_widget(render_status(app, p), chunks[4]);
    render_results(app, p, frame, chunks[5]);
    frame.render_widget(render_help(app.focus, p), chunks[6]);
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

fn render_title(app: &App, p: &Palette) -> Paragraph<'static> {
    let mode = if app.theme.is_dark() { "dark" } else { "light" };
    Paragraph::new(Line::from(vec![
        Span::styled("Vibe Tweet Generator", p.title),
        Span::styled(format!("  [{}]", mode), p.dim),
    ]))
}

fn render_help(focus: Focus, p: &Palette) -> Paragraph<'static> {
    let help_text = match focus {
        Focus::Topic => "[Enter] generate  [Tab] next  [^U] clear  [^T] theme  [Esc] quit",
        Focus::Style => "[j/k] style  [1-3] pick  [Enter] generate  [t] theme  [Tab] next  [q] quit",
        Focus::Results => "[j/k] move  [c] copy  [1-3] copy option  [g] generate  [t] theme  [Tab] next  [q] quit",
    };
    Paragraph::new(Span::styled(help_text, p.help))
}

fn section(title: &str, focused: bool, p: &Palette) -> Block<'static> {
    Block::bordered()
        .title(Span::styled(format!(" {} ", title), p.title))
        .border_style(if focused { p.focused } else { p.unfocused })
}

// ============================================================================
// FORM
// ============================================================================

fn render_topic(app: &App, p: &Palette) -> Paragraph<'static> {
    let focused = app.focus == Focus::Topic;
    let mut spans = if app.topic.is_empty() {
        vec![Span::styled(TOPIC_PLACEHOLDER, p.dim)]
    } else {
        vec![Span::raw(app.topic.clone())]
    };
    if focused {
        spans.push(Span::styled("▏", p.interactive));
    }
    Paragraph::new(Line::from(spans)).block(section("Topic", focused, p))
}

fn render_styles(app: &App, p: &Palette) -> Paragraph<'static> {
    let focused = app.focus == Focus::Style;
    let lines: Vec<Line> = StyleKey::ALL
        .iter()
        .enumerate()
        .map(|(i, &key)| {
            let text = format!("{}. {}", i + 1, presets::label(key));
            if key == app.style {
                Line::from(vec![
                    Span::styled("› ", p.interactive),
                    Span::styled(text, p.interactive),
                ])
            } else {
                Line::from(vec![Span::raw("  "), Span::styled(text, p.dim)])
            }
        })
        .collect();
    Paragraph::new(lines).block(section("Style Preset", focused, p))
}

fn render_rules(style: StyleKey, p: &Palette) -> Paragraph<'static> {
    let preset = presets::preset(style);
    let lines: Vec<Line> = preset
        .rules
        .iter()
        .map(|rule| Line::from(vec![Span::styled("• ", p.dim), Span::raw(*rule)]))
        .collect();
    Paragraph::new(lines)
        .block(section(&format!("{} Rules", preset.name), false, p))
        .wrap(Wrap { trim: false })
}

fn render_status(app: &App, p: &Palette) -> Paragraph<'static> {
    let line = if let Some(status) = &app.status {
        Line::from(Span::styled(status.clone(), p.danger))
    } else if app.can_generate() {
        Line::from(vec![
            Span::styled("[Enter] ", p.interactive),
            Span::raw("Generate 3 tweets"),
        ])
    } else {
        Line::from(Span::styled("Enter a topic to generate", p.dim))
    };
    Paragraph::new(line)
}

// ============================================================================
// RESULTS
// ============================================================================

fn render_results(app: &App, p: &Palette, frame: &mut Frame, area: Rect) {
    if app.posts.is_empty() {
        return;
    }

    let count = app.posts.len() as u32;
    let constraints: Vec<Constraint> = app.posts.iter().map(|_| Constraint::Ratio(1, count)).collect();
    let chunks = Layout::vertical(constraints).split(area);

    for (i, post) in app.posts.iter().enumerate() {
        let is_cursor = app.focus == Focus::Results && i == app.cursor;
        let copied = app.copied.is_some_and(|c| c.index == i);
        frame.render_widget(render_post(post, is_cursor, copied, p), chunks[i]);
    }
}

fn render_post(post: &GeneratedPost, is_cursor: bool, copied: bool, p: &Palette) -> Paragraph<'static> {
    let copy_label = if copied {
        Span::styled(" Copied! ", p.safe)
    } else {
        Span::styled(" [c] copy ", p.interactive)
    };

    let chars = post.char_count();
    let count_style = if chars >= MAX_POST_CHARS { p.danger } else { p.dim };

    let block = section(&format!("Option {}", post.option_number()), is_cursor, p)
        .title_top(Line::from(copy_label).right_aligned())
        .title_bottom(Line::from(Span::styled(format!(" {} chars ", chars), count_style)).right_aligned());

    let lines: Vec<Line> = post.text.lines().map(|l| Line::from(l.to_string())).collect();
    Paragraph::new(lines).block(block).wrap(Wrap { trim: false })
}

// ============================================================================
// TESTS
// ============================================================================
