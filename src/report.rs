//! Output formatting for generated posts and the preset catalogue.
//!
//! Pure functions: (data, OutputFormat) → String.
//! No I/O, no side effects.

use serde::Serialize;

use crate::presets;
use crate::types::{GeneratedPost, OutputFormat, StyleKey, StylePreset};

/// Format a batch of generated posts for output.
pub fn format_posts(
    topic: &str,
    style: StyleKey,
    posts: &[GeneratedPost],
    format: OutputFormat,
) -> String {
    match format {
        OutputFormat::Human => format_posts_human(style, posts),
        OutputFormat::Json => to_json(&PostsDocument::new(topic, style, posts)),
    }
}

/// Format the preset catalogue (names, descriptions, rules).
pub fn format_styles(format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_styles_human(),
        OutputFormat::Json => {
            let docs: Vec<PresetDocument> = presets::ALL.iter().map(PresetDocument::from).collect();
            to_json(&docs)
        }
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_posts_human(style: StyleKey, posts: &[GeneratedPost]) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== {} ===\n\n", presets::label(style)));

    for post in posts {
        out.push_str(&format!("--- Option {} ---\n", post.option_number()));
        out.push_str(&post.text);
        out.push('\n');
        out.push_str(&format!("({} chars)\n\n", post.char_count()));
    }

    out
}

fn format_styles_human() -> String {
    let mut out = String::new();

    for preset in &presets::ALL {
        out.push_str(&format!(
            "{:<12} {} ({})\n",
            preset.key.as_str(),
            preset.name,
            preset.description
        ));
        for rule in &preset.rules {
            out.push_str(&format!("  • {}\n", rule));
        }
        out.push('\n');
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

#[derive(Serialize)]
struct PostsDocument<'a> {
    topic: &'a str,
    style: StyleKey,
    posts: Vec<PostDocument<'a>>,
}

#[derive(Serialize)]
struct PostDocument<'a> {
    variant: usize,
    text: &'a str,
    chars: usize,
}

impl<'a> PostsDocument<'a> {
    fn new(topic: &'a str, style: StyleKey, posts: &'a [GeneratedPost]) -> Self {
        Self {
            topic,
            style,
            posts: posts
                .iter()
                .map(|p| PostDocument {
                    variant: p.variant,
                    text: &p.text,
                    chars: p.char_count(),
                })
                .collect(),
        }
    }
}

#[derive(Serialize)]
struct PresetDocument {
    key: StyleKey,
    name: &'static str,
    description: &'static str,
    rules: [&'static str; 5],
}

impl From<&StylePreset> for PresetDocument {
    fn from(p: &StylePreset) -> Self {
        Self {
            key: p.key,
            name: p.name,
            description: p.description,
            rules: p.rules,
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    // Only string, integer, and enum fields: serialization cannot fail.
    serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| panic!("Failed to serialize to JSON: {}", e))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{generate, generate_batch};

    fn sample_posts() -> Vec<GeneratedPost> {
        generate_batch("x402 payments", StyleKey::Web3Native)
    }

    // --- Human format tests ---

    #[test]
    fn human_format_has_header_and_three_options() {
        let output = format_posts("x402 payments", StyleKey::Web3Native, &sample_posts(), OutputFormat::Human);

        assert!(output.starts_with("=== Web3 Native (witty, web3-native) ==="));
        assert!(output.contains("--- Option 1 ---"));
        assert!(output.contains("--- Option 2 ---"));
        assert!(output.contains("--- Option 3 ---"));
        assert!(!output.contains("--- Option 4 ---"));
    }

    #[test]
    fn human_format_handles_largest_variant() {
        let posts = [GeneratedPost {
            variant: usize::MAX,
            text: generate("AI agents", StyleKey::HotTake, usize::MAX),
        }];
        let output = format_posts("AI agents", StyleKey::HotTake, &posts, OutputFormat::Human);

        assert!(output.contains(&format!("--- Option {} ---", usize::MAX)));
        assert!(!output.contains("--- Option 0 ---"));
    }

    #[test]
    fn human_format_shows_char_counts() {
        let posts = sample_posts();
        let output = format_posts("x402 payments", StyleKey::Web3Native, &posts, OutputFormat::Human);

        for post in &posts {
            assert!(output.contains(&format!("({} chars)", post.char_count())));
        }
    }

    #[test]
    fn human_styles_lists_every_rule() {
        let output = format_styles(OutputFormat::Human);

        for preset in &presets::ALL {
            assert!(output.contains(preset.key.as_str()));
            for rule in &preset.rules {
                assert!(output.contains(rule));
            }
        }
    }

    // --- JSON format tests ---

    #[test]
    fn json_posts_has_expected_fields() {
        let output = format_posts("x402 payments", StyleKey::Web3Native, &sample_posts(), OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("Invalid JSON");

        assert_eq!(parsed["topic"], "x402 payments");
        assert_eq!(parsed["style"], "web3-native");
        let posts = parsed["posts"].as_array().unwrap();
        assert_eq!(posts.len(), 3);
        assert_eq!(posts[2]["variant"], 2);
        assert!(posts[0]["text"].as_str().unwrap().contains("x402 payments"));
        assert!(posts[0]["chars"].is_number());
    }

    #[test]
    fn json_posts_empty_batch() {
        let output = format_posts("t", StyleKey::Explainer, &[], OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["posts"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn json_styles_has_three_presets_with_five_rules() {
        let output = format_styles(OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let presets = parsed.as_array().unwrap();
        assert_eq!(presets.len(), 3);
        assert_eq!(presets[2]["key"], "hot-take");
        for p in presets {
            assert_eq!(p["rules"].as_array().unwrap().len(), 5);
        }
    }
}
