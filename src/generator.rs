//! Post generation: (topic, style, variant) → text.
//!
//! Pure functions: no I/O, no randomness, no hidden state. The same
//! arguments always produce the same string.

use tracing::debug;

use crate::error::{Error, Result};
use crate::templates::{templates, TOPIC_PLACEHOLDER};
use crate::types::{GeneratedPost, StyleKey, TemplateSet};

/// Maximum post length in characters.
pub const MAX_POST_CHARS: usize = 280;

/// Marker appended to a truncated post.
pub const ELLIPSIS: &str = "...";

/// Number of variants produced per generate action.
pub const BATCH_SIZE: usize = 3;

/// Segment separator (blank line).
const SEPARATOR: &str = "\n\n";

/// Generate one post.
///
/// Hook, body, and closer are each picked with `variant % len` against
/// their own sequence, joined by blank lines, then cut to
/// [`MAX_POST_CHARS`].
pub fn generate(topic: &str, style: StyleKey, variant: usize) -> String {
    let text = compose(templates(style), topic, variant);
    truncate(text)
}

/// Generate one post from a string style key.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if `style` is not a known key.
pub fn generate_for_key(topic: &str, style: &str, variant: usize) -> Result<String> {
    let style: StyleKey = style.parse()?;
    Ok(generate(topic, style, variant))
}

/// Generate the three variants (0, 1, 2) shown for a single request.
pub fn generate_batch(topic: &str, style: StyleKey) -> Vec<GeneratedPost> {
    debug!(style = %style, topic_chars = topic.chars().count(), "generating batch");
    (0..BATCH_SIZE)
        .map(|variant| GeneratedPost {
            variant,
            text: generate(topic, style, variant),
        })
        .collect()
}

/// Caller-side guard: a topic must contain something besides whitespace.
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the topic is empty or whitespace.
pub fn require_topic(topic: &str) -> Result<()> {
    if topic.trim().is_empty() {
        return Err(Error::InvalidArgument("topic must not be empty".into()));
    }
    Ok(())
}

/// [`generate_batch`] behind [`require_topic`].
///
/// # Errors
/// Returns [`Error::InvalidArgument`] if the topic is empty or whitespace.
pub fn generate_batch_checked(topic: &str, style: StyleKey) -> Result<Vec<GeneratedPost>> {
    require_topic(topic)?;
    Ok(generate_batch(topic, style))
}

// ============================================================================
// INTERNAL
// ============================================================================

fn compose(set: &TemplateSet, topic: &str, variant: usize) -> String {
    let hook = pick(set.hooks, variant);
    let body = pick(set.bodies, variant);
    let closer = pick(set.closers, variant);

    [hook, body, closer]
        .iter()
        .map(|segment| segment.replace(TOPIC_PLACEHOLDER, topic))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn pick(sequence: &'static [&'static str], variant: usize) -> &'static str {
    sequence[variant % sequence.len()]
}

/// Prefix-cut to the budget. Not word-aware: may split a word or a line.
fn truncate(text: String) -> String {
    if text.chars().count() <= MAX_POST_CHARS {
        return text;
    }
    let keep = MAX_POST_CHARS - ELLIPSIS.len();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn long_topic() -> String {
        "decentralized physical infrastructure networks ".repeat(5)
    }

    #[test]
    fn generation_is_deterministic() {
        for style in StyleKey::ALL {
            for variant in 0..10 {
                assert_eq!(
                    generate("AI agents", style, variant),
                    generate("AI agents", style, variant)
                );
            }
        }
    }

    #[test]
    fn variants_repeat_with_sequence_length() {
        for style in StyleKey::ALL {
            for variant in 0..3 {
                let base = generate("rollups", style, variant);
                assert_eq!(base, generate("rollups", style, variant + 3));
                assert_eq!(base, generate("rollups", style, variant + 300));
            }
        }
    }

    #[test]
    fn topic_is_inserted_verbatim() {
        let post = generate("x402 payments", StyleKey::Web3Native, 0);
        assert!(post.contains("x402 payments"));
    }

    #[test]
    fn topic_is_not_escaped() {
        let post = generate("<b>&amp;</b>", StyleKey::Explainer, 0);
        assert!(post.starts_with("Let's break down <b>&amp;</b>:"));
    }

    #[test]
    fn segments_are_separated_by_blank_lines() {
        let post = generate("zk proofs", StyleKey::HotTake, 1);
        assert_eq!(
            post,
            "The zk proofs discourse is missing the point.\n\n\
             Most people praising it haven't actually used it. The theory is solid, but the reality needs work.\n\n\
             Change my mind."
        );
    }

    #[test]
    fn hot_take_batch_is_three_distinct_posts() {
        let posts = generate_batch("AI agents", StyleKey::HotTake);
        assert_eq!(posts.len(), 3);
        assert_ne!(posts[0].text, posts[1].text);
        assert_ne!(posts[1].text, posts[2].text);
        assert_ne!(posts[0].text, posts[2].text);
        assert_eq!(
            posts.iter().map(|p| p.variant).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn output_never_exceeds_budget() {
        let topic = long_topic();
        for style in StyleKey::ALL {
            for variant in 0..3 {
                assert!(generate(&topic, style, variant).chars().count() <= MAX_POST_CHARS);
                assert!(generate("gm", style, variant).chars().count() <= MAX_POST_CHARS);
            }
        }
    }

    #[test]
    fn overlong_post_is_cut_to_exactly_budget_with_ellipsis() {
        let topic = long_topic();
        let untruncated = compose(templates(StyleKey::Web3Native), &topic, 0);
        assert!(untruncated.chars().count() > MAX_POST_CHARS);

        let post = generate(&topic, StyleKey::Web3Native, 0);
        assert_eq!(post.chars().count(), MAX_POST_CHARS);
        assert!(post.ends_with("..."));
        let prefix: String = untruncated.chars().take(277).collect();
        assert_eq!(&post[..post.len() - 3], prefix);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let topic = "ünïcödé ".repeat(40);
        let post = generate(&topic, StyleKey::Explainer, 2);
        assert_eq!(post.chars().count(), MAX_POST_CHARS);
        assert!(post.ends_with("..."));
    }

    #[test]
    fn text_at_exact_budget_is_untouched() {
        let text = "a".repeat(MAX_POST_CHARS);
        assert_eq!(truncate(text.clone()), text);
    }

    #[test]
    fn text_one_over_budget_is_cut() {
        let out = truncate("b".repeat(MAX_POST_CHARS + 1));
        assert_eq!(out, format!("{}...", "b".repeat(277)));
    }

    #[test]
    fn sequences_are_reduced_independently() {
        const UNEVEN: TemplateSet = TemplateSet {
            hooks: &["h0", "h1", "h2"],
            bodies: &["b0", "b1"],
            closers: &["c0"],
        };
        assert_eq!(compose(&UNEVEN, "t", 0), "h0\n\nb0\n\nc0");
        assert_eq!(compose(&UNEVEN, "t", 1), "h1\n\nb1\n\nc0");
        assert_eq!(compose(&UNEVEN, "t", 2), "h2\n\nb0\n\nc0");
        assert_eq!(compose(&UNEVEN, "t", 5), "h2\n\nb1\n\nc0");
    }

    #[test]
    fn string_key_entry_point_accepts_known_styles() {
        let post = generate_for_key("AI agents", "hot-take", 0).unwrap();
        assert_eq!(post, generate("AI agents", StyleKey::HotTake, 0));
    }

    #[test]
    fn unknown_style_key_is_rejected() {
        let result = generate_for_key("AI agents", "sarcastic", 0);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn blank_topic_is_rejected_by_checked_batch() {
        for topic in ["", "   ", "\t\n"] {
            let result = generate_batch_checked(topic, StyleKey::Explainer);
            assert!(matches!(result, Err(Error::InvalidArgument(_))));
        }
    }

    #[test]
    fn require_topic_accepts_any_non_blank_text() {
        assert!(require_topic("gm").is_ok());
        assert!(require_topic("  L2s ").is_ok());
        assert!(matches!(require_topic(" \t"), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn checked_batch_keeps_surrounding_whitespace() {
        let posts = generate_batch_checked("  L2s ", StyleKey::Explainer).unwrap();
        assert!(posts[0].text.contains("  L2s "));
    }
}
