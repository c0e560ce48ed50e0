//! Hook/body/closer template tables, one [`TemplateSet`] per style.
//!
//! `{topic}` is replaced verbatim by the generator. Sequences may differ
//! in length; the generator reduces the variant against each one
//! independently.

use crate::types::{StyleKey, TemplateSet};

/// Placeholder substituted with the caller's topic.
pub const TOPIC_PLACEHOLDER: &str = "{topic}";

// ============================================================================
// WEB3 NATIVE
// ============================================================================

const WEB3_NATIVE: TemplateSet = TemplateSet {
    hooks: &[
        "Hot take: {topic} is about to change everything.",
        "Been thinking about {topic} lately...",
        "Okay hear me out on {topic}:",
    ],
    bodies: &[
        "It's not just another protocol—it's the infrastructure layer we've been waiting for. The composability here is insane.",
        "The UX improvements are subtle but game-changing. Once you see it, you can't unsee it.",
        "This is what happens when builders focus on what users actually need, not what sounds cool in a pitch deck.",
    ],
    closers: &["This is the way.", "gm, builders.", "LFG."],
};

// ============================================================================
// EXPLAINER
// ============================================================================

const EXPLAINER: TemplateSet = TemplateSet {
    hooks: &[
        "Let's break down {topic}:",
        "Quick thread on {topic}:",
        "{topic} explained in simple terms:",
    ],
    bodies: &[
        "Think of it like a payment rail that works across any app. No more silos, no more friction. Just seamless value transfer.",
        "The key innovation is how it handles state. Instead of each app managing its own ledger, everything syncs to a shared layer.",
        "It solves the fragmentation problem by creating a universal standard. One protocol, infinite possibilities.",
    ],
    closers: &[
        "TL;DR: It's simpler than you think.",
        "The future is composable.",
        "This is how we scale.",
    ],
};

// ============================================================================
// HOT TAKE
// ============================================================================

const HOT_TAKE: TemplateSet = TemplateSet {
    hooks: &[
        "Unpopular opinion: {topic} is overhyped.",
        "The {topic} discourse is missing the point.",
        "Everyone's wrong about {topic}. Here's why:",
    ],
    bodies: &[
        "The hype is real, but the execution timeline is fantasy. We're years away from mainstream adoption, not months.",
        "Most people praising it haven't actually used it. The theory is solid, but the reality needs work.",
        "It's solving yesterday's problem. By the time it launches, the landscape will have shifted again.",
    ],
    closers: &["Fight me.", "Change my mind.", "Prove me wrong."],
};

/// Template tables for a style.
pub fn templates(style: StyleKey) -> &'static TemplateSet {
    match style {
        StyleKey::Web3Native => &WEB3_NATIVE,
        StyleKey::Explainer => &EXPLAINER,
        StyleKey::HotTake => &HOT_TAKE,
    }
}
