//! Style preset metadata: display name, description, guidance rules.
//!
//! Pure data. The rules are shown to the user next to the style picker;
//! generation never consults them.

use crate::types::{StyleKey, StylePreset};

pub const WEB3_NATIVE: StylePreset = StylePreset {
    key: StyleKey::Web3Native,
    name: "Web3 Native",
    description: "witty, web3-native",
    rules: [
        "Use crypto/web3 slang naturally",
        "Add subtle humor and wit",
        "Reference memes or trends when relevant",
        "Keep it conversational and authentic",
        "Drop technical terms casually",
    ],
};

pub const EXPLAINER: StylePreset = StylePreset {
    key: StyleKey::Explainer,
    name: "Explainer",
    description: "clear + educational",
    rules: [
        "Break down complex concepts simply",
        "Use analogies when helpful",
        "Structure: problem → solution → benefit",
        "Avoid jargon or explain it",
        "End with actionable takeaway",
    ],
};

pub const HOT_TAKE: StylePreset = StylePreset {
    key: StyleKey::HotTake,
    name: "Hot take",
    description: "spicy but not cringe",
    rules: [
        "Lead with a bold statement",
        "Back it up with reasoning",
        "Acknowledge counterarguments briefly",
        "Stay confident but not arrogant",
        "End with a call to think differently",
    ],
};

/// All presets in display order.
pub const ALL: [StylePreset; 3] = [WEB3_NATIVE, EXPLAINER, HOT_TAKE];

/// Look up the preset for a style key.
pub fn preset(style: StyleKey) -> &'static StylePreset {
    match style {
        StyleKey::Web3Native => &WEB3_NATIVE,
        StyleKey::Explainer => &EXPLAINER,
        StyleKey::HotTake => &HOT_TAKE,
    }
}

/// "Name (description)" label used by pickers and report headers.
pub fn label(style: StyleKey) -> String {
    let p = preset(style);
    format!("{} ({})", p.name, p.description)
}
