//! Dotted-variant cycling lookup
//!
//! Backs the dedicated dot key: tapping it swaps the letter just typed for
//! its next dotted form. Most entries are mutual swaps (ص↔ض, ع↔غ, ف↔ق,
//! ر↔ز, د↔ذ, ط↔ظ, س↔ش, ه↔ة) or short closed cycles (ح→خ→ج→ح,
//! ٮ→ب→ت→ث→ٮ). The hamza forms are deliberately an open chain feeding a
//! four-cycle: ء→أ→إ→ئ→ؤ and then back to أ, never to ء again. The map is
//! a plain directed lookup so that asymmetry survives exactly as authored.
//!
//! Three two-codepoint keys (a space then ا/و/ي) expand a word-initial
//! letter into a particle instead of cycling; they are one-shot and take
//! priority over the single-codepoint table.

use crate::domain::chars;
use std::collections::HashMap;

/// Single-codepoint cycle edges.
const SINGLE_EDGES: &[(char, &str)] = &[
    // Hamza chain into the four-cycle.
    (chars::HAMZA, "أ"),
    (chars::ALEF_HAMZA_ABOVE, "إ"),
    (chars::ALEF_HAMZA_BELOW, "ئ"),
    (chars::YEH_HAMZA, "ؤ"),
    (chars::WAW_HAMZA, "أ"),
    // ح → خ → ج → ح
    ('ح', "خ"),
    ('خ', "ج"),
    ('ج', "ح"),
    // ٮ → ب → ت → ث → ٮ
    (chars::DOTLESS_BEH, "ب"),
    ('ب', "ت"),
    ('ت', "ث"),
    ('ث', "ٮ"),
    // Mutual swaps.
    ('ه', "ة"),
    ('ة', "ه"),
    ('ص', "ض"),
    ('ض', "ص"),
    ('ع', "غ"),
    ('غ', "ع"),
    ('ف', "ق"),
    ('ق', "ف"),
    ('ر', "ز"),
    ('ز', "ر"),
    ('د', "ذ"),
    ('ذ', "د"),
    ('ط', "ظ"),
    ('ظ', "ط"),
    ('س', "ش"),
    ('ش', "س"),
    // One-way edges: ن joins the ب cycle, ا drops its dots for good.
    ('ن', "ت"),
    (chars::ALEF, "ى"),
    // Fixed points: letters with no dotted variant.
    (chars::YEH, "ي"),
    ('ل', "ل"),
    ('م', "م"),
    ('ك', "ك"),
    (chars::WAW, "و"),
    // Short vowels expand to their tanwin spelling and close the word.
    (chars::FATHA, "ًا "),
    (chars::DAMMA, "ٌ "),
    (chars::KASRA, "ٍ "),
];

/// Space-prefixed expansions: a word-initial letter becomes a particle.
const SEQ_EDGES: &[(&str, &str)] = &[(" ي", " إِن"), (" و", " أُن"), (" ا", " أَن")];

/// Lookup from a trailing character (or space+letter pair) to its next
/// dotted variant.
///
/// Built once per engine and read-only afterwards. Absence is a valid
/// terminal outcome: the caller falls back to committing a literal ".".
#[derive(Debug, Clone)]
pub struct DotMap {
    single: HashMap<char, &'static str>,
    seq: HashMap<&'static str, &'static str>,
}

impl DotMap {
    /// The built-in map.
    pub fn built_in() -> Self {
        Self {
            single: SINGLE_EDGES.iter().copied().collect(),
            seq: SEQ_EDGES.iter().copied().collect(),
        }
    }

    /// Next variant for a single trailing codepoint.
    pub fn next_variant(&self, c: char) -> Option<&'static str> {
        self.single.get(&c).copied()
    }

    /// Expansion for a trailing two-codepoint sequence.
    ///
    /// Checked before [`DotMap::next_variant`]; only the space-prefixed
    /// keys are ever present.
    pub fn next_variant_seq(&self, tail: &str) -> Option<&'static str> {
        self.seq.get(tail).copied()
    }
}

impl Default for DotMap {
    fn default() -> Self {
        Self::built_in()
    }
}
