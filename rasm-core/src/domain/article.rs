//! Definite-article assimilation over the last word
//!
//! Runs after the substitution pass. When the last word of the buffer opens
//! with a known proclitic and the stem behind it starts with two consonant
//! codepoints, the pass models how the assimilated article surfaces: a sun
//! letter keeps its gemination behind an inserted alef, a moon letter
//! collapses the duplicate, and a two-distinct-consonant stem gains an
//! epenthetic alef. The first short vowel left in the stem then lengthens
//! to its letter form. Everything before the last word passes through
//! verbatim.

use crate::domain::chars::{self, Vowel};

/// Sun/moon classification of Arabic consonants.
///
/// The two sets are a fixed, disjoint partition; a codepoint in neither set
/// (long vowels, digits, foreign letters) disables the doubled-consonant
/// branch entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsonantClass {
    /// Sun letter: a following definite article assimilates into it
    Solar,
    /// Moon letter: the article consonant stays distinct
    Lunar,
}

const SOLAR: &[char] = &[
    'ث', 'ص', 'ض', 'ت', 'س', 'ش', 'ر', 'ز', 'د', 'ذ', 'ط', 'ظ',
];

const LUNAR: &[char] = &[
    'ء', 'ج', 'ح', 'خ', 'ه', 'ع', 'غ', 'ف', 'ق', 'ك', 'م', 'ل', 'ب', 'ي', 'و',
];

impl ConsonantClass {
    /// Classify a codepoint, if it belongs to either set.
    pub fn of(c: char) -> Option<ConsonantClass> {
        if SOLAR.contains(&c) {
            Some(ConsonantClass::Solar)
        } else if LUNAR.contains(&c) {
            Some(ConsonantClass::Lunar)
        } else {
            None
        }
    }
}

/// Proclitic prefixes, as authored with their leading space.
///
/// Compound conjunction+preposition forms come first so they win over their
/// single-letter heads; matching against a word strips the leading space of
/// the literal.
pub const PROCLITICS: &[&str] = &[
    " وَبِ", " فَبِ", " وَلِ", " فَلِ", " أَفَ",
    " وَ", " فَ", " كَ", " لِ", " بِ", " أَ", " سَ", " لَ", " تَ",
];

/// Apply the assimilation pass to the whole buffer.
///
/// Pure and total: a buffer with no last word, no matching proclitic, a
/// stem shorter than two codepoints, or a short vowel among the first two
/// stem codepoints is returned unchanged.
pub fn assimilate(text: &str) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    let last = match words.last() {
        Some(w) if !w.is_empty() => *w,
        _ => return text.to_string(),
    };

    let (proclitic, stem) = match match_proclitic(last) {
        Some(split) => split,
        None => return text.to_string(),
    };

    let stem_chars: Vec<char> = stem.chars().collect();
    if stem_chars.len() < 2 {
        return text.to_string();
    }
    let (c1, c2) = (stem_chars[0], stem_chars[1]);
    if chars::is_short_vowel(c1) || chars::is_short_vowel(c2) {
        return text.to_string();
    }

    let mut new_stem = stem_chars;
    if c1 == c2 {
        match ConsonantClass::of(c1) {
            Some(ConsonantClass::Solar) => new_stem.insert(0, chars::ALEF),
            Some(ConsonantClass::Lunar) => {
                new_stem.remove(1);
            }
            None => {}
        }
    } else {
        new_stem.insert(0, chars::ALEF);
    }

    // Lengthen the first short vowel left in the stem, if any.
    for c in new_stem.iter_mut() {
        if let Some(vowel) = Vowel::from_mark(*c) {
            *c = vowel.long_letter();
            break;
        }
    }

    let mut rebuilt = String::with_capacity(text.len() + 4);
    for word in &words[..words.len() - 1] {
        rebuilt.push_str(word);
        rebuilt.push(' ');
    }
    rebuilt.push_str(proclitic);
    rebuilt.extend(new_stem);
    rebuilt
}

/// Split a word into (proclitic, stem), longest proclitic first.
fn match_proclitic(word: &str) -> Option<(&str, &str)> {
    for literal in PROCLITICS {
        let bare = literal.strip_prefix(' ').unwrap_or(literal);
        if let Some(stem) = word.strip_prefix(bare) {
            return Some((bare, stem));
        }
    }
    None
}
