//! Built-in Tamil99 mapping data.
//!
//! The standard Tamil99 layout following the official keyboard definition:
//! vowels on the left hand, consonants on the right, vowel signs typed by
//! pressing the corresponding vowel key after a consonant, pulli on `f`,
//! grantha consonants on the shifted top row.
//!
//! Consonant-vowel combinations and dead consonants are products of the
//! consonant and sign tables, so they are generated here rather than
//! written out one by one; the handful of irregular entries (double-
//! consonant contractions, symbols) are listed explicitly.

use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::layout::LayoutTable;

/// Standalone vowels: the left-hand block.
const VOWELS: &[(&str, &str)] = &[
    ("a", "அ"),
    ("q", "ஆ"),
    ("s", "இ"),
    ("w", "ஈ"),
    ("d", "உ"),
    ("e", "ஊ"),
    ("g", "எ"),
    ("t", "ஏ"),
    ("r", "ஐ"),
    ("c", "ஒ"),
    ("x", "ஓ"),
    ("z", "ஔ"),
];

/// Consonant bases and their physical keys. Grantha consonants live on the
/// shifted row; the two-key க்ஷ cluster types as shifted T.
const CONSONANTS: &[(&str, &str)] = &[
    ("h", "க"),
    ("b", "ங"),
    ("[", "ச"),
    ("]", "ஞ"),
    ("o", "ட"),
    ("p", "ண"),
    ("l", "த"),
    (";", "ந"),
    ("j", "ப"),
    ("k", "ம"),
    ("'", "ய"),
    ("m", "ர"),
    ("n", "ல"),
    ("v", "வ"),
    ("/", "ழ"),
    ("y", "ள"),
    ("u", "ற"),
    ("i", "ன"),
    ("Q", "ஸ"),
    ("W", "ஷ"),
    ("E", "ஜ"),
    ("R", "ஹ"),
    ("U", "ஶ"),
    ("T", "க்ஷ"),
];

/// Vowel signs: the key pressed after a consonant, and the key spelled
/// after the `^` marker for the standalone combining sign. They differ only
/// for ொ, whose standalone form is written `^C`.
const VOWEL_SIGNS: &[(char, char, &str)] = &[
    ('q', 'q', "ா"),
    ('s', 's', "ி"),
    ('w', 'w', "ீ"),
    ('d', 'd', "ு"),
    ('e', 'e', "ூ"),
    ('g', 'g', "ெ"),
    ('t', 't', "ே"),
    ('r', 'r', "ை"),
    ('c', 'C', "ொ"),
    ('x', 'x', "ோ"),
    ('z', 'z', "ௌ"),
];

/// Frequent double-consonant contractions: the second consonant key typed
/// twice in a row implies the pulli on the first.
const DOUBLE_CONSONANTS: &[(&str, &str)] = &[
    ("hh", "க்க"),
    ("bh", "ங்க"),
    ("][", "ஞ்ச"),
    ("po", "ண்ட"),
    ("kj", "ம்ப"),
    (";l", "ந்த"),
    ("iu", "ன்ற"),
];

/// Marks, fractions, and symbols on the shifted rows, plus the pulli and
/// aytham keys.
const SYMBOLS: &[(&str, &str)] = &[
    ("f", "்"),
    ("F", "ஃ"),
    ("Y", "ஶ்ரீ"),
    ("A", "௹"),
    ("S", "௺"),
    ("D", "௸"),
    ("L", "௱"),
    ("Z", "௳"),
    ("X", "௴"),
    ("C", "௵"),
    ("V", "௶"),
    ("B", "௷"),
    ("N", "ௐ"),
];

/// Tamil numerals and the digit keys they live on (typed as `^#<digit>`).
pub const TAMIL_DIGITS: [(char, char); 10] = [
    ('1', '௧'),
    ('2', '௨'),
    ('3', '௩'),
    ('4', '௪'),
    ('5', '௫'),
    ('6', '௬'),
    ('7', '௭'),
    ('8', '௮'),
    ('9', '௯'),
    ('0', '௦'),
];

/// The full Tamil99 pair list: explicit entries plus the generated
/// consonant products, in layout order.
pub fn default_pairs() -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = Vec::new();

    for (key, out) in VOWELS.iter().chain(CONSONANTS).chain(SYMBOLS) {
        pairs.push((key.to_string(), out.to_string()));
    }

    // Dead consonants and consonant-vowel combinations
    for (ck, cons) in CONSONANTS {
        pairs.push((format!("{ck}f"), format!("{cons}\u{0BCD}")));
        for (vk, _, sign) in VOWEL_SIGNS {
            pairs.push((format!("{ck}{vk}"), format!("{cons}{sign}")));
        }
    }

    // Standalone combining signs
    for (_, sk, sign) in VOWEL_SIGNS {
        pairs.push((format!("^{sk}"), sign.to_string()));
    }

    for (keys, out) in DOUBLE_CONSONANTS {
        pairs.push((keys.to_string(), out.to_string()));
    }

    for (digit, glyph) in TAMIL_DIGITS {
        pairs.push((format!("^#{digit}"), glyph.to_string()));
    }

    pairs
}

static TAMIL99: Lazy<Arc<LayoutTable>> =
    Lazy::new(|| Arc::new(LayoutTable::load(default_pairs())));

/// The shared built-in Tamil99 table.
pub fn tamil99_table() -> Arc<LayoutTable> {
    Arc::clone(&TAMIL99)
}
