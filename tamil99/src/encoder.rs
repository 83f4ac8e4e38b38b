//! Tamil text -> keystroke sequence.
//!
//! Walks the target text left to right, preferring a registered two-
//! character combination (consonant + vowel sign, dead consonant) over a
//! single-character entry, and expanding the `^`/`^#` modifier prefixes
//! into individual key presses. Unregistered characters take the generic
//! fallback. Stateless: nothing is retained between calls.

use libtamil_core::{KeystrokeToken, SPACE_LABEL};

use crate::fallback::fallback_token;
use crate::layout::LayoutTable;

/// Expected keystrokes for `text` under the given layout.
pub fn encode(layout: &LayoutTable, text: &str) -> Vec<KeystrokeToken> {
    walk(layout, text).into_iter().map(|(tok, _)| tok).collect()
}

/// Character index (into the code points of `text`) that each keystroke of
/// `encode(layout, text)` contributes to. Lets a display place its cursor
/// under the character currently being typed.
pub fn keystroke_char_indices(layout: &LayoutTable, text: &str) -> Vec<usize> {
    walk(layout, text).into_iter().map(|(_, i)| i).collect()
}

/// Tokens for a key sequence taken literally, one key per token.
pub(crate) fn plain_tokens(seq: &str) -> Vec<KeystrokeToken> {
    seq.chars()
        .map(|k| KeystrokeToken::new(k.to_uppercase().to_string(), k.is_uppercase()))
        .collect()
}

/// Tokens for a single-character entry, honoring the modifier prefixes:
/// `^#<d>` expands to three unshifted presses, `^<k>` to the marker plus
/// the sign key, anything else is literal.
pub(crate) fn shaped_tokens(seq: &str) -> Vec<KeystrokeToken> {
    if let Some(rest) = seq.strip_prefix("^#") {
        let mut tokens = vec![
            KeystrokeToken::new("^", false),
            KeystrokeToken::new("#", false),
        ];
        if let Some(digit) = rest.chars().next() {
            tokens.push(KeystrokeToken::new(
                digit.to_uppercase().to_string(),
                false,
            ));
        }
        tokens
    } else if let Some(rest) = seq.strip_prefix('^') {
        let mut tokens = vec![KeystrokeToken::new("^", false)];
        if let Some(key) = rest.chars().next() {
            tokens.push(KeystrokeToken::new(
                key.to_uppercase().to_string(),
                key.is_uppercase(),
            ));
        }
        tokens
    } else {
        plain_tokens(seq)
    }
}

/// The shared walk: one `(token, char_index)` per key press.
fn walk(layout: &LayoutTable, text: &str) -> Vec<(KeystrokeToken, usize)> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];

        if ch == ' ' {
            out.push((KeystrokeToken::new(SPACE_LABEL, false), i));
            i += 1;
            continue;
        }

        // Combination first: "டு" must become "od", not "o" + "^d"
        if i + 1 < chars.len() {
            let combined: String = chars[i..i + 2].iter().collect();
            if let Some(seq) = layout.keystrokes_for(&combined) {
                for tok in plain_tokens(seq) {
                    out.push((tok, i));
                }
                i += 2;
                continue;
            }
        }

        if let Some(seq) = layout.keystrokes_for(ch.to_string().as_str()) {
            for tok in shaped_tokens(seq) {
                out.push((tok, i));
            }
        } else {
            out.push((fallback_token(ch), i));
        }
        i += 1;
    }

    out
}
