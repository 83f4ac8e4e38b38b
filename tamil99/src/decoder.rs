//! Typed keystrokes -> reconstructed Tamil text.
//!
//! Re-derives, from scratch, the longest prefix of the target text that the
//! typed keys legitimately spell. The walk mirrors the encoder exactly
//! (combination first, then the single-character shapes, then fallback) so
//! the two directions cannot drift apart. Greedy and non-backtracking.
//!
//! A combination that is still being typed (fewer keys than it needs) stops
//! the walk: a half-typed ligature shows nothing. A combination whose keys
//! mismatch falls through to single-character handling of the first code
//! point alone, which can re-derive a different expectation than the
//! encoder produced for the whole span. That asymmetry is deliberate and
//! covered by regression tests; do not "fix" it here.

use libtamil_core::{KeystrokeToken, SPACE_LABEL};

use crate::encoder::{plain_tokens, shaped_tokens};
use crate::fallback::fallback_token;
use crate::layout::LayoutTable;

/// Reconstruct the prefix of `target` spelled by `typed` (canonical key
/// labels, oldest first). Remaining typed keys that spell nothing are not
/// represented in the output.
pub fn decode(layout: &LayoutTable, target: &str, typed: &[String]) -> String {
    let chars: Vec<char> = target.chars().collect();
    let mut out = String::new();
    let mut i = 0;
    let mut k = 0;

    while i < chars.len() && k < typed.len() {
        let ch = chars[i];

        if ch == ' ' {
            if typed[k] == SPACE_LABEL {
                out.push(' ');
                k += 1;
                i += 1;
                continue;
            }
            break;
        }

        if i + 1 < chars.len() {
            let combined: String = chars[i..i + 2].iter().collect();
            if let Some(seq) = layout.keystrokes_for(&combined) {
                match verify(&plain_tokens(seq), &typed[k..]) {
                    Verify::Match(consumed) => {
                        out.push_str(&combined);
                        k += consumed;
                        i += 2;
                        continue;
                    }
                    // Combination still in progress: show nothing for it
                    Verify::TooFew => break,
                    // Typed keys spell something else; the single
                    // character below may still match
                    Verify::Mismatch => {}
                }
            }
        }

        if let Some(seq) = layout.keystrokes_for(ch.to_string().as_str()) {
            if let Verify::Match(consumed) = verify(&shaped_tokens(seq), &typed[k..]) {
                out.push(ch);
                k += consumed;
                i += 1;
                continue;
            }
        } else {
            let fb = fallback_token(ch);
            let t = &typed[k];
            if *t == ch.to_string()
                || t.to_uppercase() == ch.to_uppercase().to_string()
                || t.to_uppercase() == fb.label.to_uppercase()
            {
                out.push(ch);
                k += 1;
                i += 1;
                continue;
            }
        }

        break;
    }

    out
}

enum Verify {
    /// All expected keys present and matching; consumed this many
    Match(usize),
    /// Typed keys ran out before the expected sequence did
    TooFew,
    /// A typed key differs from the expected one
    Mismatch,
}

/// Compare typed keys against an expected sequence, case-insensitively,
/// in order. An empty expectation never matches.
fn verify(expected: &[KeystrokeToken], typed: &[String]) -> Verify {
    if expected.is_empty() {
        return Verify::Mismatch;
    }
    for (idx, tok) in expected.iter().enumerate() {
        match typed.get(idx) {
            None => return Verify::TooFew,
            Some(key) if !tok.matches_label(key) => return Verify::Mismatch,
            Some(_) => {}
        }
    }
    Verify::Match(expected.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutTable;

    fn run(target: &str, typed: &[&str]) -> String {
        let table = LayoutTable::tamil99();
        let typed: Vec<String> = typed.iter().map(|s| s.to_string()).collect();
        decode(&table, target, &typed)
    }

    #[test]
    fn no_keys_reconstructs_nothing() {
        assert_eq!(run("கா", &[]), "");
    }

    #[test]
    fn ligature_decodes_when_fully_typed() {
        assert_eq!(run("கா", &["H", "Q"]), "கா");
    }

    #[test]
    fn half_typed_ligature_reconstructs_nothing() {
        assert_eq!(run("கா", &["H"]), "");
        assert_eq!(run("க்க", &["H"]), "");
    }

    #[test]
    fn mismatched_combination_falls_through_to_the_single_character() {
        // H,S does not spell கா, but H alone spells க; the walk then stops
        // at the vowel sign instead of backtracking over the pair.
        assert_eq!(run("கா", &["H", "S"]), "க");
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(run("கா", &["h", "q"]), "கா");
    }

    #[test]
    fn dead_consonant_then_base_consonant() {
        assert_eq!(run("க்க", &["H", "F", "H"]), "க்க");
        assert_eq!(run("க்க", &["H", "F"]), "க்");
    }

    #[test]
    fn numeral_requires_the_full_prefix() {
        assert_eq!(run("௧", &["^", "#", "1"]), "௧");
        // Skipping the # leaves the decode stuck
        assert_eq!(run("௧", &["^", "1"]), "");
    }

    #[test]
    fn space_consumes_a_space_press() {
        assert_eq!(run("அ ஆ", &["A", "Space", "Q"]), "அ ஆ");
    }

    #[test]
    fn space_position_rejects_a_letter_key() {
        assert_eq!(run("அ ஆ", &["A", "Q"]), "அ");
    }

    #[test]
    fn fallback_characters_match_themselves_or_their_key() {
        assert_eq!(run("a.", &["A", "."]), "a.");
        // '!' may be typed via its shifted base key
        assert_eq!(run("!", &["1"]), "!");
        assert_eq!(run("!", &["!"]), "!");
    }

    #[test]
    fn decode_stops_at_first_unspellable_position() {
        // The trailing Q is never represented in the output
        assert_eq!(run("கா அ", &["H", "Q", "Space", "Q"]), "கா ");
    }

    #[test]
    fn trailing_keys_beyond_target_are_ignored() {
        assert_eq!(run("க", &["H", "H", "H"]), "க");
    }

    #[test]
    fn empty_layout_still_decodes_fallback_text() {
        let table = LayoutTable::load(Vec::<(&str, &str)>::new());
        let typed: Vec<String> = vec!["A".into(), "B".into()];
        assert_eq!(decode(&table, "ab", &typed), "ab");
    }
}
