//! Generic fallback mapping for characters outside the layout table.
//!
//! Punctuation, Latin letters, and ASCII digits have no Tamil99 entry but
//! must still be typeable in practice texts. This is the standard US-QWERTY
//! picture: shifted symbols resolve to their base key with Shift, the rest
//! pass through.

use libtamil_core::{KeystrokeToken, SPACE_LABEL};

/// Shifted ASCII symbols and the base key that produces them.
static SHIFTED_SYMBOLS: phf::Map<char, char> = phf::phf_map! {
    '!' => '1',
    '@' => '2',
    '#' => '3',
    '$' => '4',
    '%' => '5',
    '^' => '6',
    '&' => '7',
    '*' => '8',
    '(' => '9',
    ')' => '0',
    '_' => '-',
    '+' => '=',
    '{' => '[',
    '}' => ']',
    '|' => '\\',
    ':' => ';',
    '"' => '\'',
    '<' => ',',
    '>' => '.',
    '?' => '/',
    '~' => '`',
};

/// ASCII symbols typed without Shift.
const UNSHIFTED_SYMBOLS: &[char] = &[
    '`', '-', '=', '[', ']', '\\', ';', '\'', ',', '.', '/',
];

/// Keystroke for a character with no layout entry.
///
/// Space becomes the symbolic label; letters uppercase with Shift iff the
/// character was uppercase; shifted symbols resolve through the table
/// above; digits and unshifted symbols pass through; anything else is
/// uppercased with no shift.
pub fn fallback_token(ch: char) -> KeystrokeToken {
    if ch == ' ' {
        return KeystrokeToken::new(SPACE_LABEL, false);
    }
    if ch.is_alphabetic() {
        return KeystrokeToken::new(ch.to_uppercase().to_string(), ch.is_uppercase());
    }
    if let Some(&base) = SHIFTED_SYMBOLS.get(&ch) {
        return KeystrokeToken::new(base.to_string(), true);
    }
    if ch.is_ascii_digit() || UNSHIFTED_SYMBOLS.contains(&ch) {
        return KeystrokeToken::new(ch.to_string(), false);
    }
    KeystrokeToken::new(ch.to_uppercase().to_string(), false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_maps_to_symbolic_label() {
        assert_eq!(fallback_token(' '), KeystrokeToken::new("Space", false));
    }

    #[test]
    fn letters_carry_their_case_as_shift() {
        assert_eq!(fallback_token('a'), KeystrokeToken::new("A", false));
        assert_eq!(fallback_token('A'), KeystrokeToken::new("A", true));
    }

    #[test]
    fn shifted_symbols_resolve_to_base_key() {
        assert_eq!(fallback_token('!'), KeystrokeToken::new("1", true));
        assert_eq!(fallback_token('?'), KeystrokeToken::new("/", true));
        assert_eq!(fallback_token('~'), KeystrokeToken::new("`", true));
    }

    #[test]
    fn digits_and_plain_symbols_pass_through() {
        assert_eq!(fallback_token('5'), KeystrokeToken::new("5", false));
        assert_eq!(fallback_token(','), KeystrokeToken::new(",", false));
        assert_eq!(fallback_token('-'), KeystrokeToken::new("-", false));
    }

    #[test]
    fn non_ascii_letters_uppercase_through_the_letter_rule() {
        assert_eq!(fallback_token('ß'), KeystrokeToken::new("SS", false));
    }

    #[test]
    fn unknown_characters_are_uppercased_unshifted() {
        assert_eq!(fallback_token('€'), KeystrokeToken::new("€", false));
    }
}
