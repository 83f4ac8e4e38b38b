//! Tamil99 layout table.
//!
//! The single source of truth for how Tamil characters map to and from
//! physical keystrokes. Built once from `(key_sequence, output)` pairs into
//! two indices (character -> keystrokes, keystrokes -> character) plus a
//! keycap display table; read-only afterward, all lookups O(1).
//!
//! Key sequences are short ASCII strings. Two prefix markers are special:
//! `^` introduces a combining vowel sign and `^#` a Tamil numeral; the
//! encoder expands these into individual key presses.

use ahash::AHashMap;
use std::sync::Arc;
use tracing::debug;

use crate::mapping;

/// The pulli (virama) combining mark.
pub const PULLI: char = '\u{0BCD}';

/// The physical key that attaches a pulli to the preceding consonant.
pub const PULLI_KEY: char = 'f';

/// First code point of the combining-sign range (vowel signs and marks).
const SIGN_RANGE_START: char = '\u{0BBE}';

/// Whether a code point falls inside the Tamil Unicode block.
pub fn is_tamil(ch: char) -> bool {
    ('\u{0B80}'..='\u{0BFF}').contains(&ch)
}

/// What a physical keycap shows on the virtual keyboard: the character
/// produced plain and the one produced with Shift.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Keycap {
    pub base: Option<String>,
    pub shift: Option<String>,
}

/// Bidirectional Tamil99 mapping with deterministic tie-breaking.
#[derive(Debug, Clone, Default)]
pub struct LayoutTable {
    char_to_keys: AHashMap<String, String>,
    keys_to_char: AHashMap<String, String>,
    keycaps: AHashMap<String, Keycap>,
}

impl LayoutTable {
    /// Build a table from `(key_sequence, output_text)` pairs.
    ///
    /// Pair order only matters for first-wins ties; the priority rules
    /// below override simple ordering for single Tamil code points:
    /// 1. a single physical key beats a multi-key sequence;
    /// 2. for the pulli specifically, a sequence ending in the dead-
    ///    consonant key beats one that does not;
    /// 3. for combining signs, a sequence starting with `^` beats one
    ///    that does not;
    /// 4. otherwise the shorter sequence wins.
    ///
    /// An empty iterable produces an empty but fully usable table: every
    /// lookup misses and callers take the fallback path.
    pub fn load<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = Self::default();
        for (keys, out) in pairs {
            table.insert_pair(keys.as_ref(), out.as_ref());
        }
        table.insert_numerals();
        debug!(
            characters = table.char_to_keys.len(),
            keycaps = table.keycaps.len(),
            "layout table built"
        );
        table
    }

    /// The built-in Tamil99 table (shared process-wide).
    pub fn tamil99() -> Arc<LayoutTable> {
        mapping::tamil99_table()
    }

    fn insert_pair(&mut self, keys: &str, out: &str) {
        if keys.is_empty() || out.is_empty() {
            return;
        }

        self.note_keycap(keys, out);

        let mut chars = out.chars();
        let Some(first) = chars.next() else { return };
        if chars.next().is_none() {
            if is_tamil(first) {
                self.insert_single(keys, out, first);
            }
            // Non-Tamil single outputs are keycap-only entries
        } else if out.chars().all(is_tamil) {
            self.insert_combination(keys, out);
        }
    }

    /// Priority insertion for a single Tamil code point.
    fn insert_single(&mut self, keys: &str, out: &str, ch: char) {
        let store = match self.char_to_keys.get(out) {
            None => true,
            Some(current) => {
                let new_len = keys.chars().count();
                let cur_len = current.chars().count();
                if new_len == 1 && cur_len > 1 {
                    true
                } else if ch == PULLI
                    && keys.ends_with(PULLI_KEY)
                    && !current.ends_with(PULLI_KEY)
                {
                    true
                } else if (SIGN_RANGE_START..='\u{0BFF}').contains(&ch)
                    && keys.starts_with('^')
                    && !current.starts_with('^')
                {
                    true
                } else {
                    new_len < cur_len
                }
            }
        };

        if store {
            self.char_to_keys.insert(out.to_string(), keys.to_string());
            self.keys_to_char.insert(keys.to_string(), out.to_string());
        } else {
            self.keys_to_char
                .entry(keys.to_string())
                .or_insert_with(|| out.to_string());
        }
    }

    /// A multi-code-point output (ligature/combination): shorter sequence
    /// preferred, first wins on equal length.
    fn insert_combination(&mut self, keys: &str, out: &str) {
        let store = match self.char_to_keys.get(out) {
            None => true,
            Some(current) => keys.chars().count() < current.chars().count(),
        };
        if store {
            self.char_to_keys.insert(out.to_string(), keys.to_string());
            self.keys_to_char.insert(keys.to_string(), out.to_string());
        } else {
            self.keys_to_char
                .entry(keys.to_string())
                .or_insert_with(|| out.to_string());
        }
    }

    /// Record what a single-character physical key displays: the lowercase
    /// key fills the base slot, the uppercase key the shift slot. First
    /// value wins per slot; display only, no effect on the indices.
    fn note_keycap(&mut self, keys: &str, out: &str) {
        let mut chars = keys.chars();
        let (Some(key), None) = (chars.next(), chars.next()) else {
            return;
        };

        let label = if key.is_alphabetic() {
            key.to_uppercase().to_string()
        } else {
            key.to_string()
        };
        let cap = self.keycaps.entry(label).or_default();
        if key.is_alphabetic() && key.is_uppercase() {
            if cap.shift.is_none() {
                cap.shift = Some(out.to_string());
            }
        } else if cap.base.is_none() {
            cap.base = Some(out.to_string());
        }
    }

    /// The ten Tamil numerals type as `^#<digit>`; inserted unconditionally
    /// after the main pass. Digit keycaps default to the numeral glyph when
    /// nothing else claimed the slot.
    fn insert_numerals(&mut self) {
        for (digit, glyph) in mapping::TAMIL_DIGITS {
            let seq = format!("^#{digit}");
            self.char_to_keys.insert(glyph.to_string(), seq.clone());
            self.keys_to_char.insert(seq, glyph.to_string());

            let cap = self.keycaps.entry(digit.to_string()).or_default();
            if cap.base.is_none() {
                cap.base = Some(glyph.to_string());
            }
        }
    }

    /// Key sequence spelling `text` (a single character or a registered
    /// combination). Exact match only.
    pub fn keystrokes_for(&self, text: &str) -> Option<&str> {
        self.char_to_keys.get(text).map(String::as_str)
    }

    /// Character produced by exactly `keys`. No prefix matching.
    pub fn char_for(&self, keys: &str) -> Option<&str> {
        self.keys_to_char.get(keys).map(String::as_str)
    }

    /// Display entry for a physical key label.
    pub fn keycap(&self, key: &str) -> Option<&Keycap> {
        self.keycaps.get(key)
    }

    /// The primary physical key for a character, for hint displays:
    /// the digit for `^#<digit>` numerals, the sign key for `^`-prefixed
    /// signs, else the first key of the sequence, uppercased.
    pub fn primary_key(&self, text: &str) -> Option<String> {
        let seq = self.char_to_keys.get(text)?;
        let rest = seq
            .strip_prefix("^#")
            .or_else(|| seq.strip_prefix('^'))
            .unwrap_or(seq);
        rest.chars().next().map(|k| k.to_uppercase().to_string())
    }

    /// Whether `text` has a table entry.
    pub fn contains(&self, text: &str) -> bool {
        self.char_to_keys.contains_key(text)
    }

    /// Number of encodable characters.
    pub fn len(&self) -> usize {
        self.char_to_keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.char_to_keys.is_empty()
    }

    /// All `(character, key_sequence)` entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.char_to_keys
            .iter()
            .map(|(c, k)| (c.as_str(), k.as_str()))
    }
}
