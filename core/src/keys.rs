//! Physical keystroke tokens and label canonicalization.
//!
//! A keystroke is identified by a label, not a character: letters are
//! canonicalized to uppercase and the space bar becomes the symbolic
//! `"Space"` label so that host key-event plumbing, the encoder, and the
//! decoder all agree on one spelling.

use serde::{Deserialize, Serialize};

/// Symbolic label for the space bar.
pub const SPACE_LABEL: &str = "Space";

/// A single physical key press: which key, and whether Shift is held.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeystrokeToken {
    /// Canonical key label (uppercase letter, symbol, or `"Space"`)
    pub label: String,

    /// Whether the key must be pressed with Shift held
    pub needs_shift: bool,
}

impl KeystrokeToken {
    /// Create a token from a label and shift flag.
    pub fn new(label: impl Into<String>, needs_shift: bool) -> Self {
        Self {
            label: label.into(),
            needs_shift,
        }
    }

    /// Case-insensitive label comparison.
    pub fn matches_label(&self, other: &str) -> bool {
        self.label.to_uppercase() == other.to_uppercase()
    }
}

/// Canonicalize a raw pressed-key label.
///
/// `" "` (and any casing of `"space"`) becomes [`SPACE_LABEL`]; alphabetic
/// labels are uppercased; everything else passes through unchanged.
pub fn canonical_label(raw: &str) -> String {
    if raw == " " || raw.eq_ignore_ascii_case("space") {
        return SPACE_LABEL.to_string();
    }
    if !raw.is_empty() && raw.chars().all(char::is_alphabetic) {
        return raw.to_uppercase();
    }
    raw.to_string()
}
