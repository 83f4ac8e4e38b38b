//! Per-practice-item decode state.
//!
//! A `TypingItem` tracks one target text: the keystrokes typed so far (a
//! stack), the decode cursor into the expected keystroke sequence, and the
//! reconstructed text, which is re-derived through the codec after every
//! mutation. Mismatched presses change nothing except a transient error
//! flag; backspace pops one key and clears it.

use std::sync::Arc;

use tracing::trace;

use crate::engine::KeystrokeCodec;
use crate::keys::{canonical_label, KeystrokeToken};

/// Observable state of a practice item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemState {
    /// No keys typed yet
    Empty,
    /// Some keys typed, more expected
    InProgress,
    /// Last press was rejected (transient; cleared by backspace or a
    /// correct press at the same position)
    Error,
    /// Every expected keystroke has been consumed; terminal
    Complete,
}

/// Decode state for a single practice item.
///
/// Owned exclusively by the session controller; the UI polls
/// `current_text` / `next_key` / `state` after each event. No internal
/// locking: hosts dispatching from multiple threads must serialize access.
pub struct TypingItem<C> {
    codec: Arc<C>,
    target: String,
    expected: Vec<KeystrokeToken>,
    typed: Vec<String>,
    text: String,
    error: bool,
}

impl<C: KeystrokeCodec> TypingItem<C> {
    pub(crate) fn new(codec: Arc<C>, target: String, expected: Vec<KeystrokeToken>) -> Self {
        Self {
            codec,
            target,
            expected,
            typed: Vec::new(),
            text: String::new(),
            error: false,
        }
    }

    /// The (normalized) target text for this item.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// The full expected keystroke sequence for the target.
    pub fn expected_keys(&self) -> &[KeystrokeToken] {
        &self.expected
    }

    /// The next expected keystroke, or `None` once complete.
    pub fn next_key(&self) -> Option<&KeystrokeToken> {
        self.expected.get(self.typed.len())
    }

    /// Canonical labels of the keys typed so far.
    pub fn typed_keys(&self) -> &[String] {
        &self.typed
    }

    /// Process one physical key press.
    ///
    /// Returns true and advances the cursor when the press matches the
    /// next expected keystroke; returns false otherwise, leaving the
    /// typed stack and reconstructed text untouched. Presses after
    /// completion are rejected without entering the error state.
    pub fn press_key(&mut self, label: &str) -> bool {
        let pressed = canonical_label(label);
        let Some(expected) = self.expected.get(self.typed.len()) else {
            trace!(key = %pressed, "press ignored: item already complete");
            return false;
        };

        if expected.matches_label(&pressed) {
            self.typed.push(pressed);
            self.text = self.codec.decode(&self.target, &self.typed);
            self.error = false;
            true
        } else {
            trace!(key = %pressed, expected = %expected.label, "press rejected");
            self.error = true;
            false
        }
    }

    /// Undo the most recent accepted key press.
    ///
    /// Pops the typed-key stack, moves the cursor back one token, refreshes
    /// the reconstructed text, and clears the error state. Returns false if
    /// nothing was typed.
    pub fn backspace(&mut self) -> bool {
        self.error = false;
        if self.typed.pop().is_none() {
            return false;
        }
        self.text = self.codec.decode(&self.target, &self.typed);
        true
    }

    /// The reconstructed text the typed keys legitimately spell.
    pub fn current_text(&self) -> &str {
        &self.text
    }

    /// Whether every expected keystroke has been consumed.
    pub fn is_complete(&self) -> bool {
        self.typed.len() >= self.expected.len()
    }

    /// Whether the last press was rejected.
    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Current item state. An item with an empty expected sequence (empty
    /// target) is `Complete` from the start.
    pub fn state(&self) -> ItemState {
        if self.error {
            ItemState::Error
        } else if self.is_complete() {
            ItemState::Complete
        } else if self.typed.is_empty() {
            ItemState::Empty
        } else {
            ItemState::InProgress
        }
    }
}
