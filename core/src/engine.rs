// core/src/engine.rs
//
// Generic practice engine that works with any keystroke codec.
// This keeps the layout-specific crates down to one table and two walks.

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use crate::item::TypingItem;
use crate::keys::KeystrokeToken;
use crate::session::TypingSession;
use crate::Config;

/// Trait that keyboard-layout codecs must implement to work with the
/// generic engine.
///
/// The two directions must stay consistent: feeding `decode` exactly the
/// token labels produced by `encode(target)` reconstructs `target`.
pub trait KeystrokeCodec {
    /// Expected keystroke sequence a perfect typist would press for `text`.
    fn encode(&self, text: &str) -> Vec<KeystrokeToken>;

    /// Longest prefix of `target` that the typed key labels legitimately
    /// spell. Labels are the canonical forms stored by [`TypingItem`].
    fn decode(&self, target: &str, typed: &[String]) -> String;
}

/// Generic practice engine combining a codec with item construction and a
/// cache of encoder output.
///
/// Type parameter C is the codec type (e.g. Tamil99Codec). The engine is
/// the factory for [`TypingItem`]s and [`TypingSession`]s; the items share
/// the codec through an `Arc`.
pub struct PracticeEngine<C> {
    codec: Arc<C>,
    config: Config,
    cache: RefCell<LruCache<String, Vec<KeystrokeToken>>>,
    cache_hits: RefCell<usize>,
    cache_misses: RefCell<usize>,
}

impl<C: KeystrokeCodec> PracticeEngine<C> {
    /// Create a new engine owning the given codec.
    pub fn new(codec: C, config: Config) -> Self {
        Self::from_arc(Arc::new(codec), config)
    }

    /// Create a new engine from an Arc-wrapped codec.
    pub fn from_arc(codec: Arc<C>, config: Config) -> Self {
        let capacity = NonZeroUsize::new(config.max_cache_size)
            .unwrap_or_else(|| NonZeroUsize::new(1000).unwrap());
        Self {
            codec,
            config,
            cache: RefCell::new(LruCache::new(capacity)),
            cache_hits: RefCell::new(0),
            cache_misses: RefCell::new(0),
        }
    }

    /// Get a reference to the codec.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Expected keystroke sequence for `text`, NFC-normalized and cached.
    ///
    /// The UI calls this on every hint refresh, so results are kept in an
    /// LRU cache keyed by the normalized target text.
    pub fn expected_keys(&self, text: &str) -> Vec<KeystrokeToken> {
        let normalized: String = text.nfc().collect();
        if let Some(cached) = self.cache.borrow_mut().get(&normalized) {
            *self.cache_hits.borrow_mut() += 1;
            return cached.clone();
        }
        *self.cache_misses.borrow_mut() += 1;

        let tokens = self.codec.encode(&normalized);
        self.cache.borrow_mut().put(normalized, tokens.clone());
        tokens
    }

    /// Begin a new practice item for `target`.
    ///
    /// The target is NFC-normalized once here; the item re-decodes against
    /// this normalized form on every keystroke.
    pub fn begin_item(&self, target: &str) -> TypingItem<C> {
        let normalized: String = target.nfc().collect();
        let expected = self.expected_keys(&normalized);
        debug!(
            target_chars = normalized.chars().count(),
            expected_keys = expected.len(),
            "begin practice item"
        );
        TypingItem::new(self.codec.clone(), normalized, expected)
    }

    /// Create a session scorer configured like this engine.
    pub fn new_session(&self) -> TypingSession {
        TypingSession::with_config(&self.config)
    }

    /// (hits, misses) counters for the encode cache.
    pub fn cache_stats(&self) -> (usize, usize) {
        (*self.cache_hits.borrow(), *self.cache_misses.borrow())
    }
}
