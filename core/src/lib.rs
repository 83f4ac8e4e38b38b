//! libtamil-core
//!
//! Layout-agnostic typing-tutor machinery shared by the language crates
//! (currently libtamil99). A language crate supplies a [`KeystrokeCodec`]
//! that knows how its keyboard layout spells text; this crate supplies
//! everything around it: the practice engine, the per-item decode state
//! machine, the session scorer, and per-stroke statistics.
//!
//! Public API:
//! - `KeystrokeToken` - a single physical key press `(label, needs_shift)`
//! - `KeystrokeCodec` / `PracticeEngine` - pluggable layout codec and the
//!   generic engine that owns it
//! - `TypingItem` - per-practice-item decode state with backspace support
//! - `TypingSession` / `TaskResult` - accuracy and speed scoring
//! - `KeystrokeTracker` - per-stroke accuracy/response statistics
//! - `Config` - tunables shared by the components

use serde::{Deserialize, Serialize};

pub mod keys;
pub use keys::{canonical_label, KeystrokeToken, SPACE_LABEL};

pub mod engine;
pub use engine::{KeystrokeCodec, PracticeEngine};

pub mod item;
pub use item::{ItemState, TypingItem};

pub mod session;
pub use session::{TaskResult, TypingSession};

pub mod tracker;
pub use tracker::{KeystrokeTracker, StrokeData, StrokeFeedback, TrackerSummary};

/// Tutor configuration shared by the engine and the session scorer.
///
/// All fields have conventional defaults; hosts usually only override the
/// cache size. Loadable from TOML for parity with how host applications
/// store their settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Characters per "word" for WPM conversion (standard: 5)
    pub chars_per_word: u32,

    /// Characters charged per error in the net-WPM penalty (standard: 5)
    pub error_penalty_chars: u32,

    /// Floor for elapsed minutes in speed formulas, guarding division by
    /// zero on instant submissions
    pub min_elapsed_minutes: f64,

    /// Maximum number of entries in the target -> expected-keystrokes cache
    pub max_cache_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            chars_per_word: 5,
            error_penalty_chars: 5,
            min_elapsed_minutes: 1e-6,
            max_cache_size: 1000,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load_toml<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to a TOML file.
    pub fn save_toml<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.chars_per_word, 5);
        assert_eq!(cfg.error_penalty_chars, 5);
        assert_eq!(cfg.max_cache_size, 1000);
        assert!(cfg.min_elapsed_minutes > 0.0);
    }

    #[test]
    fn config_toml_round_trip() {
        let cfg = Config::default();
        let text = cfg.to_toml_string().unwrap();
        let back = Config::from_toml_str(&text).unwrap();
        assert_eq!(back.chars_per_word, cfg.chars_per_word);
        assert_eq!(back.max_cache_size, cfg.max_cache_size);
    }

    #[test]
    fn config_partial_toml_fails_cleanly() {
        // Missing fields are an error rather than silently defaulted
        let result = Config::from_toml_str("chars_per_word = 5");
        assert!(result.is_err(), "missing fields should be an error");
    }
}
