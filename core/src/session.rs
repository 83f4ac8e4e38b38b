//! Typing-session scoring.
//!
//! Tracks a practice session across task submissions and converts each
//! submitted guess into accuracy and speed metrics. Speed follows the
//! standard methodology:
//! - **CPM** - correct characters per minute.
//! - **Gross WPM** - (total characters / 5) / elapsed minutes.
//! - **Net WPM** - (total characters - 5 x errors) / 5 / elapsed minutes,
//!   floored at 0, so the displayed speed already accounts for mistakes.
//!
//! The session holds four monotone counters plus the elapsed time recorded
//! at the most recent submission. Wall clock is never read here: the caller
//! measures elapsed seconds once per submission and passes them in.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Config;

/// Result of a single typing task submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    /// Position-wise accuracy for this submission, 0..=100
    pub accuracy: f64,
    /// Net (error-penalized) words per minute across the session so far
    pub wpm: f64,
    /// Correct characters per minute across the session so far
    pub cpm: f64,
    /// Error count for this submission
    pub errors: u64,
}

/// Accumulates correctness and speed metrics over a practice session.
///
/// Counters never decrease; `total_errors` is always
/// `total_chars - total_correct`. Before the first submission every
/// aggregate reads 0.
#[derive(Debug, Clone)]
pub struct TypingSession {
    chars_per_word: f64,
    error_penalty: f64,
    min_elapsed_minutes: f64,
    total_chars: u64,
    total_correct: u64,
    total_errors: u64,
    elapsed_seconds: f64,
}

impl TypingSession {
    /// Create a session with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&Config::default())
    }

    /// Create a session using the word length, error penalty, and elapsed
    /// floor from `config`.
    pub fn with_config(config: &Config) -> Self {
        Self {
            chars_per_word: f64::from(config.chars_per_word),
            error_penalty: f64::from(config.error_penalty_chars),
            min_elapsed_minutes: config.min_elapsed_minutes,
            total_chars: 0,
            total_correct: 0,
            total_errors: 0,
            elapsed_seconds: 0.0,
        }
    }

    /// Score `typed` against `target` and fold the comparison into the
    /// running totals.
    ///
    /// Comparison is position-wise over Unicode code points, not edit
    /// distance; excess typed characters count as errors. `elapsed_seconds`
    /// is the session age measured by the caller at submission time.
    pub fn submit(&mut self, typed: &str, target: &str, elapsed_seconds: f64) -> TaskResult {
        let correct = typed
            .chars()
            .zip(target.chars())
            .filter(|(a, b)| a == b)
            .count() as u64;
        let total = typed.chars().count().max(target.chars().count()) as u64;
        let errors = total - correct;

        self.total_chars += total;
        self.total_correct += correct;
        self.total_errors += errors;
        self.elapsed_seconds = elapsed_seconds;

        let accuracy = if total == 0 {
            0.0
        } else {
            (correct as f64 / total as f64) * 100.0
        };

        let result = TaskResult {
            accuracy,
            wpm: self.aggregate_wpm(),
            cpm: self.aggregate_cpm(),
            errors,
        };
        debug!(
            accuracy = result.accuracy,
            wpm = result.wpm,
            errors = result.errors,
            "task submitted"
        );
        result
    }

    /// Total characters compared across all submissions.
    pub fn total_chars(&self) -> u64 {
        self.total_chars
    }

    /// Total correct characters across all submissions.
    pub fn total_correct(&self) -> u64 {
        self.total_correct
    }

    fn elapsed_minutes(&self) -> f64 {
        (self.elapsed_seconds / 60.0).max(self.min_elapsed_minutes)
    }

    /// Overall accuracy (correct / compared) as a percentage.
    pub fn aggregate_accuracy(&self) -> f64 {
        let total = self.total_chars.max(1);
        (self.total_correct as f64 / total as f64) * 100.0
    }

    /// Correct characters per minute.
    pub fn aggregate_cpm(&self) -> f64 {
        self.total_correct as f64 / self.elapsed_minutes()
    }

    /// Net WPM: (chars - penalty x errors) / word length / minutes,
    /// floored at 0.
    pub fn aggregate_wpm(&self) -> f64 {
        let penalized =
            self.total_chars as f64 - self.error_penalty * self.total_errors as f64;
        (penalized / self.chars_per_word / self.elapsed_minutes()).max(0.0)
    }

    /// Gross WPM: no error penalty.
    pub fn aggregate_gross_wpm(&self) -> f64 {
        (self.total_chars as f64 / self.chars_per_word) / self.elapsed_minutes()
    }

    /// Total errors across all submissions.
    pub fn aggregate_errors(&self) -> u64 {
        self.total_errors
    }
}

impl Default for TypingSession {
    fn default() -> Self {
        Self::new()
    }
}
